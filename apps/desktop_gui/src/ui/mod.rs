//! UI layer: app shell, orbit camera, scene painter and colour table.

pub mod app;
pub mod camera;
pub mod scene_view;
pub mod theme;

pub use app::{StartupConfig, TensorVizApp};
