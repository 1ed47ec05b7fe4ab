//! Controller layer: UI events and their routing into the selection controller.

pub mod events;
pub mod orchestration;
