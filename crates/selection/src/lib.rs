//! Single-selection controller driving highlight state and re-rendering.
//!
//! The controller owns the only mutable state of a session, the selected result cell.
//! It starts `Idle`, moves to `Focused(i, k)` on a valid pick, and never returns to
//! `Idle`. Picks are resolved against the pick registry of the most recent render, so
//! ids that are unknown to that frame leave the state untouched.

use shared::{
    domain::{Dimensions, LogicalIndex, RegionId, SelectionState},
    error::LayoutError,
    protocol::{PickRegistry, RenderFrame},
};
use thiserror::Error;
use tracing::{debug, info};

/// Draw-scene side of the render contract.
pub trait SceneRenderer {
    fn draw_frame(&mut self, frame: &RenderFrame);
}

/// Keeps every frame it is handed; used by headless tools and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    pub fn into_frames(self) -> Vec<RenderFrame> {
        self.frames
    }
}

impl SceneRenderer for RecordingRenderer {
    fn draw_frame(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("scene layout failed: {0}")]
    Layout(#[from] LayoutError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The selection moved to a new cell.
    Selected {
        previous: Option<LogicalIndex>,
        current: LogicalIndex,
    },
    /// The picked cell was already selected.
    Unchanged(LogicalIndex),
    /// The region id is not part of the current pick registry.
    Ignored,
}

impl PickOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, PickOutcome::Selected { .. })
    }
}

#[derive(Debug)]
pub struct SelectionController {
    dims: Dimensions,
    state: SelectionState,
    registry: PickRegistry,
    frames_rendered: u64,
}

impl SelectionController {
    /// Nothing is pickable until the first [`render`](Self::render).
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            state: SelectionState::Idle,
            registry: PickRegistry::default(),
            frames_rendered: 0,
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn current_selection(&self) -> Option<LogicalIndex> {
        self.state.selected()
    }

    /// Registry of the last rendered frame.
    pub fn registry(&self) -> &PickRegistry {
        &self.registry
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn handle_pick(&mut self, region: RegionId) -> PickOutcome {
        let Some(index) = self.registry.resolve(region) else {
            debug!(region = region.0, "ignoring pick outside the result layer");
            return PickOutcome::Ignored;
        };

        info!("User clicked: {index}");
        let previous = self.current_selection();
        if previous == Some(index) {
            return PickOutcome::Unchanged(index);
        }

        self.state = SelectionState::Focused(index);
        info!(
            previous = ?previous.map(|p| p.to_string()),
            current = %index,
            "selected result cell"
        );
        PickOutcome::Selected {
            previous,
            current: index,
        }
    }

    /// Builds the frame for the current state without handing it to a renderer.
    pub fn frame(&self) -> Result<RenderFrame, ControllerError> {
        Ok(layout::build_frame(self.dims, &self.state)?)
    }

    /// Regenerates the frame, adopts its pick registry and hands it to `renderer`.
    pub fn render<R>(&mut self, renderer: &mut R) -> Result<(), ControllerError>
    where
        R: SceneRenderer + ?Sized,
    {
        let frame = self.frame()?;
        self.registry = frame.pick_registry.clone();
        self.frames_rendered += 1;
        renderer.draw_frame(&frame);
        Ok(())
    }

    /// One serialized event step: resolve the pick, then redraw.
    pub fn pick_and_render<R>(
        &mut self,
        region: RegionId,
        renderer: &mut R,
    ) -> Result<PickOutcome, ControllerError>
    where
        R: SceneRenderer + ?Sized,
    {
        let outcome = self.handle_pick(region);
        self.render(renderer)?;
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
