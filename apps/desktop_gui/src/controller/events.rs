//! Events raised by the viewport and drained by the app once per frame.

use shared::domain::RegionId;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A click landed on the pick region with this id.
    Pick(RegionId),
    ResetView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Render,
    Dispatch,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn banner_text(&self) -> String {
        let label = match self.context() {
            UiErrorContext::Render => "Render",
            UiErrorContext::Dispatch => "Input",
        };
        format!("{label} error: {}", self.message())
    }
}
