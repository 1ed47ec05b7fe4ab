//! Queueing of viewport events for serialized processing.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent) -> Result<(), UiError> {
    let event_name = match &event {
        UiEvent::Pick(_) => "pick",
        UiEvent::ResetView => "reset_view",
    };

    match ui_tx.try_send(event) {
        Ok(()) => {
            tracing::debug!(event = event_name, "queued ui event");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "ui event queue is full");
            Err(UiError::new(
                UiErrorContext::Dispatch,
                "too many pending clicks; please retry",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(event = event_name, "ui event queue disconnected");
            Err(UiError::new(
                UiErrorContext::Dispatch,
                "event queue disconnected",
            ))
        }
    }
}
