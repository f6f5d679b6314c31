//! Queueing of UI actions onto the event channel drained once per frame.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    let event_name = match &event {
        UiEvent::BlockClicked(_) => "block_clicked",
        UiEvent::CopyCode => "copy_code",
        UiEvent::SaveCode => "save_code",
        UiEvent::ClearEditor => "clear_editor",
        UiEvent::DismissBanner => "dismiss_banner",
        UiEvent::Info(_) => "info",
        UiEvent::Error(_) => "error",
    };

    match ui_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "ui event queue full; dropping event");
            *status = "Too many pending clicks; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(event = event_name, "ui event queue disconnected");
            *status = "Editor event queue disconnected; restart the editor".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use s3_blocks::BlockKind;

    use super::*;

    #[test]
    fn queued_events_arrive_in_click_order() {
        let (tx, rx) = bounded(8);
        let mut status = String::new();

        dispatch_ui_event(&tx, UiEvent::BlockClicked(BlockKind::Session), &mut status);
        dispatch_ui_event(&tx, UiEvent::BlockClicked(BlockKind::ListBuckets), &mut status);

        assert_eq!(
            rx.try_recv().ok(),
            Some(UiEvent::BlockClicked(BlockKind::Session))
        );
        assert_eq!(
            rx.try_recv().ok(),
            Some(UiEvent::BlockClicked(BlockKind::ListBuckets))
        );
        assert!(status.is_empty());
    }

    #[test]
    fn full_queue_reports_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_ui_event(&tx, UiEvent::CopyCode, &mut status);
        dispatch_ui_event(&tx, UiEvent::SaveCode, &mut status);

        assert!(status.contains("retry"));
    }

    #[test]
    fn disconnected_queue_reports_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_ui_event(&tx, UiEvent::ClearEditor, &mut status);

        assert!(status.contains("disconnected"));
    }
}
