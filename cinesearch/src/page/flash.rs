use crate::dom::{ids, UiBinding};
use parking_lot::Mutex;
use std::{sync::Arc, time::Duration};

const SLIDE_OUT_ANIMATION: &str = "slideOut 0.3s";
const SLIDE_OUT_DURATION: Duration = Duration::from_millis(300);

/// Slides out and removes every flash message on the page once `after` has elapsed.
pub fn schedule_dismissal<U: UiBinding>(ui: &Arc<Mutex<U>>, after: Duration) -> usize {
    let message_ids = ui.lock().select_all(ids::FLASH_MESSAGE_CLASS);
    let num_messages = message_ids.len();

    for message_id in message_ids {
        let ui = ui.clone();

        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            ui.lock().set_style(&message_id, "animation", SLIDE_OUT_ANIMATION);
            tokio::time::sleep(SLIDE_OUT_DURATION).await;
            ui.lock().remove(&message_id);

            tracing::trace!(message_id, "flash message dismissed");
        });
    }

    num_messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dom::document::Document, utils::any::Any};

    #[tokio::test(start_paused = true)]
    async fn messages_slide_out_then_disappear() {
        let mut document = Document::site();

        document
            .append("content", "flash0", &[ids::FLASH_MESSAGE_CLASS])
            .append("content", "flash1", &[ids::FLASH_MESSAGE_CLASS, "flash-success"]);

        let ui = document.shared();

        assert_eq!(schedule_dismissal(&ui, Duration::from_secs(5)), 2);

        tokio::time::sleep(Duration::from_millis(4_900)).await;

        assert_eq!(ui.lock().style("flash0", "animation"), None);

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(ui.lock().style("flash1", "animation"), Some(SLIDE_OUT_ANIMATION));
        assert!(ui.lock().exists("flash1"));

        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(!ui.lock().exists("flash0"));
        assert!(!ui.lock().exists("flash1"));
        assert!(ui.lock().exists("content"));
    }
}
