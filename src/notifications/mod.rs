mod channel;
mod handler;
mod notification;
mod notification_content;

pub use self::{
    channel::NotificationChannel, handler::NotificationHandler, notification::Notification,
    notification_content::NotificationContent,
};

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::Message;

    #[tokio::test]
    async fn silent_channel_drops_notifications() {
        let channel = NotificationChannel::silent("quiet");
        assert!(!channel.notify_user_input("hello".into()).await);
    }

    #[tokio::test]
    async fn notifications_carry_source_name() {
        let (tx, mut rx) = mpsc::channel(8);
        let channel = NotificationChannel::new(Some(tx), "llm_program");

        assert!(channel.notify_prompt_success(Message::assistant("hi")).await);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.source, "llm_program");
        assert!(matches!(received.content, NotificationContent::PromptSuccessResult(_)));
        assert!(received.timestamp_millis > 0);
    }

    #[tokio::test]
    async fn closed_receiver_reports_failure() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let channel = NotificationChannel::new(Some(tx), "gone");
        assert!(!channel.notify_failed("boom".into()).await);
    }

    #[tokio::test]
    async fn forwards_from_many_receivers() {
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let hub = NotificationChannel::new(Some(out_tx), "hub");

        let (a_tx, a_rx) = mpsc::channel(8);
        let (b_tx, b_rx) = mpsc::channel(8);
        hub.forward_multiple_notifications([a_rx, b_rx]);

        NotificationChannel::new(Some(a_tx), "a").notify_user_input("x".into()).await;
        NotificationChannel::new(Some(b_tx), "b").notify_user_input("y".into()).await;

        let mut sources = vec![
            out_rx.recv().await.unwrap().source,
            out_rx.recv().await.unwrap().source,
        ];
        sources.sort();
        assert_eq!(sources, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn forwards_single_receiver() {
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let hub = NotificationChannel::new(Some(out_tx), "hub");
        let (tx, rx) = mpsc::channel(8);
        hub.forward_notifications(rx);

        NotificationChannel::new(Some(tx), "inner").notify_prompt_error("nope".into()).await;
        let received = out_rx.recv().await.unwrap();
        assert_eq!(received.source, "inner");
    }
}
