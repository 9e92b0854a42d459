use tokio::sync::mpsc::Sender;

use crate::{Notification, NotificationHandler};

/// Named, optional outgoing notification channel.
///
/// Without a sender every `notify` is a no-op returning `false`.
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    sender: Option<Sender<Notification>>,
    name: String,
}

impl NotificationChannel {
    pub fn new<T: Into<String>>(sender: Option<Sender<Notification>>, name: T) -> Self {
        Self { sender, name: name.into() }
    }

    pub fn silent<T: Into<String>>(name: T) -> Self {
        Self::new(None, name)
    }

    pub fn set_sender(&mut self, sender: Sender<Notification>) {
        self.sender = Some(sender);
    }
}

impl NotificationHandler for NotificationChannel {
    fn get_outgoing_channel(&self) -> &Option<Sender<Notification>> {
        &self.sender
    }

    fn get_channel_name(&self) -> &String {
        &self.name
    }
}
