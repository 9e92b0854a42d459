use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::NotificationContent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Name of the channel (usually the state) that emitted it.
    pub source: String,
    pub content: NotificationContent,
    pub timestamp_millis: u128,
}

impl Notification {
    pub fn new(source: String, content: NotificationContent) -> Self {
        Self {
            source,
            content,
            timestamp_millis: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
        }
    }
}
