use futures::{stream::SelectAll, StreamExt};
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_stream::wrappers::ReceiverStream;

use crate::{ExecutedState, Message, Notification, NotificationContent, ToolCall};

#[allow(async_fn_in_trait)]
pub trait NotificationHandler {
    fn get_outgoing_channel(&self) -> &Option<Sender<Notification>>;
    fn get_channel_name(&self) -> &String;

    /// Send a notification with the given content.
    ///
    /// Returns `true` if successfully delivered, `false` otherwise.
    async fn notify(&self, content: NotificationContent) -> bool {
        let Some(channel) = self.get_outgoing_channel() else {
            return false;
        };

        match channel
            .send(Notification::new(self.get_channel_name().clone(), content))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "Failed sending notification");
                false
            }
        }
    }

    /// Forward notifications from an external receiver into this handler's
    /// outgoing channel.
    fn forward_notifications(&self, mut from_channel: Receiver<Notification>) {
        if let Some(to_sender) = self.get_outgoing_channel().clone() {
            tokio::spawn(async move {
                while let Some(msg) = from_channel.recv().await {
                    if to_sender.send(msg).await.is_err() {
                        break;
                    }
                }
            });
        }
    }

    /// Merge any number of receivers and forward everything into this
    /// handler's outgoing channel.
    fn forward_multiple_notifications<I>(&self, channels: I)
    where
        I: IntoIterator<Item = Receiver<Notification>>,
    {
        let Some(to_sender) = self.get_outgoing_channel().clone() else {
            return;
        };

        let mut merged = SelectAll::new();
        for rx in channels {
            merged.push(ReceiverStream::new(rx));
        }

        tokio::spawn(async move {
            while let Some(notification) = merged.next().await {
                if to_sender.send(notification).await.is_err() {
                    break;
                }
            }
        });
    }

    async fn notify_prompt_request(&self, prompt: Vec<Message>) -> bool {
        self.notify(NotificationContent::PromptRequest(prompt)).await
    }
    async fn notify_prompt_success(&self, message: Message) -> bool {
        self.notify(NotificationContent::PromptSuccessResult(message)).await
    }
    async fn notify_prompt_error(&self, error_message: String) -> bool {
        self.notify(NotificationContent::PromptErrorResult(error_message)).await
    }
    async fn notify_tool_request(&self, tool_call: ToolCall) -> bool {
        self.notify(NotificationContent::ToolCallRequest(tool_call)).await
    }
    async fn notify_tool_success(&self, tool_result: String) -> bool {
        self.notify(NotificationContent::ToolCallSuccessResult(tool_result)).await
    }
    async fn notify_tool_error(&self, error_message: String) -> bool {
        self.notify(NotificationContent::ToolCallErrorResult(error_message)).await
    }
    async fn notify_user_input(&self, line: String) -> bool {
        self.notify(NotificationContent::UserInput(line)).await
    }
    async fn notify_executed(&self, executed: ExecutedState) -> bool {
        self.notify(NotificationContent::StateExecuted(executed)).await
    }
    async fn notify_failed(&self, error_message: String) -> bool {
        self.notify(NotificationContent::StateFailed(error_message)).await
    }
}
