use std::fmt;

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout},
    sync::{mpsc::Sender, Mutex},
};
use tracing::Instrument;

use crate::{
    notifications::{NotificationChannel, NotificationHandler},
    ExecutedState, Memory, Message, Notification, State, StateError, StateFuture,
};

pub const USER_INPUT_STATE_ID: &str = "user_input";
pub const DEFAULT_INPUT_PROMPT: &str = "Enter your input: ";

struct Console<R, W> {
    reader: R,
    writer: W,
}

/// A state that asks a human for the next message.
///
/// Meant for interactive development. Reads one line, with no timeout and no
/// validation, and appends it to memory as a user message.
pub struct UserInputState<R = BufReader<Stdin>, W = Stdout> {
    prompt: String,
    console: Mutex<Console<R, W>>,
    notifier: NotificationChannel,
}

impl UserInputState {
    /// Reads from stdin, prompts on stdout.
    pub fn new() -> Self {
        Self::with_io(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl Default for UserInputState {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> UserInputState<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn with_io(reader: R, writer: W) -> Self {
        Self {
            prompt: DEFAULT_INPUT_PROMPT.to_string(),
            console: Mutex::new(Console { reader, writer }),
            notifier: NotificationChannel::silent(USER_INPUT_STATE_ID),
        }
    }

    pub fn with_prompt<T: Into<String>>(mut self, prompt: T) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_notification_channel(mut self, sender: Sender<Notification>) -> Self {
        self.notifier.set_sender(sender);
        self
    }

    /// Gives back the reader and writer.
    pub fn into_io(self) -> (R, W) {
        let Console { reader, writer } = self.console.into_inner();
        (reader, writer)
    }

    async fn read_line(&self) -> Result<String, StateError> {
        let mut console = self.console.lock().await;
        let Console { reader, writer } = &mut *console;

        writer.write_all(self.prompt.as_bytes()).await?;
        writer.flush().await?;

        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            return Err(StateError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    async fn run(&self, memory: &mut Memory) -> Result<ExecutedState, StateError> {
        let line = self.read_line().await?;
        self.notifier.notify_user_input(line.clone()).await;

        let message = Message::user(line);
        memory.add_message(message.clone());
        Ok(ExecutedState::new(USER_INPUT_STATE_ID, message))
    }
}

impl<R, W> State for UserInputState<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    fn id(&self) -> &str {
        USER_INPUT_STATE_ID
    }

    fn execute<'a>(&'a self, memory: &'a mut Memory) -> StateFuture<'a> {
        let span = tracing::info_span!("state.execute", state = USER_INPUT_STATE_ID);
        Box::pin(
            async move {
                let result = self.run(memory).await;
                match &result {
                    Ok(executed) => self.notifier.notify_executed(executed.clone()).await,
                    Err(e) => self.notifier.notify_failed(e.to_string()).await,
                };
                result
            }
            .instrument(span),
        )
    }
}

impl<R, W> fmt::Debug for UserInputState<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInputState")
            .field("prompt", &self.prompt)
            .field("notifier", &self.notifier)
            .finish()
    }
}
