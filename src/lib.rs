pub(crate) mod services;
pub mod memory;
pub mod notifications;
pub mod prompts;
pub mod states;
pub mod templates;
pub mod tools;
pub mod util;

pub use memory::*;
pub use prompts::*;
pub use states::*;
pub use tools::*;

pub use notifications::{Notification, NotificationChannel, NotificationContent, NotificationHandler};
pub use services::llm::{
    ChatModel, ChatRequest, ChatResponse, ClientBuilder, ClientConfig, InferenceClient,
    InferenceOptions, LanguageModel, Message, ModelClientError, ModelFuture, Provider, Role,
};
pub use services::logging::init_default_tracing;

pub use util::invocations;
