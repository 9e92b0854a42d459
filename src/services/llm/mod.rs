pub mod client;
pub mod client_config;
pub mod model;
pub mod models;
pub mod providers;

pub use client::{InferenceClient, Provider};
pub use client_config::{ClientBuilder, ClientConfig};
pub use model::{ChatModel, LanguageModel, ModelFuture};
pub use models::*;
