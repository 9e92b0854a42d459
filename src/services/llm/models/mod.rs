pub mod base;
pub mod chat;
pub mod errors;
pub mod message;

pub use base::*;
pub use chat::*;
pub use errors::*;
pub use message::*;
