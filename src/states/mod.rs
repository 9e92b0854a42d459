//! Automaton states.
//!
//! A state does one unit of work against the shared [`Memory`] and returns an
//! [`ExecutedState`] whose message the surrounding automaton routes on.
//! States are executed one at a time; `execute` takes the memory mutably.

use std::{future::Future, pin::Pin};

use crate::Memory;

mod error;
mod executed;
mod llm_program;
mod user_input;

pub use self::{
    error::StateError,
    executed::{ExecutedData, ExecutedState},
    llm_program::{LlmProgramState, LLM_PROGRAM_STATE_ID},
    user_input::{UserInputState, DEFAULT_INPUT_PROMPT, USER_INPUT_STATE_ID},
};

pub type StateFuture<'a> = Pin<Box<dyn Future<Output = Result<ExecutedState, StateError>> + Send + 'a>>;

pub trait State: Send + Sync {
    /// Identifier reported in [`ExecutedState::id`].
    fn id(&self) -> &str;

    /// Run the state. Appends at least one message to `memory` on success.
    fn execute<'a>(&'a self, memory: &'a mut Memory) -> StateFuture<'a>;
}
