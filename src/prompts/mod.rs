use std::{collections::HashMap, fmt, future::Future, pin::Pin};

use crate::{templates::Template, Memory, Message};

pub type PromptFuture<'a> = Pin<Box<dyn Future<Output = Vec<Message>> + Send + 'a>>;

/// Turns the current [`Memory`] into the message list sent to the model.
///
/// Any `Fn(&Memory) -> Vec<Message>` is a prompt generator.
pub trait PromptGenerator: Send + Sync {
    fn generate<'a>(&'a self, memory: &'a Memory) -> PromptFuture<'a>;
}

impl<F> PromptGenerator for F
where
    F: Fn(&Memory) -> Vec<Message> + Send + Sync,
{
    fn generate<'a>(&'a self, memory: &'a Memory) -> PromptFuture<'a> {
        let messages = self(memory);
        Box::pin(async move { messages })
    }
}

/// Sends the memory as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryPrompt;

impl PromptGenerator for MemoryPrompt {
    fn generate<'a>(&'a self, memory: &'a Memory) -> PromptFuture<'a> {
        Box::pin(async move { memory.messages().to_vec() })
    }
}

/// Prepends a system message compiled from a [`Template`], followed by the memory.
///
/// System messages already stored in memory are dropped so the template is the
/// only system prompt the model sees.
#[derive(Clone)]
pub struct SystemPromptGenerator {
    template: Template,
    values: HashMap<String, String>,
}

impl SystemPromptGenerator {
    pub fn new(template: Template) -> Self {
        Self { template, values: HashMap::new() }
    }

    pub fn with_value<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for SystemPromptGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemPromptGenerator")
            .field("template", &self.template)
            .field("values", &self.values)
            .finish()
    }
}

impl PromptGenerator for SystemPromptGenerator {
    fn generate<'a>(&'a self, memory: &'a Memory) -> PromptFuture<'a> {
        Box::pin(async move {
            let system = self.template.compile(&self.values).await;
            std::iter::once(Message::system(system))
                .chain(
                    memory
                        .messages()
                        .iter()
                        .filter(|m| m.role != crate::Role::System)
                        .cloned(),
                )
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn memory() -> Memory {
        Memory::from_messages([
            Message::system("old system"),
            Message::user("hello"),
            Message::assistant("hi"),
        ])
    }

    #[tokio::test]
    async fn closure_is_a_generator() {
        let last_only = |memory: &Memory| -> Vec<Message> {
            memory.last_message().cloned().into_iter().collect()
        };
        let prompt = last_only.generate(&memory()).await;
        assert_eq!(prompt.len(), 1);
        assert_eq!(prompt[0].content.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn memory_prompt_is_verbatim() {
        let memory = memory();
        let prompt = MemoryPrompt.generate(&memory).await;
        assert_eq!(prompt, memory.messages().to_vec());
    }

    #[tokio::test]
    async fn system_prompt_replaces_stored_system_messages() {
        let generator = SystemPromptGenerator::new(Template::simple("You help {{user}}."))
            .with_value("user", "Ada");
        let prompt = generator.generate(&memory()).await;

        assert_eq!(prompt.len(), 3);
        assert_eq!(prompt[0].role, Role::System);
        assert_eq!(prompt[0].content.as_deref(), Some("You help Ada."));
        assert_eq!(prompt[1].role, Role::User);
        assert_eq!(prompt[2].role, Role::Assistant);
    }
}
