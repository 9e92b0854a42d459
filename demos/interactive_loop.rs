use std::{error::Error, sync::Arc};

use reagent_automaton::{
    init_default_tracing, templates::Template, ChatModel, ClientBuilder, ClientConfig, Memory,
    MessageType, State, SystemPromptGenerator, ToolBuilder, LlmProgramState, UserInputState,
};
use serde_json::Value;

/// Hand-rolled driver: ask the user, let the model answer, and loop back to the
/// model whenever it called a tool. Type `/quit` to stop.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_default_tracing();

    let weather_tool = ToolBuilder::new()
        .function_name("get_current_weather")
        .function_description("Returns a weather forecast for a given location")
        .add_property("location", "string", "City name")
        .add_required_property("location")
        .executor_fn(|args: Value| async move {
            let location = args["location"].as_str().unwrap_or("somewhere").to_string();
            Ok(format!(r#"{{"location":"{location}","windy":false,"temperature":21}}"#))
        })
        .build()?;

    let client = ClientConfig::default()
        .base_url(std::env::var("OLLAMA_HOST").ok())
        .build()?;
    let model = ChatModel::new(client, "qwen3:0.6b").with_temperature(0.2);

    let prompt = SystemPromptGenerator::new(Template::simple(
        "You are {{persona}}. Use tools when they help.",
    ))
    .with_value("persona", "a concise weather assistant");

    let user = UserInputState::new();
    let program = LlmProgramState::new(Arc::new(model), vec![weather_tool], prompt)
        .with_strip_thinking(true);

    let mut memory = Memory::new();
    let mut next: &dyn State = &user;

    loop {
        let executed = next.execute(&mut memory).await?;
        let message = executed.message();

        next = match executed.message_type() {
            MessageType::Human if message.content.as_deref() == Some("/quit") => break,
            MessageType::Human | MessageType::Function => &program,
            _ => {
                println!("\n-> Agent: {}\n", message.content.clone().unwrap_or_default());
                &user
            }
        };
    }

    println!("{} messages exchanged", memory.len());
    Ok(())
}
