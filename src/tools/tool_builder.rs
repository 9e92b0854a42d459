use std::{collections::HashMap, future::Future};

use serde_json::Value;

use super::{
    errors::{ToolBuilderError, ToolExecutionError},
    tool::{async_tool_fn, AsyncToolFn, Function, FunctionParameters, Property, Tool, ToolType},
};

#[derive(Default)]
pub struct ToolBuilder {
    function_name: Option<String>,
    function_description: Option<String>,
    function_properties: HashMap<String, Property>,
    function_required: Vec<String>,
    executor: Option<AsyncToolFn>,
}

impl std::fmt::Debug for ToolBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolBuilder")
            .field("function_name", &self.function_name)
            .field("function_description", &self.function_description)
            .field("function_properties", &self.function_properties)
            .field("function_required", &self.function_required)
            .field("executor", &self.executor.as_ref().map(|_| "<async_fn>"))
            .finish()
    }
}

impl ToolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name the model uses to call the tool. (Required)
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }

    /// Sets the description shown to the model. (Required)
    pub fn function_description<T>(mut self, description: T) -> Self
    where
        T: Into<String>,
    {
        self.function_description = Some(description.into());
        self
    }

    /// Adds a property to the function's parameters.
    ///
    /// # parameters
    /// * `name` - The name of the property.
    /// * `property_type` - The JSON schema type of the property (e.g., "string", "number", "boolean").
    /// * `description` - A description of what the property represents.
    pub fn add_property(
        mut self,
        name: impl Into<String>,
        property_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.function_properties.insert(
            name.into(),
            Property {
                property_type: property_type.into(),
                description: description.into(),
            },
        );
        self
    }

    /// Marks a previously added property as required.
    pub fn add_required_property(mut self, name: impl Into<String>) -> Self {
        self.function_required.push(name.into());
        self
    }

    /// Sets the executor. (Required)
    pub fn executor(mut self, exec: AsyncToolFn) -> Self {
        self.executor = Some(exec);
        self
    }

    /// Same as [`executor`](Self::executor) but takes a plain async closure.
    pub fn executor_fn<F, Fut>(self, f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, ToolExecutionError>> + Send + 'static,
    {
        self.executor(async_tool_fn(f))
    }

    pub fn build(self) -> Result<Tool, ToolBuilderError> {
        let name = self.function_name.ok_or(ToolBuilderError::MissingFunctionName)?;
        let description = self
            .function_description
            .ok_or(ToolBuilderError::MissingFunctionDescription)?;
        let executor = self.executor.ok_or(ToolBuilderError::MissingExecutor)?;

        if let Some(unknown) = self
            .function_required
            .iter()
            .find(|r| !self.function_properties.contains_key(*r))
        {
            return Err(ToolBuilderError::UnknownRequiredProperty(unknown.clone()));
        }

        Ok(Tool {
            tool_type: ToolType::Function,
            function: Function {
                name,
                description,
                parameters: FunctionParameters {
                    param_type: "object".to_string(),
                    properties: self.function_properties,
                    required: self.function_required,
                },
            },
            executor,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dummy_executor() -> AsyncToolFn {
        async_tool_fn(|_| async { Ok("dummy execution".to_string()) })
    }

    #[tokio::test]
    async fn builds_and_runs_tool() {
        let tool = ToolBuilder::new()
            .function_name("shout")
            .function_description("Upper-cases the input")
            .add_property("text", "string", "Text to shout")
            .add_required_property("text")
            .executor_fn(|args: Value| async move {
                match args.get("text").and_then(Value::as_str) {
                    Some(text) => Ok(text.to_uppercase()),
                    None => Err(ToolExecutionError::ArgumentParsingError("missing text".into())),
                }
            })
            .build()
            .unwrap();

        assert_eq!(tool.name(), "shout");
        assert_eq!(tool.function.parameters.properties["text"].property_type, "string");
        assert_eq!(tool.execute(json!({"text": "hey"})).await.unwrap(), "HEY");
        assert!(tool.execute(json!({})).await.is_err());
    }

    #[test]
    fn schema_serializes_for_the_model() {
        let tool = ToolBuilder::new()
            .function_name("noop")
            .function_description("Nothing")
            .executor(dummy_executor())
            .build()
            .unwrap();
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "noop");
        assert_eq!(value["function"]["parameters"]["type"], "object");
        assert!(value.get("executor").is_none());
    }

    #[test]
    fn missing_fields_fail() {
        let err = ToolBuilder::new()
            .function_description("no name")
            .executor(dummy_executor())
            .build()
            .unwrap_err();
        assert_eq!(err, ToolBuilderError::MissingFunctionName);

        let err = ToolBuilder::new()
            .function_name("no_desc")
            .executor(dummy_executor())
            .build()
            .unwrap_err();
        assert_eq!(err, ToolBuilderError::MissingFunctionDescription);

        let err = ToolBuilder::new()
            .function_name("no_exec")
            .function_description("no executor")
            .build()
            .unwrap_err();
        assert_eq!(err, ToolBuilderError::MissingExecutor);
    }

    #[test]
    fn required_property_must_exist() {
        let err = ToolBuilder::new()
            .function_name("t")
            .function_description("d")
            .add_required_property("ghost")
            .executor(dummy_executor())
            .build()
            .unwrap_err();
        assert_eq!(err, ToolBuilderError::UnknownRequiredProperty("ghost".into()));
    }
}
