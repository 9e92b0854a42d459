mod errors;
mod tool;
mod tool_builder;

pub use self::{
    errors::{ToolBuilderError, ToolExecutionError},
    tool::{
        async_tool_fn, AsyncToolFn, Function, FunctionParameters, Property, Tool, ToolCall,
        ToolCallFunction, ToolFuture, ToolType,
    },
    tool_builder::ToolBuilder,
};
