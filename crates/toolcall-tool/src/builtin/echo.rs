use crate::FunctionTool;
use toolcall_core::{MethodSpec, ParamSpec, Result};

const ECHO_DOCS: &str = "\
Echo#execute
Echoes back the provided message.
@param message the message to echo back";

/// Creates an echo tool for testing purposes
pub fn create_echo_tool() -> Result<FunctionTool> {
    FunctionTool::builder()
        .name("Echo")
        .description("Echoes back the provided input. Useful for testing tool execution.")
        .method(MethodSpec::new("execute").param(ParamSpec::required("message")))
        .docs(ECHO_DOCS)
        .execute(|input| {
            tracing::debug!(input = %input, "Echo tool called");
            Ok(input.to_string())
        })
        .build()
}
