use toolcall_core::{Error, MethodSpec, Result, Tool, ToolDescriptor};

/// Type alias for tool execution function
pub type ToolFn = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// A function-based tool implementation
pub struct FunctionTool {
    descriptor: ToolDescriptor,
    docs: Option<String>,
    execute_fn: ToolFn,
}

impl FunctionTool {
    pub fn builder() -> FunctionToolBuilder {
        FunctionToolBuilder::new()
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("descriptor", &self.descriptor)
            .field("docs", &self.docs)
            .finish()
    }
}

impl Tool for FunctionTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    fn docs(&self) -> Option<&str> {
        self.docs.as_deref()
    }

    fn execute(&self, input: &str) -> Result<String> {
        (self.execute_fn)(input)
    }
}

/// Builder for FunctionTool
pub struct FunctionToolBuilder {
    name: Option<String>,
    description: Option<String>,
    methods: Vec<MethodSpec>,
    docs: Option<String>,
    execute_fn: Option<ToolFn>,
}

impl FunctionToolBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            methods: Vec::new(),
            docs: None,
            execute_fn: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declares a callable method. Declaration order is preserved.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Attaches a documentation source in the block format understood by
    /// the documentation index.
    pub fn docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn execute<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        self.execute_fn = Some(Box::new(f));
        self
    }

    pub fn build(self) -> Result<FunctionTool> {
        let mut descriptor = ToolDescriptor::builder()
            .name(
                self.name
                    .ok_or_else(|| Error::config_error("Tool name is required"))?,
            )
            .description(
                self.description
                    .ok_or_else(|| Error::config_error("Tool description is required"))?,
            );
        for method in self.methods {
            descriptor = descriptor.method(method);
        }

        Ok(FunctionTool {
            descriptor: descriptor.build()?,
            docs: self.docs,
            execute_fn: self
                .execute_fn
                .ok_or_else(|| Error::config_error("Tool execute function is required"))?,
        })
    }
}

impl Default for FunctionToolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ToolSchemas;
    use toolcall_core::ParamSpec;

    #[test]
    fn test_function_tool_creation() {
        let tool = FunctionTool::builder()
            .name("Upper")
            .description("Uppercases the input")
            .method(MethodSpec::new("execute").param(
                ParamSpec::required("text").description("text to uppercase"),
            ))
            .execute(|input| Ok(input.to_uppercase()))
            .build()
            .unwrap();

        assert_eq!(tool.name(), "Upper");
        assert_eq!(tool.description(), "Uppercases the input");
        assert_eq!(tool.execute("hello").unwrap(), "HELLO");

        let schemas = tool.to_openai_tools();
        assert_eq!(schemas[0].function.name, "Upper-execute");
        assert_eq!(schemas[0].function.parameters.required, vec!["text"]);
    }

    #[test]
    fn test_builder_rejects_missing_fields() {
        let err = FunctionTool::builder().build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = FunctionTool::builder()
            .name("NoExec")
            .description("missing execute")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("execute")));
    }

    #[test]
    fn test_execute_errors_propagate() {
        let tool = FunctionTool::builder()
            .name("Failing")
            .description("Always fails")
            .execute(|_| Err(Error::tool_failed("Failing", anyhow::anyhow!("boom"))))
            .build()
            .unwrap();

        let err = tool.execute("x").unwrap_err();
        assert!(matches!(err, Error::ToolFailed { ref tool, .. } if tool == "Failing"));
    }
}
