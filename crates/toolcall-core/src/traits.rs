use crate::descriptor::ToolDescriptor;
use crate::error::{Error, Result};

/// Tool trait - abstraction for callable capabilities
///
/// A tool exposes its identity and callable surface through a
/// [`ToolDescriptor`], optionally ships a plain-text documentation source,
/// and executes string input to string output. Execution is synchronous;
/// any coordination between tools belongs to the caller.
pub trait Tool: Send + Sync {
    /// Returns the descriptor declaring this tool's identity and methods
    fn descriptor(&self) -> &ToolDescriptor;

    /// Returns the name of the tool
    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// Returns a description of what the tool does
    fn description(&self) -> &str {
        &self.descriptor().description
    }

    /// Returns the tool's documentation source, if it ships one
    ///
    /// See `toolcall-tool`'s documentation index for the expected format.
    fn docs(&self) -> Option<&str> {
        None
    }

    /// Executes the tool with the given input
    ///
    /// The default implementation fails with [`Error::Unimplemented`];
    /// every concrete tool must override it.
    fn execute(&self, _input: &str) -> Result<String> {
        Err(Error::Unimplemented(self.name().to_string()))
    }
}
