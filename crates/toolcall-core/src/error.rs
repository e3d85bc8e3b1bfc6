use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    #[error("Tool '{0}' does not implement execute")]
    Unimplemented(String),

    #[error("Tool '{tool}' execution failed: {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use toolcall_core::Error;
    /// let err = Error::config_error("Tool set contains a duplicate name");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for wrapping a concrete tool failure
    pub fn tool_failed(tool: impl Into<String>, source: anyhow::Error) -> Self {
        Error::ToolFailed {
            tool: tool.into(),
            source,
        }
    }
}
