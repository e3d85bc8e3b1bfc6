//! Toolset validation and lookup.
//!
//! A [`Toolset`] is a validated, immutable collection of tools. Validation
//! rejects duplicate tool names before the set is ever handed to an agent;
//! it does not reorder or deduplicate the input.

use crate::builder::{ToolCallSchema, ToolSchemas};
use std::collections::HashSet;
use std::sync::Arc;
use toolcall_core::{Error, Result, Tool};
use tracing::debug;

/// A validated collection of tools with pairwise-distinct names.
#[derive(Clone, Default)]
pub struct Toolset {
    tools: Vec<Arc<dyn Tool>>,
}

impl Toolset {
    /// Validates the given tools and wraps them, preserving order.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self> {
        Self::validate(&tools)?;
        debug!(count = tools.len(), "Toolset validated");
        Ok(Self { tools })
    }

    /// Checks that tool names are pairwise distinct.
    ///
    /// Fails with [`Error::DuplicateTool`] naming the first colliding name.
    pub fn validate(tools: &[Arc<dyn Tool>]) -> Result<()> {
        let mut seen = HashSet::new();
        for tool in tools {
            if !seen.insert(tool.name()) {
                return Err(Error::DuplicateTool(tool.name().to_string()));
            }
        }
        Ok(())
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Flattened function-call schemas for every tool, in set order.
    pub fn to_openai_tools(&self) -> Vec<ToolCallSchema> {
        self.tools
            .iter()
            .flat_map(|tool| tool.to_openai_tools())
            .collect()
    }
}

impl std::fmt::Debug for Toolset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolset")
            .field(
                "tools",
                &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolcall_core::ToolDescriptor;

    struct NamedTool {
        descriptor: ToolDescriptor,
    }

    impl NamedTool {
        fn new(name: &str) -> Arc<dyn Tool> {
            Arc::new(Self {
                descriptor: ToolDescriptor::builder()
                    .name(name)
                    .description("test tool")
                    .build()
                    .unwrap(),
            })
        }
    }

    impl Tool for NamedTool {
        fn descriptor(&self) -> &ToolDescriptor {
            &self.descriptor
        }

        fn execute(&self, input: &str) -> toolcall_core::Result<String> {
            Ok(input.to_string())
        }
    }

    #[test]
    fn test_distinct_names_validate() {
        let toolset = Toolset::new(vec![
            NamedTool::new("Search"),
            NamedTool::new("Weather"),
            NamedTool::new("Db"),
        ])
        .unwrap();

        assert_eq!(toolset.len(), 3);
        assert!(toolset.get("Weather").is_some());
        assert!(toolset.get("Missing").is_none());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let err = Toolset::new(vec![NamedTool::new("Search"), NamedTool::new("Search")])
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateTool(ref name) if name == "Search"));
    }

    #[test]
    fn test_validation_does_not_reorder() {
        let toolset =
            Toolset::new(vec![NamedTool::new("b"), NamedTool::new("a")]).unwrap();
        let names: Vec<&str> = toolset.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_set_is_valid() {
        let toolset = Toolset::new(Vec::new()).unwrap();
        assert!(toolset.is_empty());
        assert!(toolset.to_openai_tools().is_empty());
    }
}
