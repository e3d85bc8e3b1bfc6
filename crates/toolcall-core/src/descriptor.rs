//! Capability descriptors
//!
//! A tool declares its identity and callable surface as plain data: a name,
//! a description, and an ordered list of method specs, each carrying an
//! ordered list of parameter specs. Schema generation walks these lists in
//! declaration order, so ordering is load-bearing.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a parameter must be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Named parameter the caller must supply; no default value.
    Required,
    /// Named parameter with a default value.
    Optional,
    /// Positional parameter.
    Positional,
}

/// A single declared parameter of a callable method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    /// Fallback description, used when the tool's documentation has no
    /// matching `@param` tag.
    #[serde(default)]
    pub description: String,
}

impl ParamSpec {
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Required)
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Optional)
    }

    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Positional)
    }

    fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
        }
    }

    /// Sets the declared description for this parameter.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }
}

/// A callable method declared by a tool.
///
/// Each method becomes one function-call entry in the generated schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    /// Fallback docstring, used when the tool's documentation has no entry
    /// for this method.
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            params: Vec::new(),
        }
    }

    /// Sets the declared docstring for this method.
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = text.into();
        self
    }

    /// Appends a parameter. Declaration order is preserved in the schema.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }
}

/// Identity and callable surface of a tool, immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    /// Normalized at construction: whitespace runs collapsed to single
    /// spaces, leading/trailing whitespace trimmed.
    pub description: String,
    pub methods: Vec<MethodSpec>,
}

impl ToolDescriptor {
    pub fn builder() -> ToolDescriptorBuilder {
        ToolDescriptorBuilder::new()
    }

    /// Looks up a declared method by name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Builder for ToolDescriptor
pub struct ToolDescriptorBuilder {
    name: Option<String>,
    description: Option<String>,
    methods: Vec<MethodSpec>,
}

impl ToolDescriptorBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            methods: Vec::new(),
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

    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn build(self) -> Result<ToolDescriptor> {
        Ok(ToolDescriptor {
            name: self
                .name
                .ok_or_else(|| Error::config_error("Tool name is required"))?,
            description: normalize_description(
                &self
                    .description
                    .ok_or_else(|| Error::config_error("Tool description is required"))?,
            ),
            methods: self.methods,
        })
    }
}

impl Default for ToolDescriptorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses whitespace runs (including newlines) to single spaces and trims.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
pub fn normalize_description(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
