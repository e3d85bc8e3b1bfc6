//! Schema builder.
//!
//! Combines a tool's declared method specs with documentation index lookups
//! to produce one function-call descriptor per callable method, in the shape
//! expected by OpenAI-style function-calling APIs.

use crate::docs::DocIndex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use toolcall_core::{MethodSpec, ParamKind, ParamSpec, Tool};
use tracing::warn;

/// All parameters are textual; richer typing is intentionally out of scope.
const PARAM_TYPE: &str = "string";

/// One function-call entry handed to an LLM client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallSchema {
    /// Always `"function"`.
    #[serde(rename = "type")]
    pub schema_type: String,
    pub function: FunctionDecl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// `"{tool name}-{method name}"`.
    pub name: String,
    pub description: String,
    pub parameters: ParametersSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSchema {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Parameter name to `{type, description}`, in declaration order.
    pub properties: Map<String, Value>,
    /// Names of required-keyword parameters, in declaration order.
    pub required: Vec<String>,
}

/// Builds function-call schemas for one tool.
pub struct SchemaBuilder<'a, T: Tool + ?Sized> {
    tool: &'a T,
    index: DocIndex,
}

impl<'a, T: Tool + ?Sized> SchemaBuilder<'a, T> {
    /// Creates a builder with a freshly built documentation index.
    pub fn new(tool: &'a T) -> Self {
        Self {
            index: DocIndex::build_for(tool),
            tool,
        }
    }

    /// Creates a builder reusing an existing documentation index.
    pub fn with_index(tool: &'a T, index: DocIndex) -> Self {
        Self { tool, index }
    }

    /// Builds one schema per declared method, in declaration order.
    ///
    /// Missing documentation degrades to an empty description with a
    /// warning; it never fails the build.
    pub fn build(&self) -> Vec<ToolCallSchema> {
        let descriptor = self.tool.descriptor();
        descriptor
            .methods
            .iter()
            .map(|method| {
                let mut properties = Map::new();
                let mut required = Vec::new();

                for param in &method.params {
                    let mut prop = Map::new();
                    prop.insert("type".to_string(), Value::String(PARAM_TYPE.to_string()));
                    prop.insert(
                        "description".to_string(),
                        Value::String(self.param_description(&descriptor.name, &method.name, param)),
                    );
                    properties.insert(param.name.clone(), Value::Object(prop));

                    if param.kind == ParamKind::Required {
                        required.push(param.name.clone());
                    }
                }

                ToolCallSchema {
                    schema_type: "function".to_string(),
                    function: FunctionDecl {
                        name: format!("{}-{}", descriptor.name, method.name),
                        description: self.method_description(&descriptor.name, method),
                        parameters: ParametersSchema {
                            schema_type: "object".to_string(),
                            properties,
                            required,
                        },
                    },
                }
            })
            .collect()
    }

    /// Resolution order: `@param` tag in the doc index, then the declared
    /// description, then empty.
    fn param_description(&self, tool: &str, method: &str, param: &ParamSpec) -> String {
        if let Some(tag) = self.index.param_tag(tool, method, &param.name) {
            return tag.text.clone();
        }
        if !param.description.is_empty() {
            return param.description.clone();
        }
        warn!(
            tool,
            method,
            param = %param.name,
            "No description found for parameter, emitting empty string"
        );
        String::new()
    }

    fn method_description(&self, tool: &str, method: &MethodSpec) -> String {
        if let Some(doc) = self.index.method_doc(tool, &method.name) {
            return doc.docstring.clone();
        }
        if !method.doc.is_empty() {
            return method.doc.clone();
        }
        warn!(
            tool,
            method = %method.name,
            "No documentation found for method, emitting empty description"
        );
        String::new()
    }
}

/// Schema generation entry point for any tool.
pub trait ToolSchemas {
    /// Returns one function-call schema per declared method, using a freshly
    /// built documentation index.
    fn to_openai_tools(&self) -> Vec<ToolCallSchema>;
}

impl<T: Tool + ?Sized> ToolSchemas for T {
    fn to_openai_tools(&self) -> Vec<ToolCallSchema> {
        SchemaBuilder::new(self).build()
    }
}
