//! Schema engine for toolcall
//!
//! This crate turns tool capability declarations into function-call schemas,
//! including:
//! - Documentation index parsing per-method doc blocks
//! - Schema builder producing OpenAI-shaped function descriptors
//! - Toolset validation against duplicate names
//! - Closure-based function tools and builtins

pub mod builder;
pub mod builtin;
pub mod docs;
pub mod function_tool;
pub mod registry;

// Re-exports
pub use builder::{FunctionDecl, ParametersSchema, SchemaBuilder, ToolCallSchema, ToolSchemas};
pub use docs::{DocIndex, MethodDoc, ParamTag};
pub use function_tool::FunctionTool;
pub use registry::Toolset;

// Re-export core types
pub use toolcall_core::{
    Error, MethodSpec, ParamKind, ParamSpec, Result, Tool, ToolDescriptor,
};
