//! Core traits and types for toolcall
//!
//! This crate provides the foundational abstractions for describing callable
//! tools: the capability descriptor model, the `Tool` trait, and the error
//! taxonomy shared across the workspace.

pub mod descriptor;
pub mod error;
pub mod traits;

// Re-exports
pub use descriptor::{MethodSpec, ParamKind, ParamSpec, ToolDescriptor, normalize_description};
pub use error::{Error, Result};
pub use traits::Tool;
