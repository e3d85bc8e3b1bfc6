//! Built-in tools

pub mod echo;

pub use echo::create_echo_tool;
