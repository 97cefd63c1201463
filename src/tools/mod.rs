//! Tool system for function calling.

pub mod arguments;
pub mod dnac;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use dnac::catalyst_tools;
pub use tool::{AgentTool, Tool};
pub use types::AgentToolParameters;
