//! Convenience re-exports for common use.

pub use crate::agent::{ChatAgent, Conversation, SessionManager, TurnOutcome};
pub use crate::config::AgentConfig;
pub use crate::dnac::{AuthToken, Device, DeviceInventory, DnacClient};
pub use crate::error::{AgentError, Result};
pub use crate::provider::ModelProvider;
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolArguments};
pub use crate::types::{ContentPart, GenerationSettings, ModelMessage, Role, Usage};
