//! Model provider trait and the OpenAI implementation.

pub mod http;
pub mod openai;

use async_trait::async_trait;

use crate::config::AgentConfig;
use crate::error::Result;
use crate::types::{AgentToolCall, FinishReason, GenerationSettings, ModelMessage, Usage};

/// A request sent to a model provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub messages: Vec<ModelMessage>,
    pub settings: GenerationSettings,
    pub tools: Option<Vec<ToolDefinition>>,
}

/// Tool definition sent to the provider API.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Response from a provider: either a final answer or tool-call requests.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub tool_calls: Vec<AgentToolCall>,
    pub usage: Usage,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by model providers.
///
/// Given a conversation and a set of callable tools, the provider returns
/// either a final answer or a request to invoke specific tools with
/// arguments. The agent loop is the only caller.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g. "openai").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Run one model invocation (non-streaming).
    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderResponse>;
}

/// Create the configured provider.
pub fn create_provider(config: &AgentConfig) -> Result<Box<dyn ModelProvider>> {
    Ok(Box::new(openai::OpenAiProvider::new(
        config.model.clone(),
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    )))
}
