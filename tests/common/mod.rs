//! Shared test helpers: a canned mock provider.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use ccagent::error::{AgentError, Result};
use ccagent::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use ccagent::types::{AgentToolCall, FinishReason, Usage};

/// A mock provider that returns queued responses in order and records every
/// request it receives.
pub struct MockProvider {
    model_id: String,
    responses: Mutex<VecDeque<ProviderResponse>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a plain text response.
    pub fn queue_response(&self, text: &str) {
        self.responses.lock().unwrap().push_back(ProviderResponse {
            text: text.to_string(),
            tool_calls: vec![],
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            finish_reason: Some(FinishReason::Stop),
        });
    }

    /// Queue a tool call response.
    pub fn queue_tool_call(&self, id: &str, name: &str, args: serde_json::Value) {
        self.responses.lock().unwrap().push_back(ProviderResponse {
            text: String::new(),
            tool_calls: vec![AgentToolCall {
                id: id.to_string(),
                name: name.to_string(),
                arguments: args,
            }],
            usage: Usage {
                input_tokens: 10,
                output_tokens: 5,
                total_tokens: 15,
            },
            finish_reason: Some(FinishReason::ToolCalls),
        });
    }

    /// Number of model invocations so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The last request sent to the provider.
    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AgentError::InvalidArgument("no queued mock response".into()))
    }
}

/// A provider that requests the same tool call on every invocation.
pub struct AlwaysToolProvider;

#[async_trait]
impl ModelProvider for AlwaysToolProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "looping-model"
    }

    async fn generate(&self, _request: &ProviderRequest) -> Result<ProviderResponse> {
        Ok(ProviderResponse {
            text: String::new(),
            tool_calls: vec![AgentToolCall {
                id: "call_again".to_string(),
                name: "get_auth_token".to_string(),
                arguments: serde_json::json!({}),
            }],
            usage: Usage::default(),
            finish_reason: Some(FinishReason::ToolCalls),
        })
    }
}
