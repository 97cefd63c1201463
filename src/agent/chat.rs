//! The Model / Tool-Execution loop for one user turn.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{AgentError, Result};
use crate::provider::{ModelProvider, ProviderRequest, ToolDefinition};
use crate::tools::{Tool, ToolArguments};
use crate::types::{
    AgentToolResult, ContentPart, GenerationSettings, ModelMessage, Role, Usage,
};

/// Maximum Model/Tool-Execution cycles per turn.
///
/// A model that keeps requesting tools past this bound fails the turn with
/// [`AgentError::LoopLimitExceeded`] instead of looping forever.
pub const MAX_TOOL_ITERATIONS: usize = 20;

/// Result of one completed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Final answer text from the model.
    pub text: String,
    /// The input messages plus everything appended during the loop.
    pub messages: Vec<ModelMessage>,
    /// Token usage accumulated across all loop iterations.
    pub usage: Usage,
}

/// Drive one turn to completion.
///
/// Sends the transcript and tool definitions to the provider; executes any
/// requested tool calls and feeds their results back; repeats until the model
/// answers without tool calls. Tool failures do not abort the loop: they are
/// appended as error-flagged tool results for the model to react to.
pub async fn run_loop(
    provider: &dyn ModelProvider,
    mut messages: Vec<ModelMessage>,
    settings: GenerationSettings,
    tools: &[Arc<dyn Tool>],
) -> Result<TurnOutcome> {
    let tool_defs: Option<Vec<ToolDefinition>> = if tools.is_empty() {
        None
    } else {
        Some(
            tools
                .iter()
                .map(|t| ToolDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters().schema.clone(),
                })
                .collect(),
        )
    };

    let mut total_usage = Usage::default();

    for iteration in 0..MAX_TOOL_ITERATIONS {
        let request = ProviderRequest {
            messages: messages.clone(),
            settings: settings.clone(),
            tools: tool_defs.clone(),
        };

        debug!(iteration, "run_loop: calling provider");
        let response = provider.generate(&request).await?;
        total_usage.merge(&response.usage);

        if response.tool_calls.is_empty() {
            // Final answer.
            messages.push(ModelMessage::assistant(response.text.clone()));
            return Ok(TurnOutcome {
                text: response.text,
                messages,
                usage: total_usage,
            });
        }

        // Record the assistant message carrying the tool-call requests.
        let mut assistant_content: Vec<ContentPart> = Vec::new();
        if !response.text.is_empty() {
            assistant_content.push(ContentPart::Text {
                text: response.text.clone(),
            });
        }
        for tc in &response.tool_calls {
            assistant_content.push(ContentPart::ToolCall(tc.clone()));
        }
        messages.push(ModelMessage {
            role: Role::Assistant,
            content: assistant_content,
            timestamp: Some(chrono::Utc::now()),
        });

        // Execute each requested call and append its result.
        for tc in &response.tool_calls {
            let tool = tools.iter().find(|t| t.name() == tc.name);
            let result = match tool {
                Some(t) => {
                    let args = ToolArguments::new(tc.arguments.clone());
                    match t.execute(&args).await {
                        Ok(val) => AgentToolResult {
                            tool_call_id: tc.id.clone(),
                            result: val,
                            is_error: false,
                        },
                        Err(e) => {
                            let e = AgentError::ToolExecution {
                                tool_name: tc.name.clone(),
                                message: e.to_string(),
                            };
                            warn!(tool = %tc.name, error = %e, "Tool execution failed");
                            AgentToolResult {
                                tool_call_id: tc.id.clone(),
                                result: serde_json::json!({"error": e.to_string()}),
                                is_error: true,
                            }
                        }
                    }
                }
                None => {
                    warn!(tool = %tc.name, "Tool not found");
                    AgentToolResult {
                        tool_call_id: tc.id.clone(),
                        result: serde_json::json!({"error": format!("Tool '{}' not found", tc.name)}),
                        is_error: true,
                    }
                }
            };
            messages.push(ModelMessage::tool_result(
                result.tool_call_id.clone(),
                result.result,
                result.is_error,
            ));
        }
    }

    Err(AgentError::LoopLimitExceeded {
        limit: MAX_TOOL_ITERATIONS,
    })
}
