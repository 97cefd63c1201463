//! Conversation state and the tool-augmented chat loop.

pub mod chat;
pub mod conversation;
pub mod session;

pub use chat::{run_loop, TurnOutcome, MAX_TOOL_ITERATIONS};
pub use conversation::Conversation;
pub use session::SessionManager;

use std::sync::Arc;

use crate::config::AgentConfig;
use crate::dnac::DnacClient;
use crate::error::Result;
use crate::provider::{self, ModelProvider};
use crate::tools::{catalyst_tools, Tool};
use crate::types::{GenerationSettings, ModelMessage};

/// A complete conversational agent: provider + tools + per-session transcripts.
pub struct ChatAgent {
    provider: Box<dyn ModelProvider>,
    tools: Vec<Arc<dyn Tool>>,
    settings: GenerationSettings,
    system_prompt: Option<String>,
    sessions: SessionManager,
}

impl ChatAgent {
    /// Build an agent from startup configuration: the configured model
    /// provider plus the three Catalyst Center tools.
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        let provider = provider::create_provider(config)?;
        let client = Arc::new(DnacClient::from_config(config)?);
        Ok(Self::new(provider, catalyst_tools(client)))
    }

    /// Build an agent from explicit parts (used by tests with stub providers).
    pub fn new(provider: Box<dyn ModelProvider>, tools: Vec<Arc<dyn Tool>>) -> Self {
        Self {
            provider,
            tools,
            settings: GenerationSettings::default(),
            system_prompt: None,
            sessions: SessionManager::new(),
        }
    }

    /// Set a system prompt prepended to every model request.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Set generation settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Run one user turn to completion in the given session.
    ///
    /// Appends the user message, drives the Model/Tool-Execution loop until
    /// the model answers without tool calls, appends every intermediate
    /// message to the session transcript, and returns the final answer text.
    pub async fn run_turn(
        &mut self,
        session_id: &str,
        user_text: impl Into<String>,
    ) -> Result<String> {
        let conversation = self.sessions.get_or_create(session_id);
        conversation.add_user_message(user_text);

        let mut input = Vec::new();
        if let Some(ref sys) = self.system_prompt {
            input.push(ModelMessage::system(sys.clone()));
        }
        let prefix_len = input.len() + conversation.len();
        input.extend(conversation.messages().iter().cloned());

        let outcome = run_loop(
            self.provider.as_ref(),
            input,
            self.settings.clone(),
            &self.tools,
        )
        .await?;

        for message in outcome.messages.into_iter().skip(prefix_len) {
            conversation.add_message(message);
        }
        Ok(outcome.text)
    }

    /// Read access to a session's transcript.
    pub fn transcript(&self, session_id: &str) -> Option<&Conversation> {
        self.sessions.get(session_id)
    }

    /// Drop a session's transcript.
    pub fn reset_session(&mut self, session_id: &str) {
        self.sessions.remove(session_id);
    }
}
