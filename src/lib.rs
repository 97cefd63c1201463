//! ccagent: conversational Catalyst Center agent.
//!
//! Lets a user query network-device inventory and running configuration in
//! natural language. A tool-calling language model drives three read-only
//! Catalyst Center (DNA Center) REST operations; the agent loop feeds tool
//! results back into the transcript until the model produces a final answer.
//!
//! # Quick start
//!
//! ```no_run
//! use ccagent::prelude::*;
//!
//! # async fn example() -> ccagent::error::Result<()> {
//! let config = AgentConfig::from_env()?;
//! let mut agent = ChatAgent::from_config(&config)?;
//! let answer = agent.run_turn("default", "How many devices are in inventory?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod dnac;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;
