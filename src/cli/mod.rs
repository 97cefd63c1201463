//! CLI definitions for the ccagent binary.

use clap::Parser;

/// Conversational agent for Cisco Catalyst Center device inventory.
#[derive(Parser, Debug)]
#[command(name = "ccagent", version, about)]
pub struct Cli {
    /// Model to use (overrides CCAGENT_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt
    #[arg(short, long)]
    pub system: Option<String>,

    /// Temperature (0.0 - 2.0)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Max tokens per model response
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// One-shot prompt; omit to start an interactive session
    pub prompt: Option<String>,
}
