//! ccagent binary entry point.

use std::io::{BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ccagent::agent::ChatAgent;
use ccagent::cli::Cli;
use ccagent::config::AgentConfig;
use ccagent::types::GenerationSettings;

const DEFAULT_SYSTEM_PROMPT: &str = "You are a network assistant for a Cisco Catalyst Center \
    deployment. Use the provided tools to answer questions about device inventory and \
    configuration. Fetch an auth token before calling the other tools.";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Missing configuration is fatal: the process does not start without it.
    let mut config = match AgentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(model) = cli.model {
        config.model = model;
    }

    let settings = GenerationSettings {
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
    };

    let agent = match ChatAgent::from_config(&config) {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mut agent = agent
        .with_system_prompt(cli.system.unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()))
        .with_settings(settings);

    let session_id = uuid::Uuid::new_v4().to_string();

    match cli.prompt {
        Some(prompt) => {
            print_turn(&mut agent, &session_id, &prompt).await;
        }
        None => repl(&mut agent, &session_id).await,
    }
}

async fn repl(agent: &mut ChatAgent, session_id: &str) {
    let stdin = std::io::stdin();
    loop {
        print!("you: ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "exit" | "quit") {
            break;
        }
        print_turn(agent, session_id, input).await;
    }
}

async fn print_turn(agent: &mut ChatAgent, session_id: &str, input: &str) {
    // A failed turn degrades to a printed placeholder; the session survives.
    match agent.run_turn(session_id, input).await {
        Ok(answer) => println!("assistant: {answer}"),
        Err(e) => {
            tracing::error!(error = %e, "turn failed");
            println!("assistant: Error displaying response.");
        }
    }
}
