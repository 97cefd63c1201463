//! Orchestrator loop behavior with stubbed providers and tools.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use ccagent::agent::{run_loop, ChatAgent, MAX_TOOL_ITERATIONS};
use ccagent::error::AgentError;
use ccagent::tools::{AgentTool, AgentToolParameters, Tool};
use ccagent::types::{GenerationSettings, ModelMessage, Role};
use common::{AlwaysToolProvider, MockProvider};

fn counting_inventory_tool(counter: Arc<AtomicUsize>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "get_device_inventory",
        "Retrieve the network device inventory",
        AgentToolParameters::object()
            .string("token", "auth token", true)
            .build(),
        move |args| {
            let counter = Arc::clone(&counter);
            async move {
                let _token = args.get_str("token")?;
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(serde_json::json!({
                    "devices": [{"id": "dev-1", "hostname": "edge-sw-01"}],
                    "complete": true,
                }))
            }
        },
    ))
}

#[tokio::test]
async fn immediate_answer_terminates_in_one_step() {
    let provider = MockProvider::new("test-model");
    provider.queue_response("There are 12 devices.");

    let outcome = run_loop(
        &provider,
        vec![ModelMessage::user("how many devices?")],
        GenerationSettings::default(),
        &[],
    )
    .await
    .unwrap();

    assert_eq!(provider.request_count(), 1);
    assert_eq!(outcome.text, "There are 12 devices.");
    // Exactly one assistant message was appended after the user message.
    assert_eq!(outcome.messages.len(), 2);
    assert_eq!(outcome.messages[1].role, Role::Assistant);
}

#[tokio::test]
async fn tool_call_executes_once_and_result_references_call() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call(
        "call_1",
        "get_device_inventory",
        serde_json::json!({"token": "abc"}),
    );
    provider.queue_response("You have one device: edge-sw-01.");

    let executions = Arc::new(AtomicUsize::new(0));
    let tools = vec![counting_inventory_tool(Arc::clone(&executions))];

    let outcome = run_loop(
        &provider,
        vec![ModelMessage::user("list devices")],
        GenerationSettings::default(),
        &tools,
    )
    .await
    .unwrap();

    // Terminal on the second Model-state invocation, one tool execution.
    assert_eq!(provider.request_count(), 2);
    assert_eq!(executions.load(Ordering::SeqCst), 1);

    // user, assistant(tool call), tool result, assistant(final).
    assert_eq!(outcome.messages.len(), 4);
    let tool_msg = &outcome.messages[2];
    assert_eq!(tool_msg.role, Role::Tool);
    let results = tool_msg.tool_results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tool_call_id, "call_1");
    assert!(!results[0].is_error);
    assert_eq!(outcome.text, "You have one device: edge-sw-01.");
}

#[tokio::test]
async fn tool_definitions_are_sent_to_the_provider() {
    let provider = MockProvider::new("test-model");
    provider.queue_response("ok");

    let tools = vec![counting_inventory_tool(Arc::new(AtomicUsize::new(0)))];
    run_loop(
        &provider,
        vec![ModelMessage::user("hi")],
        GenerationSettings::default(),
        &tools,
    )
    .await
    .unwrap();

    let request = provider.last_request().unwrap();
    let defs = request.tools.unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "get_device_inventory");
    assert_eq!(defs[0].parameters["required"], serde_json::json!(["token"]));
}

#[tokio::test]
async fn failing_tool_becomes_error_result_not_abort() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call("call_1", "get_device_config", serde_json::json!({}));
    provider.queue_response("Sorry, I could not fetch that config.");

    let tool: Arc<dyn Tool> = Arc::new(AgentTool::new(
        "get_device_config",
        "Retrieve device config",
        AgentToolParameters::object()
            .string("token", "auth token", true)
            .string("device_id", "device id", true)
            .build(),
        |args| async move {
            // Arguments are missing, so this fails before doing anything.
            args.get_str("token")?;
            Ok(serde_json::Value::Null)
        },
    ));

    let outcome = run_loop(
        &provider,
        vec![ModelMessage::user("get the config")],
        GenerationSettings::default(),
        &[tool],
    )
    .await
    .unwrap();

    let results = outcome.messages[2].tool_results();
    assert!(results[0].is_error);
    assert!(results[0].result["error"]
        .as_str()
        .unwrap()
        .contains("token"));
    assert_eq!(outcome.text, "Sorry, I could not fetch that config.");
}

#[tokio::test]
async fn unknown_tool_is_reported_to_the_model() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call("call_1", "reboot_device", serde_json::json!({}));
    provider.queue_response("That tool does not exist.");

    let outcome = run_loop(
        &provider,
        vec![ModelMessage::user("reboot it")],
        GenerationSettings::default(),
        &[counting_inventory_tool(Arc::new(AtomicUsize::new(0)))],
    )
    .await
    .unwrap();

    let results = outcome.messages[2].tool_results();
    assert!(results[0].is_error);
    assert!(results[0].result["error"]
        .as_str()
        .unwrap()
        .contains("reboot_device"));
}

#[tokio::test]
async fn endless_tool_requests_hit_the_loop_limit() {
    let provider = AlwaysToolProvider;
    let tools = vec![counting_inventory_tool(Arc::new(AtomicUsize::new(0)))];

    let err = run_loop(
        &provider,
        vec![ModelMessage::user("loop forever")],
        GenerationSettings::default(),
        &tools,
    )
    .await
    .unwrap_err();

    match err {
        AgentError::LoopLimitExceeded { limit } => assert_eq!(limit, MAX_TOOL_ITERATIONS),
        other => panic!("expected LoopLimitExceeded, got {other}"),
    }
}

#[tokio::test]
async fn usage_accumulates_across_iterations() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call(
        "call_1",
        "get_device_inventory",
        serde_json::json!({"token": "abc"}),
    );
    provider.queue_response("done");

    let tools = vec![counting_inventory_tool(Arc::new(AtomicUsize::new(0)))];
    let outcome = run_loop(
        &provider,
        vec![ModelMessage::user("list devices")],
        GenerationSettings::default(),
        &tools,
    )
    .await
    .unwrap();

    // 15 tokens from the tool-call response, 30 from the final answer.
    assert_eq!(outcome.usage.total_tokens, 45);
}

#[tokio::test]
async fn agent_transcript_is_append_only_and_ordered() {
    let provider = MockProvider::new("test-model");
    provider.queue_response("first answer");
    provider.queue_response("second answer");

    let mut agent = ChatAgent::new(Box::new(provider), vec![]);
    agent.run_turn("s1", "first question").await.unwrap();
    agent.run_turn("s1", "second question").await.unwrap();

    let transcript = agent.transcript("s1").unwrap();
    let texts: Vec<String> = transcript.messages().iter().map(|m| m.text()).collect();
    assert_eq!(
        texts,
        vec![
            "first question",
            "first answer",
            "second question",
            "second answer"
        ]
    );
}

#[tokio::test]
async fn agent_sessions_do_not_interleave() {
    let provider = MockProvider::new("test-model");
    provider.queue_response("answer for a");
    provider.queue_response("answer for b");

    let mut agent = ChatAgent::new(Box::new(provider), vec![]);
    agent.run_turn("a", "question a").await.unwrap();
    agent.run_turn("b", "question b").await.unwrap();

    assert_eq!(agent.transcript("a").unwrap().len(), 2);
    assert_eq!(agent.transcript("b").unwrap().len(), 2);
    assert_eq!(
        agent.transcript("b").unwrap().messages()[0].text(),
        "question b"
    );
}

#[tokio::test]
async fn agent_records_tool_traffic_in_the_transcript() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call(
        "call_1",
        "get_device_inventory",
        serde_json::json!({"token": "abc"}),
    );
    provider.queue_response("one device found");

    let tools = vec![counting_inventory_tool(Arc::new(AtomicUsize::new(0)))];
    let mut agent = ChatAgent::new(Box::new(provider), tools);
    let answer = agent.run_turn("s1", "list devices").await.unwrap();

    assert_eq!(answer, "one device found");
    let transcript = agent.transcript("s1").unwrap();
    // user, assistant(tool call), tool result, assistant(final).
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript.messages()[1].tool_calls().len(), 1);
    assert_eq!(
        transcript.messages()[2].tool_results()[0].tool_call_id,
        "call_1"
    );
}
