mod common;

use serde_json::json;

use common::{post, response_body, response_status, test_gateway};
use hippo_gateway::api::handler::route_request;
use hippo_gateway::core::models::{ChatTurn, Role};
use hippo_gateway::prompt::{SYSTEM_PROMPT, enforce_retention, ensure_history, initial_history};

#[test]
fn initial_history_is_just_the_system_instruction() {
    let history = initial_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role, Role::System);
    assert_eq!(history[0].content, SYSTEM_PROMPT);
}

#[test]
fn ensure_history_reinitializes_corrupted_state() {
    // Missing history starts over
    assert_eq!(ensure_history(None), initial_history());

    // Empty history starts over
    assert_eq!(ensure_history(Some(Vec::new())), initial_history());

    // A history whose first turn is not the system instruction starts over
    let corrupted = vec![ChatTurn::user("hello")];
    assert_eq!(ensure_history(Some(corrupted)), initial_history());

    // A valid history passes through untouched
    let valid = vec![ChatTurn::system(SYSTEM_PROMPT), ChatTurn::user("hi")];
    assert_eq!(ensure_history(Some(valid.clone())), valid);
}

#[test]
fn retention_keeps_system_turn_plus_recent_tail() {
    let mut history = initial_history();
    for i in 0..50 {
        history.push(ChatTurn::user(format!("user {i}")));
        history.push(ChatTurn::assistant(format!("assistant {i}")));
    }

    enforce_retention(&mut history, 30);

    // 1 system + 30 retained, never more
    assert_eq!(history.len(), 31);
    assert_eq!(history[0].role, Role::System);
    assert_eq!(history[0].content, SYSTEM_PROMPT);
    // The tail is the most recent turns
    assert_eq!(history.last().unwrap().content, "assistant 49");
}

#[test]
fn retention_is_a_noop_within_bounds() {
    let mut history = initial_history();
    history.push(ChatTurn::user("only message"));
    let before = history.clone();

    enforce_retention(&mut history, 30);
    assert_eq!(history, before);
}

#[tokio::test]
async fn first_message_sends_exactly_system_plus_user_turn() {
    let (gateway, completions, _) = test_gateway();

    let payload = post("/chat", &json!({ "message": "What services do you offer?" }));
    let response = route_request(&payload, &gateway).await;
    assert_eq!(response_status(&response), 200);

    let request = completions.last_request();
    assert_eq!(request.len(), 2);
    assert_eq!(request[0].role, Role::System);
    assert_eq!(request[0].content, SYSTEM_PROMPT);
    assert_eq!(request[1].role, Role::User);
    assert_eq!(request[1].content, "What services do you offer?");
}

#[tokio::test]
async fn long_conversation_never_exceeds_retention_bound() {
    let (gateway, completions, _) = test_gateway();

    // Establish the session, then keep talking well past the bound.
    let payload = post("/chat", &json!({ "message": "turn 0" }));
    let response = route_request(&payload, &gateway).await;
    let session_id = response_body(&response)["sessionId"]
        .as_str()
        .unwrap()
        .to_string();

    for i in 1..40 {
        let payload = post(
            "/chat",
            &json!({ "message": format!("turn {i}"), "sessionId": session_id }),
        );
        let response = route_request(&payload, &gateway).await;
        assert_eq!(response_status(&response), 200);
    }

    // The request the provider saw: stored history (bounded) plus the new
    // user turn, so at most 1 system + keep + 1.
    let request = completions.last_request();
    assert!(request.len() <= 32, "request had {} turns", request.len());
    assert_eq!(request[0].role, Role::System);

    // And the stored history is within the bound.
    let stored = gateway
        .store
        .get_history(&session_id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.len() <= 31, "stored history had {} turns", stored.len());
    assert_eq!(stored[0].role, Role::System);
    assert_eq!(stored[0].content, SYSTEM_PROMPT);
}
