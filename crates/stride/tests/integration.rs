//! End-to-end scenarios across the public surface.

use std::num::NonZeroU32;
use std::sync::Arc;

use stride::{
    AgentState, ChatStore, FALLBACK_REPLY, InMemoryChatStore, MemoryStepExecutor, Message, Role,
    SessionId, SqliteChatStore, StepConfig, StepExecutor, Tool, ToolRegistry,
};
use stride_testing::MockDecisionUnit;

fn session(id: &str) -> SessionId {
    SessionId::new(id).unwrap()
}

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

#[test]
fn builtin_registry_exposes_greet() {
    let registry = ToolRegistry::builtin();
    assert!(registry.get("greet").is_some());

    let resolved = registry.resolve(&["greet", "missing"]);
    assert_eq!(resolved.len(), 1);

    let result = resolved[0].call(r#"{"name":"Ana"}"#.to_string());
    assert!(result.is_success());
    assert_eq!(result.output(), "Hola, Ana!");
}

#[tokio::test]
async fn step_recovers_within_a_budget_of_three() {
    init_tracing();
    let unit = MockDecisionUnit::new()
        .then_fail("gateway timeout")
        .then_fail("gateway timeout")
        .then_reply(Message::assistant("recovered"));
    let executor = StepExecutor::new(&unit).with_max_attempts(NonZeroU32::new(3).unwrap());

    let mut state = AgentState::from_input("are you there?");
    let outcome = executor.execute(&mut state, &StepConfig::new()).await;

    assert_eq!(unit.call_count(), 3);
    assert_eq!(outcome.message.text(), Some("recovered"));
}

#[tokio::test]
async fn exhausted_budget_yields_the_fallback_reply() {
    init_tracing();
    let unit = MockDecisionUnit::new();
    let executor = StepExecutor::new(&unit);

    let mut state = AgentState::from_input("hello?");
    let outcome = executor.execute(&mut state, &StepConfig::new()).await;

    assert_eq!(unit.call_count(), 2);
    assert_eq!(outcome.message.role, Role::Assistant);
    assert_eq!(outcome.message.text(), Some(FALLBACK_REPLY));
    assert!(outcome.is_fallback());
}

#[test]
fn identical_appends_keep_one_record() {
    let store = InMemoryChatStore::new();
    let sid = session("s1");
    let message = Message::user("hello");

    store.append(&sid, &message).unwrap();
    store.append(&sid, &message).unwrap();

    assert_eq!(store.load(&sid).unwrap().len(), 1);
}

#[tokio::test]
async fn full_turn_against_a_durable_store() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteChatStore::open(dir.path().join("chat.db")).unwrap());
    let sid = session("user:42.chat-7");
    let config = StepConfig::new().with_session(sid.clone());

    let executor = MemoryStepExecutor::new(
        MockDecisionUnit::new().then_reply(Message::assistant("Hola, Ana!")),
        store.clone(),
    );
    let mut state = AgentState::from_input("greet Ana");
    let outcome = executor.execute(&mut state, &config).await.unwrap();
    assert_eq!(outcome.message.text(), Some("Hola, Ana!"));

    let executor = MemoryStepExecutor::new(
        MockDecisionUnit::new().then_reply(Message::assistant("again: Hola, Ana!")),
        store.clone(),
    );
    let mut state = AgentState::from_input("do it again");
    executor.execute(&mut state, &config).await.unwrap();

    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history[0], Message::user("greet Ana"));
    assert_eq!(state.history[1], Message::assistant("Hola, Ana!"));

    let log = store.load(&sid).unwrap();
    assert_eq!(log.len(), 4);
    assert_eq!(log[3].text(), Some("again: Hola, Ana!"));
}
