//! Process-local chat store for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use stride_core::error::StoreError;
use stride_core::message::Message;
use stride_core::session::SessionId;

use crate::store::{ChatStore, dedup_key, deserialize_payload, serialize_payload};

/// One persisted record: dedup key plus serialized payload.
struct Record {
    key: String,
    payload: String,
}

/// In-memory chat store.
///
/// The whole map sits behind one mutex, so the check-and-insert performed by
/// `append` is atomic and concurrent identical writes cannot both land.
pub struct InMemoryChatStore {
    sessions: Mutex<HashMap<String, Vec<Record>>>,
}

impl Default for InMemoryChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<Record>>>, StoreError> {
        self.sessions.lock().map_err(|err| StoreError::Connection {
            reason: format!("store mutex poisoned: {err}"),
        })
    }
}

impl ChatStore for InMemoryChatStore {
    fn append(&self, session: &SessionId, message: &Message) -> Result<(), StoreError> {
        if !message.is_conversational() {
            return Ok(());
        }

        let payload = serialize_payload(session, message)?;
        let key = dedup_key(&payload);

        let mut sessions = self.lock()?;
        let records = sessions.entry(session.as_str().to_string()).or_default();
        if records.iter().any(|record| record.key == key) {
            return Ok(());
        }
        records.push(Record { key, payload });
        Ok(())
    }

    fn load(&self, session: &SessionId) -> Result<Vec<Message>, StoreError> {
        let sessions = self.lock()?;
        sessions
            .get(session.as_str())
            .map(|records| {
                records
                    .iter()
                    .map(|record| deserialize_payload(session, &record.payload))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn clear(&self, session: &SessionId) -> Result<(), StoreError> {
        let mut sessions = self.lock()?;
        sessions.remove(session.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::tool::ToolCall;

    fn sid(id: &str) -> SessionId {
        SessionId::new(id).unwrap()
    }

    #[test]
    fn append_then_load_preserves_order() {
        let store = InMemoryChatStore::new();
        let session = sid("s1");

        store.append(&session, &Message::user("one")).unwrap();
        store.append(&session, &Message::assistant("two")).unwrap();
        store.append(&session, &Message::user("three")).unwrap();

        let loaded = store.load(&session).unwrap();
        let texts: Vec<&str> = loaded.iter().filter_map(|m| m.text()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn duplicate_append_is_a_silent_no_op() {
        let store = InMemoryChatStore::new();
        let session = sid("s1");
        let message = Message::assistant("hello");

        store.append(&session, &message).unwrap();
        store.append(&session, &message).unwrap();

        assert_eq!(store.load(&session).unwrap().len(), 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = InMemoryChatStore::new();
        store.append(&sid("a"), &Message::user("for a")).unwrap();
        store.append(&sid("b"), &Message::user("for b")).unwrap();

        let a = store.load(&sid("a")).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].text(), Some("for a"));

        let b = store.load(&sid("b")).unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].text(), Some("for b"));
    }

    #[test]
    fn unknown_session_loads_empty() {
        let store = InMemoryChatStore::new();
        assert!(store.load(&sid("nobody")).unwrap().is_empty());
    }

    #[test]
    fn clear_truncates_only_the_given_session() {
        let store = InMemoryChatStore::new();
        store.append(&sid("a"), &Message::user("keep me?")).unwrap();
        store.append(&sid("b"), &Message::user("survivor")).unwrap();

        store.clear(&sid("a")).unwrap();

        assert!(store.load(&sid("a")).unwrap().is_empty());
        assert_eq!(store.load(&sid("b")).unwrap().len(), 1);
    }

    #[test]
    fn control_plane_messages_are_filtered() {
        let store = InMemoryChatStore::new();
        let session = sid("s1");

        let request = Message::assistant("")
            .with_tool_calls(vec![ToolCall::new("greet", "{\"name\":\"Ana\"}").unwrap()]);
        let result = Message::tool("Hola, Ana!", "call-1");

        store.append(&session, &request).unwrap();
        store.append(&session, &result).unwrap();
        store.append(&session, &Message::assistant("Hola!")).unwrap();

        let loaded = store.load(&session).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text(), Some("Hola!"));
    }
}
