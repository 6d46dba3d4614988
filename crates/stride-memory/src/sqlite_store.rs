//! Durable SQLite chat store with WAL mode and atomic dedup inserts.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, params};

use stride_core::error::StoreError;
use stride_core::message::Message;
use stride_core::session::SessionId;

use crate::store::{ChatStore, dedup_key, deserialize_payload, serialize_payload};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS chat_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id TEXT NOT NULL,
        dedup_key TEXT NOT NULL,
        payload TEXT NOT NULL,
        created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
        UNIQUE(session_id, dedup_key)
    );

    CREATE INDEX IF NOT EXISTS idx_chat_log_session ON chat_log(session_id);
"#;

/// SQLite-backed chat store.
///
/// Deduplication rides on the `UNIQUE(session_id, dedup_key)` constraint:
/// `append` issues a single `INSERT OR IGNORE`, so the check and the insert
/// are one atomic statement and concurrent identical writes cannot both
/// land. Record order follows the rowid, which is the write order.
pub struct SqliteChatStore {
    conn: Mutex<Connection>,
}

impl SqliteChatStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref()).map_err(|err| StoreError::Connection {
            reason: err.to_string(),
        })?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;
             PRAGMA foreign_keys = ON;",
        )
        .map_err(|err| StoreError::Connection {
            reason: format!("failed to configure SQLite: {err}"),
        })?;

        conn.execute_batch(SCHEMA)
            .map_err(|err| StoreError::Connection {
                reason: format!("failed to create schema: {err}"),
            })?;

        tracing::debug!(path = %path.as_ref().display(), "chat store opened");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|err| StoreError::Connection {
            reason: format!("connection mutex poisoned: {err}"),
        })
    }
}

impl ChatStore for SqliteChatStore {
    fn append(&self, session: &SessionId, message: &Message) -> Result<(), StoreError> {
        if !message.is_conversational() {
            return Ok(());
        }

        let payload = serialize_payload(session, message)?;
        let key = dedup_key(&payload);

        let conn = self.lock()?;
        // INSERT OR IGNORE makes the dedup check-and-insert a single atomic
        // statement against the unique (session_id, dedup_key) index.
        conn.execute(
            "INSERT OR IGNORE INTO chat_log (session_id, dedup_key, payload) VALUES (?1, ?2, ?3)",
            params![session.as_str(), key, payload],
        )
        .map_err(|err| StoreError::WriteConflict {
            session: session.as_str().to_string(),
            details: err.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, session: &SessionId) -> Result<Vec<Message>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT payload FROM chat_log WHERE session_id = ?1 ORDER BY id")
            .map_err(|err| StoreError::Query {
                session: session.as_str().to_string(),
                details: err.to_string(),
            })?;

        let payloads: Result<Vec<String>, _> = stmt
            .query_map(params![session.as_str()], |row| row.get(0))
            .map_err(|err| StoreError::Query {
                session: session.as_str().to_string(),
                details: err.to_string(),
            })?
            .collect();

        let payloads = payloads.map_err(|err| StoreError::Query {
            session: session.as_str().to_string(),
            details: err.to_string(),
        })?;

        payloads
            .iter()
            .map(|payload| deserialize_payload(session, payload))
            .collect()
    }

    fn clear(&self, session: &SessionId) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "DELETE FROM chat_log WHERE session_id = ?1",
            params![session.as_str()],
        )
        .map_err(|err| StoreError::Query {
            session: session.as_str().to_string(),
            details: err.to_string(),
        })?;
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

    fn temp_store() -> (tempfile::TempDir, SqliteChatStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteChatStore::open(dir.path().join("chat.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn append_then_load_preserves_order() {
        let (_dir, store) = temp_store();
        let session = sid("s1");

        store.append(&session, &Message::user("one")).unwrap();
        store.append(&session, &Message::assistant("two")).unwrap();
        store.append(&session, &Message::user("three")).unwrap();

        let loaded = store.load(&session).unwrap();
        let texts: Vec<&str> = loaded.iter().filter_map(|m| m.text()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn duplicate_append_persists_one_record() {
        let (_dir, store) = temp_store();
        let session = sid("s1");
        let message = Message::assistant("hello");

        store.append(&session, &message).unwrap();
        store.append(&session, &message).unwrap();

        assert_eq!(store.load(&session).unwrap().len(), 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let (_dir, store) = temp_store();
        store.append(&sid("a"), &Message::user("for a")).unwrap();
        store.append(&sid("b"), &Message::user("for b")).unwrap();

        let a = store.load(&sid("a")).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].text(), Some("for a"));
        assert!(store.load(&sid("c")).unwrap().is_empty());
    }

    #[test]
    fn clear_truncates_only_the_given_session() {
        let (_dir, store) = temp_store();
        store.append(&sid("a"), &Message::user("gone")).unwrap();
        store.append(&sid("b"), &Message::user("kept")).unwrap();

        store.clear(&sid("a")).unwrap();

        assert!(store.load(&sid("a")).unwrap().is_empty());
        assert_eq!(store.load(&sid("b")).unwrap().len(), 1);
    }

    #[test]
    fn control_plane_messages_are_filtered() {
        let (_dir, store) = temp_store();
        let session = sid("s1");

        let request = Message::assistant("")
            .with_tool_calls(vec![ToolCall::new("greet", "{\"name\":\"Ana\"}").unwrap()]);
        store.append(&session, &request).unwrap();
        store
            .append(&session, &Message::tool("Hola, Ana!", "call-1"))
            .unwrap();
        store.append(&session, &Message::assistant("Hola!")).unwrap();

        let loaded = store.load(&session).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text(), Some("Hola!"));
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.db");
        let session = sid("s1");

        {
            let store = SqliteChatStore::open(&path).unwrap();
            store.append(&session, &Message::user("persisted")).unwrap();
        }

        let reopened = SqliteChatStore::open(&path).unwrap();
        let loaded = reopened.load(&session).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text(), Some("persisted"));
    }
}
