// In-memory session repository
use crate::application::session_repository::{SessionRepository, Transition};
use crate::domain::error::ShellError;
use crate::domain::shell_state::ShellState;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug)]
struct StoredSession {
    state: ShellState,
    last_seen: DateTime<Utc>,
}

/// Session states live for the lifetime of the process; nothing is written to disk.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, StoredSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn prune_idle_at(&self, now: DateTime<Utc>, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= max_idle);
        before - sessions.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn load(&self, id: Uuid) -> anyhow::Result<Option<ShellState>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(&id).map(|s| {
            s.last_seen = Utc::now();
            s.state.clone()
        }))
    }

    async fn save(&self, id: Uuid, state: ShellState) -> anyhow::Result<()> {
        self.sessions.write().await.insert(
            id,
            StoredSession {
                state,
                last_seen: Utc::now(),
            },
        );
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        transition: Transition,
    ) -> anyhow::Result<Option<Result<ShellState, ShellError>>> {
        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.get_mut(&id) else {
            return Ok(None);
        };
        session.last_seen = Utc::now();

        let outcome = transition(&session.state);
        if let Ok(next) = &outcome {
            session.state = next.clone();
        }
        Ok(Some(outcome))
    }

    async fn prune_idle(&self, max_idle: Duration) -> anyhow::Result<usize> {
        Ok(self.prune_idle_at(Utc::now(), max_idle).await)
    }
}
