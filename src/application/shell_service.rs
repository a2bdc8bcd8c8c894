// Shell service - Use cases for opening a session and dispatching events
use crate::application::session_repository::SessionRepository;
use crate::domain::entry::DashboardEntry;
use crate::domain::error::ShellError;
use crate::domain::layout::Layout;
use crate::domain::profile::ShellProfile;
use crate::domain::shell_state::{reduce, ShellEvent, ShellState, ShellStateView};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A failed dispatch, carrying the session id when one was resolved so the
/// caller can still hand a freshly created session back to the client.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct DispatchError {
    pub session: Option<Uuid>,
    pub source: ServiceError,
}

/// A resolved session: its id, current state, and whether it was just created.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: Uuid,
    pub state: ShellState,
    pub created: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellSnapshot {
    pub state: ShellStateView,
    pub layout: Layout,
    pub active_entry: DashboardEntry,
}

impl ShellSnapshot {
    pub fn of(state: &ShellState) -> Self {
        Self {
            state: state.view(),
            layout: Layout::derive(state),
            active_entry: state.active_entry().clone(),
        }
    }
}

#[derive(Clone)]
pub struct ShellService {
    profile: Arc<ShellProfile>,
    repository: Arc<dyn SessionRepository>,
}

impl ShellService {
    pub fn new(profile: Arc<ShellProfile>, repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            profile,
            repository,
        }
    }

    pub fn profile(&self) -> &ShellProfile {
        &self.profile
    }

    /// Resolve the caller's session, creating a fresh one when the id is
    /// missing or no longer known.
    pub async fn open(&self, id: Option<Uuid>) -> Result<SessionHandle, ServiceError> {
        if let Some(id) = id {
            if let Some(state) = self.repository.load(id).await? {
                return Ok(SessionHandle {
                    id,
                    state,
                    created: false,
                });
            }
            tracing::debug!(session = %id, "unknown session, starting a new one");
        }

        let id = Uuid::new_v4();
        let state = ShellState::new(&self.profile)?;
        self.repository.save(id, state.clone()).await?;
        tracing::info!(session = %id, "session created");

        Ok(SessionHandle {
            id,
            state,
            created: true,
        })
    }

    /// Apply an event to the caller's session. A rejected event leaves the
    /// stored state unchanged; the session is still created if it was new.
    pub async fn dispatch(
        &self,
        id: Option<Uuid>,
        event: ShellEvent,
    ) -> Result<SessionHandle, DispatchError> {
        let handle = self.open(id).await.map_err(|source| DispatchError {
            session: None,
            source,
        })?;

        let features = self.profile.features;
        let session = handle.id;
        let storage_error = move |e: anyhow::Error| DispatchError {
            session: Some(session),
            source: ServiceError::Storage(e),
        };

        let outcome = self
            .repository
            .update(
                handle.id,
                Box::new(move |state: &ShellState| reduce(state, event, &features)),
            )
            .await
            .map_err(storage_error)?
            .ok_or_else(|| storage_error(anyhow::anyhow!("session {session} was dropped")))?;

        let next = match outcome {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(session = %handle.id, ?event, "event rejected: {}", e);
                return Err(DispatchError {
                    session: Some(handle.id),
                    source: e.into(),
                });
            }
        };
        tracing::debug!(session = %handle.id, ?event, "event applied");

        Ok(SessionHandle {
            state: next,
            ..handle
        })
    }

    pub async fn prune_idle(&self, max_idle: chrono::Duration) -> anyhow::Result<usize> {
        self.repository.prune_idle(max_idle).await
    }
}
