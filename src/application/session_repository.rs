// Repository trait for per-session shell state
use crate::domain::error::ShellError;
use crate::domain::shell_state::ShellState;
use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;

/// A state transition run while the session is locked.
pub type Transition = Box<dyn FnOnce(&ShellState) -> Result<ShellState, ShellError> + Send>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetch the state for a session, refreshing its idle timer
    async fn load(&self, id: Uuid) -> anyhow::Result<Option<ShellState>>;

    /// Store (or replace) the state for a session
    async fn save(&self, id: Uuid, state: ShellState) -> anyhow::Result<()>;

    /// Run `transition` against the stored state and keep its result, all under
    /// one lock. `None` when the session is unknown; a rejected transition
    /// leaves the stored state as it was.
    async fn update(
        &self,
        id: Uuid,
        transition: Transition,
    ) -> anyhow::Result<Option<Result<ShellState, ShellError>>>;

    /// Drop sessions idle for longer than `max_idle`, returning how many were removed
    async fn prune_idle(&self, max_idle: Duration) -> anyhow::Result<usize>;
}
