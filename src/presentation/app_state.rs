// Application state for HTTP handlers
use crate::application::shell_service::ShellService;
use crate::infrastructure::embed::EmbedFrame;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub shell_service: ShellService,
    pub embed: Arc<dyn EmbedFrame>,
}
