// HTTP request handlers
use crate::application::shell_service::{ServiceError, ShellSnapshot};
use crate::domain::entry::DashboardEntry;
use crate::domain::error::ShellError;
use crate::domain::shell_state::ShellEvent;
use crate::infrastructure::html_render::render_shell;
use crate::infrastructure::http_response::{
    html_page, json_error, session_from_headers, text_error, with_session,
};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Body of the `<form>` posts rendered into the page.
#[derive(Debug, Deserialize)]
pub struct EventForm {
    pub action: String,
    pub index: Option<usize>,
    pub width: Option<u32>,
}

impl EventForm {
    pub fn into_event(self) -> Result<ShellEvent, ShellError> {
        match self.action.as_str() {
            "select_entry" => Ok(ShellEvent::SelectEntry {
                index: self.index.ok_or(ShellError::MissingField {
                    action: "select_entry",
                    field: "index",
                })?,
            }),
            "toggle_sidebar" => Ok(ShellEvent::ToggleSidebar),
            "dismiss_sidebar" => Ok(ShellEvent::DismissSidebar),
            "toggle_fullscreen" => Ok(ShellEvent::ToggleFullscreen),
            "toggle_theme" => Ok(ShellEvent::ToggleTheme),
            "viewport_resized" => Ok(ShellEvent::ViewportResized {
                width: self.width.ok_or(ShellError::MissingField {
                    action: "viewport_resized",
                    field: "width",
                })?,
            }),
            other => Err(ShellError::UnknownAction(other.to_string())),
        }
    }
}

/// The cookie only needs setting when the resolved session differs from the request's.
fn is_new_session(requested: Option<Uuid>, resolved: Uuid) -> bool {
    requested != Some(resolved)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the shell for the caller's session
pub async fn shell_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let service = &state.shell_service;
    match service.open(session_from_headers(&headers)).await {
        Ok(handle) => {
            let body = render_shell(service.profile(), &handle.state, state.embed.as_ref());
            html_page(&handle, body)
        }
        Err(e) => text_error(&e),
    }
}

/// Apply a form-posted event, then send the browser back to the page
pub async fn post_event(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Form(form): Form<EventForm>,
) -> Response {
    let event = match form.into_event() {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("rejected form event: {}", e);
            return text_error(&ServiceError::Shell(e));
        }
    };

    let requested = session_from_headers(&headers);
    match state.shell_service.dispatch(requested, event).await {
        Ok(handle) => with_session(Redirect::to("/").into_response(), handle.id, handle.created),
        Err(e) => {
            let response = text_error(&e.source);
            match e.session {
                Some(id) => with_session(response, id, is_new_session(requested, id)),
                None => response,
            }
        }
    }
}

/// Current state, derived layout and active entry as JSON
pub async fn get_state(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match state.shell_service.open(session_from_headers(&headers)).await {
        Ok(handle) => with_session(
            Json(ShellSnapshot::of(&handle.state)).into_response(),
            handle.id,
            handle.created,
        ),
        Err(e) => json_error(&e),
    }
}

/// Apply a JSON event and return the resulting snapshot
pub async fn post_api_event(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(event): Json<ShellEvent>,
) -> Response {
    let requested = session_from_headers(&headers);
    match state.shell_service.dispatch(requested, event).await {
        Ok(handle) => with_session(
            Json(ShellSnapshot::of(&handle.state)).into_response(),
            handle.id,
            handle.created,
        ),
        Err(e) => {
            let response = json_error(&e.source);
            match e.session {
                Some(id) => with_session(response, id, is_new_session(requested, id)),
                None => response,
            }
        }
    }
}

/// List the configured entries
pub async fn list_entries(State(state): State<Arc<AppState>>) -> Json<Vec<DashboardEntry>> {
    Json(state.shell_service.profile().entries.to_vec())
}
