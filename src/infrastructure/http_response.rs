// HTTP response utilities - Session cookie, HTML pages, JSON errors
use crate::application::shell_service::{ServiceError, SessionHandle};
use crate::domain::error::ShellError;
use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "shell_session";

/// Read the session id from the `Cookie` header, ignoring malformed values
pub fn session_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: Uuid) -> HeaderValue {
    // A UUID is always a valid header value.
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Attach `Set-Cookie` when the session was created during this request
pub fn with_session(mut response: Response, id: Uuid, created: bool) -> Response {
    if created {
        response
            .headers_mut()
            .append(header::SET_COOKIE, session_cookie(id));
    }
    response
}

pub fn html_page(handle: &SessionHandle, body: String) -> Response {
    let response = (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Html(body),
    )
        .into_response();
    with_session(response, handle.id, handle.created)
}

pub fn error_status(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Shell(ShellError::IndexOutOfRange { .. }) => StatusCode::NOT_FOUND,
        ServiceError::Shell(ShellError::FeatureDisabled(_)) => StatusCode::CONFLICT,
        ServiceError::Shell(ShellError::UnknownAction(_) | ShellError::MissingField { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ServiceError::Shell(ShellError::InvalidConfig(_)) | ServiceError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn json_error(error: &ServiceError) -> Response {
    let status = error_status(error);
    if status.is_server_error() {
        tracing::error!("request failed: {}", error);
    }
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub fn text_error(error: &ServiceError) -> Response {
    let status = error_status(error);
    if status.is_server_error() {
        tracing::error!("request failed: {}", error);
    }
    (status, error.to_string()).into_response()
}
