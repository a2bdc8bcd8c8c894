// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod embed;
pub mod html_render;
pub mod http_response;
pub mod memory_store;
