// Application layer - Use cases over the shell domain
pub mod session_repository;
pub mod shell_service;
