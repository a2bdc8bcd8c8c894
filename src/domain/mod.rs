// Domain layer - Shell state, navigation and layout rules
pub mod entry;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod profile;
pub mod shell_state;
pub mod theme;
