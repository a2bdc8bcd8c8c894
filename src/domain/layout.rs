// Layout derivation - Pure function of the shell state
use super::shell_state::ShellState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Normal,
    DesktopCollapsed,
    MobileOpen,
    MobileCollapsed,
    Fullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarPresentation {
    /// Full width with labels.
    Full,
    /// Narrow icon-only rail.
    Rail,
    /// Off-canvas, slid out of view.
    OffCanvas,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleGlyph {
    Menu,
    Chevron,
}

/// Everything the renderer needs to know about chrome visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub mode: LayoutMode,
    pub sidebar: SidebarPresentation,
    pub show_header: bool,
    pub show_footer: bool,
    pub show_exit_fullscreen: bool,
    pub show_overlay: bool,
    pub show_labels: bool,
    pub show_tooltips: bool,
    pub flush_content: bool,
    pub toggle_glyph: ToggleGlyph,
}

impl LayoutMode {
    pub fn of(state: &ShellState) -> Self {
        match (state.fullscreen(), state.is_mobile(), state.sidebar_open()) {
            (true, _, _) => LayoutMode::Fullscreen,
            (false, true, true) => LayoutMode::MobileOpen,
            (false, true, false) => LayoutMode::MobileCollapsed,
            (false, false, true) => LayoutMode::Normal,
            (false, false, false) => LayoutMode::DesktopCollapsed,
        }
    }
}

impl Layout {
    pub fn derive(state: &ShellState) -> Self {
        let mode = LayoutMode::of(state);
        let sidebar = match mode {
            LayoutMode::Normal | LayoutMode::MobileOpen => SidebarPresentation::Full,
            LayoutMode::DesktopCollapsed => SidebarPresentation::Rail,
            LayoutMode::MobileCollapsed => SidebarPresentation::OffCanvas,
            LayoutMode::Fullscreen => SidebarPresentation::Hidden,
        };
        let fullscreen = mode == LayoutMode::Fullscreen;

        Self {
            mode,
            sidebar,
            show_header: !fullscreen,
            show_footer: !fullscreen,
            show_exit_fullscreen: fullscreen,
            show_overlay: mode == LayoutMode::MobileOpen,
            show_labels: sidebar == SidebarPresentation::Full,
            show_tooltips: sidebar == SidebarPresentation::Rail,
            flush_content: fullscreen,
            toggle_glyph: if state.sidebar_open() {
                ToggleGlyph::Menu
            } else {
                ToggleGlyph::Chevron
            },
        }
    }
}
