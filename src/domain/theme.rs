// Color palettes for the shell chrome
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub raised: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
}

pub const DARK: Palette = Palette {
    background: "#020617",
    surface: "#0f172a",
    raised: "#1e293b",
    border: "#1e293b",
    text: "#e2e8f0",
    muted: "#64748b",
    accent: "#6366f1",
};

pub const LIGHT: Palette = Palette {
    background: "#f8fafc",
    surface: "#ffffff",
    raised: "#e2e8f0",
    border: "#cbd5e1",
    text: "#0f172a",
    muted: "#475569",
    accent: "#4f46e5",
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode { &DARK } else { &LIGHT }
}
