// Server-side rendering of the shell page
use crate::domain::entry::DashboardEntry;
use crate::domain::layout::{Layout, LayoutMode, SidebarPresentation, ToggleGlyph};
use crate::domain::profile::ShellProfile;
use crate::domain::shell_state::ShellState;
use crate::domain::theme::{palette, Palette};
use crate::infrastructure::embed::EmbedFrame;
use std::fmt::Write;

const STYLESHEET: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { display: flex; height: 100vh; overflow: hidden; font-family: system-ui, sans-serif;
  background: var(--background); color: var(--text); }
form { display: contents; }
button { font: inherit; color: inherit; background: none; border: 0; cursor: pointer; }
.overlay { position: fixed; inset: 0; z-index: 20; background: rgba(0,0,0,.6); width: 100%; }
.sidebar { display: flex; flex-direction: column; z-index: 30; background: var(--surface);
  border-right: 1px solid var(--border); transition: width .3s, transform .3s; }
.sidebar-full { width: 18rem; }
.sidebar-rail { width: 5rem; }
.sidebar-off-canvas { position: fixed; inset: 0 auto 0 0; width: 18rem;
  transform: translateX(-100%); }
.mode-mobile_open .sidebar { position: fixed; inset: 0 auto 0 0; }
.brand { height: 4rem; display: flex; align-items: center; justify-content: space-between;
  padding: 0 1.5rem; border-bottom: 1px solid var(--border); }
.brand-badge { width: 2rem; height: 2rem; border-radius: .5rem; background: var(--accent);
  display: inline-flex; align-items: center; justify-content: center;
  font-weight: 700; color: #fff; }
.brand-name { font-weight: 700; letter-spacing: .05em; }
.brand-dept { font-size: .625rem; text-transform: uppercase; color: var(--muted); }
.nav { flex: 1; padding: 1.5rem .75rem; overflow-y: auto; }
.nav-item { position: relative; width: 100%; display: flex; align-items: center; gap: 1rem;
  padding: .75rem; margin-bottom: .5rem; border-radius: .75rem;
  color: var(--muted); text-align: left; }
.nav-item:hover { background: var(--raised); }
.nav-item.active { background: var(--raised); color: var(--text); }
.nav-item.active::before { content: ""; position: absolute; left: 0; top: 25%; height: 50%;
  width: 4px; border-radius: 0 4px 4px 0; background: var(--accent); }
.nav-icon { padding: .5rem; border-radius: .5rem; background: var(--raised); }
.nav-title { display: block; font-size: .875rem; font-weight: 500; }
.nav-subtitle { display: block; font-size: .625rem; color: var(--muted); }
.tooltip { display: none; position: absolute; left: 100%; margin-left: 1rem; padding: .25rem .5rem;
  white-space: nowrap; font-size: .75rem; background: var(--raised);
  border-radius: .25rem; z-index: 50; }
.nav-item:hover .tooltip { display: block; }
.profile { padding: 1rem; border-top: 1px solid var(--border); display: flex;
  gap: .75rem; align-items: center; }
.avatar { width: 2rem; height: 2rem; border-radius: 50%; display: inline-flex; align-items: center;
  justify-content: center; font-size: .75rem; font-weight: 700; color: #fff;
  background: linear-gradient(45deg, #6366f1, #a855f7); }
main { flex: 1; display: flex; flex-direction: column; min-width: 0; position: relative; }
.topbar { height: 4rem; display: flex; align-items: center; justify-content: space-between;
  padding: 0 2rem; border-bottom: 1px solid var(--border); }
.topbar-left, .topbar-right { display: flex; align-items: center; gap: 1rem; }
.topbar h2 { font-size: 1.125rem; }
.refresh-note { font-size: .75rem; color: var(--muted); }
.bell { position: relative; padding: .5rem; color: var(--muted); }
.unread-dot { position: absolute; top: .5rem; right: .5rem; width: .5rem; height: .5rem;
  border-radius: 50%; background: #ef4444; border: 2px solid var(--background); }
.live { font-size: .75rem; color: #10b981; padding: .375rem .75rem;
  border: 1px solid var(--border); border-radius: 999px; }
.icon-button { padding: .5rem; border-radius: .5rem; color: var(--muted); }
.icon-button:hover { background: var(--raised); color: var(--text); }
.exit-fullscreen { position: fixed; top: 1rem; right: 1rem; z-index: 50; padding: .75rem;
  border-radius: 50%; background: var(--raised); }
.content { flex: 1; display: flex; flex-direction: column; overflow: hidden; padding: 1.5rem; }
.content.flush { padding: 0; }
.frame-box { flex: 1; position: relative; overflow: hidden; background: var(--surface);
  border: 1px solid var(--border); border-radius: 1rem; }
.content.flush .frame-box { border: 0; border-radius: 0; }
.loading { position: absolute; inset: 0; display: flex; align-items: center;
  justify-content: center;
  color: var(--muted); font-size: .875rem; z-index: 0; }
.report-frame { position: relative; z-index: 10; width: 100%; height: 100%; }
.footer { margin-top: 1rem; display: flex; justify-content: space-between; font-size: .75rem;
  color: var(--muted); padding: 0 .5rem; }
"#;

const VIEWPORT_SCRIPT: &str = r#"
(function () {
  var breakpoint = __BREAKPOINT__, mobile = __MOBILE__;
  function report() {
    var width = window.innerWidth;
    if ((width < breakpoint) === mobile) return;
    mobile = !mobile;
    fetch("/events", {
      method: "POST",
      credentials: "same-origin",
      headers: { "Content-Type": "application/x-www-form-urlencoded" },
      body: "action=viewport_resized&width=" + width
    }).then(function () { location.reload(); });
  }
  report();
  window.addEventListener("resize", report);
})();
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A one-button form posting an event to `/events`.
fn action_button(
    action: &str,
    index: Option<usize>,
    class: &str,
    title: &str,
    inner: &str,
) -> String {
    let index_field = index
        .map(|i| format!(r#"<input type="hidden" name="index" value="{i}">"#))
        .unwrap_or_default();
    format!(
        concat!(
            r#"<form method="post" action="/events">"#,
            r#"<input type="hidden" name="action" value="{action}">{index_field}"#,
            r#"<button type="submit" class="{class}" title="{}">{inner}</button></form>"#,
        ),
        escape(title),
        action = action,
        index_field = index_field,
        class = class,
        inner = inner,
    )
}

fn mode_class(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::Normal => "mode-normal",
        LayoutMode::DesktopCollapsed => "mode-desktop_collapsed",
        LayoutMode::MobileOpen => "mode-mobile_open",
        LayoutMode::MobileCollapsed => "mode-mobile_collapsed",
        LayoutMode::Fullscreen => "mode-fullscreen",
    }
}

fn theme_vars(p: &Palette) -> String {
    format!(
        concat!(
            ":root {{ --background: {}; --surface: {}; --raised: {}; --border: {}; ",
            "--text: {}; --muted: {}; --accent: {}; }}",
        ),
        p.background, p.surface, p.raised, p.border, p.text, p.muted, p.accent
    )
}

fn render_nav_item(index: usize, entry: &DashboardEntry, active: bool, layout: &Layout) -> String {
    let mut inner = String::new();

    let icon_style = match (&entry.accent, active) {
        (Some(accent), true) => format!(
            r#" style="color: {}; background: {};""#,
            escape(&accent.text),
            escape(&accent.background)
        ),
        _ => String::new(),
    };
    let _ = write!(
        inner,
        r#"<span class="nav-icon" data-icon="{}"{icon_style}>{}</span>"#,
        entry.icon.name(),
        entry.icon.glyph()
    );

    if layout.show_labels {
        let _ = write!(
            inner,
            r#"<span><span class="nav-title">{}</span>"#,
            escape(&entry.title)
        );
        if let Some(subtitle) = &entry.subtitle {
            let _ = write!(inner, r#"<span class="nav-subtitle">{}</span>"#, escape(subtitle));
        }
        inner.push_str("</span>");
    }
    if layout.show_tooltips {
        let _ = write!(inner, r#"<span class="tooltip">{}</span>"#, escape(&entry.title));
    }

    let class = if active { "nav-item active" } else { "nav-item" };
    action_button("select_entry", Some(index), class, &entry.title, &inner)
}

fn render_sidebar(out: &mut String, profile: &ShellProfile, state: &ShellState, layout: &Layout) {
    let presentation = match layout.sidebar {
        SidebarPresentation::Hidden => return,
        SidebarPresentation::Full => "sidebar-full",
        SidebarPresentation::Rail => "sidebar-rail",
        SidebarPresentation::OffCanvas => "sidebar-off-canvas",
    };
    let branding = &profile.branding;

    let _ = write!(out, r#"<aside class="sidebar {presentation}"><div class="brand"><div>"#);
    let _ = write!(out, r#"<span class="brand-badge">{}</span>"#, escape(&branding.badge));
    if layout.show_labels {
        let _ = write!(
            out,
            r#" <span class="brand-name">{}</span> <span class="brand-dept">{}</span>"#,
            escape(&branding.organization),
            escape(&branding.department)
        );
    }
    out.push_str("</div>");
    if state.is_mobile() {
        out.push_str(&action_button(
            "toggle_sidebar",
            None,
            "icon-button",
            "Close menu",
            "\u{2715}",
        ));
    }
    out.push_str(r#"</div><nav class="nav">"#);

    for (index, entry) in state.entries().iter().enumerate() {
        out.push_str(&render_nav_item(
            index,
            entry,
            index == state.selected_index(),
            layout,
        ));
    }

    let _ = write!(
        out,
        r#"</nav><div class="profile"><span class="avatar">{}</span>"#,
        escape(&branding.user_initials)
    );
    if layout.show_labels {
        let _ = write!(
            out,
            r#"<span><span class="nav-title">{}</span><span class="nav-subtitle">View Profile</span></span>"#,
            escape(&branding.user_name)
        );
    }
    out.push_str("</div></aside>");
}

fn render_header(out: &mut String, profile: &ShellProfile, state: &ShellState, layout: &Layout) {
    let glyph = match layout.toggle_glyph {
        ToggleGlyph::Menu => "\u{2630}",
        ToggleGlyph::Chevron => "\u{203A}",
    };

    out.push_str(r#"<header class="topbar"><div class="topbar-left">"#);
    out.push_str(&action_button(
        "toggle_sidebar",
        None,
        "icon-button",
        "Toggle sidebar",
        glyph,
    ));
    let _ = write!(
        out,
        concat!(
            r#"<div><h2>{}</h2><span class="refresh-note">{}</span></div></div>"#,
            r#"<div class="topbar-right"><span class="bell" title="Notifications">"#,
            r#"{}<span class="unread-dot"></span></span><span class="live">Live</span>"#,
        ),
        escape(&state.active_entry().title),
        escape(&profile.branding.refresh_note),
        "\u{1F514}"
    );
    if profile.features.theme_toggle {
        let (label, glyph) = if state.dark_mode() {
            ("Switch to light theme", "\u{2600}")
        } else {
            ("Switch to dark theme", "\u{263E}")
        };
        out.push_str(&action_button("toggle_theme", None, "icon-button", label, glyph));
    }
    out.push_str(&action_button(
        "toggle_fullscreen",
        None,
        "icon-button",
        "Enter Fullscreen",
        "\u{26F6}",
    ));
    out.push_str("</div></header>");
}

/// Render the whole page for one session.
pub fn render_shell(profile: &ShellProfile, state: &ShellState, embed: &dyn EmbedFrame) -> String {
    let layout = Layout::derive(state);
    let active = state.active_entry();
    let branding = &profile.branding;
    let mut out = String::with_capacity(16 * 1024);

    let _ = write!(
        out,
        concat!(
            r#"<!doctype html><html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            r#"<title>{} - {}</title><style>{}{}</style></head><body class="{}">"#,
        ),
        escape(&active.title),
        escape(&branding.organization),
        theme_vars(palette(state.dark_mode())),
        STYLESHEET,
        mode_class(layout.mode)
    );

    if layout.show_overlay {
        out.push_str(&action_button("dismiss_sidebar", None, "overlay", "Close menu", ""));
    }

    render_sidebar(&mut out, profile, state, &layout);

    out.push_str("<main>");
    if layout.show_header {
        render_header(&mut out, profile, state, &layout);
    }
    if layout.show_exit_fullscreen {
        out.push_str(&action_button(
            "toggle_fullscreen",
            None,
            "exit-fullscreen",
            "Exit Fullscreen",
            "\u{2716}",
        ));
    }

    let content_class = if layout.flush_content { "content flush" } else { "content" };
    // The placeholder stays underneath the frame; there is no load signal to dismiss it.
    let _ = write!(
        out,
        r#"<div class="{content_class}"><div class="frame-box"><div class="loading">{}</div>{}</div>"#,
        escape(&branding.loading_text),
        embed.render(&active.url, &active.title)
    );
    if layout.show_footer {
        let _ = write!(
            out,
            r#"<div class="footer"><span>{}</span><span>{}</span></div>"#,
            escape(&branding.footer_left),
            escape(&branding.footer_right)
        );
    }
    out.push_str("</div></main>");

    let script = VIEWPORT_SCRIPT
        .replace("__BREAKPOINT__", &profile.features.breakpoint.to_string())
        .replace("__MOBILE__", if state.is_mobile() { "true" } else { "false" });
    let _ = write!(out, "<script>{script}</script></body></html>");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::Icon;
    use crate::domain::profile::{Branding, ShellFeatures};
    use crate::domain::shell_state::{reduce, ShellEvent};

    struct RecordingEmbed;

    impl EmbedFrame for RecordingEmbed {
        fn render(&self, url: &str, title: &str) -> String {
            format!("<embed-stub url=\"{url}\" title=\"{title}\">")
        }
    }

    fn profile(theme_toggle: bool) -> ShellProfile {
        let entries = vec![
            DashboardEntry::new(
                "Task Management",
                Icon::ClipboardList,
                "https://reports.example/tasks",
            )
            .with_subtitle("Track deliverables and timelines")
            .with_accent("#34d399", "rgba(52, 211, 153, 0.1)"),
            DashboardEntry::new("Department MIS", Icon::BarChart, "https://reports.example/mis"),
        ];
        let features = ShellFeatures {
            theme_toggle,
            ..ShellFeatures::default()
        };
        ShellProfile::new(entries, features, Branding::default()).unwrap()
    }

    fn render_after(profile: &ShellProfile, events: &[ShellEvent]) -> String {
        let mut state = ShellState::new(profile).unwrap();
        for event in events {
            state = reduce(&state, *event, &profile.features).unwrap();
        }
        render_shell(profile, &state, &RecordingEmbed)
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_normal_layout_renders_chrome_and_active_embed() {
        let p = profile(false);
        let html = render_after(&p, &[ShellEvent::SelectEntry { index: 1 }]);

        assert!(html.contains(
            r#"<embed-stub url="https://reports.example/mis" title="Department MIS">"#
        ));
        assert!(html.contains(r#"class="topbar""#));
        assert!(html.contains(r#"class="footer""#));
        assert!(html.contains(r#"class="sidebar sidebar-full""#));
        assert!(html.contains("Track deliverables and timelines"));
        assert!(html.contains("Loading report..."));
        assert!(!html.contains(r#"class="exit-fullscreen""#));
        assert!(!html.contains("toggle_theme"));
    }

    #[test]
    fn test_fullscreen_hides_header_footer_and_sidebar() {
        let p = profile(false);
        let html = render_after(&p, &[ShellEvent::ToggleFullscreen]);

        assert!(!html.contains(r#"class="topbar""#));
        assert!(!html.contains(r#"class="footer""#));
        assert!(!html.contains("<aside"));
        assert!(html.contains(r#"class="exit-fullscreen""#));
        assert!(html.contains(r#"class="content flush""#));
    }

    #[test]
    fn test_collapsed_rail_shows_tooltips_not_labels() {
        let p = profile(false);
        let html = render_after(&p, &[ShellEvent::ToggleSidebar]);

        assert!(html.contains(r#"class="sidebar sidebar-rail""#));
        assert!(html.contains(r#"<span class="tooltip">Task Management</span>"#));
        assert!(!html.contains("Track deliverables and timelines"));
    }

    #[test]
    fn test_active_accent_applied_only_to_selected_entry() {
        let p = profile(false);
        let html = render_after(&p, &[]);
        assert!(html.contains("color: #34d399;"));

        let html = render_after(&p, &[ShellEvent::SelectEntry { index: 1 }]);
        assert!(!html.contains("color: #34d399;"));
    }

    #[test]
    fn test_mobile_open_renders_overlay() {
        let p = profile(false);
        let html = render_after(
            &p,
            &[
                ShellEvent::ViewportResized { width: 640 },
                ShellEvent::ToggleSidebar,
            ],
        );
        assert!(html.contains(r#"value="dismiss_sidebar""#));
        assert!(html.contains(r#"<body class="mode-mobile_open">"#));
        assert!(html.contains("mobile = true"));
    }

    #[test]
    fn test_drawer_close_button_follows_configured_breakpoint() {
        let mut p = profile(false);
        p.features.breakpoint = 1280;
        let html = render_after(
            &p,
            &[
                ShellEvent::ViewportResized { width: 1100 },
                ShellEvent::ToggleSidebar,
            ],
        );

        assert!(html.contains(r#"class="icon-button" title="Close menu""#));
        assert!(!html.contains("@media (min-width: 1024px)"));
        assert!(html.contains("var breakpoint = 1280"));
    }

    #[test]
    fn test_header_shows_notification_bell_beside_live_badge() {
        let p = profile(false);
        let html = render_after(&p, &[]);
        assert!(html.contains(r#"<span class="bell" title="Notifications">"#));
        assert!(html.contains(
            r#"<span class="unread-dot"></span></span><span class="live">Live</span>"#
        ));

        let html = render_after(&p, &[ShellEvent::ToggleFullscreen]);
        assert!(!html.contains(r#"<span class="bell""#));
    }

    #[test]
    fn test_theme_toggle_and_palette() {
        let p = profile(true);
        let html = render_after(&p, &[]);
        assert!(html.contains(r#"value="toggle_theme""#));
        assert!(html.contains("--background: #020617"));

        let html = render_after(&p, &[ShellEvent::ToggleTheme]);
        assert!(html.contains("--background: #f8fafc"));
    }
}
