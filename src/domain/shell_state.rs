// Shell state and the reducer that drives it
use super::entry::DashboardEntry;
use super::error::ShellError;
use super::navigation::NavigationController;
use super::profile::{ShellFeatures, ShellProfile};
use serde::{Deserialize, Serialize};

/// Discrete UI events posted back by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    SelectEntry { index: usize },
    ToggleSidebar,
    /// Backdrop click while the mobile drawer is open.
    DismissSidebar,
    ToggleFullscreen,
    ToggleTheme,
    ViewportResized { width: u32 },
}

#[derive(Debug, Clone)]
pub struct ShellState {
    nav: NavigationController,
    sidebar_open: bool,
    fullscreen: bool,
    dark_mode: bool,
    is_mobile: bool,
}

/// Serializable copy of the mutable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShellStateView {
    pub selected_index: usize,
    pub sidebar_open: bool,
    pub fullscreen: bool,
    pub dark_mode: bool,
    pub is_mobile: bool,
}

impl ShellState {
    pub fn new(profile: &ShellProfile) -> Result<Self, ShellError> {
        Ok(Self {
            nav: NavigationController::new(profile.entries.clone())?,
            sidebar_open: true,
            fullscreen: false,
            dark_mode: profile.features.default_dark,
            is_mobile: false,
        })
    }

    pub fn active_entry(&self) -> &DashboardEntry {
        self.nav.active_entry()
    }

    pub fn entries(&self) -> &[DashboardEntry] {
        self.nav.entries()
    }

    pub fn selected_index(&self) -> usize {
        self.nav.selected_index()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn view(&self) -> ShellStateView {
        ShellStateView {
            selected_index: self.selected_index(),
            sidebar_open: self.sidebar_open,
            fullscreen: self.fullscreen,
            dark_mode: self.dark_mode,
            is_mobile: self.is_mobile,
        }
    }

    /// Apply one event in place. On error the state is left untouched.
    pub fn apply(&mut self, event: ShellEvent, features: &ShellFeatures) -> Result<(), ShellError> {
        match event {
            ShellEvent::SelectEntry { index } => {
                self.nav.select_entry(index)?;
                if self.is_mobile {
                    self.sidebar_open = false;
                }
            }
            ShellEvent::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
            }
            ShellEvent::DismissSidebar => {
                self.sidebar_open = false;
            }
            ShellEvent::ToggleFullscreen => {
                let entering = !self.fullscreen;
                self.fullscreen = entering;
                if entering && !self.is_mobile {
                    self.sidebar_open = false;
                }
                // The viewport policy is re-evaluated whenever fullscreen changes.
                self.apply_viewport_policy();
            }
            ShellEvent::ToggleTheme => {
                if !features.theme_toggle {
                    return Err(ShellError::FeatureDisabled("theme_toggle"));
                }
                self.dark_mode = !self.dark_mode;
            }
            ShellEvent::ViewportResized { width } => {
                let mobile = width < features.breakpoint;
                if mobile != self.is_mobile {
                    self.is_mobile = mobile;
                    self.apply_viewport_policy();
                }
            }
        }
        Ok(())
    }

    fn apply_viewport_policy(&mut self) {
        if self.is_mobile {
            self.sidebar_open = false;
        } else if !self.fullscreen {
            self.sidebar_open = true;
        }
    }
}

/// Pure transition: returns the next state, leaving `state` as it was.
pub fn reduce(
    state: &ShellState,
    event: ShellEvent,
    features: &ShellFeatures,
) -> Result<ShellState, ShellError> {
    let mut next = state.clone();
    next.apply(event, features)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::Icon;
    use crate::domain::profile::Branding;

    fn profile(theme_toggle: bool) -> ShellProfile {
        let entries = ["A", "B", "C"]
            .iter()
            .map(|t| {
                DashboardEntry::new(
                    *t,
                    Icon::ClipboardList,
                    format!("https://reports.example/{t}"),
                )
            })
            .collect();
        let features = ShellFeatures {
            theme_toggle,
            ..ShellFeatures::default()
        };
        ShellProfile::new(entries, features, Branding::default()).unwrap()
    }

    fn step(state: &ShellState, event: ShellEvent, profile: &ShellProfile) -> ShellState {
        reduce(state, event, &profile.features).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        assert_eq!(
            s.view(),
            ShellStateView {
                selected_index: 0,
                sidebar_open: true,
                fullscreen: false,
                dark_mode: true,
                is_mobile: false,
            }
        );
    }

    #[test]
    fn test_select_entry_then_active_entry() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::SelectEntry { index: 2 }, &p);
        assert_eq!(s.active_entry().title, "C");
    }

    #[test]
    fn test_out_of_range_select_returns_error_and_leaves_state() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::SelectEntry { index: 1 }, &p);

        let err = reduce(&s, ShellEvent::SelectEntry { index: 7 }, &p.features).unwrap_err();
        assert_eq!(err, ShellError::IndexOutOfRange { index: 7, len: 3 });
        assert_eq!(s.selected_index(), 1);
    }

    #[test]
    fn test_select_on_mobile_collapses_sidebar() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::ViewportResized { width: 600 }, &p);
        let s = step(&s, ShellEvent::ToggleSidebar, &p);
        assert!(s.sidebar_open());

        let s = step(&s, ShellEvent::SelectEntry { index: 1 }, &p);
        assert!(!s.sidebar_open());
        assert_eq!(s.selected_index(), 1);
    }

    #[test]
    fn test_select_on_desktop_keeps_sidebar() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::SelectEntry { index: 1 }, &p);
        assert!(s.sidebar_open());
    }

    #[test]
    fn test_entering_fullscreen_on_desktop_closes_sidebar() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::ToggleFullscreen, &p);
        assert!(s.fullscreen());
        assert!(!s.sidebar_open());

        // Collapsed beforehand: still closed afterwards.
        let s2 = step(&ShellState::new(&p).unwrap(), ShellEvent::ToggleSidebar, &p);
        let s2 = step(&s2, ShellEvent::ToggleFullscreen, &p);
        assert!(!s2.sidebar_open());
    }

    #[test]
    fn test_leaving_fullscreen_on_desktop_reopens_sidebar() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::ToggleFullscreen, &p);
        let s = step(&s, ShellEvent::ToggleFullscreen, &p);
        assert!(!s.fullscreen());
        assert!(s.sidebar_open());
    }

    #[test]
    fn test_fullscreen_on_mobile_keeps_sidebar_closed() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::ViewportResized { width: 500 }, &p);
        let s = step(&s, ShellEvent::ToggleFullscreen, &p);
        assert!(!s.sidebar_open());
        let s = step(&s, ShellEvent::ToggleFullscreen, &p);
        assert!(!s.sidebar_open());
    }

    #[test]
    fn test_resize_to_mobile_closes_sidebar() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::ViewportResized { width: 1280 }, &p);
        let s = step(&s, ShellEvent::ViewportResized { width: 1023 }, &p);
        assert!(s.is_mobile());
        assert!(!s.sidebar_open());
    }

    #[test]
    fn test_resize_to_desktop_reopens_sidebar_unless_fullscreen() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::ViewportResized { width: 800 }, &p);
        let opened = step(&s, ShellEvent::ViewportResized { width: 1024 }, &p);
        assert!(!opened.is_mobile());
        assert!(opened.sidebar_open());

        let fs = step(&s, ShellEvent::ToggleFullscreen, &p);
        let fs = step(&fs, ShellEvent::ViewportResized { width: 1440 }, &p);
        assert!(!fs.is_mobile());
        assert!(!fs.sidebar_open());
    }

    #[test]
    fn test_resize_without_crossing_keeps_collapsed_sidebar() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::ToggleSidebar, &p);
        let s = step(&s, ShellEvent::ViewportResized { width: 1600 }, &p);
        assert!(!s.sidebar_open());
    }

    #[test]
    fn test_dismiss_sidebar() {
        let p = profile(false);
        let s = ShellState::new(&p).unwrap();
        let s = step(&s, ShellEvent::DismissSidebar, &p);
        assert!(!s.sidebar_open());
    }

    #[test]
    fn test_theme_toggle_requires_feature() {
        let plain = profile(false);
        let s = ShellState::new(&plain).unwrap();
        assert_eq!(
            reduce(&s, ShellEvent::ToggleTheme, &plain.features).unwrap_err(),
            ShellError::FeatureDisabled("theme_toggle")
        );

        let themed = profile(true);
        let s = ShellState::new(&themed).unwrap();
        let s = step(&s, ShellEvent::ToggleTheme, &themed);
        assert!(!s.dark_mode());
    }

    #[test]
    fn test_event_json_shape() {
        let event: ShellEvent =
            serde_json::from_str(r#"{"type":"select_entry","index":2}"#).unwrap();
        assert_eq!(event, ShellEvent::SelectEntry { index: 2 });

        let event: ShellEvent = serde_json::from_str(r#"{"type":"toggle_fullscreen"}"#).unwrap();
        assert_eq!(event, ShellEvent::ToggleFullscreen);
    }
}
