// Dashboard entry domain model
use serde::{Deserialize, Serialize};

/// Symbolic glyph shown next to an entry in the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    LayoutDashboard,
    Building,
    ClipboardList,
    BarChart,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "layout-dashboard",
            Icon::Building => "building",
            Icon::ClipboardList => "clipboard-list",
            Icon::BarChart => "bar-chart",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "\u{25A6}",
            Icon::Building => "\u{25A5}",
            Icon::ClipboardList => "\u{2630}",
            Icon::BarChart => "\u{2587}",
        }
    }
}

/// Text and background color tokens for an entry's active state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentColor {
    pub text: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub icon: Icon,
    /// Report viewer address, handed to the embedding frame verbatim.
    pub url: String,
    #[serde(default)]
    pub accent: Option<AccentColor>,
}

impl DashboardEntry {
    pub fn new(title: impl Into<String>, icon: Icon, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            icon,
            url: url.into(),
            accent: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_accent(mut self, text: impl Into<String>, background: impl Into<String>) -> Self {
        self.accent = Some(AccentColor {
            text: text.into(),
            background: background.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_deserializes_from_kebab_case() {
        let icon: Icon = serde_json::from_str("\"clipboard-list\"").unwrap();
        assert_eq!(icon, Icon::ClipboardList);
        assert_eq!(icon.name(), "clipboard-list");
    }

    #[test]
    fn test_entry_optional_fields_default_to_none() {
        let entry: DashboardEntry = serde_json::from_str(
            r#"{"title":"MIS","icon":"bar-chart","url":"https://reports.example/view?id=1&autoAuth=true"}"#,
        )
        .unwrap();

        assert_eq!(entry.subtitle, None);
        assert_eq!(entry.accent, None);
        assert_eq!(entry.url, "https://reports.example/view?id=1&autoAuth=true");
    }
}
