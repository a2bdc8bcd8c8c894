// Shell profile - One shell, configured by an entry table and a feature set
use super::entry::DashboardEntry;
use super::error::ShellError;
use super::navigation::validate_entries;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_BREAKPOINT: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellFeatures {
    /// Viewport widths strictly below this are treated as mobile.
    pub breakpoint: u32,
    pub theme_toggle: bool,
    pub default_dark: bool,
}

impl Default for ShellFeatures {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            theme_toggle: false,
            default_dark: true,
        }
    }
}

/// Static chrome text around the embedded report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub organization: String,
    pub department: String,
    pub badge: String,
    pub user_name: String,
    pub user_initials: String,
    pub refresh_note: String,
    pub loading_text: String,
    pub footer_left: String,
    pub footer_right: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            organization: "Reports".to_string(),
            department: "Internal".to_string(),
            badge: "R".to_string(),
            user_name: "Admin User".to_string(),
            user_initials: "AU".to_string(),
            refresh_note: "Updated via scheduled refresh".to_string(),
            loading_text: "Loading report...".to_string(),
            footer_left: String::new(),
            footer_right: "Confidential Data - Internal Use Only".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShellProfile {
    pub entries: Arc<[DashboardEntry]>,
    pub features: ShellFeatures,
    pub branding: Branding,
}

impl ShellProfile {
    pub fn new(
        entries: Vec<DashboardEntry>,
        features: ShellFeatures,
        branding: Branding,
    ) -> Result<Self, ShellError> {
        validate_entries(&entries)?;
        if features.breakpoint == 0 {
            return Err(ShellError::InvalidConfig(
                "breakpoint must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            entries: entries.into(),
            features,
            branding,
        })
    }

    pub fn is_mobile_width(&self, width: u32) -> bool {
        width < self.features.breakpoint
    }
}
