// Navigation state controller - Ordered entries plus the selected one
use super::entry::DashboardEntry;
use super::error::ShellError;
use std::collections::HashSet;
use std::sync::Arc;

/// Holds the fixed entry list and the currently selected index.
///
/// The list is shared between sessions; only `selected` is per-session.
/// `selected` always indexes into `entries`, which is never empty.
#[derive(Debug, Clone)]
pub struct NavigationController {
    entries: Arc<[DashboardEntry]>,
    selected: usize,
}

impl NavigationController {
    pub fn new(entries: Arc<[DashboardEntry]>) -> Result<Self, ShellError> {
        validate_entries(&entries)?;
        Ok(Self {
            entries,
            selected: 0,
        })
    }

    pub fn select_entry(&mut self, index: usize) -> Result<(), ShellError> {
        if index >= self.entries.len() {
            return Err(ShellError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    pub fn active_entry(&self) -> &DashboardEntry {
        &self.entries[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn entries(&self) -> &[DashboardEntry] {
        &self.entries
    }
}

/// Entry lists must be non-empty with unique titles.
pub fn validate_entries(entries: &[DashboardEntry]) -> Result<(), ShellError> {
    if entries.is_empty() {
        return Err(ShellError::InvalidConfig(
            "at least one dashboard entry is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.title.as_str()) {
            return Err(ShellError::InvalidConfig(format!(
                "duplicate entry title '{}'",
                entry.title
            )));
        }
    }

    Ok(())
}
