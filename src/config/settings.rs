//! User settings for the contact book
//!
//! Manages the record layout, list ordering, reminder and audit preferences.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::error::ContactError;
use crate::models::{ListOrder, RecordLayout};

/// User settings for the contact book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Which field set records carry
    #[serde(default)]
    pub layout: RecordLayout,

    /// Overrides the layout's default list ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_order: Option<ListOrder>,

    /// Show today's birthdays when a session starts
    #[serde(default = "default_true")]
    pub birthday_reminder: bool,

    /// Append mutations to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Persistence file used when no --file is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            layout: RecordLayout::default(),
            list_order: None,
            birthday_reminder: true,
            audit_enabled: true,
            contacts_file: None,
        }
    }
}

impl Settings {
    /// Ordering for list output, falling back to the layout's default
    pub fn effective_list_order(&self) -> ListOrder {
        self.list_order
            .unwrap_or_else(|| self.layout.default_list_order())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ContactError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ContactError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
