//! Page-level settings.
//!
//! The hosting page fixes a handful of flags before any handler runs: which
//! citation layout applies, whether the user picked hit/excerpt ordering
//! explicitly, and an optional element to scroll to on load. They are loaded
//! from a JSON file and passed into the core as a value, never read from
//! ambient state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::citation::Layout;

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Flags the page establishes before the handlers run.
///
/// Every field is defaulted, so a partial settings file loads fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Selects [`Layout::Readable`] citation punctuation when set.
    pub readable_layout: bool,
    /// Whether the user chose a hit ordering explicitly.
    pub explicit_hit_order: bool,
    /// Whether the user chose an excerpt ordering explicitly.
    pub explicit_excerpt_order: bool,
    /// Element id to scroll to on page load, if any.
    pub scroll_to: Option<String>,
}

impl PageSettings {
    /// The citation layout implied by the `readable_layout` flag.
    pub fn layout(&self) -> Layout {
        if self.readable_layout {
            Layout::Readable
        } else {
            Layout::Condensed
        }
    }
}

/// Loads page settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_settings(path: &Path) -> Result<PageSettings, SettingsError> {
    let content = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&content)?;
    Ok(settings)
}
