//! Data Transfer Objects for API requests and responses.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    CharacterClass, GenerationOptions, HistoryEntry, HistoryLog, Settings, StrengthLevel,
};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Request to generate a password.
///
/// Omitted fields fall back to the current settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    /// Password length.
    pub length: Option<usize>,
    /// Include `A-Z`.
    pub uppercase: Option<bool>,
    /// Include `a-z`.
    pub lowercase: Option<bool>,
    /// Include `0-9`.
    pub digits: Option<bool>,
    /// Include symbols.
    pub symbols: Option<bool>,
    /// Exclude ambiguous characters.
    pub exclude_ambiguous: Option<bool>,
}

impl GenerateRequest {
    /// Overlay this request on `base`.
    #[must_use]
    pub fn into_options(self, base: &Settings) -> GenerationOptions {
        let merged = Settings {
            length: self.length.unwrap_or(base.length),
            uppercase: self.uppercase.unwrap_or(base.uppercase),
            lowercase: self.lowercase.unwrap_or(base.lowercase),
            digits: self.digits.unwrap_or(base.digits),
            symbols: self.symbols.unwrap_or(base.symbols),
            exclude_ambiguous: self.exclude_ambiguous.unwrap_or(base.exclude_ambiguous),
        };
        merged.to_options()
    }
}

/// Strength rating as shown to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthView {
    /// Level 0-4.
    pub level: StrengthLevel,
    /// Display label.
    pub label: String,
    /// Display color hint.
    pub color: String,
}

impl From<StrengthLevel> for StrengthView {
    fn from(level: StrengthLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            color: level.color().to_string(),
        }
    }
}

/// Response for password generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResponse {
    /// The generated password.
    pub password: String,
    /// Its strength.
    pub strength: StrengthView,
    /// Classes the alphabet was built from.
    pub classes: BTreeSet<CharacterClass>,
    /// Whether the default classes were substituted for an empty selection.
    pub defaulted: bool,
    /// Number of characters in the alphabet.
    pub alphabet_size: usize,
}

/// Request carrying a single password.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordRequest {
    /// Password text.
    pub password: String,
}

/// History entry as shown to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryView {
    /// The recorded password.
    pub password: String,
    /// Capture time, RFC 3339.
    pub captured_at: String,
    /// Capture time formatted for display.
    pub timestamp: String,
}

impl From<&HistoryEntry> for HistoryEntryView {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            password: entry.password.clone(),
            captured_at: entry.captured_at.to_rfc3339(),
            timestamp: entry.display_timestamp(),
        }
    }
}

/// Response containing the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Entries, newest first.
    pub entries: Vec<HistoryEntryView>,
    /// Set when the change could not be persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl HistoryResponse {
    /// Build from a log and an optional persistence warning.
    #[must_use]
    pub fn new(log: &HistoryLog, warning: Option<String>) -> Self {
        Self {
            entries: log.entries().iter().map(HistoryEntryView::from).collect(),
            warning,
        }
    }
}

/// Response containing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// Effective settings.
    pub settings: Settings,
    /// Whether these come from a saved snapshot rather than defaults.
    pub saved: bool,
    /// Set when the change could not be persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
