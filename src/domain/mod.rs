//! Domain models for Passforge.
//!
//! This module contains the core domain types: character classes, generation
//! options, passwords, history and settings, plus API contracts.

pub mod charset;
pub mod dto;
pub mod history;
pub mod options;
pub mod password;
pub mod record;

pub use charset::{CharacterClass, CharacterSets};
pub use dto::{
    ApiResponse, GenerateRequest, HistoryEntryView, HistoryResponse, PasswordRequest,
    PasswordResponse, SettingsResponse, StrengthView,
};
pub use history::{HistoryEntry, HistoryLog};
pub use options::{GenerationOptions, Settings};
pub use password::{Password, StrengthLevel};
