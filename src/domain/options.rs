//! Generation options and persisted user settings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::charset::CharacterClass;

/// Parameters for a single generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Number of characters to generate.
    pub length: usize,
    /// Selected character classes. May be empty; the pool builder substitutes
    /// the default selection.
    pub classes: BTreeSet<CharacterClass>,
    /// Drop visually confusable characters from the alphabet.
    pub exclude_ambiguous: bool,
}

impl GenerationOptions {
    /// Options with no classes selected.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            classes: BTreeSet::new(),
            exclude_ambiguous: false,
        }
    }

    /// Add a class to the selection.
    #[must_use]
    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.classes.insert(class);
        self
    }

    /// Set the ambiguous-character exclusion flag.
    #[must_use]
    pub const fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }
}

/// Persisted generator preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Preferred password length.
    pub length: usize,
    /// Include `A-Z`.
    pub uppercase: bool,
    /// Include `a-z`.
    pub lowercase: bool,
    /// Include `0-9`.
    pub digits: bool,
    /// Include symbols.
    pub symbols: bool,
    /// Exclude ambiguous characters.
    pub exclude_ambiguous: bool,
}

impl Settings {
    /// Built-in defaults: every class enabled, no exclusion.
    #[must_use]
    pub const fn defaults(length: usize) -> Self {
        Self {
            length,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }

    /// Whether `class` is enabled.
    #[must_use]
    pub const fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    /// Enabled classes.
    #[must_use]
    pub fn classes(&self) -> BTreeSet<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// Convert into generation options.
    #[must_use]
    pub fn to_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.length,
            classes: self.classes(),
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}

impl From<&GenerationOptions> for Settings {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            length: options.length,
            uppercase: options.classes.contains(&CharacterClass::Uppercase),
            lowercase: options.classes.contains(&CharacterClass::Lowercase),
            digits: options.classes.contains(&CharacterClass::Digit),
            symbols: options.classes.contains(&CharacterClass::Symbol),
            exclude_ambiguous: options.exclude_ambiguous,
        }
    }
}
