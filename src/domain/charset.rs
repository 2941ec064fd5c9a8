//! Character classes and the characters they contribute.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII digits.
pub const DIGITS: &str = "0123456789";

/// Symbols used when configuration does not override them.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easily confused with one another.
pub const AMBIGUOUS_CHARS: &str = "il1Lo0O";

/// A selectable group of characters.
///
/// Variant order is the order in which classes are concatenated into an
/// alphabet, so iterating a `BTreeSet<CharacterClass>` yields them in
/// alphabet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// `A-Z`.
    Uppercase,
    /// `a-z`.
    Lowercase,
    /// `0-9`.
    Digit,
    /// Punctuation and other symbols.
    Symbol,
}

impl CharacterClass {
    /// Every class, in alphabet order.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Digit, Self::Symbol];

    /// Classes substituted when a request selects none.
    #[must_use]
    pub fn default_selection() -> BTreeSet<Self> {
        BTreeSet::from([Self::Lowercase, Self::Uppercase, Self::Digit])
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uppercase => write!(f, "uppercase"),
            Self::Lowercase => write!(f, "lowercase"),
            Self::Digit => write!(f, "digit"),
            Self::Symbol => write!(f, "symbol"),
        }
    }
}

/// The concrete characters behind each class.
///
/// Letters and digits are fixed; the symbol set can be replaced through
/// `generator.symbols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSets {
    symbols: String,
}

impl CharacterSets {
    /// Use a custom symbol set.
    #[must_use]
    pub fn with_symbols(symbols: impl Into<String>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Characters contributed by `class`, in their fixed order.
    #[must_use]
    pub fn chars(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => &self.symbols,
        }
    }
}

impl Default for CharacterSets {
    fn default() -> Self {
        Self::with_symbols(DEFAULT_SYMBOLS)
    }
}

/// Whether `c` belongs to the ambiguous set.
#[must_use]
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS_CHARS.contains(c)
}
