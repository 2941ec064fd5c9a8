//! Generated passwords and their strength rating.

use serde::{Deserialize, Serialize};

/// A generated password.
///
/// `Debug` never prints the contents, so a password can sit inside structs
/// that end up in log fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Borrow the password text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume into the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(<{} chars>)", self.char_count())
    }
}

/// Coarse password quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum StrengthLevel {
    /// Nothing to rate.
    #[default]
    Unrated = 0,
    /// Score 1.
    Weak = 1,
    /// Score 2.
    Medium = 2,
    /// Score 3.
    Strong = 3,
    /// Score 4 or more.
    VeryStrong = 4,
}

impl StrengthLevel {
    /// Highest level a score maps to.
    pub const MAX: Self = Self::VeryStrong;

    /// Map a raw score, clamping anything above 4.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Unrated,
            1 => Self::Weak,
            2 => Self::Medium,
            3 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Numeric level, 0 to 4.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unrated => "-",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Display color hint.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Unrated => "#7f8c8d",
            Self::Weak => "#e74c3c",
            Self::Medium => "#f39c12",
            Self::Strong => "#2ecc71",
            Self::VeryStrong => "#27ae60",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<StrengthLevel> for u8 {
    fn from(level: StrengthLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for StrengthLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.as_u8() {
            return Err(format!("strength level must be 0-4, got {value}"));
        }
        Ok(Self::from_score(value))
    }
}
