//! Heuristic strength scoring.

use crate::domain::StrengthLevel;

/// Rate `password`.
///
/// One point each for reaching 8, 12 and 16 characters, and one point each
/// for containing a lowercase letter, an uppercase letter, a digit and
/// anything outside `[A-Za-z0-9]`. The total is clamped to
/// [`StrengthLevel::VeryStrong`].
#[must_use]
pub fn score(password: &str) -> StrengthLevel {
    let length = password.chars().count();

    let checks = [
        length >= 8,
        length >= 12,
        length >= 16,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    let points = checks.iter().filter(|passed| **passed).count();
    StrengthLevel::from_score(u8::try_from(points).unwrap_or(u8::MAX))
}
