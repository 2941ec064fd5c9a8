//! Character pool construction.
//!
//! Turns a class selection into the alphabet a password is drawn from.

use std::collections::BTreeSet;

use crate::domain::charset::is_ambiguous;
use crate::domain::{CharacterClass, CharacterSets, GenerationOptions};
use crate::error::{AppError, Result};

/// Alphabet derived from a set of generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    /// Characters in class order. Duplicates across classes are kept.
    alphabet: Vec<char>,
    /// Classes the alphabet was built from.
    classes: BTreeSet<CharacterClass>,
    /// Whether the default selection replaced an empty one.
    defaulted: bool,
}

impl CharacterPool {
    /// Build the alphabet for `options`.
    ///
    /// An empty class selection is replaced by
    /// [`CharacterClass::default_selection`]; the substituted set is reported
    /// through [`classes`](Self::classes) and
    /// [`was_defaulted`](Self::was_defaulted) so callers can update their
    /// toggles to match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyAlphabet`] if exclusion leaves no characters.
    pub fn build(sets: &CharacterSets, options: &GenerationOptions) -> Result<Self> {
        let defaulted = options.classes.is_empty();
        let classes = if defaulted {
            CharacterClass::default_selection()
        } else {
            options.classes.clone()
        };

        let alphabet: Vec<char> = classes
            .iter()
            .flat_map(|class| sets.chars(*class).chars())
            .filter(|c| !(options.exclude_ambiguous && is_ambiguous(*c)))
            .collect();

        if alphabet.is_empty() {
            return Err(AppError::EmptyAlphabet);
        }

        Ok(Self {
            alphabet,
            classes,
            defaulted,
        })
    }

    /// Characters a password may be drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Classes the alphabet was built from.
    #[must_use]
    pub const fn classes(&self) -> &BTreeSet<CharacterClass> {
        &self.classes
    }

    /// Whether the default selection replaced an empty one.
    #[must_use]
    pub const fn was_defaulted(&self) -> bool {
        self.defaulted
    }

    /// Number of characters in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    /// Always false for a successfully built pool.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charset::{AMBIGUOUS_CHARS, DEFAULT_SYMBOLS, DIGITS, LOWERCASE, UPPERCASE};

    fn alphabet_string(pool: &CharacterPool) -> String {
        pool.alphabet().iter().collect()
    }

    #[test]
    fn test_concatenates_in_class_order() {
        let options = GenerationOptions::new(12)
            .with_class(CharacterClass::Symbol)
            .with_class(CharacterClass::Digit)
            .with_class(CharacterClass::Lowercase)
            .with_class(CharacterClass::Uppercase);
        let pool = CharacterPool::build(&CharacterSets::default(), &options).unwrap();

        let expected = format!("{UPPERCASE}{LOWERCASE}{DIGITS}{DEFAULT_SYMBOLS}");
        assert_eq!(alphabet_string(&pool), expected);
        assert!(!pool.was_defaulted());
    }

    #[test]
    fn test_build_is_repeatable() {
        let options = GenerationOptions::new(12)
            .with_class(CharacterClass::Digit)
            .with_class(CharacterClass::Uppercase);
        let sets = CharacterSets::default();
        let first = CharacterPool::build(&sets, &options).unwrap();
        let second = CharacterPool::build(&sets, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(alphabet_string(&first), format!("{UPPERCASE}{DIGITS}"));
    }

    #[test]
    fn test_empty_selection_uses_default_classes() {
        let sets = CharacterSets::default();
        let empty = CharacterPool::build(&sets, &GenerationOptions::new(12)).unwrap();
        let explicit = CharacterPool::build(
            &sets,
            &GenerationOptions::new(12)
                .with_class(CharacterClass::Lowercase)
                .with_class(CharacterClass::Uppercase)
                .with_class(CharacterClass::Digit),
        )
        .unwrap();

        assert_eq!(empty.alphabet(), explicit.alphabet());
        assert_eq!(empty.classes(), &CharacterClass::default_selection());
        assert!(empty.was_defaulted());
    }

    #[test]
    fn test_exclude_ambiguous_removes_confusable_characters() {
        let mut options = GenerationOptions::new(12).exclude_ambiguous(true);
        for class in CharacterClass::ALL {
            options = options.with_class(class);
        }
        let pool = CharacterPool::build(&CharacterSets::default(), &options).unwrap();

        for c in AMBIGUOUS_CHARS.chars() {
            assert!(!pool.alphabet().contains(&c), "{c} should be excluded");
        }
        assert_eq!(pool.len(), 26 + 26 + 10 + DEFAULT_SYMBOLS.len() - 7);
    }

    #[test]
    fn test_duplicates_across_classes_are_kept() {
        let sets = CharacterSets::with_symbols("a1!");
        let options = GenerationOptions::new(8)
            .with_class(CharacterClass::Lowercase)
            .with_class(CharacterClass::Symbol);
        let pool = CharacterPool::build(&sets, &options).unwrap();
        assert_eq!(pool.alphabet().iter().filter(|c| **c == 'a').count(), 2);
    }

    #[test]
    fn test_exclusion_can_empty_the_alphabet() {
        let sets = CharacterSets::with_symbols("il1");
        let options = GenerationOptions::new(8)
            .with_class(CharacterClass::Symbol)
            .exclude_ambiguous(true);
        let err = CharacterPool::build(&sets, &options).unwrap_err();
        assert!(matches!(err, AppError::EmptyAlphabet));
    }
}
