//! Password generation service.
//!
//! Validates requests against the configured bounds and ties the pool
//! builder, the sampler and the scorer together.

use std::collections::BTreeSet;

use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};

use crate::config::GeneratorConfig;
use crate::domain::{CharacterClass, CharacterSets, GenerationOptions, Password, StrengthLevel};
use crate::error::{AppError, Result};
use crate::service::{generator, pool::CharacterPool, strength};

/// A freshly generated password with everything a host needs to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    /// The password.
    pub password: Password,
    /// Its strength.
    pub strength: StrengthLevel,
    /// Classes the alphabet was built from.
    pub classes: BTreeSet<CharacterClass>,
    /// Whether the default classes replaced an empty selection.
    pub defaulted: bool,
    /// Alphabet size.
    pub alphabet_size: usize,
}

/// Service for password generation and scoring.
pub struct PasswordService {
    /// Character sets for each class.
    sets: CharacterSets,
    /// Shortest accepted length.
    min_length: usize,
    /// Longest accepted length.
    max_length: usize,
}

impl PasswordService {
    /// Create a new password service.
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            sets: CharacterSets::with_symbols(config.symbols.clone()),
            min_length: config.min_length,
            max_length: config.max_length,
        }
    }

    /// Generate a password using the operating system's random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is out of bounds, the alphabet is empty
    /// or secure randomness is unavailable.
    pub fn generate(&self, options: &GenerationOptions) -> Result<GeneratedPassword> {
        self.generate_with(&mut OsRng, options)
    }

    /// Generate a password using `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_with<R>(
        &self,
        rng: &mut R,
        options: &GenerationOptions,
    ) -> Result<GeneratedPassword>
    where
        R: TryRngCore + TryCryptoRng + ?Sized,
    {
        let result = self.try_generate(rng, options);

        match &result {
            Ok(generated) => {
                metrics::counter!("passforge_passwords_generated_total").increment(1);
                tracing::debug!(
                    length = options.length,
                    alphabet_size = generated.alphabet_size,
                    defaulted = generated.defaulted,
                    strength = generated.strength.as_u8(),
                    "Password generated"
                );
            }
            Err(e) => {
                let reason = match e {
                    AppError::EmptyAlphabet => "empty_alphabet",
                    AppError::InvalidLength { .. } => "invalid_length",
                    AppError::SecureRandomUnavailable(_) => "random_unavailable",
                    _ => "other",
                };
                metrics::counter!("passforge_generation_failures_total", "reason" => reason)
                    .increment(1);
                if matches!(e, AppError::SecureRandomUnavailable(_)) {
                    tracing::error!(error = %e, "Secure random source failed");
                }
            }
        }

        result
    }

    fn try_generate<R>(&self, rng: &mut R, options: &GenerationOptions) -> Result<GeneratedPassword>
    where
        R: TryRngCore + TryCryptoRng + ?Sized,
    {
        self.validate_length(options.length)?;

        let pool = CharacterPool::build(&self.sets, options)?;
        let password = generator::generate(rng, pool.alphabet(), options.length)?;
        let strength = strength::score(password.as_str());

        Ok(GeneratedPassword {
            password,
            strength,
            alphabet_size: pool.len(),
            defaulted: pool.was_defaulted(),
            classes: pool.classes().clone(),
        })
    }

    /// Rate a password.
    #[must_use]
    pub fn score(&self, password: &str) -> StrengthLevel {
        strength::score(password)
    }

    /// Check `length` against the configured bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLength`] when out of bounds.
    pub const fn validate_length(&self, length: usize) -> Result<()> {
        if length < self.min_length || length > self.max_length {
            return Err(AppError::InvalidLength {
                length,
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}
