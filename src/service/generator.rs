//! Random password sampling.
//!
//! Indices are drawn from a cryptographically secure source with rejection
//! sampling, so every alphabet position is equally likely.

use rand::{TryCryptoRng, TryRngCore};

use crate::domain::Password;
use crate::error::{AppError, Result};

/// Draw a password of `length` characters from `alphabet`.
///
/// # Errors
///
/// Returns [`AppError::EmptyAlphabet`] for an empty alphabet,
/// [`AppError::InvalidLength`] for a zero length and
/// [`AppError::SecureRandomUnavailable`] if the random source fails.
pub fn generate<R>(rng: &mut R, alphabet: &[char], length: usize) -> Result<Password>
where
    R: TryRngCore + TryCryptoRng + ?Sized,
{
    if alphabet.is_empty() {
        return Err(AppError::EmptyAlphabet);
    }
    if length == 0 {
        return Err(AppError::InvalidLength {
            length,
            min: 1,
            max: usize::MAX,
        });
    }

    let size = u64::try_from(alphabet.len())
        .map_err(|_| AppError::Internal("alphabet too large".to_string()))?;
    // Largest multiple of `size` within the u32 range; draws at or above it
    // would favour the low indices.
    let zone = (1u64 << 32) / size * size;

    let mut buf = vec![0u8; length * 4];
    rng.try_fill_bytes(&mut buf).map_err(random_unavailable)?;

    let mut password = String::with_capacity(length);
    for chunk in buf.chunks_exact(4) {
        let mut value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        while u64::from(value) >= zone {
            value = rng.try_next_u32().map_err(random_unavailable)?;
        }
        let index = usize::try_from(u64::from(value) % size)
            .map_err(|_| AppError::Internal("index out of range".to_string()))?;
        password.push(alphabet[index]);
    }

    Ok(Password::from(password))
}

fn random_unavailable(err: impl std::fmt::Display) -> AppError {
    AppError::SecureRandomUnavailable(err.to_string())
}
