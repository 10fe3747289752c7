//! Short alias generation.
//!
//! Aliases are drawn from the operating system's cryptographically secure
//! random source so they cannot be predicted or enumerated. Generation does not
//! check uniqueness; the store rejects duplicates and the caller retries.

use crate::error::AppError;
use serde_json::json;

/// The 62 symbols an alias may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Largest multiple of 62 that fits in a byte. Bytes at or above it are
/// discarded so that `byte % 62` stays uniform.
const ACCEPT_BELOW: u8 = 248;

/// Source of candidate aliases.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Produces one candidate alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no secure randomness is available.
    fn generate(&self) -> Result<String, AppError>;
}

/// Generates fixed-length aliases with `getrandom`.
#[derive(Debug, Clone, Copy)]
pub struct RandomAliasGenerator {
    length: usize,
}

impl RandomAliasGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_LENGTH)
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self) -> Result<String, AppError> {
        let mut alias = String::with_capacity(self.length);
        let mut buffer = [0u8; 32];

        while alias.len() < self.length {
            getrandom::fill(&mut buffer).map_err(|e| {
                tracing::error!(error = %e, "Secure random source unavailable");
                AppError::internal(
                    "Failed to generate alias",
                    json!({ "reason": "random source unavailable" }),
                )
            })?;

            for &byte in buffer.iter().filter(|&&b| b < ACCEPT_BELOW) {
                if alias.len() == self.length {
                    break;
                }
                alias.push(ALPHABET[usize::from(byte % 62)] as char);
            }
        }

        Ok(alias)
    }
}
