//! Input validation errors.

/// Errors reported by key expansion and block transformation.
///
/// Every variant is raised before any table lookup or state mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AesError {
    /// The key is not 16, 24 or 32 bytes long.
    #[error("invalid key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),
    /// The block is not exactly 16 bytes long.
    #[error("invalid block length: {0} bytes (expected 16)")]
    InvalidBlockLength(usize),
    /// A direction name did not match encipher or decipher.
    #[error("invalid direction: {0:?} (expected encipher or decipher)")]
    InvalidDirection(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AesError>;
