//! Key types for AES-128, AES-192 and AES-256.

use core::fmt;

use crate::block::Block;
use crate::error::{AesError, Result};

/// Largest number of round keys any key size needs (AES-256, Nr = 14).
pub const MAX_ROUND_KEYS: usize = 15;

/// The three AES key sizes, fixing `Nk` and `Nr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All key sizes in ascending order.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Selects the key size for a raw key of `len` bytes.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(AesError::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Number of round keys in the expanded schedule (`Nr + 1`).
    pub const fn round_key_count(self) -> usize {
        self.nr() + 1
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// A validated cipher key of 16, 24 or 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CipherKey {
    size: KeySize,
    bytes: [u8; 32],
}

impl CipherKey {
    /// Validates and copies a raw key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let size = KeySize::from_key_len(key.len())?;
        let mut bytes = [0u8; 32];
        bytes[..key.len()].copy_from_slice(key);
        Ok(Self { size, bytes })
    }

    /// The key size selected by the key length.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Key length in bits.
    pub fn bits(&self) -> usize {
        self.size.bits()
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_len()]
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for CipherKey {
    type Error = AesError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}

macro_rules! impl_key_from_array {
    ($($len:literal => $size:ident),*) => {
        $(
            impl From<[u8; $len]> for CipherKey {
                fn from(value: [u8; $len]) -> Self {
                    let mut bytes = [0u8; 32];
                    bytes[..$len].copy_from_slice(&value);
                    Self { size: KeySize::$size, bytes }
                }
            }
        )*
    };
}

impl_key_from_array!(16 => Aes128, 24 => Aes192, 32 => Aes256);

/// Expanded round keys; only the first `Nr + 1` entries are meaningful.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys {
    size: KeySize,
    keys: [Block; MAX_ROUND_KEYS],
}

#[allow(clippy::len_without_is_empty)]
impl RoundKeys {
    pub(crate) fn from_parts(size: KeySize, keys: [Block; MAX_ROUND_KEYS]) -> Self {
        Self { size, keys }
    }

    /// Key size the schedule was derived from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// Number of round keys (`Nr + 1`).
    pub fn len(&self) -> usize {
        self.size.round_key_count()
    }

    /// Returns the round key at the requested index (`0..=Nr`).
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.as_slice()[round]
    }

    /// The round keys in encryption order.
    pub fn as_slice(&self) -> &[Block] {
        &self.keys[..self.len()]
    }

    /// Iterates over the round keys in encryption order.
    pub fn iter(&self) -> core::slice::Iter<'_, Block> {
        self.as_slice().iter()
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a RoundKeys {
    type Item = &'a Block;
    type IntoIter = core::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
