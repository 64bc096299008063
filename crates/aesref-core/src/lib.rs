//! Bit-exact AES (FIPS-197) reference model for 128-, 192- and 256-bit keys.
//!
//! The crate mirrors the FIPS-197 text and provides:
//! - GF(2^8) arithmetic and the round-constant chain.
//! - Key expansion for all three key sizes.
//! - Single-block encryption and decryption, with an optional per-round trace.
//!
//! It is meant as a reference to validate hardware or optimized
//! implementations against. Table lookups are indexed by secret data, so it
//! should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

#[doc(hidden)]
pub mod vectors;

pub use crate::block::{block_from_slice, Block, State, BLOCK_LEN};
pub use crate::cipher::{
    decrypt_block, encrypt_block, expand, expand_key, transform_block, transform_block_traced, Aes,
    Direction,
};
pub use crate::error::{AesError, Result};
pub use crate::gf::{gmul, next_rcon, round_constants, xtime};
pub use crate::key::{CipherKey, KeySize, RoundKeys, MAX_ROUND_KEYS};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox};
