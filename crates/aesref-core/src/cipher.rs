//! Key schedule and single-block encryption/decryption for all key sizes.

use core::fmt;
use core::str::FromStr;

use crate::block::{block_from_slice, Block, State, BLOCK_LEN};
use crate::error::{AesError, Result};
use crate::gf::next_rcon;
use crate::key::{CipherKey, RoundKeys, MAX_ROUND_KEYS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

/// Words in the largest schedule, `4 * (14 + 1)`.
const MAX_WORDS: usize = 4 * MAX_ROUND_KEYS;

/// Selects the forward or inverse round sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Encrypt.
    Encipher,
    /// Decrypt.
    Decipher,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encipher => "encipher",
            Self::Decipher => "decipher",
        })
    }
}

impl FromStr for Direction {
    type Err = AesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encipher" | "encrypt" | "enc" => Ok(Self::Encipher),
            "decipher" | "decrypt" | "dec" => Ok(Self::Decipher),
            _ => Err(AesError::InvalidDirection(s.to_owned())),
        }
    }
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a validated key into `Nr + 1` round keys.
pub fn expand(key: &CipherKey) -> RoundKeys {
    let size = key.size();
    let nk = size.nk();
    let total = 4 * size.round_key_count();

    let mut w = [0u32; MAX_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut rcon = 0x01u8;
    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(rcon) << 24);
            rcon = next_rcon(rcon);
        } else if nk == 8 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = [[0u8; BLOCK_LEN]; MAX_ROUND_KEYS];
    for (round_key, words) in round_keys.iter_mut().zip(w[..total].chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeys::from_parts(size, round_keys)
}

/// Validates a raw key and expands it.
///
/// Keys that are not 16, 24 or 32 bytes long are rejected with
/// [`AesError::InvalidKeyLength`] before any expansion work.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    CipherKey::new(key).map(|key| expand(&key))
}

fn ignore_round(_: usize, _: &State) {}

fn encipher<F>(state: &mut State, round_keys: &RoundKeys, observer: &mut F)
where
    F: FnMut(usize, &State),
{
    let nr = round_keys.rounds();

    add_round_key(state, round_keys.get(0));
    observer(0, state);

    for round in 1..nr {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_keys.get(round));
        observer(round, state);
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_keys.get(nr));
    observer(nr, state);
}

fn decipher<F>(state: &mut State, round_keys: &RoundKeys, observer: &mut F)
where
    F: FnMut(usize, &State),
{
    let nr = round_keys.rounds();

    add_round_key(state, round_keys.get(nr));
    observer(nr, state);

    for round in (1..nr).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_keys.get(round));
        inv_mix_columns(state);
        observer(round, state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_keys.get(0));
    observer(0, state);
}

/// Transforms one block, reporting the state after every round.
///
/// `observer` receives the index of the round key just added and the state at
/// that point: `0, 1, ..., Nr` when enciphering and `Nr, ..., 1, 0` when
/// deciphering. The block length is checked before the state is loaded.
pub fn transform_block_traced<F>(
    round_keys: &RoundKeys,
    block: &[u8],
    direction: Direction,
    mut observer: F,
) -> Result<Block>
where
    F: FnMut(usize, &State),
{
    let block = block_from_slice(block)?;
    let mut state = State::from_block(&block);
    match direction {
        Direction::Encipher => encipher(&mut state, round_keys, &mut observer),
        Direction::Decipher => decipher(&mut state, round_keys, &mut observer),
    }
    Ok(state.to_block())
}

/// Transforms one block in the given direction.
///
/// Fails with [`AesError::InvalidBlockLength`] unless `block` is 16 bytes.
pub fn transform_block(
    round_keys: &RoundKeys,
    block: &[u8],
    direction: Direction,
) -> Result<Block> {
    transform_block_traced(round_keys, block, direction, ignore_round)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);
    encipher(&mut state, round_keys, &mut ignore_round);
    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);
    decipher(&mut state, round_keys, &mut ignore_round);
    state.to_block()
}

/// A cipher instance bound to one expanded key.
///
/// The schedule is computed once in [`Aes::new`] and only read afterwards, so
/// a shared `&Aes` can serve concurrent callers.
#[derive(Clone, Debug)]
pub struct Aes {
    round_keys: RoundKeys,
}

impl Aes {
    /// Validates `key` and expands its schedule.
    pub fn new(key: &[u8]) -> Result<Self> {
        expand_key(key).map(|round_keys| Self { round_keys })
    }

    /// The expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Transforms one block in `direction`.
    pub fn process(&self, direction: Direction, block: &[u8]) -> Result<Block> {
        transform_block(&self.round_keys, block, direction)
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

impl From<&CipherKey> for Aes {
    fn from(key: &CipherKey) -> Self {
        Self {
            round_keys: expand(key),
        }
    }
}
