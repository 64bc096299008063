//! AES round transformations.

use crate::block::{Block, State};
use crate::gf::gmul;
use crate::sbox::{inv_sbox, sbox};

/// Circulant MixColumns matrix, first row {02, 03, 01, 01}.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Circulant InvMixColumns matrix, first row {0e, 0b, 0d, 09}.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_right(r);
    }
}

fn multiply_columns(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let column = state.column(col);
        let mixed = core::array::from_fn(|row| {
            matrix[row]
                .iter()
                .zip(column.iter())
                .fold(0u8, |acc, (&c, &b)| acc ^ gmul(c, b))
        });
        state.set_column(col, mixed);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    multiply_columns(state, &MIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    multiply_columns(state, &INV_MIX);
}

/// Adds (XORs) a round key into the state using the same column-major layout.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    let key = State::from_block(round_key);
    let key_bytes = (0..4).flat_map(|row| key.row(row));
    for (byte, k) in state.bytes_mut().zip(key_bytes) {
        *byte ^= k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(hex_str: &str) -> State {
        let bytes = hex::decode(hex_str).expect("hex");
        let block: Block = bytes.try_into().expect("16 bytes");
        State::from_block(&block)
    }

    fn hex_of(state: &State) -> String {
        hex::encode(state.to_block())
    }

    // Intermediate values from FIPS-197 Appendix B, round 1.
    const START_OF_ROUND: &str = "193de3bea0f4e22b9ac68d2ae9f84808";
    const AFTER_SUB_BYTES: &str = "d42711aee0bf98f1b8b45de51e415230";
    const AFTER_SHIFT_ROWS: &str = "d4bf5d30e0b452aeb84111f11e2798e5";
    const AFTER_MIX_COLUMNS: &str = "046681e5e0cb199a48f8d37a2806264c";
    const ROUND_KEY_1: &str = "a0fafe1788542cb123a339392a6c7605";
    const START_OF_ROUND_2: &str = "a49c7ff2689f352b6b5bea43026a5049";

    #[test]
    fn round_steps_match_fips_appendix_b() {
        let mut state = state_of(START_OF_ROUND);
        sub_bytes(&mut state);
        assert_eq!(hex_of(&state), AFTER_SUB_BYTES);
        shift_rows(&mut state);
        assert_eq!(hex_of(&state), AFTER_SHIFT_ROWS);
        mix_columns(&mut state);
        assert_eq!(hex_of(&state), AFTER_MIX_COLUMNS);
        let key: Block = hex::decode(ROUND_KEY_1)
            .expect("hex")
            .try_into()
            .expect("16 bytes");
        add_round_key(&mut state, &key);
        assert_eq!(hex_of(&state), START_OF_ROUND_2);
    }

    #[test]
    fn inverse_steps_undo_forward_steps() {
        let mut state = state_of(AFTER_MIX_COLUMNS);
        inv_mix_columns(&mut state);
        assert_eq!(hex_of(&state), AFTER_SHIFT_ROWS);
        inv_shift_rows(&mut state);
        assert_eq!(hex_of(&state), AFTER_SUB_BYTES);
        inv_sub_bytes(&mut state);
        assert_eq!(hex_of(&state), START_OF_ROUND);
    }

    #[test]
    fn shift_rows_leaves_row_zero() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let mut state = State::from_block(&block);
        shift_rows(&mut state);
        assert_eq!(state.row(0), [0x00, 0x04, 0x08, 0x0c]);
        assert_eq!(state.row(1), [0x05, 0x09, 0x0d, 0x01]);
        assert_eq!(state.row(2), [0x0a, 0x0e, 0x02, 0x06]);
        assert_eq!(state.row(3), [0x0f, 0x03, 0x07, 0x0b]);
    }

    #[test]
    fn mix_columns_known_column() {
        // Standard test column db 13 53 45 -> 8e 4d a1 bc.
        let mut block = [0u8; 16];
        block[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        let mut state = State::from_block(&block);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(state.column(1), [0, 0, 0, 0]);
    }

    #[test]
    fn add_round_key_is_involution() {
        let original = state_of(START_OF_ROUND);
        let key: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
        let mut state = original;
        add_round_key(&mut state, &key);
        assert_ne!(state, original);
        add_round_key(&mut state, &key);
        assert_eq!(state, original);
    }
}
