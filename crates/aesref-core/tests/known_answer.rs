//! Known-answer tests against FIPS-197 key expansion tables and the
//! NIST SP 800-38A F.1 ECB single-block vectors.

use aesref_core::vectors::{ECB, KEY_EXPANSION};
use aesref_core::{expand_key, transform_block, AesError, Direction, KeySize};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("hex literal")
}

#[test]
fn key_expansion_matches_tables() {
    for case in KEY_EXPANSION {
        let key = unhex(case.key);
        let round_keys = expand_key(&key).expect("valid key");
        let size = KeySize::from_key_len(key.len()).expect("valid key");
        assert_eq!(round_keys.key_size(), size);
        assert_eq!(round_keys.len(), case.round_keys.len(), "{}", case.name);
        for (round, expected) in case.round_keys.iter().enumerate() {
            assert_eq!(
                hex::encode(round_keys.get(round)),
                *expected,
                "{} round {}",
                case.name,
                round
            );
        }
        assert_eq!(case.round_keys[0], &case.key[..32]);
    }
}

#[test]
fn key_expansion_covers_every_key_size() {
    for size in KeySize::ALL {
        let count = KEY_EXPANSION
            .iter()
            .filter(|case| case.key.len() == size.key_len() * 2)
            .count();
        assert!(count >= 3, "{size} has {count} key-expansion cases");
    }
}

#[test]
fn ecb_vectors_match_in_both_directions() {
    for case in ECB {
        let round_keys = expand_key(&unhex(case.key)).expect("valid key");
        let out = transform_block(&round_keys, &unhex(case.input), case.direction)
            .expect("valid block");
        assert_eq!(hex::encode(out), case.expected, "{}", case.name);
    }
}

#[test]
fn ecb_vectors_are_mutually_inverse() {
    assert_eq!(ECB.len(), 24);
    for case in ECB.iter().filter(|c| c.direction == Direction::Encipher) {
        let inverse = ECB
            .iter()
            .find(|c| {
                c.direction == Direction::Decipher && c.key == case.key && c.input == case.expected
            })
            .unwrap_or_else(|| panic!("no decipher case for {}", case.name));
        assert_eq!(inverse.expected, case.input);
    }
}

#[test]
fn sp800_38a_aes128_first_block() {
    let round_keys = expand_key(&unhex("2b7e151628aed2a6abf7158809cf4f3c")).expect("valid key");
    let ct = transform_block(
        &round_keys,
        &unhex("6bc1bee22e409f96e93d7e117393172a"),
        Direction::Encipher,
    )
    .expect("valid block");
    assert_eq!(hex::encode(ct), "3ad77bb40d7a3660a89ecaf32466ef97");
}

#[test]
fn twenty_byte_key_is_rejected() {
    assert_eq!(
        expand_key(&[0x11; 20]).err(),
        Some(AesError::InvalidKeyLength(20))
    );
}
