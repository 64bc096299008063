//! Encrypts and decrypts the FIPS-197 Appendix C.1 block, printing each round.

use aesref_core::{transform_block_traced, Aes, Direction};

fn main() {
    let key: Vec<u8> = (0u8..16).collect();
    let plaintext = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    let aes = Aes::new(&key).expect("16-byte key");
    let ciphertext = transform_block_traced(
        aes.round_keys(),
        &plaintext,
        Direction::Encipher,
        |round, state| println!("round {round:2}:\n{state}"),
    )
    .expect("16-byte block");

    assert_eq!(aes.decrypt_block(&ciphertext), plaintext);
    println!("example succeeded; ciphertext {ciphertext:02x?}");
}
