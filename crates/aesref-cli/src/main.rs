//! Command-line driver for `aesref`.

#![forbid(unsafe_code)]

use aesref_core::vectors::{EcbVector, KeyExpansionVector, ECB, KEY_EXPANSION};
use aesref_core::{
    expand_key, transform_block, transform_block_traced, Block, Direction, KeySize, RoundKeys,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES reference model CLI.
#[derive(Parser)]
#[command(
    name = "aesref",
    version,
    author,
    about = "Bit-exact FIPS-197 AES reference model"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the expanded round keys for a key.
    Expand {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt a single 16-byte block.
    Enc(BlockArgs),
    /// Decrypt a single 16-byte block.
    Dec(BlockArgs),
    /// Run the built-in FIPS-197 / SP 800-38A known-answer suite.
    Kat,
    /// Encrypt and decrypt random blocks under random keys of every size.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct BlockArgs {
    /// AES key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Input block as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    block_hex: String,
    /// Print the key length and the state after every round.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Enc(args) => cmd_block(&args, Direction::Encipher),
        Commands::Dec(args) => cmd_block(&args, Direction::Decipher),
        Commands::Kat => cmd_kat(),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
    }
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let round_keys = parse_key_hex(key_hex)?;
    print_schedule_header(&round_keys);
    for (round, key) in round_keys.iter().enumerate() {
        println!("round {round:02}: {}", hex::encode(key));
    }
    Ok(())
}

fn cmd_block(args: &BlockArgs, direction: Direction) -> Result<()> {
    let round_keys = parse_key_hex(&args.key_hex)?;
    let block = parse_block_hex(&args.block_hex)?;
    if args.verbose {
        print_schedule_header(&round_keys);
        println!("direction: {direction}");
    }
    let output = transform_block_traced(&round_keys, &block, direction, |round, state| {
        if args.verbose {
            println!("State at round 0x{round:02x}:\n{state}\n");
        }
    })?;
    println!("{}", hex::encode(output));
    Ok(())
}

fn cmd_kat() -> Result<()> {
    let mut failures = 0usize;

    println!("Key expansion tests");
    println!("-------------------");
    for vector in KEY_EXPANSION {
        if !report(vector.name, check_key_expansion(vector)?) {
            failures += 1;
        }
    }

    println!();
    println!("ECB single block tests");
    println!("----------------------");
    for vector in ECB {
        if !report(vector.name, check_ecb(vector)?) {
            failures += 1;
        }
    }

    let total = KEY_EXPANSION.len() + ECB.len();
    println!();
    println!("{} of {total} test cases passed", total - failures);
    if failures > 0 {
        bail!("{failures} known-answer test case(s) failed");
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let size = KeySize::ALL[rng.gen_range(0..KeySize::ALL.len())];
        let mut key = vec![0u8; size.key_len()];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let round_keys = expand_key(&key)?;
        let ciphertext = transform_block(&round_keys, &block, Direction::Encipher)?;
        let recovered = transform_block(&round_keys, &ciphertext, Direction::Decipher)?;
        if recovered != block {
            bail!(
                "round trip failed at sample {sample}: {size} key {} block {}",
                hex::encode(&key),
                hex::encode(block)
            );
        }
    }
    println!("{samples} random round trips ok");
    Ok(())
}

/// Outcome of one known-answer case.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Pass,
    Mismatch { got: String, expected: String },
}

fn check_key_expansion(vector: &KeyExpansionVector) -> Result<Outcome> {
    let round_keys = parse_key_hex(vector.key)?;
    let got: Vec<String> = round_keys.iter().map(hex::encode).collect();
    if got == vector.round_keys {
        Ok(Outcome::Pass)
    } else {
        Ok(Outcome::Mismatch {
            got: got.join("\n"),
            expected: vector.round_keys.join("\n"),
        })
    }
}

fn check_ecb(vector: &EcbVector) -> Result<Outcome> {
    let round_keys = parse_key_hex(vector.key)?;
    let input = parse_block_hex(vector.input)?;
    let got = hex::encode(transform_block(&round_keys, &input, vector.direction)?);
    if got == vector.expected {
        Ok(Outcome::Pass)
    } else {
        Ok(Outcome::Mismatch {
            got,
            expected: vector.expected.to_owned(),
        })
    }
}

fn report(name: &str, outcome: Outcome) -> bool {
    match outcome {
        Outcome::Pass => {
            println!("{name}: Test case ok.");
            true
        }
        Outcome::Mismatch { got, expected } => {
            eprintln!("{name}: Error:");
            eprintln!("Got:\n{got}");
            eprintln!("Expected:\n{expected}");
            false
        }
    }
}

fn print_schedule_header(round_keys: &RoundKeys) {
    let size = round_keys.key_size();
    println!("key length: {} bits ({size})", size.bits());
    println!("rounds: {}", round_keys.rounds());
}

fn parse_key_hex(hex_str: &str) -> Result<RoundKeys> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    expand_key(&bytes).context("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    aesref_core::block_from_slice(&bytes).context("AES block must be 16 bytes (32 hex characters)")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aesref_core::AesError;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_block_subcommand() {
        let cli = Cli::try_parse_from([
            "aesref",
            "enc",
            "--key-hex",
            "2b7e151628aed2a6abf7158809cf4f3c",
            "--block-hex",
            "6bc1bee22e409f96e93d7e117393172a",
            "-v",
        ])
        .expect("parse");
        match cli.command {
            Commands::Enc(args) => assert!(args.verbose),
            _ => panic!("expected enc subcommand"),
        }
    }

    #[test]
    fn key_hex_accepts_all_sizes() {
        for (hex_len, rounds) in [(32, 10), (48, 12), (64, 14)] {
            let key = "ab".repeat(hex_len / 2);
            assert_eq!(parse_key_hex(&key).expect("key").rounds(), rounds);
        }
    }

    #[test]
    fn key_hex_rejects_twenty_bytes() {
        let err = parse_key_hex(&"00".repeat(20)).expect_err("invalid length");
        assert_eq!(
            err.downcast_ref::<AesError>(),
            Some(&AesError::InvalidKeyLength(20))
        );
    }

    #[test]
    fn block_hex_rejects_short_block() {
        let err = parse_block_hex("0011").expect_err("invalid length");
        assert_eq!(
            err.downcast_ref::<AesError>(),
            Some(&AesError::InvalidBlockLength(2))
        );
        assert!(parse_block_hex("zz").is_err());
    }

    #[test]
    fn builtin_vectors_pass() {
        for vector in KEY_EXPANSION {
            assert_eq!(check_key_expansion(vector).expect("vector"), Outcome::Pass);
        }
        for vector in ECB {
            assert_eq!(check_ecb(vector).expect("vector"), Outcome::Pass, "{}", vector.name);
        }
        assert_eq!(ECB.len(), 24);
    }

    #[test]
    fn seeded_check_is_reproducible() {
        cmd_check(30, Some(42)).expect("round trips");
        let a: u64 = seeded_rng(Some(9)).gen();
        let b: u64 = seeded_rng(Some(9)).gen();
        assert_eq!(a, b);
    }
}
