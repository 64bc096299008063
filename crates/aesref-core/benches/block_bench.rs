use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aesref_core::{decrypt_block, encrypt_block, expand_key, KeySize};

fn bench_key_expansion(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut group = c.benchmark_group("expand_key");
    for size in KeySize::ALL {
        let mut key = vec![0u8; size.key_len()];
        rng.fill_bytes(&mut key);
        group.bench_function(size.to_string(), |b| {
            b.iter(|| expand_key(&key));
        });
    }
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut group = c.benchmark_group("block");
    for size in KeySize::ALL {
        let mut key = vec![0u8; size.key_len()];
        rng.fill_bytes(&mut key);
        let Ok(round_keys) = expand_key(&key) else {
            continue;
        };
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        group.bench_function(format!("{size}_encrypt"), |b| {
            b.iter(|| encrypt_block(&block, &round_keys));
        });
        group.bench_function(format!("{size}_decrypt"), |b| {
            b.iter(|| decrypt_block(&block, &round_keys));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_blocks);
criterion_main!(benches);
