#![no_main]

use libfuzzer_sys::fuzz_target;
use nqueens::genetic::{crossover, mutate, random_individual};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fuzz_target!(|input: (u8, u64)| {
    let (side_length, seed) = input;
    let side_length = usize::from(side_length % 32);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let first = random_individual(side_length, &mut rng);
    let second = random_individual(side_length, &mut rng);
    let mut child = crossover(&first, &second, &mut rng);
    mutate(&mut child, &mut rng);

    assert_eq!(child.side_length(), side_length);
    assert!(child.iter().all(|&column| column < side_length));
});
