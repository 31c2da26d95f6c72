//! Representative value sweeps
//!
//! Exhaustive testing is out of reach past 16 bits, so the harness checks
//! values that stress every class edge instead:
//! - Growing bit runs (`0, 1, 3, 7, ...`) and their negations
//! - Each size class's limits and their immediate neighbours
//! - Seeded random values spread over every magnitude

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use varpack_core::{PackInt, Signedness};

/// Inclusive range of `T`, widened
pub fn type_range<T: PackInt>() -> (i128, i128) {
    let bits = (T::WIDTH * 8) as u32;
    match T::SIGNEDNESS {
        Signedness::Signed => (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1),
        Signedness::Unsigned => (0, (1i128 << bits) - 1),
    }
}

fn narrow<T: PackInt>(value: i128) -> T {
    T::from_bits(value as u64)
}

/// Values with one more low bit set at each step, plus negations for signed types
pub fn bit_sweep<T: PackInt>() -> Vec<T> {
    let signed = T::SIGNEDNESS.is_signed();
    let steps = T::WIDTH * 8 - usize::from(signed);

    let mut values = Vec::with_capacity(2 * (steps + 1));
    let mut acc = 0u64;
    for i in 0..=steps {
        values.push(T::from_bits(acc));
        if signed {
            values.push(T::from_bits(acc.wrapping_neg()));
        }
        if i < steps {
            acc |= 1 << i;
        }
    }
    values
}

/// Limits of every size class that `T` can represent, with their neighbours,
/// plus the limits of `T` itself
pub fn class_boundaries<T: PackInt>() -> Vec<T> {
    let (lo, hi) = type_range::<T>();
    let mut values = Vec::new();

    for class in T::SIGNEDNESS.classes() {
        let min = class.min_value() as i128;
        let max = class.max_value() as i128;
        for candidate in [min - 1, min, max, max + 1] {
            if (lo..=hi).contains(&candidate) {
                values.push(narrow::<T>(candidate));
            }
        }
    }

    values.push(narrow::<T>(lo));
    values.push(narrow::<T>(hi));
    values.sort_by_key(|v| v.to_i128());
    values.dedup();
    values
}

/// `count` seeded random values of every magnitude
pub fn random_values<T: PackInt>(seed: u64, count: usize) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let raw: i64 = rng.gen();
            let shift = rng.gen_range(0..64);
            T::from_bits((raw >> shift) as u64)
        })
        .collect()
}
