use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const MEASURE_MS_SMALL: u64 = 120;
const MEASURE_MS_LARGE: u64 = 300;
const MEASURE_MS_XL: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Upper bound (exclusive) of the small-range integer inputs.
pub const SMALL_RANGE_MAX: u64 = 1000;
pub const FEW_UNIQUE_KEYS: u64 = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    SmallRange,
    NearlySorted1pctSwaps,
    Descending,
    FewUnique,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::SmallRange,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
    Distribution::FewUnique,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::SmallRange => "small_range_1000",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
            Self::FewUnique => "few_unique_16",
        }
    }

    fn salt(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::SmallRange => 12,
            Self::NearlySorted1pctSwaps => 13,
            Self::Descending => 14,
            Self::FewUnique => 15,
        }
    }
}

/// Larger inputs get flat sampling and a longer measurement window.
pub fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(MEASURE_MS_SMALL));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_XL));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);

    match dist {
        Distribution::RandomUniform => {
            for _ in 0..size {
                data.push(rng.random::<u64>());
            }
        }
        Distribution::SmallRange => {
            for _ in 0..size {
                data.push(rng.random_range(0..SMALL_RANGE_MAX));
            }
        }
        Distribution::NearlySorted1pctSwaps => {
            data.extend(0..size as u64);
            if size > 0 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
        }
        Distribution::Descending => {
            data.extend((0..size as u64).rev());
        }
        Distribution::FewUnique => {
            for _ in 0..size {
                data.push(rng.random_range(0..FEW_UNIQUE_KEYS) * 17);
            }
        }
    }

    data
}

#[inline]
pub fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ (dist.salt() << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
