use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_2026;

/// Sample-size and timing presets shared by the workspace benches, keyed by
/// how long one iteration of the benched routine is expected to run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeTier {
    Small,
    Medium,
    Large,
}

impl RuntimeTier {
    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        let (samples, warm_up_ms, measure_ms) = match self {
            Self::Small => (15, 100, 200),
            Self::Medium => (15, 500, 1_000),
            Self::Large => (10, 800, 1_500),
        };
        group.sample_size(samples);
        group.warm_up_time(Duration::from_millis(warm_up_ms));
        group.measurement_time(Duration::from_millis(measure_ms));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
