pub mod mocks;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic rng so failing round-trip cases can be replayed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
