//! Deterministic random sampling.
//!
//! Small and dependency-free so a seed replays the same decisions on every platform.
//! Not cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `[0, 1)` built from the top 24 bits.
    fn next_unit(&mut self) -> f32 {
        let bits = self.next_u32() >> 8;
        bits as f32 / (1u32 << 24) as f32
    }

    /// Uniform value between `min` and `max`; the bounds may be given in either order.
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform point inside the unit disk, as `(x, y)`.
    ///
    /// Rejection sampling on the enclosing square; terminates with probability one and in
    /// practice within a couple of draws.
    fn unit_disk(&mut self) -> (f32, f32) {
        loop {
            let x = self.next_unit() * 2.0 - 1.0;
            let y = self.next_unit() * 2.0 - 1.0;
            if x * x + y * y <= 1.0 {
                return (x, y);
            }
        }
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        mix64(self.state)
    }
}

fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Derive an independent seed for one agent and one consumer (`stream`) from the run seed.
pub fn derive_seed(run_seed: u64, agent_id: u64, stream: u64) -> u64 {
    mix64(run_seed ^ mix64(agent_id.wrapping_add(0x9E37_79B9_7F4A_7C15)) ^ mix64(stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_within_bounds_in_either_order() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..1_000 {
            let v = rng.range_f32(2.0, 5.0);
            assert!((2.0..=5.0).contains(&v));
            let w = rng.range_f32(5.0, 2.0);
            assert!((2.0..=5.0).contains(&w));
        }
    }

    #[test]
    fn unit_disk_samples_lie_inside_disk() {
        let mut rng = SplitMix64::new(99);
        for _ in 0..1_000 {
            let (x, y) = rng.unit_disk();
            assert!(x * x + y * y <= 1.0);
        }
    }

    #[test]
    fn derived_seeds_differ_per_agent_and_stream() {
        assert_ne!(derive_seed(1, 1, 0), derive_seed(1, 2, 0));
        assert_ne!(derive_seed(1, 1, 0), derive_seed(1, 1, 1));
        assert_eq!(derive_seed(1, 1, 0), derive_seed(1, 1, 0));
    }
}
