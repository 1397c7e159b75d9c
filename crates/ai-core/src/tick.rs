use crate::{rng, AgentId, SplitMix64};

/// Per-frame input shared by every agent evaluated during the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    /// Simulated seconds since the previous tick. Timers accumulate this value.
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, seed: u64) -> Self {
        Self {
            tick,
            dt_seconds,
            seed,
        }
    }

    /// Elapsed time clamped to be non-negative, so accumulators never run backwards.
    pub fn dt(&self) -> f32 {
        self.dt_seconds.max(0.0)
    }

    /// The context for the following frame with the same step and seed.
    pub fn next(&self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            ..*self
        }
    }

    /// RNG stream that depends only on the run seed, the agent and `stream`.
    ///
    /// Callers that need fresh values every frame should keep the returned generator around
    /// instead of calling this again.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        let seed = rng::derive_seed(self.seed, agent.stable_id(), stream);
        SplitMix64::new(seed)
    }
}
