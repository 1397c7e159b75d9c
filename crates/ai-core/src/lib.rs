//! Deterministic, engine-agnostic primitives shared by the decision-engine crates.
//!
//! Everything here is driven by a single simulation thread: one [`TickContext`] per frame,
//! one evaluation per agent per tick.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod rng;
pub mod status;
pub mod tick;
pub mod world;

pub use agent::AgentId;
pub use rng::{derive_seed, DeterministicRng, SplitMix64};
pub use status::{Outcome, Status};
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
