//! Boundary-crossing perception.
//!
//! Perception runs at the physics cadence, decisions at the tick cadence. The two meet
//! through [`Latch`]es: a [`PerceptionTrigger`] fires one event per crossing, each
//! subscriber stores the latest value, and behaviors read it when they are processed.
//! Nothing in a trigger callback touches the behavior tree.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod latch;
pub mod sensors;
pub mod trigger;
pub mod volume;

pub use latch::Latch;
pub use sensors::Sensors;
pub use trigger::{Crossing, PerceptionTrigger, TriggerKind};
pub use volume::{SphereVolume, TriggerVolume};
