//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! - `core`: tick context, world traits, deterministic RNG
//! - `fsm`: enter/update/exit state machines
//! - `bt`: behavior tree nodes (sequence, selector, parallel, repeater, leaf)
//! - `nav`: navigation capability and kinematic movers
//! - `perception`: boundary-crossing triggers and latches
//! - `behaviors`: pursue, wander, melee and ranged attacks, agent assembly

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "fsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "fsm")))]
pub use ai_fsm as fsm;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use ai_bt as bt;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ai_nav as nav;

#[cfg(feature = "perception")]
#[cfg_attr(docsrs, doc(cfg(feature = "perception")))]
pub use ai_perception as perception;

#[cfg(feature = "behaviors")]
#[cfg_attr(docsrs, doc(cfg(feature = "behaviors")))]
pub use ai_behaviors as behaviors;
