//! Minimal finite state machine for behavior-owned agent logic.
//!
//! A behavior registers its states once, then drives the machine from its per-tick
//! `process`. States only request transitions from [`State::update`]; the machine applies
//! them (exit old, enter new) before `update` returns.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod machine;
pub mod state;

pub use machine::StateMachine;
pub use state::{State, StateCx, StateId, Transition};
