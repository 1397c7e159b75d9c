//! Behavior tree runtime built on `ai-core`.
//!
//! The node set is closed: [`Node`] is a named wrapper around [`NodeKind`], one of
//! Sequence, Selector, Parallel, Repeater or Leaf. Leaves adapt an open-ended
//! [`Behavior`], which is where agent logic lives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod node;

pub use behavior::Behavior;
pub use node::{Node, NodeKind};
