//! Navigation capability consumed by agent behaviors.
//!
//! Pathfinding itself is the environment's business. Behaviors only command a
//! destination, query remaining/stopping distance, and validate candidate points
//! against a [`NavSurface`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod body;
pub mod grid;
pub mod math;
pub mod surface;
pub mod world;

pub use body::NavBody;
pub use grid::NavGrid;
pub use math::Vec3;
pub use surface::{NavSurface, OpenSurface};
pub use world::{NavWorldMut, NavWorldView, ARRIVAL_TOLERANCE};
