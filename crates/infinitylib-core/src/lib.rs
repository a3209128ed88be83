//! InfinityLib Core - Core types and utilities shared by InfinityLib modules
//!
//! This crate provides the foundational types used throughout the library:
//! - Mathematical primitives (re-exported from glam)
//! - Poses and bounding boxes in block-world coordinates
//! - A fixed-step tick clock producing partial-tick fractions

pub mod time;
pub mod types;

pub use glam::DVec3;
pub use time::{TickClock, TimeConfig, TimeConfigError};
pub use types::{shortest_yaw_pair, wrap_degrees, Aabb, EntityId, Pose};
