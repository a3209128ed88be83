//! InfinityLib Camera - Dynamic camera transitions
//!
//! Moves the player's viewpoint from wherever it currently is to a pose
//! chosen by a controller, holds it there while the controller wants, and
//! brings it back smoothly afterwards. The host engine is reached through
//! the [`CameraHost`] trait and drives everything with one `tick` per
//! simulation step.

mod camera;
mod config;
mod controller;
mod host;
mod session;
mod status;

pub use camera::DynamicCamera;
pub use config::{CameraConfig, CameraConfigError};
pub use controller::DynamicCameraController;
pub use host::{CameraHost, PointOfView, Viewpoint};
pub use session::CameraSession;
pub use status::CameraStatus;
