//! Dynamic camera configuration

use serde::{Deserialize, Serialize};

use crate::host::PointOfView;

/// Dynamic camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Perspective forced on the host while the camera owns the viewpoint
    pub observation_point_of_view: PointOfView,
    /// Edge length of the camera's own bounding cube, in blocks
    pub camera_size: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            observation_point_of_view: PointOfView::FirstPerson,
            camera_size: 1.0 / 16.0,
        }
    }
}

impl CameraConfig {
    /// Check the configuration for values the camera cannot use
    pub fn validate(&self) -> Result<(), CameraConfigError> {
        if !self.camera_size.is_finite() || self.camera_size <= 0.0 {
            return Err(CameraConfigError::InvalidSize(self.camera_size));
        }
        Ok(())
    }
}

/// Errors for unusable camera configurations
#[derive(Debug, Clone, thiserror::Error)]
pub enum CameraConfigError {
    #[error("Camera size must be positive, got {0}")]
    InvalidSize(f64),
}
