use serde::{Deserialize, Serialize};

/// Lifecycle phase of the dynamic camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraStatus {
    /// Not in use; the renderer looks through the regular viewpoint
    #[default]
    Idle,
    /// Travelling from the original pose to the controller's pose
    Positioning,
    /// Pinned to the controller's pose
    Observing,
    /// Travelling back to the original subject
    Returning,
    /// Back at the original subject, cleanup runs on the next tick
    Finished,
}

impl CameraStatus {
    /// Whether the camera currently owns the viewpoint and has a controller
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            CameraStatus::Positioning | CameraStatus::Observing | CameraStatus::Returning
        )
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            CameraStatus::Idle => "Idle",
            CameraStatus::Positioning => "Positioning",
            CameraStatus::Observing => "Observing",
            CameraStatus::Returning => "Returning",
            CameraStatus::Finished => "Finished",
        }
    }
}
