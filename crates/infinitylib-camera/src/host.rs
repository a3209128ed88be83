//! Host engine seams used by the dynamic camera

use infinitylib_core::{Aabb, Pose};
use serde::{Deserialize, Serialize};

/// What the renderer currently looks through
#[derive(Debug, Clone, PartialEq)]
pub enum Viewpoint<S> {
    /// A regular host entity, usually the local player
    Subject(S),
    /// The dynamic camera
    DynamicCamera,
}

/// Perspective mode of the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointOfView {
    #[default]
    FirstPerson,
    ThirdPersonBack,
    ThirdPersonFront,
}

/// The parts of the host engine the dynamic camera reads and drives.
///
/// Subjects are host entity handles; the camera only stores and clones them.
pub trait CameraHost {
    type Subject: Clone;

    /// Whether a world is loaded and the camera may exist
    fn is_session_ready(&self) -> bool;

    /// Viewpoint the renderer uses right now
    fn active_viewpoint(&self) -> Viewpoint<Self::Subject>;

    /// Switch the renderer's viewpoint
    fn set_active_viewpoint(&mut self, viewpoint: Viewpoint<Self::Subject>);

    /// The subject that owns the viewpoint by default (the local player)
    fn default_subject(&self) -> Option<Self::Subject>;

    /// Current perspective mode
    fn point_of_view(&self) -> PointOfView;

    /// Change the perspective mode
    fn set_point_of_view(&mut self, point_of_view: PointOfView);

    /// Eye position and orientation of a subject, interpolated by
    /// `partial_tick`. `None` when the subject no longer exists.
    fn sample_pose(&self, subject: &Self::Subject, partial_tick: f32) -> Option<Pose>;

    /// Render bounding box of a subject
    fn bounding_box(&self, subject: &Self::Subject) -> Option<Aabb>;
}
