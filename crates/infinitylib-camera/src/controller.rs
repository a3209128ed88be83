use infinitylib_core::Pose;

/// Decides where the dynamic camera goes and for how long it stays there.
///
/// Controllers are shared with the camera as `Rc<dyn DynamicCameraController>`
/// and compared by pointer identity, so callbacks take `&self`; use `Cell`
/// or `RefCell` for any state they need to update.
pub trait DynamicCameraController {
    /// Number of ticks a transition to or from the observer pose takes
    fn transition_duration(&self) -> u32;

    /// Pose to observe from. Queried every tick, so it may follow a moving
    /// subject.
    fn observer_pose(&self) -> Pose;

    /// Whether the camera should stay at (or keep moving to) the observer pose
    fn should_continue_observing(&self) -> bool;

    /// The camera took over the viewpoint and starts moving
    fn on_camera_activated(&self) {}

    /// The camera reached the observer pose
    fn on_observation_start(&self) {}

    /// Observation was ended, either by the controller or by a stop request
    fn on_observation_end(&self) {}

    /// The camera is back at the original subject and released the viewpoint
    fn on_camera_deactivated(&self) {}

    /// The host's field of view changed while this controller was in charge
    fn on_field_of_view_changed(&self, _fov: f32) {}
}
