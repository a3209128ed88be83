//! Core types used throughout InfinityLib

use glam::DVec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for host entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize a pair of yaw angles so that interpolating linearly from the
/// first to the second never sweeps more than half a turn.
///
/// Both angles are wrapped into `[0, 360)`, then whichever one is larger is
/// shifted down by a full turn when they are more than 180 degrees apart.
pub fn shortest_yaw_pair(start: f32, end: f32) -> (f32, f32) {
    let mut start = wrap_degrees(start);
    let mut end = wrap_degrees(end);
    if end - start > 180.0 {
        end -= 360.0;
    } else if end - start < -180.0 {
        start -= 360.0;
    }
    (start, end)
}

/// Position and orientation of a viewpoint.
///
/// Positions use double precision like the host world; pitch and yaw are in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl Pose {
    /// Create a pose from a position and orientation
    pub fn new(position: DVec3, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            pitch,
            yaw,
        }
    }

    /// Create a pose at the given position looking straight ahead
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Pose at `position` facing `target`.
    ///
    /// Yaw 0 faces +Z and grows clockwise seen from above; positive pitch
    /// looks down.
    pub fn looking_at(position: DVec3, target: DVec3) -> Self {
        let delta = target - position;
        let horizontal = (delta.x * delta.x + delta.z * delta.z).sqrt();
        let yaw = delta.z.atan2(delta.x).to_degrees() - 90.0;
        let pitch = -delta.y.atan2(horizontal).to_degrees();
        Self {
            position,
            pitch: pitch as f32,
            yaw: wrap_degrees(yaw as f32),
        }
    }

    /// Per-field linear interpolation, used to sample between two
    /// consecutive ticks. Yaw turns along the shortest arc starting from
    /// `a.yaw`, so the two ends may be stored a full turn apart.
    pub fn lerp(a: &Pose, b: &Pose, t: f32) -> Pose {
        let mut yaw_delta = wrap_degrees(b.yaw - a.yaw);
        if yaw_delta > 180.0 {
            yaw_delta -= 360.0;
        }
        Pose {
            position: a.position.lerp(b.position, t as f64),
            pitch: a.pitch + (b.pitch - a.pitch) * t,
            yaw: a.yaw + yaw_delta * t,
        }
    }

    /// Move `ratio` of the way from `start` to `end`, turning along the
    /// shortest yaw arc.
    pub fn interpolate_towards(start: &Pose, end: &Pose, ratio: f64) -> Pose {
        let ratio_f = ratio as f32;
        let (start_yaw, end_yaw) = shortest_yaw_pair(start.yaw, end.yaw);
        Pose {
            position: start.position + (end.position - start.position) * ratio,
            pitch: start.pitch + (end.pitch - start.pitch) * ratio_f,
            yaw: start_yaw + (end_yaw - start_yaw) * ratio_f,
        }
    }
}

/// Axis aligned bounding box in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Create a box from two corners, in any order
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box of the given size centred on a point
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Whether a point lies inside the box (min inclusive, max exclusive)
    pub fn contains(&self, point: DVec3) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
            && point.z >= self.min.z
            && point.z < self.max.z
    }
}
