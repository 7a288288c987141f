//! Transient simulation state for character motors and platform movers
//!
//! Transient state is what a motor or mover carries between ticks: a
//! superset of what its snapshot encodes. It may reference live platforms
//! by [`PlatformKey`]; the codec in this crate is the only place where that
//! reference is translated to and from a replicable identifier.

use crate::PlatformKey;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A world-space position/rotation pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    /// The origin pose with identity rotation
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a pose from a position and rotation
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// Result of the motor's ground probing for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundingReport {
    /// Any ground was hit by the probe, stable or not
    pub found_any_ground: bool,
    /// The ground found is stable enough to stand on
    pub is_stable_on_ground: bool,
    /// Ground snapping was prevented this tick (e.g. while ungrounding)
    pub snapping_prevented: bool,
    pub ground_normal: Vec3,
    pub inner_ground_normal: Vec3,
    pub outer_ground_normal: Vec3,
}

/// Complete transient state of a character motor
///
/// Produced by `CharacterMotor::state` and consumed by
/// `CharacterMotor::apply_state`. The attached platform is a live local
/// handle, so this type is not serializable; `CharacterSnapshot` is its
/// wire form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotorState {
    /// Resolved world pose (replicated on the transform channel, not in the
    /// snapshot)
    pub pose: Pose,
    /// Velocity of the character itself, excluding platform carry
    /// (replicated as its own smoothed field, not in the snapshot)
    pub base_velocity: Vec3,
    /// Forced-unground request is pending
    pub must_unground: bool,
    /// Remaining forced-unground time in seconds
    pub must_unground_time: f32,
    /// The last internal movement iteration hit ground
    pub last_movement_iteration_found_any_ground: bool,
    /// Ground probe result of the previous phase 1
    pub grounding: GroundingReport,
    /// Platform the character currently stands on, if any
    pub attached_platform: Option<PlatformKey>,
    /// Linear velocity of the attached platform at the character's position
    pub attached_platform_velocity: Vec3,
}

/// Complete transient state of a platform mover
///
/// Plain data; unlike [`MotorState`] there is no live reference to
/// translate, so this type doubles as the body of `PlatformSnapshot`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoverState {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
}
