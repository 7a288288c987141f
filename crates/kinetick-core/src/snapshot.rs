//! Replicable snapshots of character and platform state
//!
//! Snapshots are plain data: every field is directly serializable, and live
//! platform references are flattened to a stable [`NetworkId`]. The
//! embedding network layer owns storage and replication of these values;
//! this crate only transcodes them.

use crate::{GroundingReport, NetworkId};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Replicable snapshot of one character's motor state
///
/// Position, rotation and base velocity are intentionally absent: they
/// replicate on their own channels (the transform channel and a separately
/// smoothed velocity field), so the snapshot carries only the grounding and
/// attachment state that has no other home.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub must_unground: bool,
    pub must_unground_time: f32,
    pub last_movement_iteration_found_any_ground: bool,
    pub grounding: GroundingReport,
    /// Linear velocity of the attached platform, preserved even when the
    /// attachment identifier cannot be resolved locally
    pub attached_platform_velocity: Vec3,
    /// Stable identifier of the attached platform; [`NetworkId::NONE`] when
    /// the character is not riding anything
    pub attached_platform: NetworkId,
}

/// Replicable snapshot of one platform mover
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformSnapshot {
    pub position: Vec3,
    /// Unit-norm by construction on capture; re-normalized on apply because
    /// a denormalized rotation corrupts the rotation-delta composition used
    /// by riders
    pub rotation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
}
