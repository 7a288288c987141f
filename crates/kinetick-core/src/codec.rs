//! Snapshot codec - transient motor state to replicable snapshot and back
//!
//! Both directions are pure, total functions. The only field that is not a
//! direct copy is the attachment: encoding turns the live platform key into
//! its stable identifier, decoding resolves the identifier back to a live
//! key. An identifier that does not resolve (the platform is not known to
//! this participant at this instant of the rollback) degrades the
//! attachment to "none" while preserving the stored platform velocity -
//! a documented one-way loss, never an error.

use crate::{AttachmentRegistry, CharacterSnapshot, MotorState, MoverState, PlatformSnapshot, Pose};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Configuration for the snapshot codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Replicate platform attachment identifiers
    ///
    /// When disabled, snapshots always carry [`crate::NetworkId::NONE`] and
    /// decoding never attaches; the embedding may instead keep attachment in
    /// a local per-tick buffer (see the replication crate's sidecar). The
    /// attached velocity is copied either way.
    pub moving_platforms: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            moving_platforms: true,
        }
    }
}

/// Bidirectional transform between transient state and snapshots
///
/// Borrows the registry for the duration of a capture or restore pass; the
/// registry is read-only from the codec's perspective.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotCodec<'a> {
    registry: &'a AttachmentRegistry,
    config: CodecConfig,
}

impl<'a> SnapshotCodec<'a> {
    /// Create a codec with the default configuration
    pub fn new(registry: &'a AttachmentRegistry) -> Self {
        Self {
            registry,
            config: CodecConfig::default(),
        }
    }

    /// Create a codec with an explicit configuration
    pub fn with_config(registry: &'a AttachmentRegistry, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    /// Get the active configuration
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Encode a motor's transient state into its replicable snapshot
    ///
    /// The pose and base velocity are not part of the snapshot; read them
    /// from the state directly and replicate them on their own channels.
    pub fn encode(&self, state: &MotorState) -> CharacterSnapshot {
        let attached_platform = if self.config.moving_platforms {
            state
                .attached_platform
                .map(|key| self.registry.id_of(key))
                .unwrap_or_default()
        } else {
            Default::default()
        };

        CharacterSnapshot {
            must_unground: state.must_unground,
            must_unground_time: state.must_unground_time,
            last_movement_iteration_found_any_ground: state
                .last_movement_iteration_found_any_ground,
            grounding: state.grounding,
            attached_platform_velocity: state.attached_platform_velocity,
            attached_platform,
        }
    }

    /// Decode a snapshot back into transient motor state
    ///
    /// `pose` and `base_velocity` supply the fields that replicate outside
    /// the snapshot: the transform channel and the separately smoothed
    /// velocity field. An unresolvable attachment identifier yields a
    /// detached state with the stored platform velocity intact.
    pub fn decode(
        &self,
        snapshot: &CharacterSnapshot,
        pose: Pose,
        base_velocity: Vec3,
    ) -> MotorState {
        let attached_platform = if self.config.moving_platforms {
            self.registry.resolve(snapshot.attached_platform)
        } else {
            None
        };

        MotorState {
            pose,
            base_velocity,
            must_unground: snapshot.must_unground,
            must_unground_time: snapshot.must_unground_time,
            last_movement_iteration_found_any_ground: snapshot
                .last_movement_iteration_found_any_ground,
            grounding: snapshot.grounding,
            attached_platform,
            attached_platform_velocity: snapshot.attached_platform_velocity,
        }
    }

    /// Encode a platform mover's transient state
    pub fn encode_mover(&self, state: &MoverState) -> PlatformSnapshot {
        PlatformSnapshot {
            position: state.position,
            rotation: state.rotation,
            velocity: state.velocity,
            angular_velocity: state.angular_velocity,
        }
    }

    /// Decode a platform snapshot back into transient mover state
    ///
    /// The rotation is re-normalized here: riders compose their own rotation
    /// with the platform's rotation delta, and a denormalized quaternion
    /// would corrupt that composition on every participant that applied it.
    pub fn decode_mover(&self, snapshot: &PlatformSnapshot) -> MoverState {
        let rotation = if snapshot.rotation.length_squared() > 0.0 {
            snapshot.rotation.normalize()
        } else {
            Quat::IDENTITY
        };

        MoverState {
            position: snapshot.position,
            rotation,
            velocity: snapshot.velocity,
            angular_velocity: snapshot.angular_velocity,
        }
    }
}
