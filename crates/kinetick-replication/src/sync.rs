//! Snapshot apply/capture glue around the tick
//!
//! The rollback loop brackets every (re)simulated tick: restore state into
//! the rigs, run the tick, capture state back out. These helpers pin the
//! codec to that bracket so the simulation itself never sees a snapshot.
//!
//! Position, rotation and base velocity travel next to the snapshot, not
//! inside it (they replicate on the transform channel and a separately
//! smoothed velocity field), so captures carry them as siblings and
//! restores take them as arguments. The platform's motion clock travels the
//! same way next to the platform snapshot.

use crate::{Error, Result};
use glam::Vec3;
use kinetick_core::{
    AttachmentRegistry, CharacterId, CharacterSnapshot, CodecConfig, PlatformKey,
    PlatformSnapshot, Pose, SnapshotCodec,
};
use kinetick_sim::Simulation;

/// One character's replicated state for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterCapture {
    pub snapshot: CharacterSnapshot,
    /// Replicated on the transform channel
    pub pose: Pose,
    /// Replicated as its own smoothed field
    pub base_velocity: Vec3,
}

/// One platform's replicated state for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformCapture {
    pub snapshot: PlatformSnapshot,
    /// Motion clock in seconds, replicated next to the snapshot
    pub clock: f32,
}

/// Capture a character's state right after a tick
pub fn capture_character(
    sim: &Simulation,
    registry: &AttachmentRegistry,
    config: CodecConfig,
    id: CharacterId,
) -> Result<CharacterCapture> {
    let rig = sim.character(id).ok_or(Error::UnknownCharacter(id))?;
    let state = rig.capture_state();
    let codec = SnapshotCodec::with_config(registry, config);
    Ok(CharacterCapture {
        snapshot: codec.encode(&state),
        pose: state.pose,
        base_velocity: state.base_velocity,
    })
}

/// Restore a character's state right before a tick
///
/// An attachment identifier that no longer resolves degrades to "none";
/// the rider detaches gracefully instead of failing the restore.
pub fn restore_character(
    sim: &mut Simulation,
    registry: &AttachmentRegistry,
    config: CodecConfig,
    id: CharacterId,
    snapshot: &CharacterSnapshot,
    pose: Pose,
    base_velocity: Vec3,
) -> Result<()> {
    let codec = SnapshotCodec::with_config(registry, config);
    let state = codec.decode(snapshot, pose, base_velocity);
    let rig = sim.character_mut(id).ok_or(Error::UnknownCharacter(id))?;
    rig.restore_state(state);
    Ok(())
}

/// Capture a platform's state right after a tick
pub fn capture_platform(
    sim: &Simulation,
    registry: &AttachmentRegistry,
    config: CodecConfig,
    key: PlatformKey,
) -> Result<PlatformCapture> {
    let rig = sim.platform(key).ok_or(Error::UnknownPlatform(key))?;
    let codec = SnapshotCodec::with_config(registry, config);
    Ok(PlatformCapture {
        snapshot: codec.encode_mover(&rig.state()),
        clock: rig.clock(),
    })
}

/// Restore a platform's state right before a tick
pub fn restore_platform(
    sim: &mut Simulation,
    registry: &AttachmentRegistry,
    config: CodecConfig,
    key: PlatformKey,
    snapshot: &PlatformSnapshot,
    clock: f32,
) -> Result<()> {
    let codec = SnapshotCodec::with_config(registry, config);
    let state = codec.decode_mover(snapshot);
    let rig = sim.platform_mut(key).ok_or(Error::UnknownPlatform(key))?;
    rig.apply_state(state);
    rig.set_clock(clock);
    Ok(())
}
