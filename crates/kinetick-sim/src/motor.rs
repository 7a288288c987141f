//! Collaborator traits for the character motor and platform queries
//!
//! The motor's geometry - capsule probing, sweeps, step and slope handling,
//! depenetration - lives outside this crate. What the orchestrator needs is
//! the two-phase update contract and a total state get/set pair, and that
//! the implementation is a deterministic, pure function of its inputs.

use glam::{Quat, Vec3};
use kinetick_core::{MotorState, PlatformKey, Pose};

/// The character motor collaborator
///
/// One instance per simulated character. Implementations must be
/// deterministic: identical state + identical inputs + identical platform
/// poses must produce bit-identical results on every participant and every
/// resimulation.
pub trait CharacterMotor {
    /// Probe supporting ground and compute the unconstrained (pre-collision)
    /// velocity for this tick. Must not commit a world transform; platform
    /// poses visible through `platforms` are still last tick's committed
    /// poses at this point.
    fn update_phase1(&mut self, dt: f32, platforms: &dyn PlatformQuery);

    /// Resolve movement against obstacles and ground using the phase-1
    /// velocity, updating the transient pose. Platforms have committed their
    /// new poses by the time this runs.
    fn update_phase2(&mut self, dt: f32, platforms: &dyn PlatformQuery);

    /// Read the complete transient simulation state
    fn state(&self) -> MotorState;

    /// Overwrite the complete transient simulation state
    fn apply_state(&mut self, state: MotorState);

    /// Current transient pose (resolved pose after phase 2)
    fn transient_pose(&self) -> Pose;

    /// Overwrite the transient rotation, keeping everything else
    fn set_rotation(&mut self, rotation: Quat);

    /// Resultant character velocity, excluding platform carry
    fn base_velocity(&self) -> Vec3;

    /// Platform the character currently stands on, if any
    fn attached_platform(&self) -> Option<PlatformKey>;
}

/// Read access to the registered platforms during a tick
///
/// Handed to the motor in both phases. `pose` answers with the committed
/// world pose - previous tick's during phase 1, this tick's during phase 2 -
/// while `velocity` and `rotation_delta` answer from the transient state
/// computed by this tick's velocity update.
pub trait PlatformQuery {
    /// Committed world pose of a platform
    fn pose(&self, key: PlatformKey) -> Option<Pose>;

    /// Transient (linear, angular) velocity of a platform for this tick
    fn velocity(&self, key: PlatformKey) -> Option<(Vec3, Vec3)>;

    /// Rotation delta of a platform since its last simulated pose
    fn rotation_delta(&self, key: PlatformKey) -> Option<Quat>;
}
