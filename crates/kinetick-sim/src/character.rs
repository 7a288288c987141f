//! Character adapter - the two-phase wrapper around one motor

use crate::{CharacterMotor, PlatformQuery};
use glam::Vec3;
use kinetick_core::{MotorState, Pose};
use serde::{Deserialize, Serialize};

/// Per-character simulation options
///
/// The near-duplicate variants of the source design (with and without
/// moving-platform support, with and without platform rotation) collapse to
/// these two flags on one rig type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterConfig {
    /// Compose the character's rotation with the rotation delta of the
    /// platform it stands on, before phase-1 probing
    pub rotate_with_platform: bool,
    /// Interact with moving platforms at all
    pub moving_platforms: bool,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            rotate_with_platform: true,
            moving_platforms: true,
        }
    }
}

/// Optional per-character hook invoked after the tick's simulation work
///
/// Runs after the rig has captured its resultant base velocity, once per
/// simulated tick. Gameplay code uses it to read back the tick's outcome
/// (camera facing, animation velocity) without polling mid-tick state.
pub trait PostSimulate {
    fn post_simulate(&mut self, pose: Pose, base_velocity: Vec3);
}

/// Adapter around one character motor
///
/// Owns the motor, the character's committed world pose and the model-facing
/// base velocity. The orchestrator calls the phases in tick order; a
/// disabled rig is skipped for the whole tick without disturbing the
/// ordering of the others.
pub struct CharacterRig {
    motor: Box<dyn CharacterMotor>,
    config: CharacterConfig,
    enabled: bool,
    pose: Pose,
    base_velocity: Vec3,
    hook: Option<Box<dyn PostSimulate>>,
}

impl CharacterRig {
    /// Create a rig with the default configuration
    pub fn new(motor: Box<dyn CharacterMotor>) -> Self {
        Self::with_config(motor, CharacterConfig::default())
    }

    /// Create a rig with an explicit configuration
    pub fn with_config(motor: Box<dyn CharacterMotor>, config: CharacterConfig) -> Self {
        let pose = motor.transient_pose();
        let base_velocity = motor.base_velocity();
        Self {
            motor,
            config,
            enabled: true,
            pose,
            base_velocity,
            hook: None,
        }
    }

    /// Attach the post-simulate hook
    pub fn set_hook(&mut self, hook: Box<dyn PostSimulate>) {
        self.hook = Some(hook);
    }

    /// Enable or disable simulation of this character
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether this character simulates this tick
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Active configuration
    pub fn config(&self) -> CharacterConfig {
        self.config
    }

    /// Committed world pose (updated once per tick, after phase 2)
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Model-facing base velocity (captured at post-simulate)
    pub fn base_velocity(&self) -> Vec3 {
        self.base_velocity
    }

    /// Read the motor's complete transient state
    pub fn capture_state(&self) -> MotorState {
        self.motor.state()
    }

    /// Overwrite the motor's complete transient state
    ///
    /// The rig's committed pose and base velocity follow the restored state
    /// so that a rollback leaves no stale model-facing values behind.
    pub fn restore_state(&mut self, state: MotorState) {
        self.pose = state.pose;
        self.base_velocity = state.base_velocity;
        self.motor.apply_state(state);
    }

    /// Phase 1: platform rotation carry, then ground probing
    ///
    /// The rotation delta is applied before the motor probes so the ground
    /// normal checks run against the character's new facing.
    pub fn update_phase1(&mut self, dt: f32, platforms: &dyn PlatformQuery) {
        if self.config.moving_platforms && self.config.rotate_with_platform {
            if let Some(key) = self.motor.attached_platform() {
                if let Some(delta) = platforms.rotation_delta(key) {
                    let rotation = self.motor.transient_pose().rotation;
                    self.motor.set_rotation(rotation * delta);
                }
            }
        }
        self.motor.update_phase1(dt, platforms);
    }

    /// Phase 2: movement resolution, then the tick's single transform commit
    pub fn update_phase2(&mut self, dt: f32, platforms: &dyn PlatformQuery) {
        self.motor.update_phase2(dt, platforms);
        self.pose = self.motor.transient_pose();
    }

    /// Capture the motor's resultant base velocity and run the hook
    pub fn post_simulate(&mut self) {
        self.base_velocity = self.motor.base_velocity();
        if let Some(hook) = self.hook.as_mut() {
            hook.post_simulate(self.pose, self.base_velocity);
        }
    }
}
