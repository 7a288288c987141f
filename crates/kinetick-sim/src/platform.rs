//! Platform mover adapter and the ordered platform registry

use crate::{MotionFunction, PlatformQuery};
use glam::{Quat, Vec3};
use indexmap::IndexMap;
use kinetick_core::{MoverState, PlatformKey, Pose};

/// Adapter around one moving platform
///
/// Owns the platform's motion clock and transient pose. The orchestrator
/// drives it in two steps per tick: `velocity_update` advances the clock and
/// derives this tick's velocities from the pose delta, `commit` publishes
/// the transient pose as the platform's world transform.
pub struct PlatformRig {
    motion: Box<dyn MotionFunction>,
    /// Motion time in seconds; rollback-sensitive, replicated alongside the
    /// platform snapshot
    clock: f32,
    transient: Pose,
    last_simulated: Pose,
    committed: Pose,
    velocity: Vec3,
    angular_velocity: Vec3,
}

impl PlatformRig {
    /// Create a rig at a starting pose
    pub fn new(motion: Box<dyn MotionFunction>, start: Pose) -> Self {
        Self {
            motion,
            clock: 0.0,
            transient: start,
            last_simulated: start,
            committed: start,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        }
    }

    /// Advance the motion clock and recompute target pose and velocities
    ///
    /// Records the current transient pose as the "last simulated" pose that
    /// rider rotation deltas are measured against.
    pub fn velocity_update(&mut self, dt: f32) {
        self.last_simulated = self.transient;
        self.clock += dt;

        let goal = self.motion.sample(self.clock);
        if dt > 0.0 {
            self.velocity = (goal.position - self.transient.position) / dt;
            let delta = goal.rotation * self.transient.rotation.inverse();
            let (axis, angle) = delta.to_axis_angle();
            self.angular_velocity = axis * (angle / dt);
        }
        self.transient = goal;
    }

    /// Publish the transient pose as the committed world transform
    pub fn commit(&mut self) {
        self.committed = self.transient;
    }

    /// Committed world pose
    pub fn pose(&self) -> Pose {
        self.committed
    }

    /// Transient pose (ahead of the committed pose between `velocity_update`
    /// and `commit`)
    pub fn transient_pose(&self) -> Pose {
        self.transient
    }

    /// Rotation delta since the last simulated pose
    pub fn rotation_delta(&self) -> Quat {
        self.transient.rotation * self.last_simulated.rotation.inverse()
    }

    /// Linear velocity for this tick
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Angular velocity for this tick
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Motion clock in seconds
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Restore the motion clock (replicated next to the platform snapshot)
    pub fn set_clock(&mut self, clock: f32) {
        self.clock = clock;
    }

    /// Read the transient mover state
    pub fn state(&self) -> MoverState {
        MoverState {
            position: self.transient.position,
            rotation: self.transient.rotation,
            velocity: self.velocity,
            angular_velocity: self.angular_velocity,
        }
    }

    /// Overwrite the transient mover state
    ///
    /// Teleports every internal pose to the restored one, so the next
    /// rotation delta is measured from the restored pose rather than from a
    /// stale pre-rollback pose.
    pub fn apply_state(&mut self, state: MoverState) {
        let pose = Pose::new(state.position, state.rotation);
        self.transient = pose;
        self.last_simulated = pose;
        self.committed = pose;
        self.velocity = state.velocity;
        self.angular_velocity = state.angular_velocity;
    }
}

/// Ordered registry of platform rigs
///
/// Registration order is iteration order on every participant; removal
/// shifts instead of swapping so the relative order of the survivors never
/// changes.
#[derive(Default)]
pub struct PlatformSet {
    rigs: IndexMap<PlatformKey, PlatformRig>,
    next_key: u64,
}

impl PlatformSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rig, assigning it a fresh key
    pub fn insert(&mut self, rig: PlatformRig) -> PlatformKey {
        let key = PlatformKey(self.next_key);
        self.next_key += 1;
        self.rigs.insert(key, rig);
        key
    }

    /// Deregister a rig, preserving the order of the others
    pub fn remove(&mut self, key: PlatformKey) -> Option<PlatformRig> {
        self.rigs.shift_remove(&key)
    }

    /// Get a rig by key
    pub fn get(&self, key: PlatformKey) -> Option<&PlatformRig> {
        self.rigs.get(&key)
    }

    /// Get a rig mutably by key
    pub fn get_mut(&mut self, key: PlatformKey) -> Option<&mut PlatformRig> {
        self.rigs.get_mut(&key)
    }

    /// Iterate rigs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (PlatformKey, &PlatformRig)> {
        self.rigs.iter().map(|(key, rig)| (*key, rig))
    }

    /// Iterate rigs mutably in registration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlatformKey, &mut PlatformRig)> {
        self.rigs.iter_mut().map(|(key, rig)| (*key, rig))
    }

    /// Number of registered platforms
    pub fn len(&self) -> usize {
        self.rigs.len()
    }

    /// Check if no platforms are registered
    pub fn is_empty(&self) -> bool {
        self.rigs.is_empty()
    }
}

impl PlatformQuery for PlatformSet {
    fn pose(&self, key: PlatformKey) -> Option<Pose> {
        self.get(key).map(|rig| rig.pose())
    }

    fn velocity(&self, key: PlatformKey) -> Option<(Vec3, Vec3)> {
        self.get(key).map(|rig| (rig.velocity(), rig.angular_velocity()))
    }

    fn rotation_delta(&self, key: PlatformKey) -> Option<Quat> {
        self.get(key).map(|rig| rig.rotation_delta())
    }
}
