//! The simulation orchestrator
//!
//! `Simulation` owns the ordered registries of character and platform rigs
//! and exposes exactly one transition: `run_tick`. The embedding rollback
//! system calls it once per live tick and once per resimulated tick, after
//! applying restored state and before capturing new state.

use crate::{CharacterRig, NullWorld, PlatformRig, PlatformSet, WorldHooks};
use indexmap::IndexMap;
use kinetick_core::{CharacterId, PlatformKey};

/// Outcome summary of one tick
///
/// The orchestrator does not log; it reports. The embedding decides what to
/// do with the numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub dt: f32,
    /// Platforms advanced this tick
    pub platforms: usize,
    /// Characters that ran both phases
    pub simulated: usize,
    /// Characters skipped because their rig was disabled
    pub skipped: usize,
}

/// Ordered registries plus the deterministic tick driver
///
/// Between ticks the simulation is idle; registration and deregistration
/// happen only then. During `run_tick` the registries are never mutated,
/// and `&mut self` makes reentry unrepresentable.
pub struct Simulation {
    characters: IndexMap<CharacterId, CharacterRig>,
    platforms: PlatformSet,
    world: Box<dyn WorldHooks>,
    next_character: u64,
}

impl Simulation {
    /// Create a simulation with no engine attached
    pub fn new() -> Self {
        Self::with_world(Box::new(NullWorld))
    }

    /// Create a simulation reporting into the given world hooks
    pub fn with_world(world: Box<dyn WorldHooks>) -> Self {
        Self {
            characters: IndexMap::new(),
            platforms: PlatformSet::new(),
            world,
            next_character: 0,
        }
    }

    /// Register a character, appending it to the simulation order
    pub fn register_character(&mut self, rig: CharacterRig) -> CharacterId {
        let id = CharacterId(self.next_character);
        self.next_character += 1;
        self.characters.insert(id, rig);
        id
    }

    /// Deregister a character, preserving the order of the others
    ///
    /// Returns `None` when the id is not registered - a stale deregister
    /// after a relevance change is not an error.
    pub fn deregister_character(&mut self, id: CharacterId) -> Option<CharacterRig> {
        self.characters.shift_remove(&id)
    }

    /// Register a platform, appending it to the simulation order
    pub fn register_platform(&mut self, rig: PlatformRig) -> PlatformKey {
        self.platforms.insert(rig)
    }

    /// Deregister a platform, preserving the order of the others
    pub fn deregister_platform(&mut self, key: PlatformKey) -> Option<PlatformRig> {
        self.platforms.remove(key)
    }

    /// Get a character rig
    pub fn character(&self, id: CharacterId) -> Option<&CharacterRig> {
        self.characters.get(&id)
    }

    /// Get a character rig mutably (between ticks only)
    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut CharacterRig> {
        self.characters.get_mut(&id)
    }

    /// Get a platform rig
    pub fn platform(&self, key: PlatformKey) -> Option<&PlatformRig> {
        self.platforms.get(key)
    }

    /// Get a platform rig mutably (between ticks only)
    pub fn platform_mut(&mut self, key: PlatformKey) -> Option<&mut PlatformRig> {
        self.platforms.get_mut(key)
    }

    /// The platform registry, in simulation order
    pub fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    /// Character ids in simulation order
    pub fn character_ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.keys().copied()
    }

    /// Number of registered characters
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Run one deterministic tick
    ///
    /// Strict order: transform sync, platform velocity updates, character
    /// phase 1, platform transform commits, character phase 2 plus
    /// post-simulate, transform sync. Phase 1 sees last tick's platform
    /// poses, phase 2 sees this tick's - that split is what the rollback
    /// capture/restore cycle assumes, and reordering breaks bit-for-bit
    /// reproducibility.
    pub fn run_tick(&mut self, dt: f32) -> TickReport {
        let Self {
            characters,
            platforms,
            world,
            ..
        } = self;

        let mut simulated = 0;
        let mut skipped = 0;

        world.sync_transforms();

        for (_, platform) in platforms.iter_mut() {
            platform.velocity_update(dt);
        }

        for rig in characters.values_mut() {
            if rig.is_enabled() {
                rig.update_phase1(dt, &*platforms);
            }
        }

        for (key, platform) in platforms.iter_mut() {
            platform.commit();
            world.platform_moved(key, platform.pose());
        }

        for (id, rig) in characters.iter_mut() {
            if !rig.is_enabled() {
                skipped += 1;
                continue;
            }
            rig.update_phase2(dt, &*platforms);
            world.character_moved(*id, rig.pose());
            rig.post_simulate();
            simulated += 1;
        }

        world.sync_transforms();

        TickReport {
            dt,
            platforms: platforms.len(),
            simulated,
            skipped,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CharacterMotor, CharacterRig, PlatformQuery, WaveMotion};
    use crate::motion::MotionFunction;
    use glam::{Quat, Vec3};
    use kinetick_core::{MotorState, Pose};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Deterministic stand-in for the external motor: when attached it rides
    /// the platform's committed pose at a fixed height, otherwise it drifts
    /// at its commanded velocity. Its entire behavior is a function of
    /// `MotorState` plus construction-time parameters, so capture/restore
    /// reproduces it exactly.
    struct RiderMotor {
        state: MotorState,
        input_velocity: Vec3,
        ride_height: f32,
    }

    impl RiderMotor {
        fn drifting(input_velocity: Vec3) -> Self {
            Self {
                state: MotorState::default(),
                input_velocity,
                ride_height: 1.0,
            }
        }

        fn riding(platform: kinetick_core::PlatformKey) -> Self {
            let mut motor = Self::drifting(Vec3::ZERO);
            motor.state.attached_platform = Some(platform);
            motor
        }
    }

    impl CharacterMotor for RiderMotor {
        fn update_phase1(&mut self, _dt: f32, platforms: &dyn PlatformQuery) {
            if let Some(key) = self.state.attached_platform {
                match platforms.velocity(key) {
                    Some((linear, _)) => self.state.attached_platform_velocity = linear,
                    None => {
                        self.state.attached_platform = None;
                        self.state.attached_platform_velocity = Vec3::ZERO;
                    }
                }
            }
            let riding = self.state.attached_platform.is_some();
            self.state.grounding.found_any_ground = riding;
            self.state.grounding.is_stable_on_ground = riding;
            self.state.grounding.ground_normal = if riding { Vec3::Y } else { Vec3::ZERO };
            self.state.base_velocity = self.input_velocity;
        }

        fn update_phase2(&mut self, dt: f32, platforms: &dyn PlatformQuery) {
            match self.state.attached_platform.and_then(|key| platforms.pose(key)) {
                Some(pose) => {
                    self.state.pose.position = pose.position + Vec3::Y * self.ride_height;
                }
                None => {
                    self.state.pose.position += self.state.base_velocity * dt;
                }
            }
        }

        fn state(&self) -> MotorState {
            self.state
        }

        fn apply_state(&mut self, state: MotorState) {
            self.state = state;
        }

        fn transient_pose(&self) -> Pose {
            self.state.pose
        }

        fn set_rotation(&mut self, rotation: Quat) {
            self.state.pose.rotation = rotation;
        }

        fn base_velocity(&self) -> Vec3 {
            self.state.base_velocity
        }

        fn attached_platform(&self) -> Option<kinetick_core::PlatformKey> {
            self.state.attached_platform
        }
    }

    fn slider(amplitude: f32) -> PlatformRig {
        let motion = WaveMotion {
            translation_amplitude: amplitude,
            translation_rate: 1.0,
            rotation_rate: 0.0,
            ..WaveMotion::at(Vec3::ZERO)
        };
        PlatformRig::new(Box::new(motion), Pose::IDENTITY)
    }

    #[test]
    fn test_scenario_rider_sees_new_platform_pose() {
        // Registration order [platformA, platformB, characterC], C attached
        // to A, one tick of 0.02s
        let mut sim = Simulation::new();
        let platform_a = sim.register_platform(slider(2.0));
        let _platform_b = sim.register_platform(slider(5.0));
        let character_c =
            sim.register_character(CharacterRig::new(Box::new(RiderMotor::riding(platform_a))));

        sim.run_tick(0.02);

        let expected_platform = WaveMotion {
            translation_amplitude: 2.0,
            translation_rate: 1.0,
            rotation_rate: 0.0,
            ..WaveMotion::at(Vec3::ZERO)
        }
        .sample(0.02);

        // A advanced per its motion function before C's phase 2 ran
        let a_pose = sim.platform(platform_a).unwrap().pose();
        assert_eq!(a_pose.position, expected_platform.position);

        // C resolved against A's new pose, not its pre-tick pose
        let c_pose = sim.character(character_c).unwrap().pose();
        assert_eq!(c_pose.position, expected_platform.position + Vec3::Y);

        // C picked up A's velocity for this tick
        let carried = sim
            .character(character_c)
            .unwrap()
            .capture_state()
            .attached_platform_velocity;
        assert!((carried.x - expected_platform.position.x / 0.02).abs() < 1e-4);
    }

    #[test]
    fn test_commit_order_changes_rider_position() {
        // The same work in the wrong order (rider phase 2 before the
        // platform commit) must land the rider somewhere else; this is what
        // makes the six-step order load-bearing.
        let correct = {
            let mut sim = Simulation::new();
            let platform = sim.register_platform(slider(2.0));
            let character =
                sim.register_character(CharacterRig::new(Box::new(RiderMotor::riding(platform))));
            sim.run_tick(0.02);
            sim.character(character).unwrap().pose().position
        };

        let wrong = {
            let mut platforms = PlatformSet::new();
            let key = platforms.insert(slider(2.0));
            let mut rig = CharacterRig::new(Box::new(RiderMotor::riding(key)));

            for (_, platform) in platforms.iter_mut() {
                platform.velocity_update(0.02);
            }
            rig.update_phase1(0.02, &platforms);
            // Phase 2 before the platform commit: the rider resolves against
            // the stale world pose
            rig.update_phase2(0.02, &platforms);
            for (_, platform) in platforms.iter_mut() {
                platform.commit();
            }
            rig.post_simulate();
            rig.pose().position
        };

        assert_ne!(correct, wrong);
        // The wrong order is exactly one platform displacement behind
        assert_eq!(wrong, Vec3::Y);
    }

    #[test]
    fn test_disabled_character_is_skipped_without_disturbing_others() {
        let build = |disable_middle: bool| {
            let mut sim = Simulation::new();
            let platform = sim.register_platform(slider(2.0));
            let first =
                sim.register_character(CharacterRig::new(Box::new(RiderMotor::drifting(Vec3::X))));
            let middle =
                sim.register_character(CharacterRig::new(Box::new(RiderMotor::riding(platform))));
            let last = sim.register_character(CharacterRig::new(Box::new(RiderMotor::drifting(
                Vec3::new(0.0, 0.0, -1.0),
            ))));
            if disable_middle {
                sim.character_mut(middle).unwrap().set_enabled(false);
            }
            let report = sim.run_tick(0.02);
            (
                report,
                sim.character(first).unwrap().capture_state(),
                sim.character(middle).unwrap().capture_state(),
                sim.character(last).unwrap().capture_state(),
            )
        };

        let (full_report, full_first, _, full_last) = build(false);
        let (skip_report, skip_first, skip_middle, skip_last) = build(true);

        assert_eq!(full_report.simulated, 3);
        assert_eq!(skip_report.simulated, 2);
        assert_eq!(skip_report.skipped, 1);

        // The skipped character did not move at all
        assert_eq!(skip_middle.pose.position, Vec3::ZERO);

        // The other two computed exactly what they compute with it enabled
        assert_eq!(skip_first, full_first);
        assert_eq!(skip_last, full_last);
    }

    #[test]
    fn test_twin_simulations_stay_bit_identical() {
        let build = || {
            let mut sim = Simulation::new();
            let platform = sim.register_platform(slider(2.0));
            let rider =
                sim.register_character(CharacterRig::new(Box::new(RiderMotor::riding(platform))));
            let walker = sim.register_character(CharacterRig::new(Box::new(RiderMotor::drifting(
                Vec3::new(1.0, 0.0, 0.5),
            ))));
            (sim, platform, rider, walker)
        };

        let (mut left, platform_l, rider_l, walker_l) = build();
        let (mut right, platform_r, rider_r, walker_r) = build();

        for _ in 0..32 {
            left.run_tick(0.02);
            right.run_tick(0.02);

            assert_eq!(
                left.character(rider_l).unwrap().capture_state(),
                right.character(rider_r).unwrap().capture_state()
            );
            assert_eq!(
                left.character(walker_l).unwrap().capture_state(),
                right.character(walker_r).unwrap().capture_state()
            );
            assert_eq!(
                left.platform(platform_l).unwrap().state(),
                right.platform(platform_r).unwrap().state()
            );
        }
    }

    #[test]
    fn test_registration_order_survives_deregistration() {
        let mut sim = Simulation::new();
        let a = sim.register_character(CharacterRig::new(Box::new(RiderMotor::drifting(Vec3::X))));
        let b = sim.register_character(CharacterRig::new(Box::new(RiderMotor::drifting(Vec3::Y))));
        let c = sim.register_character(CharacterRig::new(Box::new(RiderMotor::drifting(Vec3::Z))));

        assert!(sim.deregister_character(b).is_some());
        assert!(sim.deregister_character(b).is_none());

        let order: Vec<CharacterId> = sim.character_ids().collect();
        assert_eq!(order, vec![a, c]);
    }

    #[derive(Debug, PartialEq, Clone, Copy)]
    enum WorldEvent {
        Sync,
        Platform(PlatformKey),
        Character(CharacterId),
    }

    struct RecordingWorld {
        events: Rc<RefCell<Vec<WorldEvent>>>,
    }

    impl WorldHooks for RecordingWorld {
        fn sync_transforms(&mut self) {
            self.events.borrow_mut().push(WorldEvent::Sync);
        }

        fn character_moved(&mut self, id: CharacterId, _pose: Pose) {
            self.events.borrow_mut().push(WorldEvent::Character(id));
        }

        fn platform_moved(&mut self, key: PlatformKey, _pose: Pose) {
            self.events.borrow_mut().push(WorldEvent::Platform(key));
        }
    }

    #[test]
    fn test_world_hooks_fire_in_tick_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut sim = Simulation::with_world(Box::new(RecordingWorld {
            events: events.clone(),
        }));
        let platform = sim.register_platform(slider(1.0));
        let character =
            sim.register_character(CharacterRig::new(Box::new(RiderMotor::riding(platform))));

        sim.run_tick(0.02);

        assert_eq!(
            *events.borrow(),
            vec![
                WorldEvent::Sync,
                WorldEvent::Platform(platform),
                WorldEvent::Character(character),
                WorldEvent::Sync,
            ]
        );
    }
}
