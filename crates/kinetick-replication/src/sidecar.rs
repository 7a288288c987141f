//! Rollback-local attachment state
//!
//! With `CodecConfig::moving_platforms` off, snapshots carry no attachment
//! identifier - but a predicted client still has to restore its own
//! attachment when it resimulates, or a rider would drop off its platform
//! on every reconciliation. The sidecar keeps that state per tick, locally
//! only: record after capture, recall after restore.

use glam::Vec3;
use kinetick_core::{MotorState, PlatformKey};
use kinetick_history::TickRing;

/// The attachment fields that are rolled back without being replicated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalAttachment {
    pub platform: Option<PlatformKey>,
    pub velocity: Vec3,
}

/// Per-tick ring of one character's local attachment state
pub struct AttachmentSidecar {
    ring: TickRing<LocalAttachment>,
}

impl AttachmentSidecar {
    /// Create a sidecar covering `capacity` ticks of prediction window
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: TickRing::new(capacity),
        }
    }

    /// Record the attachment of a freshly captured state under its tick
    pub fn record(&mut self, tick: u64, state: &MotorState) {
        self.ring.store(
            tick,
            LocalAttachment {
                platform: state.attached_platform,
                velocity: state.attached_platform_velocity,
            },
        );
    }

    /// Overlay the attachment recorded at `tick` onto a restored state
    ///
    /// A miss (tick outside the window, or never recorded) leaves the state
    /// as decoded - detached - which is the same degradation the networked
    /// path applies to an unresolvable identifier.
    pub fn recall(&self, tick: u64, state: &mut MotorState) {
        if let Some(local) = self.ring.load(tick) {
            state.attached_platform = local.platform;
            state.attached_platform_velocity = local.velocity;
        }
    }

    /// Forget every tick before `tick` (confirmed by the server)
    pub fn acknowledge(&mut self, tick: u64) {
        self.ring.clear_before(tick);
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}
