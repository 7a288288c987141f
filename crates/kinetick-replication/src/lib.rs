//! Kinetick Replication - the seam between the simulation and the netcode
//!
//! The network layer owns snapshots, ticks and object identity; the
//! simulation owns rigs and transient state. This crate is the glue between
//! them:
//!
//! - **Relevance**: should this participant simulate this entity at all
//!   (`is_locally_relevant`, `admit`)
//! - **Sync**: apply restored snapshots into rigs immediately before
//!   `run_tick`, capture fresh snapshots immediately after
//!   (`restore_character` / `capture_character` and the platform pair)
//! - **Sidecar**: per-tick storage for attachment state that is rolled back
//!   but not replicated (`AttachmentSidecar`)
//!
//! # Tick framing
//!
//! ```text
//! for each (re)simulated tick:
//!     restore_character / restore_platform   (apply-before)
//!     simulation.run_tick(dt)
//!     capture_character / capture_platform   (capture-after)
//! ```

mod error;
mod relevance;
mod sidecar;
mod sync;

pub use error::{Error, Result};
pub use relevance::{admit, is_locally_relevant, Authority, PredictionScope, SpawnParams};
pub use sidecar::{AttachmentSidecar, LocalAttachment};
pub use sync::{
    capture_character, capture_platform, restore_character, restore_platform, CharacterCapture,
    PlatformCapture,
};
