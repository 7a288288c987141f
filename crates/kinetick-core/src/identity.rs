//! Identity types for networked platforms and simulated characters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable network identifier of a replicated object
///
/// Assigned by the embedding network layer and identical on every
/// participant. The raw value `0` is reserved and means "no object"; it is
/// what a snapshot stores when a character is not attached to any platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u32);

impl NetworkId {
    /// The reserved "no object" identifier
    pub const NONE: NetworkId = NetworkId(0);

    /// Create a new network identifier
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identifier value
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Check whether this is the reserved "no object" identifier
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net:{}", self.0)
    }
}

/// Local handle of a registered platform
///
/// Assigned by the simulation at registration time. Unlike [`NetworkId`],
/// this value is local to one participant and is never replicated; the
/// codec translates between the two through the attachment registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformKey(pub u64);

impl PlatformKey {
    /// Get the raw handle value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "platform:{}", self.0)
    }
}

/// Local handle of a registered character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u64);

impl CharacterId {
    /// Get the raw handle value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "character:{}", self.0)
    }
}
