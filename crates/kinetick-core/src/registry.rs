//! Attachment registry - stable identifier indirection for live platforms
//!
//! Replicated state can only carry plain data, but a character's transient
//! state references the platform it stands on. The registry maps the stable
//! [`NetworkId`] the network layer assigns at spawn to the local
//! [`PlatformKey`] the simulation assigns at registration, in both
//! directions.
//!
//! Writes are owned by the embedding spawn system; during a tick the core
//! only reads. Lookups must stay safe at any point during rollback,
//! including before an object that will exist "this tick" has been respawned
//! locally - callers treat a failed resolve as a normal outcome.

use crate::{Error, NetworkId, PlatformKey, Result};
use indexmap::IndexMap;

/// Bidirectional map between network identifiers and live platform keys
#[derive(Debug, Clone, Default)]
pub struct AttachmentRegistry {
    by_id: IndexMap<NetworkId, PlatformKey>,
    by_key: IndexMap<PlatformKey, NetworkId>,
}

impl AttachmentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a network identifier to a live platform key
    ///
    /// Rebinding an identifier (the platform respawned under a new key) or
    /// a key (the key was recycled under a new identifier) replaces the old
    /// pairing on both sides. Binding [`NetworkId::NONE`] is rejected.
    pub fn bind(&mut self, id: NetworkId, key: PlatformKey) -> Result<()> {
        if id.is_none() {
            return Err(Error::ReservedIdentifier);
        }
        if let Some(old_key) = self.by_id.insert(id, key) {
            self.by_key.shift_remove(&old_key);
        }
        if let Some(old_id) = self.by_key.insert(key, id) {
            if old_id != id {
                self.by_id.shift_remove(&old_id);
            }
        }
        Ok(())
    }

    /// Remove a binding by identifier, returning the key it pointed at
    pub fn unbind_id(&mut self, id: NetworkId) -> Option<PlatformKey> {
        let key = self.by_id.shift_remove(&id)?;
        self.by_key.shift_remove(&key);
        Some(key)
    }

    /// Remove a binding by key, returning the identifier it was known as
    pub fn unbind_key(&mut self, key: PlatformKey) -> Option<NetworkId> {
        let id = self.by_key.shift_remove(&key)?;
        self.by_id.shift_remove(&id);
        Some(id)
    }

    /// Get the stable identifier of a live platform
    ///
    /// Returns [`NetworkId::NONE`] when the key has no assigned identifier.
    pub fn id_of(&self, key: PlatformKey) -> NetworkId {
        self.by_key.get(&key).copied().unwrap_or(NetworkId::NONE)
    }

    /// Resolve an identifier to the live platform currently known under it
    ///
    /// Returns `None` for [`NetworkId::NONE`] and for identifiers not known
    /// to this participant - both are normal outcomes, not errors.
    pub fn resolve(&self, id: NetworkId) -> Option<PlatformKey> {
        if id.is_none() {
            return None;
        }
        self.by_id.get(&id).copied()
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if the registry has no bindings
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Remove all bindings
    pub fn clear(&mut self) {
        self.by_id.clear();
        self.by_key.clear();
    }
}
