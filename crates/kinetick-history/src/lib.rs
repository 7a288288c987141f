//! Kinetick History - Tick-indexed ring buffer for rollback-local state
//!
//! Some per-entity state must survive a rollback without being replicated:
//! it is rebuilt by resimulation, but the resimulation of tick N has to
//! start from what was locally true at tick N. `TickRing` is the bounded
//! store for that: write a value under its tick at capture time, read it
//! back under the same tick at restore time.
//!
//! # Properties
//!
//! - **Bounded memory**: fixed-size ring, no growth
//! - **O(1) store and load**: the slot is `tick % capacity`
//! - **Automatic eviction**: a slot is silently reused once its tick falls
//!   a full window behind; reading an evicted tick is a miss, not stale data
//!
//! # Example
//!
//! ```rust
//! use kinetick_history::TickRing;
//!
//! // Two seconds of history at 64 ticks per second
//! let mut ring: TickRing<f32> = TickRing::new(128);
//!
//! ring.store(10, 0.5);
//! assert_eq!(ring.load(10), Some(&0.5));
//! assert_eq!(ring.load(11), None);
//! ```

/// A fixed-capacity ring buffer addressed by tick
///
/// Each slot remembers the tick it was written under; a lookup only hits
/// when the stored tick matches exactly, so wrap-around can never alias an
/// old tick onto a new one.
#[derive(Debug, Clone)]
pub struct TickRing<T> {
    slots: Vec<Option<(u64, T)>>,
    capacity: usize,
}

impl<T> TickRing<T> {
    /// Create a ring holding up to `capacity` consecutive ticks
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            capacity,
        }
    }

    fn index(&self, tick: u64) -> usize {
        (tick as usize) % self.capacity
    }

    /// Store a value under a tick, evicting whatever occupied its slot
    pub fn store(&mut self, tick: u64, value: T) {
        let index = self.index(tick);
        self.slots[index] = Some((tick, value));
    }

    /// Load the value stored under exactly this tick
    pub fn load(&self, tick: u64) -> Option<&T> {
        let index = self.index(tick);
        self.slots[index]
            .as_ref()
            .filter(|(stored, _)| *stored == tick)
            .map(|(_, value)| value)
    }

    /// Load the value stored under exactly this tick, mutably
    pub fn load_mut(&mut self, tick: u64) -> Option<&mut T> {
        let index = self.index(tick);
        self.slots[index]
            .as_mut()
            .filter(|(stored, _)| *stored == tick)
            .map(|(_, value)| value)
    }

    /// Check whether a tick is present
    pub fn contains(&self, tick: u64) -> bool {
        self.load(tick).is_some()
    }

    /// Drop every entry strictly before a tick
    pub fn clear_before(&mut self, tick: u64) {
        for slot in &mut self.slots {
            if matches!(slot, Some((stored, _)) if *stored < tick) {
                *slot = None;
            }
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Maximum number of ticks held at once
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of ticks currently held
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check whether the ring holds nothing
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Oldest and newest tick currently held
    pub fn tick_range(&self) -> Option<(u64, u64)> {
        let mut range: Option<(u64, u64)> = None;
        for (tick, _) in self.slots.iter().flatten() {
            range = Some(match range {
                None => (*tick, *tick),
                Some((oldest, newest)) => (oldest.min(*tick), newest.max(*tick)),
            });
        }
        range
    }
}
