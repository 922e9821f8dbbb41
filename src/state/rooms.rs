#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use crate::net::types::Room;

/// Room list cache for the signed-in user.
///
/// Server-returned order is preserved as-is. Invalidation marks the list
/// stale without dropping it, so the previous list stays visible until the
/// refetch lands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomsState {
    pub items: Vec<Room>,
    pub loaded: bool,
    pub fetching: bool,
    pub stale: bool,
    pub create_pending: bool,
}

impl RoomsState {
    /// True when a caller should kick off a fetch: never loaded, or
    /// invalidated since the last one. Never true while one is in flight.
    pub fn needs_fetch(&self) -> bool {
        !self.fetching && (!self.loaded || self.stale)
    }

    pub fn begin_fetch(&mut self) {
        self.fetching = true;
    }

    /// Seed or replace the list with the authoritative fetch result.
    pub fn apply_fetch(&mut self, rooms: Vec<Room>) {
        self.items = rooms;
        self.loaded = true;
        self.fetching = false;
        self.stale = false;
    }

    pub fn fail_fetch(&mut self) {
        self.fetching = false;
    }

    /// Mark the cache stale after a mutation that may have changed room
    /// metadata server-side. The current items remain readable.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Claim the single create slot. Returns false if a create is already
    /// in flight.
    pub fn begin_create(&mut self) -> bool {
        if self.create_pending {
            return false;
        }
        self.create_pending = true;
        true
    }

    /// Create succeeded; the new room reaches `items` via the invalidation
    /// refetch rather than a local insert.
    pub fn finish_create(&mut self) {
        self.create_pending = false;
        self.invalidate();
    }

    /// Create failed; no cache mutation beyond releasing the slot.
    pub fn fail_create(&mut self) {
        self.create_pending = false;
    }

    /// Logout wipe.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
