#[cfg(test)]
#[path = "interactions_test.rs"]
mod interactions_test;

use std::collections::HashMap;

use crate::net::api::ApiError;
use crate::net::types::Interaction;

/// Per-room interaction cache reconciling optimistic and authoritative
/// state.
///
/// Each room holds an ordered sequence of entries, oldest first. A
/// submitted prompt is appended immediately as a `Pending` entry with a
/// client-generated temporary id, then replaced in place by the server
/// record on success or removed entirely on failure. At most one entry per
/// room is pending at a time; the `busy` flag serialises sends per room.
/// Different rooms are independent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionsState {
    rooms: HashMap<String, RoomCache>,
}

/// Cached sequence plus bookkeeping flags for one room.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomCache {
    pub entries: Vec<Entry>,
    pub busy: bool,
    pub loaded: bool,
    pub fetching: bool,
}

/// One cached interaction together with its reconciliation status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub interaction: Interaction,
    pub status: EntryStatus,
}

/// Whether an entry is still awaiting server acknowledgement.
///
/// `Pending` entries carry a temporary id in a namespace distinct from
/// server-assigned ids; the tag keeps the two from ever being confused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    Pending,
    Confirmed,
}

impl Entry {
    pub fn is_pending(&self) -> bool {
        self.status == EntryStatus::Pending
    }
}

/// Why a prompt submission was rejected.
///
/// `EmptyPrompt`, `Busy`, and `Unauthenticated` are raised synchronously
/// before any network call; `Gateway` arrives asynchronously with the
/// transport classification. In every case the cache has been fully rolled
/// back by the time the caller sees the error, so the original prompt text
/// can be restored for retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("a send is already in flight for this room")]
    Busy,
    #[error("not signed in")]
    Unauthenticated,
    #[error(transparent)]
    Gateway(#[from] ApiError),
}

impl SubmitError {
    /// Banner text for the transient error display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyPrompt => "Type a message before sending.",
            Self::Busy => "A message is already being sent.",
            Self::Unauthenticated => "Your session has expired. Sign in again.",
            Self::Gateway(ApiError::RateLimited) => {
                "Message limit reached. Wait a minute and try again."
            }
            Self::Gateway(_) => "Something went wrong while sending your message.",
        }
    }
}

impl InteractionsState {
    /// Current cached sequence for a room; empty if the room is unseeded.
    pub fn entries(&self, room_id: &str) -> &[Entry] {
        self.rooms.get(room_id).map_or(&[], |r| r.entries.as_slice())
    }

    pub fn is_busy(&self, room_id: &str) -> bool {
        self.rooms.get(room_id).is_some_and(|r| r.busy)
    }

    pub fn is_loading(&self, room_id: &str) -> bool {
        self.rooms.get(room_id).is_none_or(|r| !r.loaded && r.fetching)
    }

    /// True when a caller should kick off the first fetch for this room.
    pub fn needs_fetch(&self, room_id: &str) -> bool {
        self.rooms
            .get(room_id)
            .is_none_or(|r| !r.fetching && !r.loaded)
    }

    /// True when a fetch may be issued right now (none already in flight).
    pub fn can_fetch(&self, room_id: &str) -> bool {
        self.rooms.get(room_id).is_none_or(|r| !r.fetching)
    }

    pub fn begin_fetch(&mut self, room_id: &str) {
        self.room_mut(room_id).fetching = true;
    }

    pub fn fail_fetch(&mut self, room_id: &str) {
        self.room_mut(room_id).fetching = false;
    }

    /// Replace a room's sequence wholesale with the authoritative fetch
    /// result, preserving the single pending entry, if any, by re-appending
    /// it after the fetched sequence. An in-flight send is never dropped by
    /// a concurrent refresh.
    pub fn apply_authoritative(&mut self, room_id: &str, interactions: Vec<Interaction>) {
        let room = self.room_mut(room_id);
        let pending = room
            .entries
            .iter()
            .position(Entry::is_pending)
            .map(|i| room.entries.remove(i));
        room.entries = interactions
            .into_iter()
            .map(|interaction| Entry { interaction, status: EntryStatus::Confirmed })
            .collect();
        if let Some(entry) = pending {
            room.entries.push(entry);
        }
        room.loaded = true;
        room.fetching = false;
    }

    /// Optimistic phase of a submission: validate, claim the room's send
    /// slot, and append a pending entry with a fresh temporary id.
    ///
    /// # Errors
    ///
    /// `EmptyPrompt` if the prompt is blank after trimming, `Busy` if a
    /// send is already in flight for this room. Neither touches the cache.
    pub fn begin_submit(
        &mut self,
        room_id: &str,
        prompt: &str,
        created_at: String,
    ) -> Result<String, SubmitError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SubmitError::EmptyPrompt);
        }

        let room = self.room_mut(room_id);
        if room.busy {
            return Err(SubmitError::Busy);
        }

        let temp_id = uuid::Uuid::new_v4().to_string();
        room.entries.push(Entry {
            interaction: Interaction {
                id: temp_id.clone(),
                prompt: prompt.to_owned(),
                response: None,
                created_at,
            },
            status: EntryStatus::Pending,
        });
        room.busy = true;
        Ok(temp_id)
    }

    /// Reconcile a successful submission: the room's unique pending entry
    /// is replaced in place by the server record, keyed on its position
    /// rather than on content, so submitting the same text twice cannot
    /// confuse entries. If a refresh already delivered the server record,
    /// the pending entry is dropped instead of duplicated.
    pub fn confirm_submit(&mut self, room_id: &str, confirmed: Interaction) {
        let Some(room) = self.rooms.get_mut(room_id) else {
            return;
        };
        room.busy = false;

        let already_confirmed = room
            .entries
            .iter()
            .any(|e| !e.is_pending() && e.interaction.id == confirmed.id);
        let Some(pos) = room.entries.iter().position(Entry::is_pending) else {
            return;
        };
        if already_confirmed {
            room.entries.remove(pos);
        } else {
            room.entries[pos] = Entry { interaction: confirmed, status: EntryStatus::Confirmed };
        }
    }

    /// Roll back a failed submission: the pending entry is removed
    /// entirely and the send slot released.
    pub fn fail_submit(&mut self, room_id: &str) {
        let Some(room) = self.rooms.get_mut(room_id) else {
            return;
        };
        room.busy = false;
        room.entries.retain(|e| !e.is_pending());
    }

    /// True while any confirmed entry in the room still lacks a response.
    /// Drives the caller-owned refresh poll.
    pub fn awaiting_response(&self, room_id: &str) -> bool {
        self.entries(room_id)
            .iter()
            .any(|e| !e.is_pending() && e.interaction.response.is_none())
    }

    /// Logout wipe across all rooms.
    pub fn reset(&mut self) {
        self.rooms.clear();
    }

    fn room_mut(&mut self, room_id: &str) -> &mut RoomCache {
        self.rooms.entry(room_id.to_owned()).or_default()
    }
}
