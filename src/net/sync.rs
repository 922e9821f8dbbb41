//! Asynchronous orchestration between the state caches and the REST API.
//!
//! Each function here drives one cache transition sequence: optimistic
//! update, gateway call, then reconciliation, always through the pure
//! methods on the state structs so no torn state is ever visible between
//! event-loop ticks. Pages call these via `leptos::task::spawn_local`.
//!
//! Fetch failures for list endpoints are logged and absorbed (the caches
//! simply stay retryable); submission failures are returned to the caller
//! with their classification so the input text can be restored.

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use crate::net::api;
use crate::net::api::ApiError;
use crate::state::interactions::{InteractionsState, SubmitError};
use crate::state::rooms::RoomsState;
use crate::state::session::SessionState;
use crate::util::credentials;

/// Log in with an email, persist the credential, and update the session.
///
/// # Errors
///
/// Returns the classified gateway error; nothing is persisted on failure.
pub async fn sign_in(session: RwSignal<SessionState>, email: String) -> Result<(), ApiError> {
    let resp = api::login(&email).await?;
    credentials::write_token(&resp.token);
    if let Some(room_id) = &resp.room_id {
        credentials::write_active_room(room_id);
    }
    session.update(|s| {
        s.token = Some(resp.token);
        s.active_room_id = resp.room_id;
    });
    Ok(())
}

/// Log out: clear the credential store atomically, then reset the session
/// and both caches. Cached rooms and interactions are meaningless without
/// a session.
pub fn sign_out(
    session: RwSignal<SessionState>,
    rooms: RwSignal<RoomsState>,
    interactions: RwSignal<InteractionsState>,
) {
    credentials::clear();
    session.set(SessionState::default());
    rooms.update(RoomsState::reset);
    interactions.update(InteractionsState::reset);
}

/// Fetch the room list if the cache is unseeded or stale.
pub async fn ensure_rooms(rooms: RwSignal<RoomsState>) {
    if !rooms.get_untracked().needs_fetch() {
        return;
    }
    rooms.update(RoomsState::begin_fetch);
    match api::fetch_rooms().await {
        Ok(list) => rooms.update(|s| s.apply_fetch(list)),
        Err(e) => {
            leptos::logging::warn!("room list fetch failed: {e}");
            rooms.update(RoomsState::fail_fetch);
        }
    }
}

/// Create a room, record it as the active room, and refetch the list.
///
/// # Errors
///
/// `Unauthenticated` without a network call when no token is present,
/// `Busy` while another create is in flight, `Gateway` on failure (with no
/// cache mutation).
pub async fn create_room(
    session: RwSignal<SessionState>,
    rooms: RwSignal<RoomsState>,
) -> Result<String, SubmitError> {
    if !session.get_untracked().is_authenticated() {
        return Err(SubmitError::Unauthenticated);
    }

    let mut claimed = false;
    rooms.update(|s| claimed = s.begin_create());
    if !claimed {
        return Err(SubmitError::Busy);
    }

    match api::create_room().await {
        Ok(resp) => {
            rooms.update(RoomsState::finish_create);
            credentials::write_active_room(&resp.room_id);
            session.update(|s| s.active_room_id = Some(resp.room_id.clone()));
            ensure_rooms(rooms).await;
            Ok(resp.room_id)
        }
        Err(e) => {
            rooms.update(RoomsState::fail_create);
            Err(SubmitError::Gateway(e))
        }
    }
}

/// Fetch a room's history if no cache entry exists yet for it.
pub async fn ensure_interactions(interactions: RwSignal<InteractionsState>, room_id: String) {
    if !interactions.get_untracked().needs_fetch(&room_id) {
        return;
    }
    fetch_interactions_into(interactions, room_id).await;
}

/// Force a re-fetch of a room's authoritative sequence. A pending
/// optimistic entry survives the replacement (see
/// `InteractionsState::apply_authoritative`). Skipped when a fetch for the
/// room is already in flight.
pub async fn refresh_interactions(interactions: RwSignal<InteractionsState>, room_id: String) {
    if !interactions.get_untracked().can_fetch(&room_id) {
        return;
    }
    fetch_interactions_into(interactions, room_id).await;
}

async fn fetch_interactions_into(interactions: RwSignal<InteractionsState>, room_id: String) {
    interactions.update(|s| s.begin_fetch(&room_id));
    match api::fetch_interactions(&room_id).await {
        Ok(list) => interactions.update(|s| s.apply_authoritative(&room_id, list)),
        Err(e) => {
            leptos::logging::warn!("interaction fetch failed for {room_id}: {e}");
            interactions.update(|s| s.fail_fetch(&room_id));
        }
    }
}

/// Submit a prompt: optimistic append, gateway call, reconciliation.
///
/// On success the room list is invalidated and refetched, since the room's
/// server-derived description may have changed.
///
/// # Errors
///
/// `Unauthenticated`, `EmptyPrompt`, and `Busy` are rejected synchronously
/// before the network; `Gateway` errors arrive after the optimistic entry
/// has been rolled back, so the caller can hand the prompt text back to
/// the input.
pub async fn submit_prompt(
    session: RwSignal<SessionState>,
    rooms: RwSignal<RoomsState>,
    interactions: RwSignal<InteractionsState>,
    room_id: String,
    prompt: String,
) -> Result<(), SubmitError> {
    if !session.get_untracked().is_authenticated() {
        return Err(SubmitError::Unauthenticated);
    }

    let mut begun: Result<String, SubmitError> = Err(SubmitError::Busy);
    interactions.update(|s| begun = s.begin_submit(&room_id, &prompt, crate::util::time::now_iso()));
    begun?;

    match api::create_interaction(&room_id, prompt.trim()).await {
        Ok(confirmed) => {
            interactions.update(|s| s.confirm_submit(&room_id, confirmed));
            rooms.update(RoomsState::invalidate);
            ensure_rooms(rooms).await;
            Ok(())
        }
        Err(e) => {
            interactions.update(|s| s.fail_submit(&room_id));
            Err(SubmitError::Gateway(e))
        }
    }
}

/// Poll a room with backoff until every confirmed entry has a response.
///
/// There is no server push for response completion, so the room page owns
/// this refresh cadence. The loop stops when nothing is awaited or when
/// `epoch` no longer matches `started_epoch` (the page bumps the epoch on
/// room change and on each newly spawned poll, cancelling older loops).
#[cfg(feature = "hydrate")]
pub async fn poll_for_responses(
    interactions: RwSignal<InteractionsState>,
    room_id: String,
    epoch: RwSignal<u64>,
    started_epoch: u64,
) {
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        if epoch.get_untracked() != started_epoch {
            return;
        }
        if !interactions.get_untracked().awaiting_response(&room_id) {
            return;
        }
        refresh_interactions(interactions, room_id.clone()).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}
