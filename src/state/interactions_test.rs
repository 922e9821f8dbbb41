use super::*;

fn server_interaction(id: &str, prompt: &str, response: Option<&str>) -> Interaction {
    Interaction {
        id: id.to_owned(),
        prompt: prompt.to_owned(),
        response: response.map(ToOwned::to_owned),
        created_at: "t0".to_owned(),
    }
}

// =============================================================
// Fetch-on-first-use
// =============================================================

#[test]
fn unseeded_room_returns_empty_and_needs_fetch() {
    let s = InteractionsState::default();
    assert!(s.entries("r1").is_empty());
    assert!(s.needs_fetch("r1"));
}

#[test]
fn begin_fetch_suppresses_further_fetches() {
    let mut s = InteractionsState::default();
    s.begin_fetch("r1");
    assert!(!s.needs_fetch("r1"));
    assert!(!s.can_fetch("r1"));
}

#[test]
fn apply_authoritative_seeds_in_server_order() {
    let mut s = InteractionsState::default();
    s.begin_fetch("r1");
    s.apply_authoritative(
        "r1",
        vec![
            server_interaction("i1", "first", Some("one")),
            server_interaction("i2", "second", None),
        ],
    );
    let entries = s.entries("r1");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].interaction.id, "i1");
    assert_eq!(entries[1].interaction.id, "i2");
    assert!(entries.iter().all(|e| !e.is_pending()));
    assert!(!s.needs_fetch("r1"));
}

#[test]
fn failed_fetch_allows_retry() {
    let mut s = InteractionsState::default();
    s.begin_fetch("r1");
    s.fail_fetch("r1");
    assert!(s.needs_fetch("r1"));
}

#[test]
fn repeated_reads_without_mutation_do_not_drift() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "hello", None)]);
    let first: Vec<Entry> = s.entries("r1").to_vec();
    assert_eq!(s.entries("r1"), first.as_slice());
    assert_eq!(s.entries("r1"), first.as_slice());
}

// =============================================================
// Optimistic submission
// =============================================================

#[test]
fn begin_submit_appends_pending_entry_and_claims_slot() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "earlier", Some("done"))]);

    let temp_id = s.begin_submit("r1", "hello", "t1".to_owned()).expect("accepted");

    let entries = s.entries("r1");
    assert_eq!(entries.len(), 2);
    let last = entries.last().expect("entry");
    assert!(last.is_pending());
    assert_eq!(last.interaction.id, temp_id);
    assert_eq!(last.interaction.prompt, "hello");
    assert!(last.interaction.response.is_none());
    assert!(s.is_busy("r1"));
}

#[test]
fn begin_submit_trims_prompt() {
    let mut s = InteractionsState::default();
    s.begin_submit("r1", "  hello  ", "t1".to_owned()).expect("accepted");
    assert_eq!(s.entries("r1")[0].interaction.prompt, "hello");
}

#[test]
fn blank_prompt_is_rejected_without_cache_mutation() {
    let mut s = InteractionsState::default();
    let before = s.clone();
    assert_eq!(s.begin_submit("r1", "   ", "t1".to_owned()), Err(SubmitError::EmptyPrompt));
    assert_eq!(s, before);
}

#[test]
fn second_submit_while_busy_is_rejected() {
    let mut s = InteractionsState::default();
    s.begin_submit("r1", "first", "t1".to_owned()).expect("accepted");
    assert_eq!(s.begin_submit("r1", "second", "t2".to_owned()), Err(SubmitError::Busy));

    let pending = s.entries("r1").iter().filter(|e| e.is_pending()).count();
    assert_eq!(pending, 1);
}

#[test]
fn rooms_have_independent_send_slots() {
    let mut s = InteractionsState::default();
    s.begin_submit("r1", "to r1", "t1".to_owned()).expect("accepted");
    s.begin_submit("r2", "to r2", "t1".to_owned()).expect("accepted");
    assert!(s.is_busy("r1"));
    assert!(s.is_busy("r2"));
}

// =============================================================
// Reconciliation
// =============================================================

#[test]
fn confirm_replaces_pending_in_place() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "earlier", Some("done"))]);
    let temp_id = s.begin_submit("r1", "hello", "t1".to_owned()).expect("accepted");

    s.confirm_submit("r1", server_interaction("i2", "hello", None));

    let entries = s.entries("r1");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].interaction.id, "i2");
    assert_eq!(entries[1].interaction.created_at, "t0");
    assert!(!entries[1].is_pending());
    assert!(!s.is_busy("r1"));
    assert!(entries.iter().all(|e| e.interaction.id != temp_id));
}

#[test]
fn confirm_keys_on_pending_position_not_content() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "hello", Some("hi"))]);
    s.begin_submit("r1", "hello", "t1".to_owned()).expect("accepted");

    // Same text submitted twice: the confirmed earlier entry must stay put
    // and only the pending one is replaced.
    s.confirm_submit("r1", server_interaction("i2", "hello", None));

    let entries = s.entries("r1");
    assert_eq!(entries[0].interaction.id, "i1");
    assert_eq!(entries[1].interaction.id, "i2");
}

#[test]
fn confirm_after_refresh_already_delivered_record_does_not_duplicate() {
    let mut s = InteractionsState::default();
    s.begin_submit("r1", "hello", "t1".to_owned()).expect("accepted");

    // A refresh lands first and already contains the server record.
    s.apply_authoritative("r1", vec![server_interaction("i2", "hello", None)]);
    s.confirm_submit("r1", server_interaction("i2", "hello", None));

    let entries = s.entries("r1");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].interaction.id, "i2");
    assert!(!s.is_busy("r1"));
}

#[test]
fn fail_submit_rolls_back_fully() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "earlier", Some("done"))]);
    let before: Vec<Entry> = s.entries("r1").to_vec();

    s.begin_submit("r1", "hello", "t1".to_owned()).expect("accepted");
    s.fail_submit("r1");

    assert_eq!(s.entries("r1"), before.as_slice());
    assert!(!s.is_busy("r1"));
}

// =============================================================
// Refresh merging with pending state
// =============================================================

#[test]
fn refresh_preserves_pending_entry_after_authoritative_sequence() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "earlier", None)]);
    let temp_id = s.begin_submit("r1", "hello", "t1".to_owned()).expect("accepted");

    s.apply_authoritative(
        "r1",
        vec![
            server_interaction("i1", "earlier", Some("now answered")),
            server_interaction("i0", "other client", Some("yes")),
        ],
    );

    let entries = s.entries("r1");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].interaction.id, "i1");
    assert_eq!(entries[1].interaction.id, "i0");
    assert_eq!(entries[2].interaction.id, temp_id);
    assert!(entries[2].is_pending());
    assert_eq!(entries.iter().filter(|e| e.is_pending()).count(), 1);
    assert!(s.is_busy("r1"));
}

#[test]
fn refresh_fills_in_responses_without_duplication() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "hello", None)]);
    assert!(s.awaiting_response("r1"));

    s.apply_authoritative("r1", vec![server_interaction("i1", "hello", Some("hi there"))]);

    let entries = s.entries("r1");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].interaction.response.as_deref(), Some("hi there"));
    assert!(!s.awaiting_response("r1"));
}

// =============================================================
// Error surface
// =============================================================

#[test]
fn rate_limited_gateway_error_has_distinct_message() {
    let rate_limited = SubmitError::Gateway(ApiError::RateLimited);
    let generic = SubmitError::Gateway(ApiError::Network("offline".to_owned()));
    assert_ne!(rate_limited.user_message(), generic.user_message());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn reset_clears_all_rooms() {
    let mut s = InteractionsState::default();
    s.apply_authoritative("r1", vec![server_interaction("i1", "hello", None)]);
    s.begin_submit("r2", "pending", "t1".to_owned()).expect("accepted");

    s.reset();

    assert!(s.entries("r1").is_empty());
    assert!(s.entries("r2").is_empty());
    assert!(!s.is_busy("r2"));
    assert!(s.needs_fetch("r1"));
}
