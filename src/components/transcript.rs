//! Conversation transcript for one room.

use leptos::prelude::*;

use crate::state::interactions::{Entry, InteractionsState};

/// Ordered prompt/response transcript. A confirmed entry without a
/// response, and any pending entry, render a typing indicator in place of
/// the response text.
#[component]
pub fn Transcript(#[prop(into)] room_id: Signal<String>) -> impl IntoView {
    let interactions = expect_context::<RwSignal<InteractionsState>>();

    view! {
        <div class="transcript">
            {move || {
                let id = room_id.get();
                let state = interactions.get();
                if state.is_loading(&id) {
                    return view! {
                        <p class="transcript__loading">"Loading conversation..."</p>
                    }
                        .into_any();
                }

                let entries: Vec<Entry> = state.entries(&id).to_vec();
                if entries.is_empty() {
                    return view! {
                        <div class="transcript__empty">
                            <h2>"How can I help today?"</h2>
                        </div>
                    }
                        .into_any();
                }

                view! {
                    <div class="transcript__items">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div class="transcript__exchange">
                                        <div class="transcript__prompt">
                                            {entry.interaction.prompt.clone()}
                                        </div>
                                        <div class="transcript__response">
                                            <span class="transcript__avatar">"AI"</span>
                                            {match entry.interaction.response.clone() {
                                                Some(text) => {
                                                    view! {
                                                        <p class="transcript__response-text">{text}</p>
                                                    }
                                                        .into_any()
                                                }
                                                None => {
                                                    view! {
                                                        <span class="transcript__typing" aria-label="Waiting for response">
                                                            <span class="transcript__dot"></span>
                                                            <span class="transcript__dot"></span>
                                                            <span class="transcript__dot"></span>
                                                        </span>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
