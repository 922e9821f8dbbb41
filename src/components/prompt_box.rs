//! Prompt input with optimistic send and failure recovery.

use leptos::prelude::*;

use crate::net::sync;
use crate::state::interactions::InteractionsState;
use crate::state::rooms::RoomsState;
use crate::state::session::SessionState;

/// Prompt textarea and send button for one room.
///
/// Sending clears the input immediately; on failure the typed text is
/// restored so nothing is lost, and the classified reason shows in a
/// banner. The send button stays disabled while the room's send slot is
/// taken. After a successful send, a poll loop watches for the AI response
/// (cancelled through `poll_epoch` when the room changes).
#[component]
pub fn PromptBox(
    #[prop(into)] room_id: Signal<String>,
    poll_epoch: RwSignal<u64>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let interactions = expect_context::<RwSignal<InteractionsState>>();

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Focus the input shortly after entering a room. The delay lets the
    // route transition settle first.
    Effect::new(move || {
        let _ = room_id.get();

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                if let Some(el) = textarea_ref.get_untracked() {
                    let _ = el.focus();
                }
            });
        }
    });

    let do_send = move || {
        let id = room_id.get_untracked();
        let text = input.get_untracked();
        if text.trim().is_empty() || id.is_empty() {
            return;
        }
        if interactions.get_untracked().is_busy(&id) {
            return;
        }

        let prompt = text.trim().to_owned();
        input.set(String::new());
        error.set(None);

        leptos::task::spawn_local(async move {
            match sync::submit_prompt(session, rooms, interactions, id.clone(), prompt.clone())
                .await
            {
                Ok(()) => {
                    #[cfg(feature = "hydrate")]
                    {
                        let next = poll_epoch.get_untracked() + 1;
                        poll_epoch.set(next);
                        leptos::task::spawn_local(sync::poll_for_responses(
                            interactions,
                            id,
                            poll_epoch,
                            next,
                        ));
                    }
                }
                Err(e) => {
                    input.set(prompt);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let sending = move || interactions.get().is_busy(&room_id.get());
    let can_send = move || !input.get().trim().is_empty() && !sending();

    view! {
        <div class="prompt-box">
            <Show when=move || error.get().is_some()>
                <div class="prompt-box__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="prompt-box__row">
                <textarea
                    class="prompt-box__input"
                    placeholder="Ask anything..."
                    rows=1
                    node_ref=textarea_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="prompt-box__send"
                    disabled=move || !can_send()
                    on:click=on_click
                >
                    {move || if sending() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
