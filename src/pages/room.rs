//! Room page: transcript plus prompt input for one conversation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::prompt_box::PromptBox;
use crate::components::room_sidebar::RoomSidebar;
use crate::components::transcript::Transcript;
use crate::net::sync;
use crate::state::interactions::InteractionsState;
use crate::state::session::{Admission, SessionState, admit};
use crate::util::credentials;

/// Room page — reads the room id from the route, records it as the active
/// room, seeds the interaction cache, and keeps a response poll running
/// while replies are outstanding. Redirects to `/login` when
/// unauthenticated.
#[component]
pub fn RoomPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let interactions = expect_context::<RwSignal<InteractionsState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let room_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    // Poll cancellation token: bumped on every room change and every newly
    // spawned poll, so older loops notice and stop.
    let poll_epoch = RwSignal::new(0_u64);

    Effect::new(move || {
        if admit(&session.get()) == Admission::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let id = room_id.get();
        if id.is_empty() {
            return;
        }

        credentials::write_active_room(&id);
        session.update(|s| s.active_room_id = Some(id.clone()));
        leptos::task::spawn_local(sync::ensure_interactions(interactions, id.clone()));

        let next = poll_epoch.get_untracked() + 1;
        poll_epoch.set(next);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(sync::poll_for_responses(
                interactions,
                id,
                poll_epoch,
                next,
            ));
        }
    });

    view! {
        <main class="room-page">
            <RoomSidebar/>
            <section class="room-page__main">
                <Transcript room_id=room_id/>
                <PromptBox room_id=room_id poll_epoch=poll_epoch/>
            </section>
        </main>
    }
}
