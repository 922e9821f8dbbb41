//! Sidebar listing the user's rooms with create and logout actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::sync;
use crate::state::interactions::InteractionsState;
use crate::state::rooms::RoomsState;
use crate::state::session::SessionState;
use crate::util::credentials;

/// Room list sidebar — highlights the active room, starts new
/// conversations, and signs out.
///
/// Re-fetches the room list whenever the cache reports it needs one, which
/// also covers invalidation after room creation and prompt submission.
#[component]
pub fn RoomSidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let interactions = expect_context::<RwSignal<InteractionsState>>();
    let navigate = use_navigate();

    let create_error = RwSignal::new(false);

    // Fetch on first use and after every invalidation. `needs_fetch` is
    // false while a fetch is in flight, so this cannot loop.
    Effect::new(move || {
        if rooms.get().needs_fetch() && session.get().is_authenticated() {
            leptos::task::spawn_local(sync::ensure_rooms(rooms));
        }
    });

    let nav_create = navigate.clone();
    let on_create = move |_| {
        create_error.set(false);
        let navigate = nav_create.clone();
        leptos::task::spawn_local(async move {
            match sync::create_room(session, rooms).await {
                Ok(room_id) => navigate(&format!("/room/{room_id}"), NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("room creation failed: {e}");
                    create_error.set(true);
                }
            }
        });
    };

    let nav_logout = navigate.clone();
    let on_logout = move |_| {
        sync::sign_out(session, rooms, interactions);
        nav_logout("/login", NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <button
                class="sidebar__new"
                disabled=move || rooms.get().create_pending
                on:click=on_create
            >
                {move || if rooms.get().create_pending { "Creating..." } else { "+ New conversation" }}
            </button>

            <Show when=move || create_error.get()>
                <p class="sidebar__error">"Could not create a room. Try again."</p>
            </Show>

            <nav class="sidebar__rooms">
                <div class="sidebar__heading">"Recent"</div>
                {move || {
                    let active = session.get().active_room_id;
                    rooms
                        .get()
                        .items
                        .into_iter()
                        .map(|room| {
                            let is_active = active.as_deref() == Some(room.id.as_str());
                            let navigate = navigate.clone();
                            let room_id = room.id.clone();
                            view! {
                                <button
                                    class="sidebar__room"
                                    class=("sidebar__room--active", is_active)
                                    on:click=move |_| {
                                        credentials::write_active_room(&room_id);
                                        session.update(|s| s.active_room_id = Some(room_id.clone()));
                                        navigate(&format!("/room/{room_id}"), NavigateOptions::default());
                                    }
                                >
                                    <span class="sidebar__room-description">{room.description}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>

            <button class="sidebar__logout" on:click=on_logout>
                "Sign out"
            </button>
        </aside>
    }
}
