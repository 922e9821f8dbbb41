//! Authenticated landing page: room selection and creation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::room_sidebar::RoomSidebar;
use crate::state::session::{Admission, SessionState, admit};

/// Landing page — the sidebar offers existing rooms and a create button;
/// the main panel is an empty-state prompt until a room is chosen.
/// Redirects to `/login` when unauthenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if admit(&session.get()) == Admission::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <main class="home-page">
            <RoomSidebar/>
            <section class="home-page__main">
                <div class="home-page__empty">
                    <h2>"How can I help today?"</h2>
                    <p>"Pick a recent conversation or start a new one."</p>
                </div>
            </section>
        </main>
    }
}
