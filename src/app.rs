//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, room::RoomPage};
use crate::state::{
    interactions::InteractionsState, rooms::RoomsState, session::SessionState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the shared caches once at application start (the session is
/// re-hydrated from the credential store), provides them via context, and
/// sets up client-side routing. Unmatched paths resolve to the login
/// entry.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load());
    let rooms = RwSignal::new(RoomsState::default());
    let interactions = RwSignal::new(InteractionsState::default());

    provide_context(session);
    provide_context(rooms);
    provide_context(interactions);

    view! {
        <Stylesheet id="leptos" href="/pkg/promptroom.css"/>
        <Title text="Promptroom"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("room"), ParamSegment("id")) view=RoomPage/>
            </Routes>
        </Router>
    }
}
