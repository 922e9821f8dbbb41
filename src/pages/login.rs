//! Login page with an email form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::net::sync;
use crate::state::session::SessionState;

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message.clone(),
        ApiError::RateLimited => "Too many attempts. Wait a minute and try again.".to_owned(),
        ApiError::Network(_) => "Could not sign in. Check your connection and try again.".to_owned(),
    }
}

/// Login page — submits the email, stores the returned token, and moves on
/// to the room view. An already-authenticated visitor is not redirected
/// away.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let value = email.get_untracked().trim().to_owned();
        if value.is_empty() || !value.contains('@') || submitting.get_untracked() {
            return;
        }

        submitting.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sync::sign_in(session, value).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    error.set(Some(login_error_message(&e)));
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <main class="login-page">
            <div class="login-page__card">
                <h1>"Welcome"</h1>
                <p class="login-page__subtitle">"Enter your email to continue"</p>

                <form class="login-page__form" on:submit=on_submit>
                    <label class="login-page__label" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        class="login-page__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />

                    <Show when=move || error.get().is_some()>
                        <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="login-page__submit" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </main>
    }
}
