//! Login page exchanging reviewer credentials for an access token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::Session;

/// Fixed user-facing message for any failed login attempt. Failure detail
/// is deliberately not surfaced.
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Validate the login form; both fields are required before a request goes
/// out. The email is trimmed, the password sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page. On success the token persists to localStorage and the
/// browser moves to the queue; on any failure the fixed message shows and
/// the reviewer stays here.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.login(&email_value, &password_value).await {
                    Ok(token) => {
                        let authenticated = Session::authenticated(token.access_token);
                        authenticated.persist();
                        session.set(authenticated);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/queue");
                        }
                    }
                    Err(error) => {
                        log::warn!("login request failed: {error}");
                        info.set(LOGIN_FAILED_MESSAGE.to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Get Sendy"</h1>
                <p class="login-card__subtitle">"Reviewer Sign-In"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
