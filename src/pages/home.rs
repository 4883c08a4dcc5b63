//! Landing page.

use leptos::prelude::*;

/// Landing screen with the entry points. Review screens are reachable
/// without signing in while the service runs with auth bypassed.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1>"Get Sendy Review Queue"</h1>
            <p>"Authentication is temporarily bypassed for local testing and tuning."</p>
            <a href="/queue">"Open review queue"</a>
            <a href="/login">"Reviewer sign-in"</a>
        </main>
    }
}
