//! Uniform request-failed banner.
//!
//! Queue and detail screens report every API failure through this banner so
//! no fetch fails silently.

use leptos::prelude::*;

/// Renders the current error message, if any.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="error-banner">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
