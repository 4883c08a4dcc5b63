//! One review-queue row: link, status, breaking marker.

#[cfg(test)]
#[path = "pack_card_test.rs"]
mod pack_card_test;

use leptos::prelude::*;

use crate::net::types::ContentPackStatus;

fn detail_href(id: i64) -> String {
    format!("/content-packs/{id}")
}

fn breaking_marker(breaking: bool) -> &'static str {
    if breaking { " 🔥" } else { "" }
}

/// A queue entry linking to the pack's detail view.
#[component]
pub fn PackCard(id: i64, title: String, status: ContentPackStatus, breaking: bool) -> impl IntoView {
    view! {
        <li class="pack-card">
            <a class="pack-card__link" href=detail_href(id)>
                {title}
            </a>
            " | "
            <span class="pack-card__status">{status.as_str()}</span>
            {breaking_marker(breaking)}
        </li>
    }
}
