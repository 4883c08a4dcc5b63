//! One creative draft: headlines, layout specs, captions.

#[cfg(test)]
#[path = "draft_card_test.rs"]
mod draft_card_test;

use leptos::prelude::*;

use crate::net::types::CreativeDraft;

/// Opaque layout specs render verbatim, pretty-printed. The client imposes
/// no shape on them.
fn pretty_block(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// A bordered card for one candidate rendition of the pack's copy.
#[component]
pub fn DraftCard(draft: CreativeDraft) -> impl IntoView {
    let cover_spec = pretty_block(&draft.cover_spec);
    let carousel_outline = pretty_block(&draft.carousel_outline);

    view! {
        <div class="draft-card">
            <p class="draft-card__generator">"Generated by: " {draft.generator_name}</p>
            <b>"Headlines"</b>
            <ul>
                {draft
                    .headline_options
                    .into_iter()
                    .map(|headline| view! { <li>{headline}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <b>"Cover spec"</b>
            <pre>{cover_spec}</pre>
            <b>"Caption short"</b>
            <p>{draft.caption_short}</p>
            <b>"Caption long"</b>
            <p>{draft.caption_long}</p>
            <b>"Carousel outline"</b>
            <pre>{carousel_outline}</pre>
        </div>
    }
}
