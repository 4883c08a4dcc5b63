//! Content pack detail page: full record, review actions, handoff export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutating action (save notes, approve, reject) is followed by an
//! unconditional re-fetch: the service is the source of truth and no local
//! optimistic state survives a round-trip. Export downloads the handoff
//! document without mutating anything.

#[cfg(test)]
#[path = "pack_detail_test.rs"]
mod pack_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::draft_card::DraftCard;
use crate::components::error_banner::ErrorBanner;
use crate::net::api::ApiClient;
use crate::net::types::{Attribution, ContentPack};
use crate::state::pack::{PackState, tag_reason};
use crate::state::session::Session;

/// Route parameter parsed into a pack id; rejects anything non-numeric.
fn parse_pack_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
}

fn attribution_credit(attribution: Option<&Attribution>) -> String {
    attribution
        .map(|a| a.required_credit_line.clone())
        .unwrap_or_default()
}

fn attribution_notes(attribution: Option<&Attribution>) -> String {
    attribution.map(|a| a.notes.clone()).unwrap_or_default()
}

fn safe_to_repost_text(attribution: Option<&Attribution>) -> &'static str {
    match attribution {
        Some(a) if a.safe_to_repost => "true",
        Some(_) => "false",
        None => "",
    }
}

/// A mutating review intent issued from the action row.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
enum ReviewAction {
    SaveNotes,
    Approve,
    Reject,
}

/// Fetch the pack and reconcile the screen with the server-confirmed state,
/// including the reviewer-notes draft.
#[cfg(feature = "hydrate")]
async fn refresh_pack(
    api: &ApiClient,
    session: RwSignal<Session>,
    pack_id: i64,
    state: RwSignal<PackState>,
    notes: RwSignal<String>,
) {
    let session_now = session.get_untracked();
    match api.fetch_pack(&session_now, pack_id).await {
        Ok(pack) => {
            notes.set(pack.reviewer_notes.clone());
            state.update(|s| {
                s.pack = Some(pack);
                s.busy = false;
            });
        }
        Err(error) => {
            log::warn!("content pack fetch failed: {error}");
            state.update(|s| {
                s.busy = false;
                s.error = Some(error.to_string());
            });
        }
    }
}

/// Initial (and route-change) load of the pack record.
fn load_pack(
    api: &ApiClient,
    session: RwSignal<Session>,
    pack_id: i64,
    state: RwSignal<PackState>,
    notes: RwSignal<String>,
) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            refresh_pack(&api, session, pack_id, state, notes).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, session, pack_id, state, notes);
    }
}

/// Issue one review mutation and then re-fetch unconditionally, even when
/// the mutation failed; the banner keeps the failure visible while the
/// screen reconciles with whatever the server now holds.
#[cfg(feature = "hydrate")]
fn run_review_action(
    api: ApiClient,
    session: RwSignal<Session>,
    pack_id: i64,
    state: RwSignal<PackState>,
    notes: RwSignal<String>,
    action: ReviewAction,
) {
    if state.get_untracked().busy {
        return;
    }
    state.update(|s| {
        s.busy = true;
        s.error = None;
    });
    leptos::task::spawn_local(async move {
        let session_now = session.get_untracked();
        let outcome = match action {
            ReviewAction::SaveNotes => {
                api.save_reviewer_notes(&session_now, pack_id, &notes.get_untracked())
                    .await
            }
            ReviewAction::Approve => api.approve_pack(&session_now, pack_id).await,
            ReviewAction::Reject => {
                let notes_now = notes.get_untracked();
                let reason = crate::state::pack::effective_reject_notes(&notes_now);
                api.reject_pack(&session_now, pack_id, reason).await
            }
        };
        if let Err(error) = outcome {
            log::warn!("review action failed: {error}");
            state.update(|s| s.error = Some(error.to_string()));
        }
        refresh_pack(&api, session, pack_id, state, notes).await;
    });
}

/// Detail page — renders the full pack record with the review action row.
#[component]
pub fn PackDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();
    let params = use_params_map();

    let state = RwSignal::new(PackState::default());
    let notes = RwSignal::new(String::new());

    let route_id = move || parse_pack_id(params.read().get("id"));

    // Fetch whenever the route parameter changes.
    {
        let api = api.clone();
        Effect::new(move || {
            let Some(pack_id) = route_id() else {
                state.update(|s| {
                    s.pack = None;
                    s.error = Some("invalid content pack id".to_owned());
                });
                return;
            };
            state.set(PackState::default());
            notes.set(String::new());
            load_pack(&api, session, pack_id, state, notes);
        });
    }

    let save_api = api.clone();
    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(pack_id) = route_id() {
                run_review_action(
                    save_api.clone(),
                    session,
                    pack_id,
                    state,
                    notes,
                    ReviewAction::SaveNotes,
                );
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &save_api;
        }
    };

    let approve_api = api.clone();
    let on_approve = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(pack_id) = route_id() {
                run_review_action(
                    approve_api.clone(),
                    session,
                    pack_id,
                    state,
                    notes,
                    ReviewAction::Approve,
                );
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &approve_api;
        }
    };

    let reject_api = api.clone();
    let on_reject = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(pack_id) = route_id() {
                run_review_action(
                    reject_api.clone(),
                    session,
                    pack_id,
                    state,
                    notes,
                    ReviewAction::Reject,
                );
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &reject_api;
        }
    };

    let export_api = api.clone();
    let on_export = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(pack_id) = route_id() else {
                return;
            };
            if state.get_untracked().busy {
                return;
            }
            state.update(|s| {
                s.busy = true;
                s.error = None;
            });
            let api = export_api.clone();
            leptos::task::spawn_local(async move {
                let session_now = session.get_untracked();
                match api.export_handoff(&session_now, pack_id).await {
                    Ok(document) => {
                        crate::util::download::save_json_file(
                            &crate::util::download::handoff_filename(pack_id),
                            &crate::util::download::handoff_body(&document),
                        );
                    }
                    Err(error) => {
                        log::warn!("handoff export failed: {error}");
                        state.update(|s| s.error = Some(error.to_string()));
                    }
                }
                state.update(|s| s.busy = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &export_api;
        }
    };

    view! {
        <main class="pack-page">
            <ErrorBanner message=Signal::derive(move || state.get().error)/>
            <Show
                when=move || state.get().pack.is_some()
                fallback=move || view! { <p>"Loading..."</p> }
            >
                {move || state.get().pack.map(|pack| view! { <PackOverview pack=pack/> })}

                <textarea
                    class="pack-page__notes"
                    placeholder="Reviewer notes"
                    rows="4"
                    cols="50"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
                <br/>
                <div class="pack-page__actions">
                    <button class="btn" on:click=on_save.clone() disabled=move || state.get().busy>
                        "Save edits"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=on_approve.clone()
                        disabled=move || state.get().busy
                    >
                        "Approve"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=on_reject.clone()
                        disabled=move || state.get().busy
                    >
                        "Reject"
                    </button>
                    <button class="btn" on:click=on_export.clone() disabled=move || state.get().busy>
                        "Export JSON handoff package"
                    </button>
                </div>
                <p class="pack-page__units-note">
                    "Distance units are stored in km. UI miles toggle planned in v2."
                </p>
            </Show>
        </main>
    }
}

/// Read-only rendering of the fetched pack record.
#[component]
fn PackOverview(pack: ContentPack) -> impl IntoView {
    let ContentPack {
        title,
        summary,
        status,
        bullets,
        tags,
        why_tagged,
        drafts,
        attribution,
        assets,
        location_name,
        distance_km,
        weather_coverage_notes,
        ..
    } = pack;

    view! {
        <h1>{title}</h1>
        <p>"Status: " {status.as_str()}</p>
        <p>{summary}</p>
        {location_name
            .map(|name| {
                view! {
                    <p class="pack-page__location">
                        "Location: " {name}
                        {distance_km.map(|km| format!(" ({km} km away)"))}
                    </p>
                }
            })}
        {(!weather_coverage_notes.is_empty())
            .then(|| view! { <p class="pack-page__weather">{weather_coverage_notes}</p> })}
        <h3>"Bullets"</h3>
        <ul>
            {bullets
                .into_iter()
                .map(|bullet| view! { <li>{bullet}</li> })
                .collect::<Vec<_>>()}
        </ul>
        <h3>"Tags + Why tagged"</h3>
        <ul>
            {tags
                .into_iter()
                .map(|tag| {
                    let reason = tag_reason(&why_tagged, &tag);
                    view! { <li>{tag} " — " {reason}</li> }
                })
                .collect::<Vec<_>>()}
        </ul>
        <h3>"Creative Drafts"</h3>
        {drafts
            .into_iter()
            .map(|draft| view! { <DraftCard draft=draft/> })
            .collect::<Vec<_>>()}
        {(!assets.is_empty())
            .then(|| {
                view! {
                    <h3>"Assets"</h3>
                    <ul>
                        {assets
                            .into_iter()
                            .map(|asset| {
                                view! {
                                    <li class="pack-page__asset">
                                        {asset.kind.as_str()} " from " {asset.provider} ": "
                                        {asset.url} " (rights: " {asset.rights_status} ")"
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
            })}
        <h3>"Attribution requirements"</h3>
        <p>"Required credit: " {attribution_credit(attribution.as_ref())}</p>
        <p>"Notes: " {attribution_notes(attribution.as_ref())}</p>
        <p>"Safe to repost: " {safe_to_repost_text(attribution.as_ref())}</p>
    }
}
