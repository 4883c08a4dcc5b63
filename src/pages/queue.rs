//! Review queue page: filterable content pack list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The queue fetches on mount and again on every explicit "Apply filters"
//! click. Filters only constrain the request they are applied with; there
//! is no client-side cache to invalidate.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::pack_card::PackCard;
use crate::net::api::ApiClient;
use crate::state::queue::{QueueFilter, QueueState, STATUS_FILTER_OPTIONS, parse_status_filter};
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::theme;

/// Dropdown value for the current status filter; empty selects all.
fn status_filter_value(filter: &QueueFilter) -> String {
    filter
        .status
        .map(|status| status.as_str().to_owned())
        .unwrap_or_default()
}

/// Issue the list request for the current filter and session, replacing the
/// queue contents when it lands.
fn load_queue(
    api: &ApiClient,
    session: RwSignal<Session>,
    filter: RwSignal<QueueFilter>,
    queue: RwSignal<QueueState>,
) {
    queue.update(|q| {
        q.loading = true;
        q.error = None;
    });
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let session_now = session.get_untracked();
            let filter_now = filter.get_untracked();
            match api.list_packs(&session_now, &filter_now).await {
                Ok(items) => queue.update(|q| {
                    q.items = items;
                    q.loading = false;
                }),
                Err(error) => {
                    log::warn!("content pack list failed: {error}");
                    queue.update(|q| {
                        q.loading = false;
                        q.error = Some(error.to_string());
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, session, filter);
        queue.update(|q| q.loading = false);
    }
}

/// Queue page — status/breaking filters over the pack list, each row
/// linking to its detail view.
#[component]
pub fn QueuePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let filter = RwSignal::new(QueueFilter::default());
    let queue = RwSignal::new(QueueState::default());

    // Initial fetch on mount; filter edits alone do not refetch.
    {
        let api = api.clone();
        Effect::new(move || {
            load_queue(&api, session, filter, queue);
        });
    }

    let on_apply = {
        let api = api.clone();
        move |_| load_queue(&api, session, filter, queue)
    };

    let on_status_change = move |ev| {
        filter.update(|f| f.status = parse_status_filter(&event_target_value(&ev)));
    };

    let on_breaking_change = move |ev| {
        filter.update(|f| f.breaking_only = event_target_checked(&ev));
    };

    let on_toggle_theme = move |_| {
        ui.update(|u| {
            u.theme = u.theme.toggled();
            theme::switch_to(u.theme);
        });
    };

    view! {
        <main class="queue-page">
            <header class="queue-page__header toolbar">
                <h1>"Review Queue Dashboard"</h1>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn toolbar__dark-toggle"
                    on:click=on_toggle_theme
                    title="Toggle dark mode"
                >
                    {move || if ui.get().theme.is_dark() { "☀" } else { "☾" }}
                </button>
            </header>

            <div class="queue-page__filters">
                <select
                    class="queue-page__status-select"
                    prop:value=move || status_filter_value(&filter.get())
                    on:change=on_status_change
                >
                    <option value="">"All statuses"</option>
                    {STATUS_FILTER_OPTIONS
                        .iter()
                        .map(|status| {
                            view! { <option value=status.as_str()>{status.as_str()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <label class="queue-page__breaking">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().breaking_only
                        on:change=on_breaking_change
                    />
                    " Breaking"
                </label>
                <button class="btn btn--primary" on:click=on_apply>
                    "Apply filters"
                </button>
            </div>

            <ErrorBanner message=Signal::derive(move || queue.get().error)/>

            <Show
                when=move || !queue.get().loading
                fallback=move || view! { <p>"Loading content packs..."</p> }
            >
                <ul class="queue-page__list">
                    {move || {
                        queue
                            .get()
                            .items
                            .into_iter()
                            .map(|pack| {
                                view! {
                                    <PackCard
                                        id=pack.id
                                        title=pack.title
                                        status=pack.status
                                        breaking=pack.breaking
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </main>
    }
}
