//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::ApiClient;
use crate::net::config::ApiConfig;
use crate::pages::{
    home::HomePage, login::LoginPage, pack_detail::PackDetailPage, queue::QueuePage,
};
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::theme;

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
/// Builds the request collaborator from explicit configuration, restores
/// the reviewer session and theme, and provides all of them as context
/// before setting up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(&ApiConfig::from_build_env());
    provide_context(api);

    let session = RwSignal::new(Session::load());
    provide_context(session);

    let theme = theme::load_preference();
    theme::apply(theme);
    let ui = RwSignal::new(UiState { theme });
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/sendy-review.css"/>
        <Title text="Get Sendy Review Queue"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("queue") view=QueuePage/>
                <Route
                    path=(StaticSegment("content-packs"), ParamSegment("id"))
                    view=PackDetailPage
                />
            </Routes>
        </Router>
    }
}
