//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpCropService;
use crate::net::config::ApiConfig;
use crate::pages::dashboard::DashboardPage;
use crate::state::flow::SignalCropStore;
use crate::state::ui::UiState;
use crate::state::user::UserState;

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
/// Provides the shared stores and the crop service, then routes `/` to the
/// dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SignalCropStore::new());
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(UserState::default()));
    provide_context(HttpCropService::new(ApiConfig::from_build_env()));

    view! {
        <Stylesheet id="leptos" href="/pkg/krishi-dashboard.css"/>
        <Title text="Krishibharat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
