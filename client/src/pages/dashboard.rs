//! Farmer dashboard: greeting header, overview figures, crop management.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. It loads the farmer's profile once on mount and composes
//! the sidebar, summary widgets, and the crop panel, each of which reads its
//! own state from context.

use leptos::prelude::*;

use crate::components::crop_panel::CropManagement;
use crate::components::revenue_chart::RevenueChart;
use crate::components::sidebar::Sidebar;
use crate::components::summary::{MostSoldItems, SummaryTiles};
use crate::net::api::HttpCropService;
use crate::state::user::UserState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = expect_context::<RwSignal<UserState>>();
    let service = expect_context::<HttpCropService>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_user_data(service.config()).await;
            if let Err(err) = &result {
                log::error!("failed to load user data: {err}");
            }
            user.update(|u| u.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = service;

    let heading = move || user.with(UserState::heading);
    let avatar = move || {
        user.with(|u| {
            u.user
                .as_ref()
                .and_then(|profile| profile.fname.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dashboard">
            <Sidebar/>
            <div class="dashboard__main">
                <header class="dashboard__header">
                    <h1 class="dashboard__greeting">{heading}</h1>
                    <div class="dashboard__actions">
                        <a class="btn btn--wallet" href="/wallet">"Wallet"</a>
                        <span class="dashboard__avatar" aria-label="Profile">{avatar}</span>
                    </div>
                </header>
                <main class="dashboard__content">
                    <SummaryTiles/>
                    <div class="dashboard__overview">
                        <MostSoldItems/>
                        <section class="dashboard__chart">
                            <h2>"Overview"</h2>
                            <RevenueChart/>
                        </section>
                    </div>
                    <CropManagement/>
                </main>
            </div>
        </div>
    }
}
