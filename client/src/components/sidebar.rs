//! Navigation sidebar with a mobile menu toggle.

use leptos::prelude::*;

use crate::state::ui::{NavItem, UiState};

/// Brand header plus the section links. On narrow screens the sidebar is
/// hidden until the menu button opens it; tapping the backdrop or a link
/// closes it again.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let links = NavItem::ALL
        .into_iter()
        .map(|item| {
            view! {
                <a
                    href="#"
                    class="sidebar__link"
                    class:sidebar__link--active=move || ui.with(|u| u.active_nav == item)
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ui.update(|u| {
                            u.active_nav = item;
                            u.close_sidebar();
                        });
                    }
                >
                    <span class="sidebar__icon" aria-hidden="true">{item.icon()}</span>
                    <span class="sidebar__label">{item.label()}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <button
            class="sidebar__menu"
            aria-label="Toggle navigation"
            on:click=move |_| ui.update(UiState::toggle_sidebar)
        >
            "☰"
        </button>
        <aside class="sidebar" class:sidebar--open=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar__brand">"KRISHIBHARAT"</div>
            <nav class="sidebar__nav">{links}</nav>
        </aside>
        <Show when=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar__backdrop" on:click=move |_| ui.update(UiState::close_sidebar)></div>
        </Show>
    }
}
