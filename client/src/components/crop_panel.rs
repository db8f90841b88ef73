//! Crop management panel: table, inline errors, and the two overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns every user action that reaches the crop service. Handlers hand a
//! clone of the service and the Copy signal store to a spawned task running
//! the matching `state::flow` function; the view only reads signals.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures interrupt with a blocking alert and leave the draft
//! open. Service failures become inline error lines under the table.

use std::future::Future;

use leptos::prelude::*;

use crate::components::crop_detail::CropDetail;
use crate::components::crop_form_modal::CropFormModal;
use crate::components::crop_table::CropTable;
use crate::net::api::HttpCropService;
use crate::net::types::Crop;
use crate::state::crops::CropsState;
use crate::state::flow::{self, SignalCropStore, SubmitOutcome};
use crate::state::modal::ModalState;
use crate::util::alert::blocking_alert;

/// Run a flow task in the browser. Server renders never trigger handlers.
fn spawn_flow(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

#[component]
pub fn CropManagement() -> impl IntoView {
    let store = expect_context::<SignalCropStore>();
    let service = expect_context::<HttpCropService>();

    // Initial load on mount.
    {
        let service = service.clone();
        spawn_flow(async move { flow::refresh(&service, &store).await });
    }

    let on_view = Callback::new(move |crop: Crop| store.modal.update(|m| m.start_view(&crop)));
    let on_edit = Callback::new(move |crop: Crop| store.modal.update(|m| m.start_edit(&crop)));
    let on_close_view = Callback::new(move |()| store.modal.update(ModalState::close_view));
    let on_cancel = Callback::new(move |()| store.modal.update(ModalState::cancel));

    let on_delete = {
        let service = service.clone();
        Callback::new(move |id: String| {
            let service = service.clone();
            spawn_flow(async move { flow::remove(&service, &store, &id).await });
        })
    };
    let on_publish = {
        let service = service.clone();
        Callback::new(move |id: String| {
            let service = service.clone();
            spawn_flow(async move { flow::publish(&service, &store, &id).await });
        })
    };
    let on_submit = Callback::new(move |()| {
        let service = service.clone();
        spawn_flow(async move {
            if let SubmitOutcome::Invalid(err) = flow::submit(&service, &store).await {
                blocking_alert(&err.to_string());
            }
        });
    });

    let error_lines = move || {
        store
            .crops
            .with(CropsState::error_lines)
            .into_iter()
            .map(|line| view! { <p class="crop-panel__error">{line}</p> })
            .collect::<Vec<_>>()
    };
    let viewing = move || {
        store
            .modal
            .with(|m| m.viewing().cloned())
            .map(|crop| view! { <CropDetail crop=crop on_close=on_close_view/> })
    };

    view! {
        <section class="crop-panel">
            <header class="crop-panel__header">
                <h2 class="crop-panel__title">"Crop Management"</h2>
                <button
                    class="btn btn--primary"
                    on:click=move |_| store.modal.update(ModalState::start_create)
                >
                    "+ Add Crop"
                </button>
            </header>
            <Show
                when=move || !store.crops.with(CropsState::is_initial_loading)
                fallback=|| view! { <p class="crop-panel__loading">"Loading crops..."</p> }
            >
                <CropTable
                    on_view=on_view
                    on_edit=on_edit
                    on_delete=on_delete
                    on_publish=on_publish
                />
                {error_lines}
            </Show>
            <Show when=move || store.modal.with(|m| m.draft().is_some())>
                <CropFormModal on_submit=on_submit on_cancel=on_cancel/>
            </Show>
            {viewing}
        </section>
    }
}
