//! Add/edit form for a single crop.

use leptos::prelude::*;

use crate::state::flow::SignalCropStore;
use crate::state::form::CropField;
use crate::state::modal::Draft;

/// Modal form bound to the open draft. Renders nothing useful when no draft
/// is open, so callers gate it on `ModalState::draft`.
#[component]
pub fn CropFormModal(on_submit: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let store = expect_context::<SignalCropStore>();

    let title = move || store.modal.with(|m| m.draft().map_or("Add Crop", Draft::title));
    let saving = move || store.crops.with(|s| s.add.is_pending() || s.update.is_pending());

    let fields = CropField::ALL
        .into_iter()
        .map(|field| {
            let value = move || {
                store
                    .modal
                    .with(|m| m.draft().map(|d| d.form.get(field).to_owned()))
                    .unwrap_or_default()
            };
            view! {
                <div class="crop-form__field">
                    <label class="crop-form__label" for=field.input_id()>
                        {field.label()}
                    </label>
                    <input
                        id=field.input_id()
                        class="crop-form__input"
                        type=field.input_type()
                        prop:value=value
                        on:input=move |ev| {
                            let next = event_target_value(&ev);
                            store.modal.update(|m| m.set_field(field, next));
                        }
                    />
                </div>
            }
        })
        .collect::<Vec<_>>();

    // Focus the dialog once mounted so Escape works without a click first.
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop">
            <div
                class="dialog dialog--crop-form"
                node_ref=dialog_ref
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{title}</h2>
                <div class="crop-form">{fields}</div>
                <div class="dialog__actions">
                    <button
                        class="btn btn--primary"
                        class:btn--busy=saving
                        on:click=move |_| on_submit.run(())
                    >
                        "Submit"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
