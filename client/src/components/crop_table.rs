//! Crop listing table with per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come straight from `CropsState::items` and are keyed by the
//! service-assigned id. Action buttons only report intent through callbacks;
//! the owning panel decides what each one does.

#[cfg(test)]
#[path = "crop_table_test.rs"]
mod crop_table_test;

use leptos::prelude::*;

use crate::net::types::Crop;
use crate::state::crops::Mutation;
use crate::state::flow::SignalCropStore;
use crate::util::format::{display_integer, display_number, display_timestamp};

/// Column headers; every column except name and actions hides on narrow
/// screens, where the View button takes over.
pub const COLUMNS: [&str; 7] = [
    "Crop Name",
    "Bag",
    "Quantity",
    "Base Price",
    "Trigger Price",
    "Date",
    "Actions",
];

/// One rendered table row.
#[derive(Clone, Debug, PartialEq)]
pub struct CropRow {
    pub crop: Crop,
    /// Name, bag, quantity, base price, trigger price, date.
    pub cells: [String; 6],
}

impl CropRow {
    pub fn key(&self) -> String {
        self.crop.id.clone()
    }
}

/// Project crops into rows, one per record, in server order.
pub fn crop_rows(crops: &[Crop]) -> Vec<CropRow> {
    crops
        .iter()
        .map(|crop| CropRow {
            cells: [
                crop.name.clone(),
                display_number(crop.bag),
                display_integer(crop.qty),
                display_number(crop.base_price),
                display_number(crop.trigger_price),
                display_timestamp(crop.created_at.as_deref()),
            ],
            crop: crop.clone(),
        })
        .collect()
}

/// Table of the server's current crops.
#[component]
pub fn CropTable(
    on_view: Callback<Crop>,
    on_edit: Callback<Crop>,
    on_delete: Callback<String>,
    on_publish: Callback<String>,
) -> impl IntoView {
    let store = expect_context::<SignalCropStore>();
    let pending = move |mutation: Mutation| store.crops.with(|s| s.status(mutation).is_pending());

    let header = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let collapsible = i != 0 && i != COLUMNS.len() - 1;
            view! {
                <th class="crop-table__head" class:crop-table__cell--wide=collapsible>
                    {*title}
                </th>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="crop-table__scroll">
            <table class="crop-table">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.crops.with(|s| crop_rows(&s.items))
                        key=CropRow::key
                        children=move |row: CropRow| {
                            let [name, bag, qty, base_price, trigger_price, date] = row.cells;
                            let crop = row.crop;
                            let view_crop = crop.clone();
                            let edit_crop = crop.clone();
                            let delete_id = crop.id.clone();
                            let publish_id = crop.id;
                            view! {
                                <tr class="crop-table__row">
                                    <td class="crop-table__cell crop-table__cell--name">{name}</td>
                                    <td class="crop-table__cell crop-table__cell--wide">{bag}</td>
                                    <td class="crop-table__cell crop-table__cell--wide">{qty}</td>
                                    <td class="crop-table__cell crop-table__cell--wide">{base_price}</td>
                                    <td class="crop-table__cell crop-table__cell--wide">{trigger_price}</td>
                                    <td class="crop-table__cell crop-table__cell--wide">{date}</td>
                                    <td class="crop-table__cell crop-table__actions">
                                        <button
                                            class="btn btn--view"
                                            on:click=move |_| on_view.run(view_crop.clone())
                                        >
                                            "View"
                                        </button>
                                        <button
                                            class="btn btn--edit"
                                            class:btn--busy=move || pending(Mutation::Add) || pending(Mutation::Update)
                                            on:click=move |_| on_edit.run(edit_crop.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            class:btn--busy=move || pending(Mutation::Remove)
                                            on:click=move |_| on_delete.run(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                        <button
                                            class="btn btn--publish"
                                            class:btn--busy=move || pending(Mutation::Publish)
                                            on:click=move |_| on_publish.run(publish_id.clone())
                                        >
                                            "Publish"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
