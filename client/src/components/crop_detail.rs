//! Read-only detail card for one crop.

#[cfg(test)]
#[path = "crop_detail_test.rs"]
mod crop_detail_test;

use leptos::prelude::*;

use crate::net::types::Crop;
use crate::util::format::{display_integer, display_number, display_timestamp};

/// Label/value pairs shown in the card, in display order. Absent values
/// render as a dash.
pub fn detail_rows(crop: &Crop) -> Vec<(&'static str, String)> {
    [
        ("Name", crop.name.clone()),
        ("Bag", display_number(crop.bag)),
        ("Quantity", display_integer(crop.qty)),
        ("Base Price", display_number(crop.base_price)),
        ("Trigger Price", display_number(crop.trigger_price)),
        ("Seller ID", crop.seller_id.clone().unwrap_or_default()),
        ("Date & Time", display_timestamp(crop.created_at.as_deref())),
    ]
    .into_iter()
    .map(|(label, value)| {
        if value.trim().is_empty() {
            (label, "—".to_owned())
        } else {
            (label, value)
        }
    })
    .collect()
}

#[component]
pub fn CropDetail(crop: Crop, on_close: Callback<()>) -> impl IntoView {
    let rows = detail_rows(&crop)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">{label}</span>
                    <span class="dialog__profile-value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--crop-detail" on:click=move |ev| ev.stop_propagation()>
                <h2>"Crop Details"</h2>
                {rows}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
