//! Summary tiles and the most-sold strip.
//!
//! Figures are fixed placeholders until the marketplace exposes a reporting
//! endpoint.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use leptos::prelude::*;

use crate::util::format::format_amount;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryFigure {
    pub label: &'static str,
    pub icon: &'static str,
    pub amount: u64,
}

pub const SUMMARY_FIGURES: [SummaryFigure; 3] = [
    SummaryFigure { label: "Revenue", icon: "₹", amount: 420_000 },
    SummaryFigure { label: "Expenses", icon: "⇣", amount: 175_000 },
    SummaryFigure { label: "Sales", icon: "⇡", amount: 350_000 },
];

/// A crop in the most-sold strip with its relative share, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopCrop {
    pub name: &'static str,
    pub share: u8,
}

pub const MOST_SOLD: [TopCrop; 3] = [
    TopCrop { name: "Wheat", share: 70 },
    TopCrop { name: "Corn", share: 40 },
    TopCrop { name: "Rice", share: 75 },
];

/// Tile text for one figure, e.g. `Revenue: 4,20,000/-`.
pub fn tile_text(figure: &SummaryFigure) -> String {
    format!("{}: {}", figure.label, format_amount(figure.amount))
}

#[component]
pub fn SummaryTiles() -> impl IntoView {
    let tiles = SUMMARY_FIGURES
        .iter()
        .map(|figure| {
            view! {
                <div class="summary-tile">
                    <span class="summary-tile__icon" aria-hidden="true">{figure.icon}</span>
                    <span class="summary-tile__text">{tile_text(figure)}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="summary-tiles">{tiles}</div> }
}

#[component]
pub fn MostSoldItems() -> impl IntoView {
    let items = MOST_SOLD
        .iter()
        .map(|item| {
            let width = format!("width: {}%", item.share);
            view! {
                <div class="most-sold__item">
                    <span class="most-sold__name">{item.name}</span>
                    <div class="most-sold__track">
                        <div class="most-sold__bar" style=width></div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="most-sold">
            <h2 class="most-sold__title">"Most Sold Items"</h2>
            {items}
        </section>
    }
}
