//! Monthly revenue vs. expenses bar chart.

#[cfg(test)]
#[path = "revenue_chart_test.rs"]
mod revenue_chart_test;

use leptos::prelude::*;

use crate::util::chart::{BarChart, Series, tick_label_x};
use crate::util::format::group_indian;

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 280.0;
const TICKS: u64 = 5;

/// Static overview data, January to July.
pub fn overview_chart() -> BarChart {
    BarChart {
        labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"],
        series: vec![
            Series {
                label: "Revenue",
                color: "#4a7c59",
                values: vec![50_000, 20_000, 80_000, 81_000, 56_000, 55_000, 40_000],
            },
            Series {
                label: "Expenses",
                color: "#2f4f4f",
                values: vec![30_000, 40_000, 45_000, 50_000, 35_000, 32_000, 25_000],
            },
        ],
    }
}

#[component]
pub fn RevenueChart() -> impl IntoView {
    let chart = overview_chart();
    let layout = chart.layout(VIEW_W, VIEW_H, TICKS);

    let grid = layout
        .ticks
        .iter()
        .map(|tick| {
            let y = format!("{:.1}", tick.y);
            view! {
                <line
                    class="chart__grid"
                    x1={format!("{:.1}", layout.plot_left)}
                    x2={format!("{:.1}", layout.plot_right)}
                    y1={y.clone()}
                    y2={y.clone()}
                />
                <text class="chart__tick" x={format!("{:.1}", tick_label_x())} y=y text-anchor="end" dominant-baseline="middle">
                    {group_indian(tick.value)}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let bars = layout
        .bars
        .iter()
        .map(|bar| {
            view! {
                <rect
                    class="chart__bar"
                    x={format!("{:.1}", bar.x)}
                    y={format!("{:.1}", bar.y)}
                    width={format!("{:.1}", bar.width)}
                    height={format!("{:.1}", bar.height)}
                    fill=bar.color
                />
            }
        })
        .collect::<Vec<_>>();

    let label_y = format!("{:.1}", layout.baseline + 18.0);
    let x_labels = layout
        .x_labels
        .iter()
        .map(|label| {
            view! {
                <text class="chart__label" x={format!("{:.1}", label.x)} y={label_y.clone()} text-anchor="middle">
                    {label.text}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let legend = chart
        .series
        .iter()
        .map(|series| {
            let swatch = format!("background: {}", series.color);
            view! {
                <span class="chart__legend-item">
                    <span class="chart__swatch" style=swatch></span>
                    {series.label}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <figure class="chart">
            <svg
                class="chart__svg"
                viewBox={format!("0 0 {VIEW_W} {VIEW_H}")}
                role="img"
                aria-label="Monthly revenue and expenses"
            >
                {grid}
                {bars}
                {x_labels}
            </svg>
            <figcaption class="chart__legend">{legend}</figcaption>
        </figure>
    }
}
