//! Geometry for the dashboard's grouped bar chart.
//!
//! The chart is static SVG: this module turns labelled series into bar
//! rectangles and y-axis ticks so the component only has to draw them.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
/// Fraction of each label slot occupied by bars.
const GROUP_FILL: f64 = 0.8;

/// One dataset, e.g. monthly revenue.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<u64>,
}

/// Category labels plus the series plotted against them.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub labels: Vec<&'static str>,
    pub series: Vec<Series>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub value: u64,
}

/// Horizontal grid line at `y` for `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub value: u64,
}

/// Centered x position for a category label.
#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub x: f64,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    pub x_labels: Vec<XLabel>,
    /// Baseline y coordinate (value zero).
    pub baseline: f64,
    /// Horizontal extent of the plot area, for grid lines.
    pub plot_left: f64,
    pub plot_right: f64,
    pub axis_max: u64,
}

/// Axis maximum and step for `ticks` intervals starting at zero. Steps are
/// 1, 2 or 5 times a power of ten.
pub fn nice_axis(max: u64, ticks: u64) -> (u64, u64) {
    let ticks = ticks.max(1);
    let raw = max.max(1).div_ceil(ticks);
    let mut magnitude = 1_u64;
    while let Some(next) = magnitude.checked_mul(10)
        && next <= raw
    {
        magnitude = next;
    }
    let step = [1_u64, 2, 5, 10]
        .into_iter()
        .map(|m| m.saturating_mul(magnitude))
        .find(|candidate| *candidate >= raw)
        .unwrap_or_else(|| magnitude.saturating_mul(10));
    (max.max(1).div_ceil(step).saturating_mul(step), step)
}

impl BarChart {
    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Lay the chart out in a `width` x `height` viewport with `tick_count`
    /// grid intervals. Missing values in a series draw nothing.
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&self, width: f64, height: f64, tick_count: u64) -> ChartLayout {
        let plot_w = (width - PAD_LEFT - PAD_RIGHT).max(0.0);
        let plot_h = (height - PAD_TOP - PAD_BOTTOM).max(0.0);
        let baseline = PAD_TOP + plot_h;
        let (axis_max, step) = nice_axis(self.max_value(), tick_count);

        let slots = self.labels.len().max(1) as f64;
        let slot_w = plot_w / slots;
        let series_count = self.series.len().max(1) as f64;
        let bar_w = slot_w * GROUP_FILL / series_count;
        let inset = slot_w * (1.0 - GROUP_FILL) / 2.0;

        let mut bars = Vec::new();
        for (label_idx, _) in self.labels.iter().enumerate() {
            for (series_idx, series) in self.series.iter().enumerate() {
                let Some(value) = series.values.get(label_idx).copied() else {
                    continue;
                };
                let bar_h = plot_h * value as f64 / axis_max as f64;
                bars.push(Bar {
                    x: PAD_LEFT + slot_w * label_idx as f64 + inset + bar_w * series_idx as f64,
                    y: baseline - bar_h,
                    width: bar_w,
                    height: bar_h,
                    color: series.color,
                    value,
                });
            }
        }

        let ticks = (0..=axis_max / step)
            .map(|i| {
                let value = i * step;
                Tick {
                    y: baseline - plot_h * value as f64 / axis_max as f64,
                    value,
                }
            })
            .collect();

        let x_labels = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, text)| XLabel {
                x: PAD_LEFT + slot_w * (i as f64 + 0.5),
                text,
            })
            .collect();

        ChartLayout {
            bars,
            ticks,
            x_labels,
            baseline,
            plot_left: PAD_LEFT,
            plot_right: PAD_LEFT + plot_w,
            axis_max,
        }
    }
}

/// Right edge of the y-axis tick labels.
pub fn tick_label_x() -> f64 {
    PAD_LEFT - 6.0
}
