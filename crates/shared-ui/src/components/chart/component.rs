use super::geometry::{
    axis_ticks, band_centers, bar_rects, donut_arcs, line_points, max_value, points_attr, Frame,
};
use dioxus::prelude::*;

/// Width of every chart's view box; charts scale to their container.
const VIEW_WIDTH: f64 = 480.0;

/// Number of intervals the y-axis is split into.
const TICK_COUNT: usize = 4;

const GRID_COLOR: &str = "#f0f0f0";
const AXIS_COLOR: &str = "#9ca3af";

/// A labeled value in a line or bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A colored slice of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Dashed horizontal gridlines with y-axis tick labels.
#[component]
fn ChartGrid(frame: Frame, ticks: Vec<f64>) -> Element {
    let top = ticks.last().copied().unwrap_or(0.0);
    let (left, right, bottom) = (frame.left(), frame.right(), frame.bottom());
    let label_x = left - 6.0;
    // (gridline y, label baseline, tick value)
    let rows: Vec<(f64, f64, f64)> = ticks
        .iter()
        .map(|tick| {
            let y = frame.y_for(*tick, top);
            (y, y + 4.0, *tick)
        })
        .collect();

    rsx! {
        g { class: "chart-grid",
            for (y, label_y, tick) in rows.into_iter() {
                line {
                    x1: "{left}",
                    x2: "{right}",
                    y1: "{y:.2}",
                    y2: "{y:.2}",
                    stroke: GRID_COLOR,
                    stroke_dasharray: "3 3",
                }
                text {
                    class: "chart-axis-label",
                    x: "{label_x}",
                    y: "{label_y:.2}",
                    text_anchor: "end",
                    fill: AXIS_COLOR,
                    "{tick}"
                }
            }
            line {
                x1: "{left}",
                x2: "{right}",
                y1: "{bottom}",
                y2: "{bottom}",
                stroke: AXIS_COLOR,
            }
        }
    }
}

/// Category labels along the x-axis.
#[component]
fn ChartXLabels(frame: Frame, labels: Vec<(f64, String)>) -> Element {
    let label_y = frame.bottom() + 18.0;

    rsx! {
        g { class: "chart-x-labels",
            for (x, label) in labels.into_iter() {
                text {
                    class: "chart-axis-label",
                    x: "{x:.2}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    fill: AXIS_COLOR,
                    "{label}"
                }
            }
        }
    }
}

/// Color swatch and series name under a chart.
#[component]
pub fn ChartLegend(color: String, label: String) -> Element {
    rsx! {
        div { class: "chart-legend",
            span { class: "chart-legend-swatch", style: "background-color: {color};" }
            span { class: "chart-legend-label", "{label}" }
        }
    }
}

/// Single-series line chart.
#[component]
pub fn LineChart(
    data: Vec<ChartDatum>,
    stroke: String,
    #[props(default = 240)] height: u32,
    #[props(default)] legend: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let frame = Frame::new(VIEW_WIDTH, height as f64);
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let ticks = axis_ticks(max_value(&values), TICK_COUNT);
    let top = ticks.last().copied().unwrap_or(0.0);
    let points = line_points(&values, &frame, top);
    let polyline = points_attr(&points);
    let labels: Vec<(f64, String)> = points
        .iter()
        .zip(data.iter())
        .map(|((x, _), d)| (*x, d.label.clone()))
        .collect();

    let base = vec![
        Attribute::new("class", "chart", None, false),
        Attribute::new("data-chart-type", "line", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            svg {
                class: "chart-svg",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {VIEW_WIDTH} {height}",
                width: "100%",
                height: "{height}",
                ChartGrid { frame, ticks }
                polyline {
                    class: "chart-line",
                    points: "{polyline}",
                    fill: "none",
                    stroke: "{stroke}",
                    stroke_width: "2",
                    stroke_linejoin: "round",
                }
                for ((x, y), datum) in points.iter().zip(data.iter()) {
                    circle {
                        class: "chart-point",
                        cx: "{x:.2}",
                        cy: "{y:.2}",
                        r: "3",
                        fill: "{stroke}",
                        title { "{datum.label}: {datum.value}" }
                    }
                }
                ChartXLabels { frame, labels }
            }
            if let Some(label) = legend {
                ChartLegend { color: stroke.clone(), label }
            }
        }
    }
}

/// Single-series vertical bar chart.
#[component]
pub fn BarChart(
    data: Vec<ChartDatum>,
    fill: String,
    #[props(default = 240)] height: u32,
    #[props(default)] legend: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let frame = Frame::new(VIEW_WIDTH, height as f64);
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let ticks = axis_ticks(max_value(&values), TICK_COUNT);
    let top = ticks.last().copied().unwrap_or(0.0);
    let bars = bar_rects(&values, &frame, top);
    let labels: Vec<(f64, String)> = band_centers(data.len(), &frame)
        .into_iter()
        .zip(data.iter())
        .map(|(x, d)| (x, d.label.clone()))
        .collect();

    let base = vec![
        Attribute::new("class", "chart", None, false),
        Attribute::new("data-chart-type", "bar", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            svg {
                class: "chart-svg",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {VIEW_WIDTH} {height}",
                width: "100%",
                height: "{height}",
                ChartGrid { frame, ticks }
                for (bar, datum) in bars.iter().zip(data.iter()) {
                    rect {
                        class: "chart-bar",
                        x: "{bar.x:.2}",
                        y: "{bar.y:.2}",
                        width: "{bar.width:.2}",
                        height: "{bar.height:.2}",
                        fill: "{fill}",
                        title { "{datum.label}: {datum.value}" }
                    }
                }
                ChartXLabels { frame, labels }
            }
            if let Some(label) = legend {
                ChartLegend { color: fill.clone(), label }
            }
        }
    }
}

/// Ring chart with a legend listing each slice's share.
#[component]
pub fn DonutChart(
    slices: Vec<DonutSlice>,
    #[props(default = 240)] height: u32,
    #[props(default = 60.0)] inner_radius: f64,
    #[props(default = 80.0)] outer_radius: f64,
    #[props(default = 5.0)] padding_angle: f64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let center = (VIEW_WIDTH / 2.0, height as f64 / 2.0);
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let arcs = donut_arcs(&values, center, inner_radius, outer_radius, padding_angle);

    let base = vec![
        Attribute::new("class", "chart", None, false),
        Attribute::new("data-chart-type", "donut", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            svg {
                class: "chart-svg",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {VIEW_WIDTH} {height}",
                width: "100%",
                height: "{height}",
                for (arc, slice) in arcs.iter().zip(slices.iter()) {
                    path {
                        class: "chart-slice",
                        d: "{arc.path}",
                        fill: "{slice.color}",
                        title { "{slice.label}: {slice.value}%" }
                    }
                }
            }
            div { class: "chart-donut-legend",
                for slice in slices.iter() {
                    div { class: "chart-donut-legend-row",
                        div { class: "chart-donut-legend-name",
                            span { class: "chart-legend-dot", style: "background-color: {slice.color};" }
                            span { "{slice.label}" }
                        }
                        span { class: "chart-donut-legend-value", "{slice.value}%" }
                    }
                }
            }
        }
    }
}
