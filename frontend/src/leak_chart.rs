use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::config::{ChartConfig, Rgb};
use crate::content::LeakDataPoint;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart canvas is not mounted")]
    CanvasMissing,
    #[error("canvas backend unavailable")]
    BackendUnavailable,
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

fn color((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

/// Top of the y axis: the tallest point rounded up to the next `step`.
pub fn axis_ceiling(points: &[LeakDataPoint], step: u32) -> u32 {
    let step = step.max(1);
    let max = points.iter().map(|p| p.leaks).max().unwrap_or(0);
    (max / step + 1) * step
}

/// Left and right pixel edges of the plotting area on the full-size canvas.
pub fn plot_span(config: &ChartConfig) -> (f64, f64) {
    let left = f64::from(config.margin + config.y_label_area);
    let right = f64::from(config.width.saturating_sub(config.margin));
    (left, right.max(left))
}

/// Horizontal pixel position of point `index` out of `count`.
pub fn point_x(index: usize, count: usize, config: &ChartConfig) -> f64 {
    let (left, right) = plot_span(config);
    if count < 2 {
        return left;
    }
    left + (right - left) * index as f64 / (count - 1) as f64
}

/// Index of the point nearest to canvas pixel `x`. Positions outside the plot
/// clamp to the first or last point.
pub fn nearest_point(x: f64, count: usize, config: &ChartConfig) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let (left, right) = plot_span(config);
    if count == 1 || right <= left {
        return Some(0);
    }
    let fraction = ((x - left) / (right - left)).clamp(0.0, 1.0);
    Some((fraction * (count - 1) as f64).round() as usize)
}

/// Plot coordinates, one per month in table order.
pub fn series(points: &[LeakDataPoint]) -> Vec<(usize, u32)> {
    points.iter().enumerate().map(|(i, p)| (i, p.leaks)).collect()
}

fn month_label(points: &[LeakDataPoint], index: usize) -> String {
    points
        .get(index)
        .map(|p| p.month.to_string())
        .unwrap_or_default()
}

fn draw_chart(
    canvas: HtmlCanvasElement,
    points: &[LeakDataPoint],
    config: &ChartConfig,
) -> Result<(), ChartError> {
    canvas.set_width(config.width);
    canvas.set_height(config.height);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::BackendUnavailable)?;
    let root = backend.into_drawing_area();
    root.fill(&color(config.background)).map_err(draw_err)?;

    if points.is_empty() {
        return root.present().map_err(draw_err);
    }

    let accent = color(config.line_color);
    let last = points.len() - 1;
    let coords = series(points);

    let mut chart = ChartBuilder::on(&root)
        .margin(config.margin)
        .x_label_area_size(config.x_label_area)
        .y_label_area_size(config.y_label_area)
        .build_cartesian_2d(0..last, 0..axis_ceiling(points, config.y_step))
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .axis_style(accent)
        .label_style(("sans-serif", 14).into_font().color(&accent))
        .x_labels(points.len())
        .x_label_formatter(&|x| month_label(points, *x))
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            coords.iter().copied(),
            accent.stroke_width(config.line_width),
        ))
        .map_err(draw_err)?;

    chart
        .draw_series(
            coords
                .iter()
                .map(|&coord| Circle::new(coord, config.dot_radius, accent.filled())),
        )
        .map_err(draw_err)?;

    root.present().map_err(draw_err)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub points: &'static [LeakDataPoint],
}

#[function_component]
pub fn LeakChart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();
    let hovered = use_state(|| None::<usize>);
    let config = ChartConfig::default();
    let points = props.points;

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let drawn = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(ChartError::CanvasMissing)
                    .and_then(|canvas| draw_chart(canvas, points, &config));
                if let Err(e) = drawn {
                    warn!("leak chart not drawn: {}", e);
                }
                || ()
            },
            (),
        );
    }

    let on_move = {
        let hovered = hovered.clone();
        Callback::from(move |e: MouseEvent| {
            let canvas: HtmlCanvasElement = e.target_unchecked_into();
            let shown = canvas.client_width().max(1) as f64;
            let x = e.offset_x() as f64 * f64::from(canvas.width()) / shown;
            hovered.set(nearest_point(x, points.len(), &config));
        })
    };

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let tooltip = (*hovered).and_then(|i| points.get(i).map(|p| (i, p))).map(|(i, point)| {
        let left = point_x(i, points.len(), &config) / f64::from(config.width) * 100.0;
        html! {
            <div class="chart-tooltip" style={format!("left: {:.2}%;", left)}>
                <div class="chart-tooltip-label">{point.month}</div>
                <div class="chart-tooltip-value">{format!("leaks : {}", point.leaks)}</div>
            </div>
        }
    });

    html! {
        <div class="leak-chart">
            <canvas
                ref={canvas_ref}
                width={config.width.to_string()}
                height={config.height.to_string()}
                onmousemove={on_move}
                onmouseleave={on_leave}
            />
            { for tooltip }
        </div>
    }
}
