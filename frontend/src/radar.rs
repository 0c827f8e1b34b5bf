use std::f64::consts::TAU;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::{css_rgba, RadarConfig};
use crate::frame_loop::{BrowserFrames, FrameLoop};

#[derive(Debug, thiserror::Error)]
pub enum RadarError {
    #[error("radar canvas is not mounted")]
    CanvasMissing,
    #[error("2d drawing context is unavailable")]
    ContextUnavailable,
    #[error("no window to schedule frames on")]
    NoWindow,
    #[error("canvas call failed: {0}")]
    Draw(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub opacity: f64,
}

/// Direction of the sweep line, in radians from the positive x axis.
pub fn sweep_angle(now_ms: f64, ms_per_radian: f64) -> f64 {
    (now_ms / ms_per_radian).rem_euclid(TAU)
}

/// Concentric rings, innermost first, fading in towards the edge.
pub fn rings(config: &RadarConfig) -> impl Iterator<Item = Ring> + '_ {
    let count = f64::from(config.rings);
    (1..=config.rings).map(move |i| {
        let tier = f64::from(i);
        Ring {
            radius: config.radius * tier / count,
            opacity: tier / (2.0 * count),
        }
    })
}

pub fn sweep_end(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (center.0 + angle.cos() * radius, center.1 + angle.sin() * radius)
}

pub struct RadarPainter {
    context: CanvasRenderingContext2d,
    config: RadarConfig,
}

impl RadarPainter {
    /// Sizes `canvas` to the configured square and takes its 2d context.
    pub fn attach(canvas: &HtmlCanvasElement, config: RadarConfig) -> Result<Self, RadarError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| RadarError::ContextUnavailable)?
            .ok_or(RadarError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RadarError::ContextUnavailable)?;

        canvas.set_width(config.size);
        canvas.set_height(config.size);

        Ok(Self { context, config })
    }

    fn center(&self) -> (f64, f64) {
        let half = f64::from(self.config.size) / 2.0;
        (half, half)
    }

    pub fn paint(&self, now_ms: f64) -> Result<(), RadarError> {
        let ctx = &self.context;
        let size = f64::from(self.config.size);
        let (cx, cy) = self.center();

        ctx.clear_rect(0.0, 0.0, size, size);

        ctx.set_line_width(1.0);
        for ring in rings(&self.config) {
            ctx.begin_path();
            ctx.arc(cx, cy, ring.radius, 0.0, TAU)
                .map_err(|e| RadarError::Draw(format!("{:?}", e)))?;
            ctx.set_stroke_style_str(&css_rgba(self.config.color, ring.opacity));
            ctx.stroke();
        }

        let angle = sweep_angle(now_ms, self.config.ms_per_radian);
        let (x, y) = sweep_end((cx, cy), self.config.radius, angle);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(x, y);
        ctx.set_stroke_style_str(&css_rgba(self.config.color, self.config.sweep_alpha));
        ctx.set_line_width(self.config.sweep_width);
        ctx.stroke();

        Ok(())
    }
}

fn start_radar(canvas_ref: &NodeRef, config: RadarConfig) -> Result<FrameLoop<BrowserFrames>, RadarError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(RadarError::CanvasMissing)?;
    let painter = RadarPainter::attach(&canvas, config)?;
    let frames = BrowserFrames::new().ok_or(RadarError::NoWindow)?;

    let animation = FrameLoop::start(frames, move || {
        if let Err(e) = painter.paint(js_sys::Date::now()) {
            debug!("radar frame skipped: {}", e);
        }
    });
    if !animation.is_running() {
        debug!("radar painted once; no further frames were scheduled");
    }
    Ok(animation)
}

#[function_component(Radar)]
pub fn radar() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let animation = match start_radar(&canvas_ref, RadarConfig::default()) {
                    Ok(animation) => Some(animation),
                    Err(e) => {
                        debug!("radar animation not started: {}", e);
                        None
                    }
                };
                // Dropping the loop cancels the frame it has queued.
                move || drop(animation)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="radar-canvas" aria-hidden="true" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn angle_at_seconds(t: f64) -> f64 {
        sweep_angle(t * 1000.0, RadarConfig::default().ms_per_radian)
    }

    #[test]
    fn sweep_angle_is_half_elapsed_seconds_modulo_turn() {
        for t in [0.0, 0.5, 1.0, 3.0, 6.0, 12.0, 12.6, 100.0, 1_000.25] {
            let expected = (t / 2.0) % TAU;
            assert!((angle_at_seconds(t) - expected).abs() < EPS, "t = {}", t);
        }
    }

    #[test]
    fn sweep_angle_wraps_after_full_turn() {
        let period_secs = 2.0 * TAU;
        assert!(angle_at_seconds(period_secs).abs() < 1e-6 || (TAU - angle_at_seconds(period_secs)).abs() < 1e-6);
        assert!((angle_at_seconds(period_secs + 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sweep_angle_stays_in_range_for_wall_clock_times() {
        // Epoch milliseconds, roughly where Date.now() sits today.
        let now = 1_790_000_000_000.0;
        for offset in 0..50 {
            let angle = sweep_angle(now + offset as f64 * 16.7, 2000.0);
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn four_rings_fade_in_outwards() {
        let config = RadarConfig::default();
        let rings: Vec<Ring> = rings(&config).collect();

        assert_eq!(rings.len(), 4);
        let radii: Vec<f64> = rings.iter().map(|r| r.radius).collect();
        let opacities: Vec<f64> = rings.iter().map(|r| r.opacity).collect();
        assert_eq!(radii, vec![50.0, 100.0, 150.0, 200.0]);
        assert_eq!(opacities, vec![0.125, 0.25, 0.375, 0.5]);
    }

    #[test]
    fn sweep_end_lies_on_outer_ring() {
        let center = (300.0, 300.0);
        let (x, y) = sweep_end(center, 200.0, 0.0);
        assert!((x - 500.0).abs() < EPS && (y - 300.0).abs() < EPS);

        let (x, y) = sweep_end(center, 200.0, std::f64::consts::FRAC_PI_2);
        assert!((x - 300.0).abs() < 1e-6 && (y - 500.0).abs() < 1e-6);

        for angle in [0.3, 1.7, 4.2, 6.0] {
            let (x, y) = sweep_end(center, 200.0, angle);
            let distance = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
            assert!((distance - 200.0).abs() < 1e-6);
        }
    }
}
