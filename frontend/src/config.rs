use log::Level;

pub const BRAND: &str = "LeakGuard";
pub const COPYRIGHT_YEAR: u16 = 2024;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Plain `(r, g, b)` triple so both the raw canvas code and plotters can use it.
pub type Rgb = (u8, u8, u8);

pub const ACCENT: Rgb = (74, 222, 128); // #4ade80

pub fn css_rgba((r, g, b): Rgb, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarConfig {
    /// Canvas edge in pixels; the surface is square.
    pub size: u32,
    pub radius: f64,
    pub rings: u32,
    pub color: Rgb,
    pub sweep_alpha: f64,
    pub sweep_width: f64,
    /// Wall-clock milliseconds per radian of sweep; 2000 gives one turn every ~12.6s.
    pub ms_per_radian: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            size: 600,
            radius: 200.0,
            rings: 4,
            color: ACCENT,
            sweep_alpha: 0.8,
            sweep_width: 2.0,
            ms_per_radian: 2000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub line_color: Rgb,
    pub background: Rgb,
    pub line_width: u32,
    pub dot_radius: u32,
    /// The y axis is rounded up to a multiple of this.
    pub y_step: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            margin: 20,
            x_label_area: 40,
            y_label_area: 60,
            line_color: ACCENT,
            background: (31, 41, 55), // #1f2937
            line_width: 2,
            dot_radius: 4,
            y_step: 1000,
        }
    }
}
