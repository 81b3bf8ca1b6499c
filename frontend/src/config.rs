use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Simulated processing time before the form reports success.
pub const LOADING_DELAY_MS: u32 = 1_800;
/// How long the success state stays up before the form resets.
pub const SUCCESS_HOLD_MS: u32 = 3_000;

/// Task length above which the character counter turns red.
pub const CHAR_WARN_THRESHOLD: usize = 200;

pub const WAVEFORM_BARS: usize = 12;
pub const WAVEFORM_ACTIVE_OPACITY: &str = "0.65";
pub const WAVEFORM_IDLE_OPACITY: &str = "0.25";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

pub const PALETTE: [Rgb; 6] = [
    Rgb::new(200, 255, 87), // accent green
    Rgb::new(30, 100, 60),  // deep green
    Rgb::new(15, 15, 60),   // dark indigo
    Rgb::new(80, 200, 140), // teal
    Rgb::new(10, 10, 25),   // near black
    Rgb::new(50, 150, 80),  // mid green
];

/// Tunables for the background particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub node_count: usize,
    pub palette: Vec<Rgb>,
    /// Velocity per axis is drawn from `[-span/2, span/2]`.
    pub velocity_span: f64,
    /// Radius is `max(w, h) * (radius_base + rand * radius_span)`.
    pub radius_base: f64,
    pub radius_span: f64,
    pub alpha_base: f64,
    pub alpha_span: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            node_count: 6,
            palette: PALETTE.to_vec(),
            velocity_span: 0.5,
            radius_base: 0.35,
            radius_span: 0.35,
            alpha_base: 0.12,
            alpha_span: 0.12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_formats_like_css() {
        assert_eq!(PALETTE[0].rgba(0.5), "rgba(200,255,87,0.5)");
        assert_eq!(PALETTE[4].rgba(0.0), "rgba(10,10,25,0)");
    }
}
