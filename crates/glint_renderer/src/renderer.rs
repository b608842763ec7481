//! Render settings, the output image buffer and pixel sampling helpers.

use crate::material::{Color, GoochParams};
use glint_math::Interval;

/// What a traced ray returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Phong shading with optional shadows and reflections
    #[default]
    Phong,
    /// Greyscale distance, bright near the camera
    Depth,
    /// Surface normal mapped to RGB
    Normal,
    /// Cool-to-warm tone shading with black silhouettes
    Gooch,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Dampen lights blocked from the surface point
    pub shadows: bool,
    /// Trace mirror reflections
    pub reflections: bool,
    /// Samples per pixel along each axis
    pub antialias: u32,
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    pub gooch: GoochParams,
    /// Offset applied to secondary ray origins
    pub bias: f32,
    /// Distances mapped to white and black in depth mode
    pub depth_range: Interval,
    /// Color of rays that hit nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Phong,
            shadows: false,
            reflections: false,
            antialias: 1,
            max_depth: 2,
            gooch: GoochParams::default(),
            bias: 1e-3,
            depth_range: Interval::new(10.0, 1000.0),
            background: Color::ZERO,
        }
    }
}

impl RenderConfig {
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_shadows(mut self, shadows: bool) -> Self {
        self.shadows = shadows;
        self
    }

    pub fn with_reflections(mut self, reflections: bool) -> Self {
        self.reflections = reflections;
        self
    }

    pub fn with_antialias(mut self, factor: u32) -> Self {
        self.antialias = factor;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_gooch(mut self, gooch: GoochParams) -> Self {
        self.gooch = gooch;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

/// Sub-pixel sample positions along one axis for antialias factor `k`.
///
/// Evenly spaced strictly inside the pixel: `i / (k + 1)` for `i` in
/// `1..=k`. A factor of 1 samples the pixel center; 0 is treated as 1.
pub fn sample_offsets(k: u32) -> Vec<f32> {
    let k = k.max(1);
    (1..=k).map(|i| i as f32 / (k + 1) as f32).collect()
}

/// Clamp each channel to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::ONE)
}

/// Convert a color to 8-bit RGB. No gamma is applied.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = clamp_color(color) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y), row 0 at the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Mean color over all pixels.
    pub fn average(&self) -> Color {
        if self.pixels.is_empty() {
            return Color::ZERO;
        }
        self.pixels.iter().copied().sum::<Color>() / self.pixels.len() as f32
    }

    /// Convert to packed RGB bytes, row-major from the top row.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Convert to an `image` crate buffer for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb(self.get(x, y)))
        })
    }
}
