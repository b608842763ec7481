//! Texture loading and caching for materials.
//!
//! Textures are decoded with the `image` crate into float RGB in `[0, 1]`.
//! Channel values are taken as stored; no gamma conversion is applied so a
//! texel renders with the value written in the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glint_math::Vec3;
use thiserror::Error;

/// Failure to read or decode a texture file.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture {0} has no pixels")]
    Empty(String),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// RGB float image, row 0 at the top.
#[derive(Clone, Debug)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
    /// Where the pixels came from, for log messages
    pub path: String,
}

impl Texture {
    /// Wrap already decoded pixels, row-major from the top row.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>, path: impl Into<String>) -> Self {
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// Decode an image file from disk.
    pub fn open(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| match source {
            image::ImageError::IoError(e) => TextureError::Io(e),
            source => TextureError::Decode {
                path: path.display().to_string(),
                source,
            },
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty(path.display().to_string()));
        }

        let pixels = rgb
            .pixels()
            .map(|p| {
                Vec3::new(
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                )
            })
            .collect();

        Ok(Self::new(width, height, pixels, path.display().to_string()))
    }

    /// Sample the texture at UV coordinates with bilinear filtering.
    ///
    /// Coordinates wrap into `[0, 1)`. `(0, 0)` is the top-left corner.
    pub fn color_at(&self, u: f32, v: f32) -> Vec3 {
        if self.pixels.is_empty() {
            return Vec3::ZERO;
        }

        let u = wrap_unit(u);
        let v = wrap_unit(v);

        let x = u * (self.width as f32 - 1.0);
        let y = v * (self.height as f32 - 1.0);

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x.fract();
        let fy = y.fract();

        let top = self.texel(x0, y0).lerp(self.texel(x1, y0), fx);
        let bottom = self.texel(x0, y1).lerp(self.texel(x1, y1), fx);

        top.lerp(bottom, fy)
    }

    fn texel(&self, x: u32, y: u32) -> Vec3 {
        let idx = (y * self.width + x) as usize;
        self.pixels.get(idx).copied().unwrap_or(Vec3::ZERO)
    }

    /// Memory held by the pixel data.
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Vec3>()
    }
}

/// Wrap into `[0, 1)`. `rem_euclid` can round up to exactly 1.0 for tiny
/// negative inputs.
fn wrap_unit(x: f32) -> f32 {
    let w = x.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

/// Decoded textures keyed by resolved path.
///
/// Materials naming the same file share one `Arc<Texture>`. Relative names
/// resolve against the scene file's directory when one is set.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<PathBuf, Arc<Texture>>,
    base_dir: Option<PathBuf>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            textures: HashMap::new(),
            base_dir: Some(base_dir.into()),
        }
    }

    /// Texture for `name`, decoding it on first use.
    pub fn load(&mut self, name: &str) -> TextureResult<Arc<Texture>> {
        let path = match &self.base_dir {
            Some(base) if Path::new(name).is_relative() => base.join(name),
            _ => PathBuf::from(name),
        };

        if let Some(texture) = self.textures.get(&path) {
            return Ok(Arc::clone(texture));
        }

        let texture = Arc::new(Texture::open(&path)?);
        log::debug!(
            "Loaded texture {} ({}x{}, {:.1} KB)",
            path.display(),
            texture.width,
            texture.height,
            texture.size_bytes() as f32 / 1024.0
        );
        self.textures.insert(path, Arc::clone(&texture));

        Ok(texture)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
