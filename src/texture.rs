//! Equirectangular textures and their orthographic projection onto a disc.

use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

use tracing::debug;

use crate::error::{MapError, MapResult};

/// Grayscale equirectangular image: x is longitude, y is latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    /// Normalized intensities in `[0, 1]`, row-major.
    samples: Vec<f32>,
}

impl Texture {
    /// Decode an image file and reduce it to 8-bit luma.
    pub fn open(path: impl AsRef<Path>) -> MapResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| MapError::Asset {
                path: path.to_path_buf(),
                source,
            })?
            .to_luma8();
        debug!(path = %path.display(), width = img.width(), height = img.height(), "texture decoded");
        Self::from_luma(img.width(), img.height(), img.as_raw())
            .ok_or_else(|| MapError::EmptyTexture(path.to_path_buf()))
    }

    /// Build from row-major 8-bit luma samples.
    ///
    /// Returns `None` for an empty image or when `luma` does not hold exactly
    /// `width * height` samples.
    pub fn from_luma(width: u32, height: u32, luma: &[u8]) -> Option<Self> {
        if width == 0 || height == 0 || luma.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            samples: luma.iter().map(|&v| v as f32 / 255.0).collect(),
        })
    }

    /// Every sample set to `intensity`. Zero dimensions are bumped to one.
    pub fn uniform(width: u32, height: u32, intensity: f32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            samples: vec![intensity.clamp(0.0, 1.0); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> f32 {
        let x = x.min(self.width as usize - 1);
        let y = y.min(self.height as usize - 1);
        self.samples[y * self.width as usize + x]
    }

    /// Project the near hemisphere onto a disc of `radius` pixels.
    ///
    /// Each in-disc pixel at offset `(dx, dy)` is lifted onto the unit sphere
    /// (`z = sqrt(1 - x² - y²)`), converted to latitude/longitude and sampled
    /// nearest-neighbour from the source. Pixels outside the disc stay zero.
    pub fn project_disc(&self, radius: u32) -> TextureDisc {
        let mut disc = TextureDisc::blank(radius);
        let r = radius as i64;
        let scale = radius.max(1) as f64;
        let u_span = (self.width - 1) as f64;
        let v_span = (self.height - 1) as f64;

        for dy in -r..=r {
            let yy = dy as f64 / scale;
            let lat = yy.asin();
            let v = (FRAC_PI_2 - lat) / PI * v_span;
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let xx = dx as f64 / scale;
                let z = (1.0 - xx * xx - yy * yy).max(0.0).sqrt();
                let lon = xx.atan2(z);
                let u = (lon + PI) / (2.0 * PI) * u_span;

                let intensity = self.sample(u as usize, v as usize);
                disc.set((dx + r) as u32, (dy + r) as u32, to_depth(intensity));
            }
        }
        disc
    }
}

/// Scale to 16 bits, rounding to nearest. A truncating conversion would differ
/// by at most 1.
fn to_depth(intensity: f32) -> u16 {
    (intensity as f64 * u16::MAX as f64).round() as u16
}

/// Square patch of side `2r + 1` holding projected values. Zero means no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDisc {
    radius: u32,
    values: Vec<u16>,
}

impl TextureDisc {
    fn blank(radius: u32) -> Self {
        let side = 2 * radius as usize + 1;
        Self {
            radius,
            values: vec![0; side * side],
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn side(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Value at patch column `col`, row `row`.
    pub fn get(&self, col: u32, row: u32) -> u16 {
        self.values[row as usize * self.side() as usize + col as usize]
    }

    fn set(&mut self, col: u32, row: u32, value: u16) {
        let side = self.side() as usize;
        self.values[row as usize * side + col as usize] = value;
    }
}
