//! Single-channel 16-bit raster and its drawing primitives.
//!
//! Every primitive overwrites: the last paint to touch a pixel wins and no
//! blending happens. Texture transparency relies on this, so keep it that way.

use std::ops::Range;
use std::path::Path;

use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageBuffer, ImageError, Luma};
use tracing::info;

use crate::error::{MapError, MapResult};
use crate::texture::TextureDisc;

// ============================================================================
// CANVAS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<u16>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Zero-filled canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel values.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        (x < self.width && y < self.height).then(|| self.pixels[self.index(x as usize, y as usize)])
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width as usize + x
    }

    /// Bounding box of a circle, clipped to the canvas. `None` when nothing is visible.
    fn clip(&self, cx: i64, cy: i64, radius: i64) -> Option<(Range<usize>, Range<usize>)> {
        if radius < 0 {
            return None;
        }
        let x0 = (cx - radius).max(0);
        let x1 = (cx + radius).min(self.width as i64 - 1);
        let y0 = (cy - radius).max(0);
        let y1 = (cy + radius).min(self.height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as usize..x1 as usize + 1, y0 as usize..y1 as usize + 1))
    }

    /// Paint every pixel within `radius` of the center.
    pub fn fill_disk(&mut self, cx: i32, cy: i32, radius: i32, value: u16) {
        self.fill_annulus(cx, cy, 0, radius, value);
    }

    /// Paint every pixel whose distance from the center lies in `[inner, outer]`.
    pub fn fill_annulus(&mut self, cx: i32, cy: i32, inner: i32, outer: i32, value: u16) {
        let (cx, cy) = (cx as i64, cy as i64);
        let outer = outer as i64;
        let inner = (inner as i64).max(0);
        if inner > outer {
            return;
        }
        let Some((xs, ys)) = self.clip(cx, cy, outer) else {
            return;
        };
        let (inner_sq, outer_sq) = (inner * inner, outer * outer);

        for y in ys {
            let dy = y as i64 - cy;
            let row = self.index(0, y);
            for x in xs.clone() {
                let dx = x as i64 - cx;
                let d_sq = dx * dx + dy * dy;
                if d_sq >= inner_sq && d_sq <= outer_sq {
                    self.pixels[row + x] = value;
                }
            }
        }
    }

    /// Paste a texture disc centered at `(cx, cy)`. Zero pixels in the disc are transparent.
    pub fn composite(&mut self, cx: i32, cy: i32, disc: &TextureDisc) {
        let side = disc.side() as i64;
        let left = cx as i64 - disc.radius() as i64;
        let top = cy as i64 - disc.radius() as i64;

        let cols = (-left).max(0)..(self.width as i64 - left).min(side);
        if cols.is_empty() {
            return;
        }
        for row in (-top).max(0)..(self.height as i64 - top).min(side) {
            let y = (top + row) as usize;
            let base = self.index(0, y);
            for col in cols.clone() {
                let value = disc.get(col as u32, row as u32);
                if value != 0 {
                    self.pixels[base + (left + col) as usize] = value;
                }
            }
        }
    }

    /// Encode as a 16-bit grayscale image; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> MapResult<()> {
        let path = path.as_ref();
        info!(path = %path.display(), width = self.width, height = self.height, "encoding canvas");

        let buffer = ImageBuffer::<Luma<u16>, &[u16]>::from_raw(self.width, self.height, &self.pixels)
            .ok_or_else(|| MapError::Encode {
                path: path.to_path_buf(),
                source: ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                )),
            })?;
        buffer.save(path).map_err(|source| MapError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}
