use std::path::Path;

use anyhow::Context as _;
use ndarray::Array2;

use crate::foundation::error::{HoloreelError, HoloreelResult};
use crate::render::colormap::Colormap;
use crate::stack::scale::{ColorRange, frame_range};

/// A rasterized frame of tightly packed row-major RGBA8 pixels (fully opaque).
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes, RGBA interleaved.
    pub data: Vec<u8>,
}

/// Turns extracted scalar frames into RGBA pixels.
///
/// `pixel_scale` up-scales every sample into a square block of that side length, so small
/// simulation grids stay visible (and can reach even dimensions for MP4 output).
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    colormap: Colormap,
    pixel_scale: u32,
}

impl Rasterizer {
    /// Create a rasterizer. `pixel_scale` must be >= 1.
    pub fn new(colormap: Colormap, pixel_scale: u32) -> HoloreelResult<Self> {
        if pixel_scale == 0 {
            return Err(HoloreelError::validation("pixel_scale must be >= 1"));
        }
        Ok(Self {
            colormap,
            pixel_scale,
        })
    }

    /// Output dimensions in pixels for a frame of `rows x cols` samples.
    pub fn output_dims(&self, rows: usize, cols: usize) -> HoloreelResult<(u32, u32)> {
        let scale = self.pixel_scale as usize;
        let dim = |n: usize| {
            n.checked_mul(scale)
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    HoloreelError::validation(format!(
                        "output dimensions overflow: {rows}x{cols} at pixel_scale {scale}"
                    ))
                })
        };
        Ok((dim(cols)?, dim(rows)?))
    }

    /// Rasterize one scalar frame.
    ///
    /// With `shared` bounds every frame normalizes identically (autoscale); without them the
    /// frame's own range is used.
    pub fn rasterize(
        &self,
        frame: &Array2<f64>,
        shared: Option<ColorRange>,
    ) -> HoloreelResult<FrameRGBA> {
        let (rows, cols) = frame.dim();
        if rows == 0 || cols == 0 {
            return Err(HoloreelError::validation("frame must be non-empty"));
        }
        let range = match shared {
            Some(r) => r,
            None => frame_range(frame)?,
        };
        let (width, height) = self.output_dims(rows, cols)?;
        let scale = self.pixel_scale as usize;
        let w = width as usize;
        let mut data = vec![0u8; w * height as usize * 4];
        for (r, row) in frame.outer_iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                let [red, green, blue] = self.colormap.sample(range.normalize(v));
                for dy in 0..scale {
                    let row_base = (r * scale + dy) * w;
                    for dx in 0..scale {
                        let o = (row_base + c * scale + dx) * 4;
                        data[o] = red;
                        data[o + 1] = green;
                        data[o + 2] = blue;
                        data[o + 3] = 255;
                    }
                }
            }
        }
        Ok(FrameRGBA {
            width,
            height,
            data,
        })
    }
}

/// Write a rasterized frame as an RGBA8 PNG file.
pub fn write_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> HoloreelResult<()> {
    let path = path.as_ref();
    crate::encode::ffmpeg::ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
