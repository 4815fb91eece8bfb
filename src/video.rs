use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{HoloreelError, HoloreelResult};
use crate::render::colormap::Colormap;
use crate::render::raster::{FrameRGBA, Rasterizer};
use crate::stack::model::{ChannelSelect, ImageStack};
use crate::stack::scale::{self, ColorRange};

/// Options for the animation pipeline.
#[derive(Clone, Copy, Debug)]
pub struct AnimateOpts {
    /// Output frame rate.
    pub fps: Fps,
    /// Channel selection for split or native-complex stacks.
    pub channel: ChannelSelect,
    /// Normalize every frame against the stack-global range instead of per-frame ranges.
    pub autoscale: bool,
    /// Colormap applied to normalized samples.
    pub colormap: Colormap,
    /// Square up-scale factor per sample (>= 1).
    pub pixel_scale: u32,
    /// Rasterize chunks on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Worker threads for the rayon pool (`None` = rayon default).
    pub threads: Option<usize>,
    /// Frames per chunk between sink flushes; 0 behaves as 1.
    pub chunk_size: usize,
}

impl AnimateOpts {
    /// Default options at the given frame rate.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            channel: ChannelSelect::default(),
            autoscale: false,
            colormap: Colormap::default(),
            pixel_scale: 1,
            parallel: false,
            threads: None,
            chunk_size: 64,
        }
    }
}

/// Statistics from one animation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimateStats {
    /// Frames pushed into the sink.
    pub frames_total: u64,
    /// The shared normalization bounds when autoscale was on.
    pub shared_range: Option<ColorRange>,
}

/// Conventional output path for an animation: `dir/name.mp4`.
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.mp4"))
}

/// Render every frame of `stack` and stream them into `sink`.
///
/// Pipeline, in order:
///
/// 1. Resolve the channel mode (shape dispatch; rejects bad channel axes).
/// 2. Validate stack geometry and rasterizer options.
/// 3. With autoscale, scan the stack once for the shared color range.
/// 4. `sink.begin`, then rasterize and push frames chunk by chunk, then `sink.end`.
///
/// No sink method is called before every up-front check has passed.
#[tracing::instrument(skip(stack, opts, sink), fields(frames = stack.frame_count()))]
pub fn animate_into(
    stack: &ImageStack,
    opts: &AnimateOpts,
    sink: &mut dyn FrameSink,
) -> HoloreelResult<AnimateStats> {
    let mode = stack.channel_mode(opts.channel)?;

    let frames = stack.frame_count();
    let (rows, cols) = stack.frame_dims();
    if frames == 0 {
        return Err(HoloreelError::validation(
            "stack must contain at least one frame",
        ));
    }
    if rows == 0 || cols == 0 {
        return Err(HoloreelError::validation("stack frames must be non-empty"));
    }

    let raster = Rasterizer::new(opts.colormap, opts.pixel_scale)?;
    let (width, height) = raster.output_dims(rows, cols)?;

    let shared = if opts.autoscale {
        Some(scale::global_range(stack, mode)?)
    } else {
        None
    };
    if let Some(range) = shared {
        tracing::debug!(min = range.min, max = range.max, "computed global color range");
    }

    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };

    sink.begin(SinkConfig {
        width,
        height,
        fps: opts.fps,
    })?;

    let chunk_size = normalized_chunk_size(opts.chunk_size);
    let mut chunk_start = 0usize;
    while chunk_start < frames {
        let chunk_end = (chunk_start + chunk_size).min(frames);
        let rendered = match pool.as_ref() {
            Some(pool) => pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|t| -> HoloreelResult<FrameRGBA> {
                        raster.rasterize(&stack.extract_frame(t, mode)?, shared)
                    })
                    .collect::<HoloreelResult<Vec<_>>>()
            })?,
            None => {
                let mut out = Vec::with_capacity(chunk_end - chunk_start);
                for t in chunk_start..chunk_end {
                    out.push(raster.rasterize(&stack.extract_frame(t, mode)?, shared)?);
                }
                out
            }
        };
        for (offset, frame) in rendered.iter().enumerate() {
            sink.push_frame(FrameIndex((chunk_start + offset) as u64), frame)?;
        }
        chunk_start = chunk_end;
    }

    sink.end()?;
    Ok(AnimateStats {
        frames_total: frames as u64,
        shared_range: shared,
    })
}

/// Render every frame of `stack` into an MP4 at [`output_path`]`(dir, name)`.
///
/// `ffmpeg` must be installed and on `PATH`; the sink checks for it before spawning.
pub fn animate_to_mp4(
    stack: &ImageStack,
    dir: impl AsRef<Path>,
    name: &str,
    opts: &AnimateOpts,
) -> HoloreelResult<AnimateStats> {
    let out_path = output_path(dir.as_ref(), name);
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out_path));
    let stats = animate_into(stack, opts, &mut sink)?;
    tracing::info!(path = %out_path.display(), "wrote animation");
    Ok(stats)
}

/// Rasterize a single frame of `stack` without touching any sink.
///
/// With autoscale the whole stack is still scanned, so the result is byte-identical to the
/// same frame of the full animation.
pub fn render_frame(
    stack: &ImageStack,
    frame: FrameIndex,
    opts: &AnimateOpts,
) -> HoloreelResult<FrameRGBA> {
    let mode = stack.channel_mode(opts.channel)?;
    let t = usize::try_from(frame.0).map_err(|_| {
        HoloreelError::validation(format!("frame index {} exceeds addressable range", frame.0))
    })?;
    let raster = Rasterizer::new(opts.colormap, opts.pixel_scale)?;
    let shared = if opts.autoscale {
        Some(scale::global_range(stack, mode)?)
    } else {
        None
    };
    raster.rasterize(&stack.extract_frame(t, mode)?, shared)
}

fn build_thread_pool(threads: Option<usize>) -> HoloreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(HoloreelError::validation(
            "animate threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        HoloreelError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    if chunk_size == 0 { 1 } else { chunk_size }
}

#[cfg(test)]
#[path = "../tests/unit/video.rs"]
mod tests;
