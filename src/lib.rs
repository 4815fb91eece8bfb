//! Holoreel turns scientific image stacks into MP4 animations.
//!
//! The pipeline is stream-oriented:
//!
//! - Build or load an [`ImageStack`] (stacked real planes or a native complex field)
//! - Describe the look in [`AnimateOpts`]: channel, color range, colormap, pixel scale
//! - Stream colormapped frames into a [`FrameSink`] such as the [`FfmpegSink`]
//!
//! [`animate_to_mp4`] wires all three together; [`VideoJob`] drives the same pipeline
//! from a JSON description.
#![deny(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Streaming frame sinks, including the system `ffmpeg` encoder.
pub mod encode;
/// JSON job descriptions, the serialized boundary.
pub mod job;
/// Mie scattering source for native-complex stacks.
pub mod mie;
/// Colormaps and frame rasterization.
pub mod render;
/// Image stacks and color scaling.
pub mod stack;
/// The animation pipeline from stack to sink.
pub mod video;

pub use crate::foundation::core::{Fps, FrameIndex};
pub use crate::foundation::error::{HoloreelError, HoloreelResult};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::job::{VideoJob, animate_job};
pub use crate::render::colormap::Colormap;
pub use crate::render::raster::{FrameRGBA, Rasterizer, write_png};
pub use crate::stack::model::{ChannelMode, ChannelSelect, ImageStack};
pub use crate::stack::scale::ColorRange;
pub use crate::video::{
    AnimateOpts, AnimateStats, animate_into, animate_to_mp4, output_path, render_frame,
};
