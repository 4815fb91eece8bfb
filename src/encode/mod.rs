//! Encoding sinks.
//!
//! Sinks consume rasterized frames in timeline order; the animation pipeline streams
//! frames into one through [`crate::animate_into`].

/// `ffmpeg`-based sink (MP4 output via the system `ffmpeg` binary).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
