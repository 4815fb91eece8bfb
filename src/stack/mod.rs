//! Image stack model and normalization ranges.
//!
//! A stack is the raw multi-dimensional input of the pipeline; this module decides how its
//! samples are read (channel dispatch) and how they map onto `[0, 1]` for colormap lookup.

/// Stack layouts and per-frame scalar extraction.
pub mod model;
/// Color ranges (per-frame and stack-global autoscale bounds).
pub mod scale;
