//! Frame rasterization: scalar samples to RGBA pixels.

/// Built-in colormaps.
pub mod colormap;
/// Rasterizer and PNG export.
pub mod raster;
