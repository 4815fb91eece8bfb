//! Foundation types shared by every pipeline stage.

/// Frame indexing and frame-rate primitives.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
