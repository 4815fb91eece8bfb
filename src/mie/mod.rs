//! Mie scattering of a scalar plane wave by a homogeneous sphere.
//!
//! The multipole expansion here produces complex near-field slices; sweeping the
//! evaluation plane yields an [`crate::ImageStack`] that the animation pipeline renders
//! like any other complex stack.

/// Spherical Bessel and Legendre evaluation.
pub mod special;
/// Sphere description, scattering coefficients, and near-field evaluation.
pub mod sphere;

pub use sphere::{NearFieldOpts, Sphere, near_field_slice, near_field_sweep, scattering_order};
