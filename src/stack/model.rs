use ndarray::{Array2, Array3, Array4, Axis, s};
use num_complex::Complex64;

use crate::foundation::error::{HoloreelError, HoloreelResult};

/// Which scalar component of a two-channel or complex sample is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChannelSelect {
    /// Real part (channel 0 of a split stack).
    #[default]
    Real,
    /// Imaginary part (channel 1 of a split stack).
    Imaginary,
}

/// How frame extraction reads scalars out of a stack.
///
/// Resolved once per run by [`ImageStack::channel_mode`] so the per-frame path never
/// re-inspects the stack shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    /// Trailing channel axis of size 1; the channel selection is ignored.
    Single,
    /// Trailing channel axis of size 2; read this trailing index.
    Split(usize),
    /// Native complex samples; take the selected part of each sample.
    Complex(ChannelSelect),
}

/// A time-ordered stack of 2D scalar images, the input of the animation pipeline.
///
/// Axes are `(frame, row, col)` plus a trailing channel axis for the real-valued form:
///
/// - [`ImageStack::Channels`]: `(frames, rows, cols, channels)` with `channels` equal to 1 or 2.
///   Two channels hold the real and imaginary planes of a complex field side by side.
/// - [`ImageStack::Complex`]: `(frames, rows, cols)` of native complex samples.
///
/// Any other trailing channel count is rejected by [`ImageStack::channel_mode`] with
/// [`HoloreelError::ChannelShape`].
#[derive(Clone, Debug)]
pub enum ImageStack {
    /// Real-valued samples with an explicit trailing channel axis.
    Channels(Array4<f64>),
    /// Native complex samples (no channel axis).
    Complex(Array3<Complex64>),
}

impl ImageStack {
    /// Wrap a plain real-valued stack by inserting a trailing channel axis of size 1.
    pub fn from_real(data: Array3<f64>) -> Self {
        Self::Channels(data.insert_axis(Axis(3)))
    }

    /// Number of frames along the time axis.
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Channels(a) => a.shape()[0],
            Self::Complex(a) => a.shape()[0],
        }
    }

    /// Per-frame image dimensions as `(rows, cols)`.
    pub fn frame_dims(&self) -> (usize, usize) {
        match self {
            Self::Channels(a) => (a.shape()[1], a.shape()[2]),
            Self::Complex(a) => (a.shape()[1], a.shape()[2]),
        }
    }

    /// Resolve how `select` reads scalars out of this stack.
    ///
    /// - A single trailing channel renders as-is; `select` is ignored.
    /// - Two trailing channels map `Real` to index 0 and `Imaginary` to index 1.
    /// - Native complex stacks take the selected part of each sample.
    pub fn channel_mode(&self, select: ChannelSelect) -> HoloreelResult<ChannelMode> {
        match self {
            Self::Channels(a) => match a.shape()[3] {
                1 => Ok(ChannelMode::Single),
                2 => Ok(ChannelMode::Split(match select {
                    ChannelSelect::Real => 0,
                    ChannelSelect::Imaginary => 1,
                })),
                n => Err(HoloreelError::channel_shape(format!(
                    "stack has {n} channels; expected 1 or 2"
                ))),
            },
            Self::Complex(_) => Ok(ChannelMode::Complex(select)),
        }
    }

    /// Extract frame `t` as a 2D scalar image using a mode from [`ImageStack::channel_mode`].
    pub fn extract_frame(&self, t: usize, mode: ChannelMode) -> HoloreelResult<Array2<f64>> {
        let frames = self.frame_count();
        if t >= frames {
            return Err(HoloreelError::validation(format!(
                "frame {t} out of range for stack of {frames} frames"
            )));
        }
        match (self, mode) {
            (Self::Channels(a), ChannelMode::Single) => Ok(a.slice(s![t, .., .., 0]).to_owned()),
            (Self::Channels(a), ChannelMode::Split(ch)) => {
                let channels = a.shape()[3];
                if ch >= channels {
                    return Err(HoloreelError::validation(format!(
                        "channel {ch} out of range for stack of {channels} channels"
                    )));
                }
                Ok(a.slice(s![t, .., .., ch]).to_owned())
            }
            (Self::Complex(a), ChannelMode::Complex(select)) => {
                let view = a.slice(s![t, .., ..]);
                Ok(match select {
                    ChannelSelect::Real => view.mapv(|z| z.re),
                    ChannelSelect::Imaginary => view.mapv(|z| z.im),
                })
            }
            _ => Err(HoloreelError::validation(
                "channel mode does not match stack layout",
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/model.rs"]
mod tests;
