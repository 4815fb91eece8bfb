use ndarray::{Array2, s};

use crate::foundation::error::{HoloreelError, HoloreelResult};
use crate::stack::model::{ChannelMode, ChannelSelect, ImageStack};

/// Inclusive scalar bounds used to normalize samples before colormap lookup.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorRange {
    /// Smallest finite sample.
    pub min: f64,
    /// Largest finite sample.
    pub max: f64,
}

impl ColorRange {
    /// Map `v` into `[0, 1]` against these bounds.
    ///
    /// Non-finite samples and degenerate (zero-span) ranges land on the low end.
    pub fn normalize(self, v: f64) -> f64 {
        if !v.is_finite() {
            return 0.0;
        }
        let span = self.max - self.min;
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        ((v - self.min) / span).clamp(0.0, 1.0)
    }
}

fn fold_range(values: impl Iterator<Item = f64>) -> Option<ColorRange> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        seen = true;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    seen.then_some(ColorRange { min, max })
}

/// Scalar bounds of a single extracted frame, skipping non-finite samples.
pub fn frame_range(frame: &Array2<f64>) -> HoloreelResult<ColorRange> {
    fold_range(frame.iter().copied())
        .ok_or_else(|| HoloreelError::validation("frame has no finite samples"))
}

/// Scalar bounds over every selected sample of the whole stack.
///
/// This is the shared range used by autoscale: all frames normalize against one pair of
/// bounds so brightness stays comparable across the animation.
pub fn global_range(stack: &ImageStack, mode: ChannelMode) -> HoloreelResult<ColorRange> {
    let range = match (stack, mode) {
        (ImageStack::Channels(a), ChannelMode::Single) => {
            fold_range(a.slice(s![.., .., .., 0]).iter().copied())
        }
        (ImageStack::Channels(a), ChannelMode::Split(ch)) => {
            let channels = a.shape()[3];
            if ch >= channels {
                return Err(HoloreelError::validation(format!(
                    "channel {ch} out of range for stack of {channels} channels"
                )));
            }
            fold_range(a.slice(s![.., .., .., ch]).iter().copied())
        }
        (ImageStack::Complex(a), ChannelMode::Complex(select)) => match select {
            ChannelSelect::Real => fold_range(a.iter().map(|z| z.re)),
            ChannelSelect::Imaginary => fold_range(a.iter().map(|z| z.im)),
        },
        _ => {
            return Err(HoloreelError::validation(
                "channel mode does not match stack layout",
            ));
        }
    };
    range.ok_or_else(|| {
        HoloreelError::validation("stack has no finite samples in the selected channel")
    })
}

#[cfg(test)]
#[path = "../../tests/unit/stack/scale.rs"]
mod tests;
