use crate::foundation::error::{HoloreelError, HoloreelResult};

/// Absolute 0-based frame index in stack timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> HoloreelResult<Self> {
        if den == 0 {
            return Err(HoloreelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HoloreelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Create an integer FPS value (`hz/1`).
    pub fn from_hz(hz: u32) -> HoloreelResult<Self> {
        Self::new(hz, 1)
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration of one frame in milliseconds.
    pub fn frame_interval_ms(self) -> f64 {
        1000.0 * self.frame_duration_secs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
