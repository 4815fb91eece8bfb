/// Built-in colormaps for scalar frames.
///
/// `Viridis` and `Plasma` are piecewise-linear approximations of the matplotlib palettes,
/// interpolated through anchor colors sampled from the originals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    /// Linear black-to-white ramp.
    Grayscale,
    /// Perceptually uniform green-to-yellow palette (the default).
    #[default]
    Viridis,
    /// High-contrast purple-to-yellow palette.
    Plasma,
    /// Classic blue-cyan-green-yellow-red ramp.
    Jet,
}

impl Colormap {
    /// Map a normalized sample to an RGB triple. `t` is clamped into `[0, 1]`.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Grayscale => {
                let v = to_u8(t);
                [v, v, v]
            }
            Self::Viridis => lerp_anchors(&VIRIDIS_ANCHORS, t),
            Self::Plasma => lerp_anchors(&PLASMA_ANCHORS, t),
            Self::Jet => jet(t),
        }
    }
}

// Anchor points (t, [r, g, b]) in [0, 1].
const VIRIDIS_ANCHORS: [(f64, [f64; 3]); 5] = [
    (0.00, [0.267, 0.004, 0.329]),
    (0.25, [0.282, 0.141, 0.458]),
    (0.50, [0.127, 0.567, 0.551]),
    (0.75, [0.454, 0.820, 0.322]),
    (1.00, [0.993, 0.906, 0.144]),
];

const PLASMA_ANCHORS: [(f64, [f64; 3]); 5] = [
    (0.00, [0.050, 0.030, 0.530]),
    (0.25, [0.417, 0.001, 0.658]),
    (0.50, [0.798, 0.125, 0.424]),
    (0.75, [0.973, 0.434, 0.098]),
    (1.00, [0.940, 0.975, 0.131]),
];

fn lerp_anchors(anchors: &[(f64, [f64; 3])], t: f64) -> [u8; 3] {
    let mut i = 0;
    while i + 1 < anchors.len() - 1 && anchors[i + 1].0 < t {
        i += 1;
    }
    let (t0, lo) = anchors[i];
    let (t1, hi) = anchors[i + 1];
    let frac = if (t1 - t0).abs() < 1e-15 {
        0.0
    } else {
        (t - t0) / (t1 - t0)
    };
    [
        to_u8(lo[0] + frac * (hi[0] - lo[0])),
        to_u8(lo[1] + frac * (hi[1] - lo[1])),
        to_u8(lo[2] + frac * (hi[2] - lo[2])),
    ]
}

fn jet(t: f64) -> [u8; 3] {
    let r = if t < 0.375 {
        0.0
    } else if t < 0.625 {
        (t - 0.375) / 0.25
    } else {
        1.0
    };
    let g = if t < 0.125 {
        0.0
    } else if t < 0.375 {
        (t - 0.125) / 0.25
    } else if t < 0.625 {
        1.0
    } else if t < 0.875 {
        1.0 - (t - 0.625) / 0.25
    } else {
        0.0
    };
    let b = if t < 0.125 {
        0.5 + t / 0.125 * 0.5
    } else if t < 0.375 {
        1.0
    } else if t < 0.625 {
        1.0 - (t - 0.375) / 0.25
    } else {
        0.0
    };
    [to_u8(r), to_u8(g), to_u8(b)]
}

fn to_u8(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/colormap.rs"]
mod tests;
