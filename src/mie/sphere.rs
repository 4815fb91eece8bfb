use ndarray::{Array1, Array2, Array3, s};
use num_complex::Complex64;

use crate::foundation::error::{HoloreelError, HoloreelResult};
use crate::mie::special::{
    legendre_p, spherical_jn, spherical_jn_complex, spherical_jn_deriv,
    spherical_jn_deriv_complex, spherical_yn, spherical_yn_deriv,
};
use crate::stack::model::ImageStack;

// Powers of the imaginary unit, cycling with l.
const I_POWERS: [Complex64; 4] = [
    Complex64 { re: 1.0, im: 0.0 },
    Complex64 { re: 0.0, im: 1.0 },
    Complex64 { re: -1.0, im: 0.0 },
    Complex64 { re: 0.0, im: -1.0 },
];

/// Highest multipole order that contributes for a sphere of `radius` at wavelength
/// `lambda`.
///
/// The partial waves die off quickly once the order passes the size parameter
/// `ka = 2 pi radius / lambda`; the classic cutoff adds a cube-root correction:
/// `ceil(ka + 4 ka^(1/3) + 2)`.
pub fn scattering_order(radius: f64, lambda: f64) -> usize {
    let ka = 2.0 * std::f64::consts::PI * radius / lambda;
    (ka + 4.0 * ka.cbrt() + 2.0).ceil() as usize
}

/// Homogeneous sphere at the origin, described by radius and complex refractive index.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    radius: f64,
    index: Complex64,
}

impl Sphere {
    /// Create a sphere. The radius must be positive; the imaginary part of the index
    /// models absorption and may be zero.
    pub fn new(radius: f64, index: Complex64) -> HoloreelResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(HoloreelError::validation("sphere radius must be positive"));
        }
        Ok(Self { radius, index })
    }

    /// Sphere radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Complex refractive index.
    pub fn index(&self) -> Complex64 {
        self.index
    }

    /// Scattering coefficients `B_l` for orders `0..=scattering_order(radius, lambda)`.
    ///
    /// Each coefficient matches the interior and exterior solutions of the scalar wave
    /// equation at the sphere surface, continuous in value and derivative. An index of
    /// exactly 1 yields vanishing coefficients: the sphere is indistinguishable from the
    /// surrounding medium.
    pub fn b_coefficients(&self, lambda: f64) -> HoloreelResult<Vec<Complex64>> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(HoloreelError::validation("wavelength must be positive"));
        }
        let l_max = scattering_order(self.radius, lambda);
        let k = 2.0 * std::f64::consts::PI / lambda;
        let ka = k * self.radius;
        let kna = self.index * ka;

        let jka = spherical_jn(l_max, ka);
        let jka_p = spherical_jn_deriv(l_max, ka);
        let yka = spherical_yn(l_max, ka);
        let yka_p = spherical_yn_deriv(l_max, ka);
        let jkna = spherical_jn_complex(l_max, kna);
        let jkna_p = spherical_jn_deriv_complex(l_max, kna);

        let n = self.index;
        let mut out = Vec::with_capacity(l_max + 1);
        for l in 0..=l_max {
            let hka = Complex64::new(jka[l], yka[l]);
            let hka_p = Complex64::new(jka_p[l], yka_p[l]);
            let numer = jkna_p[l] * n * jka[l] - jkna[l] * jka_p[l];
            let denom = jkna[l] * hka_p - hka * jkna_p[l] * n;
            out.push(numer / denom);
        }
        Ok(out)
    }
}

/// Evaluation grid for near-field slices.
#[derive(Clone, Copy, Debug)]
pub struct NearFieldOpts {
    /// Samples per side; each slice is `resolution x resolution`.
    pub resolution: usize,
    /// Physical field of view. The grid spans `[-ceil(fov/2), +ceil(fov/2)]` per axis.
    pub fov: f64,
    /// Wavelength of the incident plane wave.
    pub lambda: f64,
    /// Propagation direction of the incident wave; normalized internally.
    pub k_dir: [f64; 3],
}

impl NearFieldOpts {
    /// Grid with unit wavelength and a wave travelling down the `-z` axis.
    pub fn new(resolution: usize, fov: f64) -> Self {
        Self {
            resolution,
            fov,
            lambda: 1.0,
            k_dir: [0.0, 0.0, -1.0],
        }
    }

    fn validate(&self) -> HoloreelResult<()> {
        if self.resolution < 2 {
            return Err(HoloreelError::validation("near-field resolution must be >= 2"));
        }
        if !self.fov.is_finite() || self.fov <= 0.0 {
            return Err(HoloreelError::validation("near-field fov must be positive"));
        }
        if !self.lambda.is_finite() || self.lambda <= 0.0 {
            return Err(HoloreelError::validation("wavelength must be positive"));
        }
        let norm = self.k_dir.iter().map(|c| c * c).sum::<f64>().sqrt();
        if !norm.is_finite() || norm == 0.0 {
            return Err(HoloreelError::validation(
                "k_dir must be a non-zero direction",
            ));
        }
        Ok(())
    }

    fn unit_k_dir(&self) -> [f64; 3] {
        let norm = self.k_dir.iter().map(|c| c * c).sum::<f64>().sqrt();
        [
            self.k_dir[0] / norm,
            self.k_dir[1] / norm,
            self.k_dir[2] / norm,
        ]
    }
}

/// Scattered near field on the horizontal plane at height `z`.
///
/// Rows follow the `y` axis and columns the `x` axis. The sphere sits at the origin, so
/// `z` must be non-zero: at `z = 0` the grid crosses the sphere center, where the
/// outgoing field diverges.
pub fn near_field_slice(
    sphere: &Sphere,
    opts: &NearFieldOpts,
    z: f64,
) -> HoloreelResult<Array2<Complex64>> {
    opts.validate()?;
    if !z.is_finite() || z == 0.0 {
        return Err(HoloreelError::validation(
            "evaluation plane z must be non-zero (the sphere sits at the origin)",
        ));
    }

    let b = sphere.b_coefficients(opts.lambda)?;
    let l_max = b.len() - 1;
    let k = 2.0 * std::f64::consts::PI / opts.lambda;
    let k_dir = opts.unit_k_dir();

    let res = opts.resolution;
    let halfgrid = (opts.fov / 2.0).ceil();
    let grid = Array1::linspace(-halfgrid, halfgrid, res);

    let mut field = Array2::zeros((res, res));
    for (row, &gy) in grid.iter().enumerate() {
        for (col, &gx) in grid.iter().enumerate() {
            let r_mag = (gx * gx + gy * gy + z * z).sqrt();
            let cos_theta = (gx * k_dir[0] + gy * k_dir[1] + z * k_dir[2]) / r_mag;
            let kr = k * r_mag;

            let jkr = spherical_jn(l_max, kr);
            let ykr = spherical_yn(l_max, kr);
            let pl = legendre_p(l_max, cos_theta);

            let mut e = Complex64::new(0.0, 0.0);
            for l in 0..=l_max {
                let hlkr = Complex64::new(jkr[l], ykr[l]);
                e += b[l] * hlkr * pl[l] * ((2 * l + 1) as f64) * I_POWERS[l % 4];
            }
            field[[row, col]] = e;
        }
    }
    Ok(field)
}

/// Sweep the evaluation plane through `zs`, one frame per height, in order.
///
/// The result is a native-complex stack ready for the animation pipeline; pick the
/// real or imaginary part there.
pub fn near_field_sweep(
    sphere: &Sphere,
    opts: &NearFieldOpts,
    zs: &[f64],
) -> HoloreelResult<ImageStack> {
    if zs.is_empty() {
        return Err(HoloreelError::validation(
            "z sweep must contain at least one plane",
        ));
    }
    let res = opts.resolution;
    let mut stack = Array3::zeros((zs.len(), res, res));
    for (t, &z) in zs.iter().enumerate() {
        let slice = near_field_slice(sphere, opts, z)?;
        stack.slice_mut(s![t, .., ..]).assign(&slice);
    }
    Ok(ImageStack::Complex(stack))
}

#[cfg(test)]
#[path = "../../tests/unit/mie/sphere.rs"]
mod tests;
