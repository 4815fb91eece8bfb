use num_complex::Complex64;

// Magnitude guard for the downward recurrence; values are rescaled past this point so the
// unnormalized run cannot overflow before the closed forms fix the overall scale.
const RESCALE_LIMIT: f64 = 1e250;
const RESCALE_FACTOR: f64 = 1e-250;

/// Spherical Bessel functions of the first kind `j_l(x)`, orders `0..=l_max`.
///
/// Orders 0 and 1 use closed forms; higher orders come from Miller's downward recurrence,
/// which stays stable when the order exceeds the argument (upward recurrence does not).
pub fn spherical_jn(l_max: usize, x: f64) -> Vec<f64> {
    if x == 0.0 {
        let mut out = vec![0.0; l_max + 1];
        out[0] = 1.0;
        return out;
    }
    let j0 = x.sin() / x;
    if l_max == 0 {
        return vec![j0];
    }
    let j1 = x.sin() / (x * x) - x.cos() / x;
    if l_max == 1 {
        return vec![j0, j1];
    }

    // Seed the recurrence above both the requested order and the argument; the seed scale
    // is arbitrary and fixed afterwards by matching the closed forms at the bottom.
    let start = l_max.max(x.abs() as usize) + 16;
    let mut out = vec![0.0; l_max + 1];
    let mut above = 0.0_f64;
    let mut here = 1e-30_f64;
    let mut l = start;
    loop {
        let below = (2 * l + 1) as f64 / x * here - above;
        l -= 1;
        above = here;
        here = below;
        if here.abs() > RESCALE_LIMIT {
            here *= RESCALE_FACTOR;
            above *= RESCALE_FACTOR;
            for v in out.iter_mut() {
                *v *= RESCALE_FACTOR;
            }
        }
        if l <= l_max {
            out[l] = here;
        }
        if l == 0 {
            break;
        }
    }

    // Normalize against whichever closed form is further from a node.
    let scale = if out[0].abs() >= out[1].abs() {
        j0 / out[0]
    } else {
        j1 / out[1]
    };
    for v in out.iter_mut() {
        *v *= scale;
    }
    out
}

/// Spherical Bessel functions of the first kind at a complex argument.
///
/// Same downward recurrence as [`spherical_jn`]; needed because the internal field of an
/// absorbing sphere is evaluated at `k * n * a` with complex `n`.
pub fn spherical_jn_complex(l_max: usize, z: Complex64) -> Vec<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    if z.norm() == 0.0 {
        let mut out = vec![zero; l_max + 1];
        out[0] = Complex64::new(1.0, 0.0);
        return out;
    }
    let j0 = z.sin() / z;
    if l_max == 0 {
        return vec![j0];
    }
    let j1 = z.sin() / (z * z) - z.cos() / z;
    if l_max == 1 {
        return vec![j0, j1];
    }

    let start = l_max.max(z.norm() as usize) + 16;
    let mut out = vec![zero; l_max + 1];
    let mut above = zero;
    let mut here = Complex64::new(1e-30, 0.0);
    let mut l = start;
    loop {
        let below = (2 * l + 1) as f64 / z * here - above;
        l -= 1;
        above = here;
        here = below;
        if here.norm() > RESCALE_LIMIT {
            here *= RESCALE_FACTOR;
            above *= RESCALE_FACTOR;
            for v in out.iter_mut() {
                *v *= RESCALE_FACTOR;
            }
        }
        if l <= l_max {
            out[l] = here;
        }
        if l == 0 {
            break;
        }
    }

    let scale = if out[0].norm() >= out[1].norm() {
        j0 / out[0]
    } else {
        j1 / out[1]
    };
    for v in out.iter_mut() {
        *v *= scale;
    }
    out
}

/// Spherical Bessel functions of the second kind `y_l(x)`, orders `0..=l_max`.
///
/// Upward recurrence, which is the stable direction for `y`. Defined for `x > 0`; the
/// functions diverge towards the origin.
pub fn spherical_yn(l_max: usize, x: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(l_max + 1);
    out.push(-x.cos() / x);
    if l_max == 0 {
        return out;
    }
    out.push(-x.cos() / (x * x) - x.sin() / x);
    for l in 1..l_max {
        let next = (2 * l + 1) as f64 / x * out[l] - out[l - 1];
        out.push(next);
    }
    out
}

/// Legendre polynomials `P_l(x)`, orders `0..=l_max`, by the three-term recurrence.
pub fn legendre_p(l_max: usize, x: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(l_max + 1);
    out.push(1.0);
    if l_max == 0 {
        return out;
    }
    out.push(x);
    for l in 1..l_max {
        let lf = l as f64;
        let next = ((2.0 * lf + 1.0) * x * out[l] - lf * out[l - 1]) / (lf + 1.0);
        out.push(next);
    }
    out
}

/// Derivatives `j_l'(x)` for orders `0..=l_max`. `x` must be non-zero.
pub fn spherical_jn_deriv(l_max: usize, x: f64) -> Vec<f64> {
    derivative_from(&spherical_jn(l_max + 1, x), x)
}

/// Derivatives `y_l'(x)` for orders `0..=l_max`. `x` must be positive.
pub fn spherical_yn_deriv(l_max: usize, x: f64) -> Vec<f64> {
    derivative_from(&spherical_yn(l_max + 1, x), x)
}

/// Derivatives of [`spherical_jn_complex`] for orders `0..=l_max`. `z` must be non-zero.
pub fn spherical_jn_deriv_complex(l_max: usize, z: Complex64) -> Vec<Complex64> {
    derivative_from(&spherical_jn_complex(l_max + 1, z), z)
}

// f'_l = f_{l-1} - ((l+1)/x) f_l, with f'_0 = -f_1; holds for j, y, and any combination
// of them (spherical Hankel functions included). `vals` holds orders 0..=l_max+1 and the
// result holds 0..=l_max.
fn derivative_from<T>(vals: &[T], x: T) -> Vec<T>
where
    T: Copy
        + std::ops::Neg<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>
        + From<f64>,
{
    let n = vals.len() - 1;
    let mut out = Vec::with_capacity(n);
    out.push(-vals[1]);
    for l in 1..n {
        let lp1 = T::from((l + 1) as f64);
        out.push(vals[l - 1] - lp1 / x * vals[l]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/mie/special.rs"]
mod tests;
