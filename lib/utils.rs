//! Quadrature and eigenvector helpers.

use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;

/// Integrate using a left-rectangle (Riemann) sum.
///
/// Samples are taken to sit at the left edge of each interval, so the last
/// interval's right edge is never evaluated. On the grid `x_k = k L / N` the
/// sampled box eigenfunctions are exactly orthonormal under this rule.
pub fn riemann<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    dx * y.sum()
}

/// Flip the sign of a real vector in place so that its largest-magnitude
/// component is positive.
pub fn fix_sign<S>(v: &mut nd::ArrayBase<S, Ix1>)
where S: nd::DataMut<Elem = f64>
{
    let pivot
        = v.iter()
        .fold(0.0_f64, |acc, &vk| if vk.abs() > acc.abs() { vk } else { acc });
    if pivot < 0.0 { v.map_inplace(|vk| { *vk = -*vk; }); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn riemann_on_a_sine() {
        let n = 1000;
        let dx = PI / n as f64;
        let y: nd::Array1<f64> = (0..n).map(|k| (k as f64 * dx).sin()).collect();
        assert_abs_diff_eq!(riemann(&y, dx), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(riemann(&y.view(), 0.0), 0.0);
    }

    #[test]
    fn sign_convention() {
        let mut v = nd::array![0.1, -0.9, 0.3];
        fix_sign(&mut v);
        assert_eq!(v, nd::array![-0.1, 0.9, -0.3]);
        fix_sign(&mut v);
        assert_eq!(v, nd::array![-0.1, 0.9, -0.3]);
    }
}
