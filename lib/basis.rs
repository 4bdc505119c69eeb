//! Particle-in-a-box eigenfunctions.
//!
//! The `n`-th eigenfunction of the infinite square well on `[0, L]` is
//! ```text
//! φₙ(x) = √(2/L) sin(n π x / L),    n = 1, 2, ...
//! ```
//! The set is orthonormal on `[0, L]` and each member vanishes at both walls.

use std::f64::consts::PI;
use ndarray as nd;
use crate::config::Config;

/// Evaluate the `n`-th (1-indexed) box eigenfunction at `x` for a box of length
/// `box_length`.
///
/// Defined for all real `x` (as the periodic extension of the sine), but only
/// meaningful on `[0, box_length]`. `n` must be at least 1.
pub fn evaluate(n: usize, x: f64, box_length: f64) -> f64 {
    (2.0 / box_length).sqrt() * (n as f64 * PI * x / box_length).sin()
}

/// Basis functions sampled over the uniform grid `x_k = k dx`.
///
/// Row `i` holds φᵢ₊₁ evaluated at every grid point, so that an overlap
/// integral between two basis functions with some weight reduces to a
/// weighted dot product of two rows.
#[derive(Clone, Debug)]
pub struct BasisTable {
    // sample table, shape (num_basis, grid length)
    phi: nd::Array2<f64>,
    // grid spacing
    dx: f64,
}

impl BasisTable {
    /// Sample the first `config.num_basis` functions at `x_k = k dx` for
    /// `k = 0, ..., len - 1`.
    pub fn new(config: &Config, len: usize, dx: f64) -> Self {
        let l = config.box_length;
        let phi: nd::Array2<f64>
            = nd::Array2::from_shape_fn(
                (config.num_basis, len),
                |(i, k)| evaluate(i + 1, k as f64 * dx, l),
            );
        Self { phi, dx }
    }

    /// Get a reference to the full sample table.
    pub fn get_table(&self) -> &nd::Array2<f64> { &self.phi }

    /// Get the samples of the `n`-th (1-indexed) basis function.
    ///
    /// *Panics if `n` is 0 or greater than the basis size*.
    pub fn row(&self, n: usize) -> nd::ArrayView1<'_, f64> {
        self.phi.row(n - 1)
    }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Number of basis functions.
    pub fn num_basis(&self) -> usize { self.phi.nrows() }

    /// Number of grid points.
    pub fn grid_len(&self) -> usize { self.phi.ncols() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::utils::riemann;

    #[test]
    fn dirichlet_walls() {
        for l in [1.0_f64, 2.5, 1e-9] {
            let amp = (2.0 / l).sqrt();
            for n in 1..=100 {
                assert_abs_diff_eq!(evaluate(n, 0.0, l), 0.0);
                // sin(nπ) is only zero to rounding, which grows with n
                assert_abs_diff_eq!(
                    evaluate(n, l, l) / amp, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn amplitude() {
        assert_abs_diff_eq!(evaluate(1, 0.5, 1.0), 2.0_f64.sqrt());
        assert_abs_diff_eq!(evaluate(2, 0.25, 1.0), 2.0_f64.sqrt());
        assert_abs_diff_eq!(evaluate(1, 1.0, 4.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn orthonormal_on_grid() {
        let config = Config::default().with_num_basis(8);
        let len = 400;
        let table = BasisTable::new(&config, len, config.dx_for(len));
        assert_eq!(table.num_basis(), 8);
        assert_eq!(table.grid_len(), len);
        for i in 1..=8 {
            for j in 1..=8 {
                let prod = &table.row(i) * &table.row(j);
                let overlap = riemann(&prod, table.get_dx());
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(overlap, expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn table_matches_pointwise() {
        let config = Config::default().with_num_basis(3).with_box_length(2.0);
        let dx = config.dx_for(7);
        let table = BasisTable::new(&config, 7, dx);
        assert_eq!(table.get_dx(), dx);
        for n in 1..=3 {
            for k in 0..7 {
                assert_eq!(table.row(n)[k], evaluate(n, k as f64 * dx, 2.0));
            }
        }
    }
}
