//! Dense eigendecomposition of the Hamiltonian.
//!
//! Any [`EigenSolver`] must return an [`EigenResult`], whose constructor
//! enforces the postconditions downstream code relies on: energies in
//! ascending order, each eigenvector kept paired with its energy, and exactly
//! as many eigenvectors as energies, each as long as the matrix dimension.
//!
//! [`DenseSolver`] is backed by LAPACK through [`ndarray_linalg`]. A matrix
//! that is symmetric to within a relative tolerance goes through the symmetric
//! driver ([`Eigh`]); anything else goes through the general driver ([`Eig`]),
//! and any eigenvalue with a non-negligible imaginary part is treated as a
//! failure rather than silently discarded.
//!
//! ```
//! use ndarray as nd;
//! use boxspace::eigen::{ DenseSolver, EigenSolver };
//!
//! let H: nd::Array2<f64> = nd::array![[2.0, 1.0], [1.0, 2.0]];
//! let res = DenseSolver::default().solve(&H).unwrap();
//! assert!((res.energy(0) - 1.0).abs() < 1e-12);
//! assert!((res.energy(1) - 3.0).abs() < 1e-12);
//! ```

use ndarray as nd;
use ndarray_linalg::{ Eig, Eigh, UPLO };
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    error::{ BError, ConfigError, DecompositionError, DimensionError },
    solve::Solution,
    utils::fix_sign,
    DEF_IMAG_TOL,
    DEF_SYMMETRY_TOL,
};

pub type BResult<T> = Result<T, BError>;

/// Eigenvalues and right eigenvectors of a real matrix.
///
/// Energies are sorted in ascending order, and column `k` of the state matrix
/// is the eigenvector belonging to energy `k`.
#[derive(Clone, Debug)]
pub struct EigenResult {
    // ascending
    energies: nd::Array1<f64>,
    // eigenvectors as columns, paired with `energies`
    states: nd::Array2<f64>,
}

impl EigenResult {
    /// Pair a set of eigenvalues with their eigenvectors (as columns), in any
    /// order, sorting them by ascending eigenvalue.
    ///
    /// Each eigenvector is sign-fixed so that its largest-magnitude component
    /// is positive.
    pub fn sorted(energies: nd::Array1<f64>, states: nd::Array2<f64>)
        -> Result<Self, DimensionError>
    {
        let n = energies.len();
        if n == 0 { return Err(DimensionError::Empty); }
        let (rows, cols) = states.dim();
        if rows != cols { return Err(DimensionError::NotSquare(rows, cols)); }
        DimensionError::check_basis(n, cols)?;
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| energies[a].total_cmp(&energies[b]));
        let energies = energies.select(nd::Axis(0), &order);
        let mut states = states.select(nd::Axis(1), &order);
        states.columns_mut().into_iter().for_each(|mut v| fix_sign(&mut v));
        Ok(Self { energies, states })
    }

    /// Get a reference to the (ascending) energies.
    pub fn get_energies(&self) -> &nd::Array1<f64> { &self.energies }

    /// Get a reference to the eigenvector matrix; eigenvectors are columns.
    pub fn get_states(&self) -> &nd::Array2<f64> { &self.states }

    /// Number of eigenpairs.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.energies.len() }

    /// Get the `k`-th lowest energy.
    ///
    /// *Panics if `k` is out of bounds*.
    pub fn energy(&self, k: usize) -> f64 { self.energies[k] }

    /// Get the eigenvector paired with the `k`-th lowest energy.
    ///
    /// *Panics if `k` is out of bounds*.
    pub fn state(&self, k: usize) -> nd::ArrayView1<'_, f64> {
        self.states.column(k)
    }

    /// Iterate over `(energy, eigenvector)` pairs in ascending energy order.
    pub fn iter(&self)
        -> impl Iterator<Item = (f64, nd::ArrayView1<'_, f64>)> + '_
    {
        self.energies.iter().copied().zip(self.states.columns())
    }

    /// Copy out each eigenvector as its own array, in ascending energy order.
    pub fn eigenvectors(&self) -> Vec<nd::Array1<f64>> {
        self.states.columns().into_iter().map(|v| v.to_owned()).collect()
    }

    /// Split into one [`Solution`] per eigenpair.
    pub fn into_solutions(self) -> Vec<Solution> {
        self.iter()
            .map(|(e, v)| Solution { e, coeffs: v.to_owned() })
            .collect()
    }
}

/// Computes all eigenvalues and right eigenvectors of a dense real square
/// matrix.
pub trait EigenSolver {
    fn solve<S>(&self, H: &Arr2<S>) -> BResult<EigenResult>
    where S: nd::Data<Elem = f64>;
}

/// LAPACK-backed [`EigenSolver`].
#[derive(Copy, Clone, Debug)]
pub struct DenseSolver {
    /// Largest `|H[i, j] - H[j, i]|`, relative to the largest `|H[i, j]|`, for
    /// which a matrix is treated as symmetric (default: `1e-10`).
    pub symmetry_tol: f64,
    /// Largest `|Im λ|`, relative to `max(1, |Re λ|)`, accepted from the
    /// general driver (default: `1e-8`).
    pub imag_tol: f64,
}

impl Default for DenseSolver {
    fn default() -> Self {
        Self { symmetry_tol: DEF_SYMMETRY_TOL, imag_tol: DEF_IMAG_TOL }
    }
}

impl DenseSolver {
    /// Create a new solver with custom tolerances.
    pub fn new(symmetry_tol: f64, imag_tol: f64) -> Result<Self, ConfigError> {
        ConfigError::check_tolerance(symmetry_tol)?;
        ConfigError::check_tolerance(imag_tol)?;
        Ok(Self { symmetry_tol, imag_tol })
    }

    /// Return `true` if `H` is symmetric within `self.symmetry_tol`.
    pub fn is_symmetric<S>(&self, H: &Arr2<S>) -> bool
    where S: nd::Data<Elem = f64>
    {
        let scale = H.iter().fold(0.0_f64, |acc, h| acc.max(h.abs()));
        asymmetry(H) <= self.symmetry_tol * scale
    }

    fn solve_symmetric<S>(&self, H: &Arr2<S>)
        -> BResult<(nd::Array1<f64>, nd::Array2<f64>)>
    where S: nd::Data<Elem = f64>
    {
        // average away rounding-level asymmetry before using one triangle
        let sym: nd::Array2<f64> = (H + &H.t()) / 2.0;
        let (evals, evecs) = sym.eigh(UPLO::Lower)?;
        Ok((evals, evecs))
    }

    fn solve_general<S>(&self, H: &Arr2<S>)
        -> BResult<(nd::Array1<f64>, nd::Array2<f64>)>
    where S: nd::Data<Elem = f64>
    {
        let (evals, evecs): (nd::Array1<C64>, nd::Array2<C64>) = H.eig()?;
        let imag_tol = self.imag_tol;
        if let Some((index, lambda))
            = evals.iter().enumerate()
            .find(|(_, l)| l.im.abs() > imag_tol * l.re.abs().max(1.0))
        {
            return Err(DecompositionError::ComplexEigenvalue {
                index,
                re: lambda.re,
                im: lambda.im,
            }.into());
        }
        let mut states: nd::Array2<f64> = evecs.mapv(|c| c.re);
        for mut v in states.columns_mut() {
            let norm = v.dot(&v).sqrt();
            if norm > 0.0 { v /= norm; }
        }
        Ok((evals.mapv(|l| l.re), states))
    }
}

impl EigenSolver for DenseSolver {
    fn solve<S>(&self, H: &Arr2<S>) -> BResult<EigenResult>
    where S: nd::Data<Elem = f64>
    {
        let n = DimensionError::check_square(H)?;
        DecompositionError::check_finite(H)?;
        let (evals, evecs)
            = if self.is_symmetric(H) {
                self.solve_symmetric(H)?
            } else {
                log::warn!(
                    "matrix is not symmetric to within {:e} (max asymmetry \
                    {:e}); using the general eigensolver",
                    self.symmetry_tol,
                    asymmetry(H),
                );
                self.solve_general(H)?
            };
        log::debug!("diagonalized {}×{} matrix", n, n);
        Ok(EigenResult::sorted(evals, evecs)?)
    }
}

/// Largest absolute difference between mirrored off-diagonal elements.
///
/// *Panics if `H` is not square*.
pub fn asymmetry<S>(H: &Arr2<S>) -> f64
where S: nd::Data<Elem = f64>
{
    let n = H.nrows();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .map(|(i, j)| (H[[i, j]] - H[[j, i]]).abs())
        .fold(0.0, f64::max)
}

/// Diagonalize `H` with a default [`DenseSolver`].
pub fn solve<S>(H: &Arr2<S>) -> BResult<EigenResult>
where S: nd::Data<Elem = f64>
{
    DenseSolver::default().solve(H)
}

/// Compare two eigenvalue sequences elementwise to within `tol`.
pub fn energies_close<S, T>(a: &Arr1<S>, b: &Arr1<T>, tol: f64)
    -> bool
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    a.len() == b.len()
        && a.iter().zip(b)
            .all(|(x, y)| (x - y).abs() <= tol * x.abs().max(y.abs()).max(1.0))
}
