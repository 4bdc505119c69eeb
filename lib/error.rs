//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::{ io, path::PathBuf };
use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when a potential source can't be turned into a usable set of
/// samples.
#[derive(Debug, Error)]
pub enum InputError {
    /// The potential file is missing or unreadable.
    #[error("could not read potential from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No line of the source parsed as a number.
    #[error("potential source yielded no valid samples")]
    NoSamples,
}

impl InputError {
    pub(crate) fn check_nonempty<S>(v: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data
    {
        (!v.is_empty()).then_some(()).ok_or(Self::NoSamples)
    }
}

/// Returned when a matrix has the wrong shape for the operation at hand.
#[derive(Debug, Error)]
pub enum DimensionError {
    /// The matrix has no elements.
    #[error("matrix is empty")]
    Empty,

    /// The matrix is not square.
    #[error("matrix must be square; got {0}×{1}")]
    NotSquare(usize, usize),

    /// The matrix size disagrees with the requested basis size.
    #[error("matrix size does not match the basis size; expected {expected}, got {got}")]
    BasisMismatch { expected: usize, got: usize },
}

impl DimensionError {
    pub(crate) fn check_square<S>(a: &nd::ArrayBase<S, nd::Ix2>)
        -> Result<usize, Self>
    where S: nd::Data
    {
        let (rows, cols) = a.dim();
        if rows == 0 || cols == 0 { return Err(Self::Empty); }
        (rows == cols).then_some(rows).ok_or(Self::NotSquare(rows, cols))
    }

    pub(crate) fn check_basis(expected: usize, got: usize)
        -> Result<(), Self>
    {
        (expected == got).then_some(())
            .ok_or(Self::BasisMismatch { expected, got })
    }
}

/// Returned when an eigendecomposition fails or produces something that can't
/// be the spectrum of a symmetric matrix.
#[derive(Debug, Error)]
pub enum DecompositionError {
    /// [`LinalgError`]; includes LAPACK failing to converge.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),

    /// An eigenvalue came back with an imaginary part above tolerance.
    #[error("eigenvalue {index} is complex ({re} + {im}i)")]
    ComplexEigenvalue { index: usize, re: f64, im: f64 },

    /// The input matrix contains NaN or infinite entries.
    #[error("matrix contains non-finite entries")]
    NonFinite,
}

impl DecompositionError {
    pub(crate) fn check_finite<S>(a: &nd::ArrayBase<S, nd::Ix2>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        a.iter().all(|x| x.is_finite()).then_some(()).ok_or(Self::NonFinite)
    }
}

/// Returned when a [`Config`][crate::config::Config] holds unusable values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a physical parameter is non-positive or non-finite.
    #[error("{name} must be positive and finite; got {value}")]
    BadParameter { name: &'static str, value: f64 },

    /// Returned when the basis size is zero.
    #[error("num_basis must be greater than 0; got {0}")]
    BadNumBasis(usize),

    /// Returned when the grid resolution is zero.
    #[error("grid_points must be greater than 0; got {0}")]
    BadGridPoints(usize),

    /// Returned when a solver tolerance is negative or non-finite.
    #[error("tolerances must be non-negative; got {0}")]
    BadTolerance(f64),
}

impl ConfigError {
    pub(crate) fn check_param(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value > 0.0 && value.is_finite()).then_some(())
            .ok_or(Self::BadParameter { name, value })
    }

    pub(crate) fn check_num_basis(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::BadNumBasis(n))
    }

    pub(crate) fn check_grid_points(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::BadGridPoints(n))
    }

    pub(crate) fn check_tolerance(tol: f64) -> Result<(), Self> {
        (tol >= 0.0 && tol.is_finite()).then_some(())
            .ok_or(Self::BadTolerance(tol))
    }
}

/// Returned from the Hamiltonian construction and solving pipeline.
///
/// Each variant names the stage that failed.
#[derive(Debug, Error)]
pub enum BError {
    /// [`ConfigError`]
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// [`InputError`]
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Returned when the grid spacing is non-positive or inconsistent with the
    /// box length and number of samples.
    #[error("grid spacing must equal box_length / samples; got {dx}, expected {expected}")]
    BadSpacing { dx: f64, expected: f64 },

    /// [`DimensionError`]
    #[error("dimension error: {0}")]
    Dimension(#[from] DimensionError),

    /// [`DecompositionError`]
    #[error("decomposition error: {0}")]
    Decomposition(#[from] DecompositionError),
}

impl BError {
    pub(crate) fn check_spacing(dx: f64, box_length: f64, n: usize)
        -> Result<(), Self>
    {
        let expected = box_length / n as f64;
        (dx > 0.0 && (dx - expected).abs() <= 1e-12 * expected)
            .then_some(())
            .ok_or(Self::BadSpacing { dx, expected })
    }
}

impl From<LinalgError> for BError {
    fn from(err: LinalgError) -> Self { Self::Decomposition(err.into()) }
}
