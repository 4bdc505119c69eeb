#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for solving the
//! one-dimensional, time-independent Schrödinger equation for a particle
//! confined to a box with an arbitrary potential, by diagonalizing the
//! Hamiltonian in the basis of infinite-square-well eigenfunctions.
//!
//! The pipeline:
//! - [`potential`]: load potential samples (lenient text loader)
//! - [`basis`]: evaluate the box eigenfunctions
//! - [`hamiltonian`]: build the Hamiltonian matrix (exact kinetic diagonal,
//!   left-rectangle quadrature for the potential)
//! - [`eigen`]: dense eigendecomposition with sorted, paired output
//! - [`solve`]: glue, plus position-space wavefunction reconstruction
//! - [`report`]: plain-text summary
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod config;
pub mod units;
pub mod basis;
pub mod potential;
pub mod hamiltonian;
pub mod eigen;
pub mod solve;
pub mod report;
pub mod utils;

pub mod docs;

pub(crate) const DEF_SYMMETRY_TOL: f64 = 1e-10;
pub(crate) const DEF_IMAG_TOL: f64 = 1e-8;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
