//! Construction of the Hamiltonian matrix in the truncated box basis.
//!
//! In the basis of the first `N` infinite-well eigenfunctions φₙ, the
//! Hamiltonian of a particle in an arbitrary potential `V` confined to the box
//! has elements
//! ```text
//! H[i, j] = δ[i, j] Eₙ + ∫ φᵢ(x) V(x) φⱼ(x) dx
//!
//!      n² π² ħ²
//! Eₙ = --------
//!       2 m L²
//! ```
//! The kinetic part is exactly diagonal because the basis functions are its
//! eigenfunctions. The potential integral is approximated by a left-rectangle
//! sum over the potential samples themselves, so the quadrature resolution is
//! set by the number of samples and nothing else.
//!
//! ```
//! use boxspace::{ config::Config, hamiltonian, potential::PotentialSamples };
//!
//! let config = Config::default();
//! let v = PotentialSamples::from_text("1.0\n2.0\n1.5\n1.0\n0.5").unwrap();
//! let H = hamiltonian::build(&config, &v, v.dx(config.box_length)).unwrap();
//! assert_eq!(H.dim(), (100, 100));
//! assert!((H[[0, 0]] - 6.184802200544679).abs() < 1e-12);
//! ```

use ndarray as nd;
use crate::{
    basis::BasisTable,
    config::Config,
    error::BError,
    potential::PotentialSamples,
};

pub type BResult<T> = Result<T, BError>;

/// Build the kinetic part of the Hamiltonian: a diagonal matrix holding the
/// exact infinite-well energies.
pub fn kinetic(config: &Config) -> nd::Array2<f64> {
    let diag: nd::Array1<f64>
        = (1..=config.num_basis).map(|n| config.kinetic_energy(n)).collect();
    nd::Array2::from_diag(&diag)
}

/// Compute the potential matrix `∫ φᵢ V φⱼ dx` from a precomputed basis table
/// using a left-rectangle sum.
///
/// Only the upper triangle is computed; the lower triangle is a mirror, so the
/// result is exactly symmetric.
///
/// *Panics if `v` has a different length than the table's grid*.
pub fn potential_matrix(table: &BasisTable, v: &nd::Array1<f64>)
    -> nd::Array2<f64>
{
    let n = table.num_basis();
    let dx = table.get_dx();
    let phi = table.get_table();
    // weight each grid point once so every element is a plain dot product
    let phi_v: nd::Array2<f64> = phi * &v.mapv(|vk| vk * dx);
    let mut m: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for i in 0..n {
        let row_i = phi_v.row(i);
        for j in i..n {
            let elem = row_i.dot(&phi.row(j));
            m[[i, j]] = elem;
            m[[j, i]] = elem;
        }
    }
    m
}

/// Build the full `num_basis × num_basis` Hamiltonian for a sampled potential
/// with grid spacing `dx`.
///
/// `dx` must be positive and equal to `box_length / v.len()`.
pub fn build(config: &Config, v: &PotentialSamples, dx: f64)
    -> BResult<nd::Array2<f64>>
{
    config.validate()?;
    BError::check_spacing(dx, config.box_length, v.len())?;
    if v.len() != config.grid_points {
        log::debug!(
            "quadrature uses the {} potential samples as given, not the \
            configured {} grid points",
            v.len(),
            config.grid_points,
        );
    }
    let table = BasisTable::new(config, v.len(), dx);
    let mut H = kinetic(config);
    H += &potential_matrix(&table, v.get_v());
    Ok(H)
}

/// Exact infinite-well energies for the configured basis, in ascending order.
pub fn analytic_energies(config: &Config) -> nd::Array1<f64> {
    (1..=config.num_basis).map(|n| config.kinetic_energy(n)).collect()
}
