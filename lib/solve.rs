//! End-to-end solution of the time-independent Schrödinger equation (TISE) for
//! a particle in a box with an arbitrary potential.
//!
//! The pipeline is: potential samples → [Hamiltonian][crate::hamiltonian] in
//! the box basis → [eigendecomposition][crate::eigen] → energies and basis
//! coefficients, from which position-space wavefunctions can be rebuilt.
//!
//! ```
//! use boxspace::{ config::Config, potential::PotentialSamples, solve::BoxSystem };
//!
//! let config = Config::default().with_num_basis(20);
//! let v = PotentialSamples::from_array(ndarray::Array1::zeros(100)).unwrap();
//! let res = BoxSystem::new(config, v).unwrap().solve().unwrap();
//! let e1 = std::f64::consts::PI.powi(2) / 2.0;
//! assert!((res.energy(0) - e1).abs() < 1e-9 * e1);
//! ```

use std::{ cmp, path::Path };
use ndarray as nd;
use crate::{
    Arr1,
    basis::{ self, BasisTable },
    config::Config,
    eigen::{ DenseSolver, EigenResult, EigenSolver },
    error::{ BError, DimensionError },
    hamiltonian,
    potential::PotentialSamples,
    utils,
};

pub type BResult<T> = Result<T, BError>;

/// A single solution to the TISE, expressed in the box basis.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Coefficients of the first `num_basis` box eigenfunctions
    pub coeffs: nd::Array1<f64>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Rebuild the position-space wavefunction `ψ(x) = Σₙ cₙ φₙ(x)` on the
    /// grid of `table`.
    ///
    /// *Panics if the table has a different number of basis functions than
    /// there are coefficients*.
    pub fn wavefunction(&self, table: &BasisTable) -> nd::Array1<f64> {
        self.coeffs.dot(table.get_table())
    }

    /// Compute `∫ |ψ|² dx` on the grid of `table` with the same left-rectangle
    /// rule used for the matrix elements.
    ///
    /// This is 1 to rounding whenever the table has more grid points than
    /// basis functions.
    pub fn norm(&self, table: &BasisTable) -> f64 {
        let psi = self.wavefunction(table);
        utils::riemann(&psi.mapv(|p| p * p), table.get_dx())
    }

    /// Evaluate the position-space wavefunction at a single point.
    pub fn wavefunction_at(&self, config: &Config, x: f64) -> f64 {
        self.coeffs.iter().enumerate()
            .map(|(i, c)| c * basis::evaluate(i + 1, x, config.box_length))
            .sum()
    }
}

/// A particle-in-a-box problem: configuration plus sampled potential.
///
/// The grid spacing is always derived from the box length and number of
/// samples, never supplied independently.
#[derive(Clone, Debug)]
pub struct BoxSystem {
    config: Config,
    v: PotentialSamples,
    dx: f64,
}

impl BoxSystem {
    /// Create a new `BoxSystem`, checking the configuration.
    pub fn new(config: Config, v: PotentialSamples) -> BResult<Self> {
        config.validate()?;
        let dx = v.dx(config.box_length);
        Ok(Self { config, v, dx })
    }

    /// Create a new `BoxSystem` from a potential file.
    pub fn from_file<P: AsRef<Path>>(config: Config, path: P) -> BResult<Self> {
        let v = PotentialSamples::from_file(path)?;
        Self::new(config, v)
    }

    /// Create a new `BoxSystem` by sampling an analytic potential on the
    /// configured grid.
    pub fn from_fn<F>(config: Config, f: F) -> BResult<Self>
    where F: FnMut(f64) -> f64
    {
        config.validate()?;
        let v = PotentialSamples::from_fn(&config, f)?;
        Self::new(config, v)
    }

    /// Get a reference to the configuration.
    pub fn get_config(&self) -> &Config { &self.config }

    /// Get a reference to the potential samples.
    pub fn get_v(&self) -> &PotentialSamples { &self.v }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Coordinates of each potential sample.
    pub fn get_x(&self) -> nd::Array1<f64> { self.v.grid(self.config.box_length) }

    /// Build the Hamiltonian matrix.
    pub fn hamiltonian(&self) -> BResult<nd::Array2<f64>> {
        hamiltonian::build(&self.config, &self.v, self.dx)
    }

    /// Sample the basis on the potential grid.
    pub fn basis_table(&self) -> BasisTable {
        BasisTable::new(&self.config, self.v.len(), self.dx)
    }

    /// Build the Hamiltonian and diagonalize it with `solver`.
    pub fn solve_with<E: EigenSolver>(&self, solver: &E) -> BResult<EigenResult> {
        let H = self.hamiltonian()?;
        let res = solver.solve(&H)?;
        DimensionError::check_basis(self.config.num_basis, res.len())?;
        log::debug!(
            "solved {} states; ground energy {:e}",
            res.len(),
            res.energy(0),
        );
        Ok(res)
    }

    /// Build the Hamiltonian and diagonalize it with a default
    /// [`DenseSolver`].
    pub fn solve(&self) -> BResult<EigenResult> {
        self.solve_with(&DenseSolver::default())
    }
}

/// Compute the spectrum for a sampled potential with a default
/// [`DenseSolver`].
pub fn solve_potential(config: Config, v: PotentialSamples)
    -> BResult<EigenResult>
{
    BoxSystem::new(config, v)?.solve()
}

/// Return the largest relative deviation of `energies` from the exact
/// infinite-well spectrum for `config`.
pub fn deviation_from_box<S>(config: &Config, energies: &Arr1<S>) -> f64
where S: nd::Data<Elem = f64>
{
    hamiltonian::analytic_energies(config).iter().zip(energies)
        .map(|(exact, e)| ((e - exact) / exact).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };

    #[test]
    fn free_box_matches_analytic() {
        for (num_basis, box_length) in [(100, 1.0), (25, 3.0), (40, 0.5)] {
            let config = Config::default()
                .with_num_basis(num_basis)
                .with_box_length(box_length);
            let v = PotentialSamples::from_array(nd::Array1::zeros(300)).unwrap();
            let res = solve_potential(config, v).unwrap();
            assert_eq!(res.len(), num_basis);
            assert!(deviation_from_box(&config, res.get_energies()) < 1e-9);
        }
    }

    #[test]
    fn free_box_states_are_basis_vectors() {
        let config = Config::default().with_num_basis(10);
        let v = PotentialSamples::from_array(nd::Array1::zeros(50)).unwrap();
        let res = solve_potential(config, v).unwrap();
        for (k, (_, state)) in res.iter().enumerate() {
            assert_abs_diff_eq!(state[k], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_offset_shifts_spectrum() {
        let config = Config::default().with_num_basis(30).with_grid_points(600);
        let res = BoxSystem::from_fn(config, |_| 2.5).unwrap().solve().unwrap();
        for (n, e) in res.get_energies().iter().enumerate() {
            assert_relative_eq!(
                *e, config.kinetic_energy(n + 1) + 2.5, max_relative = 1e-10);
        }
    }

    #[test]
    fn ground_state_wavefunction() {
        // shallow well in the middle of the box
        let config = Config::default().with_num_basis(40).with_grid_points(800);
        let sys = BoxSystem::from_fn(config, |x| {
            if (0.4..0.6).contains(&x) { -20.0 } else { 0.0 }
        }).unwrap();
        let res = sys.solve().unwrap();
        assert!(res.energy(0) < config.kinetic_energy(1));
        let ground = res.clone().into_solutions().remove(0);
        let table = sys.basis_table();
        let psi = ground.wavefunction(&table);
        assert_eq!(psi.len(), 800);
        assert_relative_eq!(ground.norm(&table), 1.0, max_relative = 1e-10);
        // ground state is nodeless
        assert_relative_eq!(
            ground.wavefunction_at(&config, 0.5),
            psi[400],
            max_relative = 1e-10
        );
        assert!(psi.slice(nd::s![8..792]).iter().all(|p| *p > 0.0));
    }

    #[test]
    fn solutions_ordered() {
        let config = Config::default().with_num_basis(15);
        let v = PotentialSamples::from_text("1.0\n2.0\n1.5\n1.0\n0.5").unwrap();
        let sols = solve_potential(config, v).unwrap().into_solutions();
        assert_eq!(sols.len(), 15);
        assert!(sols.windows(2).all(|w| {
            w[0].cmp_energy(&w[1]) != Some(cmp::Ordering::Greater)
        }));
    }

    #[test]
    fn grid_derived_from_samples() {
        let config = Config::default().with_box_length(2.0);
        let v = PotentialSamples::from_array(nd::Array1::zeros(8)).unwrap();
        let sys = BoxSystem::new(config, v).unwrap();
        assert_eq!(sys.get_dx(), 0.25);
        assert_eq!(sys.get_x()[7], 1.75);
        assert!(BoxSystem::new(
            config.with_hbar(-1.0),
            sys.get_v().clone(),
        ).is_err());
        assert_abs_diff_eq!(config.kinetic_energy(1), PI * PI / 8.0);
    }
}
