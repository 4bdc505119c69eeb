//! Run configuration.
//!
//! A [`Config`] fixes the physical constants and truncation sizes for a single
//! run. It is `Copy` and immutable; the `with_*` methods return modified
//! copies so that parameterized runs don't need to share any state.

use std::f64::consts::PI;
use crate::{ error::ConfigError, units };

/// Physical constants and basis/grid sizes for a single run.
///
/// Defaults are natural units (`ħ = m = L = 1`) with 100 basis states and a
/// 1000-point grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Reduced Planck constant.
    pub hbar: f64,
    /// Particle mass.
    pub mass: f64,
    /// Length of the box; the domain is `[0, box_length]`.
    pub box_length: f64,
    /// Number of particle-in-a-box states in the truncated basis.
    pub num_basis: usize,
    /// Number of points used when sampling an analytic potential with
    /// [`PotentialSamples::from_fn`][crate::potential::PotentialSamples::from_fn].
    ///
    /// Loaded potentials are never resampled to this grid; quadrature is
    /// always performed over the samples actually provided.
    pub grid_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hbar: 1.0,
            mass: 1.0,
            box_length: 1.0,
            num_basis: 100,
            grid_points: 1000,
        }
    }
}

impl Config {
    /// Create a configuration in SI units for a particle of mass `mass` (kg) in
    /// a box of length `box_length` (m).
    pub fn from_mks(mass: f64, box_length: f64) -> Self {
        Self { hbar: units::hbar, mass, box_length, ..Self::default() }
    }

    /// Create a configuration in the natural units described by `uu` for a box
    /// of length `box_length`, given in the base unit system of `uu`.
    ///
    /// Energies computed with the result come out in units of `uu.e`.
    pub fn from_units(uu: &units::Units, box_length: f64) -> Self {
        let box_length: f64 = uu.to_nat_length(box_length);
        Self { hbar: 1.0, mass: 0.5, box_length, ..Self::default() }
    }

    pub fn with_hbar(self, hbar: f64) -> Self { Self { hbar, ..self } }

    pub fn with_mass(self, mass: f64) -> Self { Self { mass, ..self } }

    pub fn with_box_length(self, box_length: f64) -> Self {
        Self { box_length, ..self }
    }

    pub fn with_num_basis(self, num_basis: usize) -> Self {
        Self { num_basis, ..self }
    }

    pub fn with_grid_points(self, grid_points: usize) -> Self {
        Self { grid_points, ..self }
    }

    /// Check that all parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_param("hbar", self.hbar)?;
        ConfigError::check_param("mass", self.mass)?;
        ConfigError::check_param("box_length", self.box_length)?;
        ConfigError::check_num_basis(self.num_basis)?;
        ConfigError::check_grid_points(self.grid_points)?;
        Ok(())
    }

    /// Energy scale of the infinite well, `π² ħ² / 2 m L²`.
    pub fn kinetic_scale(&self) -> f64 {
        (PI * self.hbar / self.box_length).powi(2) / (2.0 * self.mass)
    }

    /// Exact energy of the `n`-th (1-indexed) infinite-well state.
    pub fn kinetic_energy(&self, n: usize) -> f64 {
        let n = n as f64;
        n * n * PI * PI * self.hbar * self.hbar
            / (2.0 * self.mass * self.box_length * self.box_length)
    }

    /// Grid spacing for `len` samples spread over `[0, box_length)`.
    pub fn dx_for(&self, len: usize) -> f64 {
        self.box_length / len as f64
    }
}

/// Options for [`report::write_report`][crate::report::write_report].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Maximum number of energies and wavefunction components to print.
    pub limit: usize,
    /// Print `psi` instead of `ψ`.
    pub ascii: bool,
}

impl Default for ReportOptions {
    fn default() -> Self { Self { limit: 10, ascii: false } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.num_basis, 100);
        assert_eq!(config.grid_points, 1000);
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.kinetic_energy(1), PI * PI / 2.0);
        assert_relative_eq!(
            config.kinetic_energy(3), 9.0 * config.kinetic_scale(),
            max_relative = 1e-14
        );
        assert_relative_eq!(config.dx_for(5), 0.2);
    }

    #[test]
    fn validation() {
        let config = Config::default();
        assert!(matches!(
            config.with_mass(0.0).validate(),
            Err(ConfigError::BadParameter { name: "mass", .. })
        ));
        assert!(matches!(
            config.with_box_length(f64::NAN).validate(),
            Err(ConfigError::BadParameter { name: "box_length", .. })
        ));
        assert!(matches!(
            config.with_num_basis(0).validate(),
            Err(ConfigError::BadNumBasis(0))
        ));
        assert!(matches!(
            config.with_grid_points(0).validate(),
            Err(ConfigError::BadGridPoints(0))
        ));
    }

    #[test]
    fn natural_units() {
        // electron in a 1 nm box
        let uu = units::Units::from_mks(units::me, 1e-9);
        let nat = Config::from_units(&uu, 1e-9);
        let si = Config::from_mks(units::me, 1e-9);
        assert_relative_eq!(nat.box_length, 1.0, max_relative = 1e-12);
        assert_relative_eq!(nat.kinetic_energy(1), PI * PI, max_relative = 1e-12);
        assert_relative_eq!(
            uu.from_nat_energy(nat.kinetic_energy(2)),
            si.kinetic_energy(2),
            max_relative = 1e-12
        );
        // ground state is about 0.376 eV
        assert_relative_eq!(
            si.kinetic_energy(1) / units::eV, 0.376, max_relative = 1e-2);
    }
}
