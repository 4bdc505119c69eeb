#![allow(non_upper_case_globals)]

//! Physical constants and the natural-unit scales used by
//! [`Config::from_units`][crate::config::Config::from_units].
//!
//! Constant values are the CODATA 2018 recommendations.

use std::f64::consts::PI;

// Planck constant (kg m^2 s^-1), exact
const h: f64 = 6.62607015e-34;

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;

/// electronvolt (J)
pub const eV: f64 = 1.602176634e-19;

/// Length and energy scales for a particle of fixed mass.
///
/// Lengths are measured in `a` and energies in `e = ħ² / 2 m a²`, so that in
/// these units the kinetic operator is `-∂²/∂x²` and a box of length `L`
/// has ground energy `π² / L²`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Particle mass (kg).
    pub m: f64,
    /// Length scale (m).
    pub a: f64,
    /// Energy scale (J).
    pub e: f64,
}

impl Units {
    /// Scales for a particle of mass `mass` (kg) with length scale `a` (m).
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e = hbar * hbar / (2.0 * mass * a * a);
        Self { m: mass, a, e }
    }

    /// Express a length given in meters in units of `a`.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Express a natural-unit energy in joules.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn electron_in_a_nanometer() {
        let uu = Units::from_mks(me, 1e-9);
        assert_relative_eq!(uu.to_nat_length(2e-9_f64), 2.0, max_relative = 1e-12);
        // e = ħ²/(2 mₑ (1 nm)²) is a few hundredths of an eV
        let e_ev: f64 = uu.from_nat_energy(1.0_f64) / eV;
        assert_relative_eq!(e_ev, 0.0381, max_relative = 1e-2);
    }
}
