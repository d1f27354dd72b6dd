//! Axial state carried by the exchanger ODE.

use std::ops::{Add, Mul};

use twine_core::StepIntegrable;
use uom::si::f64::Length;

use crate::support::units::{SpecificEnthalpy, SpecificEnthalpyGradient};

/// Specific enthalpies of both streams at one axial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyPair {
    pub hot: SpecificEnthalpy,
    pub cold: SpecificEnthalpy,
}

/// Rate of change of an [`EnthalpyPair`] along the exchanger length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyGradient {
    pub hot: SpecificEnthalpyGradient,
    pub cold: SpecificEnthalpyGradient,
}

impl Add for EnthalpyGradient {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            hot: self.hot + rhs.hot,
            cold: self.cold + rhs.cold,
        }
    }
}

impl Mul<f64> for EnthalpyGradient {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            hot: self.hot * rhs,
            cold: self.cold * rhs,
        }
    }
}

impl StepIntegrable<Length> for EnthalpyPair {
    type Derivative = EnthalpyGradient;

    fn step(&self, derivative: EnthalpyGradient, dz: Length) -> Self {
        Self {
            hot: self.hot + derivative.hot * dz,
            cold: self.cold + derivative.cold * dz,
        }
    }
}

/// Model input: an axial position and the stream enthalpies there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub z: Length,
    pub enthalpy: EnthalpyPair,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared, available_energy::joule_per_kilogram,
        length::meter,
    };

    fn pair(hot: f64, cold: f64) -> EnthalpyPair {
        EnthalpyPair {
            hot: SpecificEnthalpy::new::<joule_per_kilogram>(hot),
            cold: SpecificEnthalpy::new::<joule_per_kilogram>(cold),
        }
    }

    fn gradient(hot: f64, cold: f64) -> EnthalpyGradient {
        EnthalpyGradient {
            hot: SpecificEnthalpyGradient::new::<meter_per_second_squared>(hot),
            cold: SpecificEnthalpyGradient::new::<meter_per_second_squared>(cold),
        }
    }

    #[test]
    fn step_applies_each_gradient() {
        let next = pair(1000.0, 500.0).step(gradient(-200.0, -50.0), Length::new::<meter>(0.5));

        assert_relative_eq!(next.hot.get::<joule_per_kilogram>(), 900.0);
        assert_relative_eq!(next.cold.get::<joule_per_kilogram>(), 475.0);
    }

    #[test]
    fn gradients_combine_linearly() {
        let combined = (gradient(1.0, 2.0) + gradient(3.0, 4.0) * 2.0) * 0.5;

        assert_relative_eq!(combined.hot.get::<meter_per_second_squared>(), 3.5);
        assert_relative_eq!(combined.cold.get::<meter_per_second_squared>(), 5.0);
    }
}
