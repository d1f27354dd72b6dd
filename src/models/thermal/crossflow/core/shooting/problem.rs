//! Problem formulation for the cold outlet search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::ode::IntegrationError;

use super::Prepared;

/// Result of one integration from a guessed boundary value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Shot {
    /// Cold stream temperature reached at `z = L`.
    pub(super) cold_end: ThermodynamicTemperature,
}

/// Model adapter for the shooting method.
///
/// Takes a guessed cold outlet temperature (the cold stream at `z = 0`),
/// integrates over the full length, and reports where the cold stream ends up.
pub(super) struct ShootingModel<'a> {
    prepared: &'a Prepared<'a>,
}

impl<'a> ShootingModel<'a> {
    pub(super) fn new(prepared: &'a Prepared<'a>) -> Self {
        Self { prepared }
    }
}

impl Model for ShootingModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = Shot;
    type Error = IntegrationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Shot {
            cold_end: self.prepared.cold_end(*input)?,
        })
    }
}

/// Equation problem for matching the cold inlet temperature.
///
/// Computes the residual as `cold_end - cold_inlet` in kelvin.
pub(super) struct ShootingProblem {
    cold_inlet: ThermodynamicTemperature,
}

impl ShootingProblem {
    pub(super) fn new(cold_inlet: ThermodynamicTemperature) -> Self {
        Self { cold_inlet }
    }
}

impl EquationProblem<1> for ShootingProblem {
    type Input = ThermodynamicTemperature;
    type Output = Shot;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.cold_end.get::<kelvin>() - self.cold_inlet.get::<kelvin>()])
    }
}
