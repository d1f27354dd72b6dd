//! Shooting-method solve for the unknown cold outlet temperature.
//!
//! The hot stream's boundary value is known at `z = 0`, but the cold stream's
//! is known at `z = L`. The solver guesses the cold temperature at `z = 0`,
//! integrates to `z = L`, and bisects on the guess until the cold stream ends
//! at its known inlet temperature.

mod error;
mod problem;

pub use error::ShootingError;

use tracing::{debug, trace, warn};
use twine_core::Snapshot;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Length, TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    ode::{self, IntegrationError},
    properties::{Compound, TemperatureInterpolant},
    units::TemperatureDifference,
};

use super::{
    EnthalpyPair, Exchanger, LocalConditions, Profile, ShootingConfig, Station,
    axial::{AxialProblem, ExchangerModel},
};

use problem::{ShootingModel, ShootingProblem};

/// Slack allowed when checking that stations stay within the inlet span.
const RANGE_SLACK_KELVIN: f64 = 1e-6;

/// An exchanger ready to be integrated.
///
/// Holds the enthalpy inverses for both streams, sampled over the inlet
/// temperature span. Created by [`CrossflowHx::initialize`](super::CrossflowHx::initialize).
#[derive(Debug, Clone)]
pub struct Prepared<'a> {
    hot: &'a Compound,
    cold: &'a Compound,
    exchanger: &'a Exchanger,
    config: &'a ShootingConfig,
    hot_interp: TemperatureInterpolant,
    cold_interp: TemperatureInterpolant,
}

impl<'a> Prepared<'a> {
    pub(super) fn new(
        hot: &'a Compound,
        cold: &'a Compound,
        exchanger: &'a Exchanger,
        config: &'a ShootingConfig,
    ) -> Result<Self, ShootingError> {
        if config.steps == 0 {
            return Err(ShootingError::NoSteps);
        }
        if config.profile_points < 2 {
            return Err(ShootingError::TooFewProfilePoints {
                points: config.profile_points,
            });
        }

        let (low, high) = (exchanger.inlets.cold(), exchanger.inlets.hot());
        let samples = config.interpolation_samples;

        let hot_interp = TemperatureInterpolant::new(hot, low, high, samples)?;
        let cold_interp = TemperatureInterpolant::new(cold, low, high, samples)?;

        debug!(
            hot = hot.name(),
            cold = cold.name(),
            t_low_k = low.get::<kelvin>(),
            t_high_k = high.get::<kelvin>(),
            samples,
            "built temperature interpolants"
        );

        Ok(Self {
            hot,
            cold,
            exchanger,
            config,
            hot_interp,
            cold_interp,
        })
    }

    /// Returns the hot stream's enthalpy inverse.
    #[must_use]
    pub fn hot_interpolant(&self) -> &TemperatureInterpolant {
        &self.hot_interp
    }

    /// Returns the cold stream's enthalpy inverse.
    #[must_use]
    pub fn cold_interpolant(&self) -> &TemperatureInterpolant {
        &self.cold_interp
    }

    /// Returns the station at `z = 0` for a guessed cold outlet temperature.
    #[must_use]
    pub fn boundary(&self, cold_outlet: ThermodynamicTemperature) -> Station {
        Station {
            z: Length::ZERO,
            enthalpy: EnthalpyPair {
                hot: self.hot.enthalpy(self.exchanger.inlets.hot()),
                cold: self.cold.enthalpy(cold_outlet),
            },
        }
    }

    /// Integrates over the full length from a guessed cold outlet temperature.
    ///
    /// Uses the configured shooting resolution and returns one snapshot per
    /// station, `steps + 1` in total.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError`] if a station's state is not finite.
    pub fn integrate(
        &self,
        cold_outlet: ThermodynamicTemperature,
    ) -> Result<Vec<Snapshot<Station, LocalConditions>>, IntegrationError> {
        self.integrate_in_steps(cold_outlet, self.config.steps)
    }

    fn integrate_in_steps(
        &self,
        cold_outlet: ThermodynamicTemperature,
        steps: usize,
    ) -> Result<Vec<Snapshot<Station, LocalConditions>>, IntegrationError> {
        let model = ExchangerModel::new(self.exchanger, &self.hot_interp, &self.cold_interp);

        #[allow(clippy::cast_precision_loss)]
        let dz = self.exchanger.geometry.length() / steps as f64;

        ode::integrate(
            self.config.method,
            &model,
            &AxialProblem,
            self.boundary(cold_outlet),
            dz,
            steps,
        )
    }

    /// Returns the cold inlet residual for a guessed cold outlet temperature.
    ///
    /// The residual is the cold temperature reached at `z = L` minus the known
    /// cold inlet temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ShootingError::Integration`] if the integration fails.
    pub fn shoot(
        &self,
        cold_outlet: ThermodynamicTemperature,
    ) -> Result<TemperatureInterval, ShootingError> {
        let cold_end = self.cold_end(cold_outlet)?;
        Ok(cold_end.minus(self.exchanger.inlets.cold()))
    }

    /// Finds the cold outlet temperature and assembles the profile.
    ///
    /// The search is bracketed by the two inlet temperatures. Each shot uses
    /// `steps` integration steps; the converged value is then re-integrated
    /// to give a profile of `profile_points` stations.
    ///
    /// # Errors
    ///
    /// Returns [`ShootingError`] if bisection fails, does not converge within
    /// the configured iterations, or the final integration fails.
    pub fn solve(&self) -> Result<Profile, ShootingError> {
        let inlets = self.exchanger.inlets;
        let model = ShootingModel::new(self);
        let problem = ShootingProblem::new(inlets.cold());

        let solution = bisection::solve(
            &model,
            &problem,
            [inlets.cold().get::<kelvin>(), inlets.hot().get::<kelvin>()],
            &self.config.bisection(),
            |event: &bisection::Event<'_, ShootingModel<'_>, ShootingProblem>| {
                match event.result() {
                    Ok(eval) => {
                        trace!(
                            guess_k = eval.x[0],
                            residual_k = eval.residuals[0],
                            "shooting evaluation"
                        );
                        None
                    }
                    // A failed integration means the guess produced non-finite
                    // states. Guide bisection away by assuming positive residual.
                    Err(_) => Some(bisection::Action::assume_positive()),
                }
            },
        )?;

        let residual = TemperatureInterval::new::<delta_kelvin>(solution.residual);

        if solution.status != bisection::Status::Converged {
            return Err(ShootingError::NotConverged {
                residual,
                iters: solution.iters,
            });
        }

        debug!(
            cold_outlet_k = solution.x,
            residual_k = solution.residual,
            iters = solution.iters,
            "shooting converged"
        );

        let cold_outlet = ThermodynamicTemperature::new::<kelvin>(solution.x);
        let history = self.integrate_in_steps(cold_outlet, self.config.profile_points - 1)?;
        let profile =
            Profile::from_history(&history, self.exchanger.m_dot, residual, solution.iters);

        let outside = self.stations_outside_inlet_span(&profile);
        if outside > 0 {
            warn!(
                stations = outside,
                "profile extends beyond the interpolated temperature range"
            );
        }

        Ok(profile)
    }

    fn cold_end(
        &self,
        cold_outlet: ThermodynamicTemperature,
    ) -> Result<ThermodynamicTemperature, IntegrationError> {
        let history = self.integrate(cold_outlet)?;
        Ok(history
            .last()
            .map_or(cold_outlet, |snapshot| snapshot.output.t_cold))
    }

    fn stations_outside_inlet_span(&self, profile: &Profile) -> usize {
        let slack = TemperatureInterval::new::<delta_kelvin>(RANGE_SLACK_KELVIN);
        let low = self.exchanger.inlets.cold() - slack;
        let high = self.exchanger.inlets.hot() + slack;

        profile
            .points()
            .iter()
            .filter(|point| [point.hot, point.cold].iter().any(|t| *t < low || *t > high))
            .count()
    }
}
