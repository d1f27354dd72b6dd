use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::support::ode::IntegrationMethod;

/// Solver configuration for the shooting method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingConfig {
    /// Fixed-step scheme used for every integration over the length.
    pub method: IntegrationMethod,

    /// Number of integration steps over the exchanger length for each shot.
    pub steps: usize,

    /// Number of stations in the returned profile, including both ends.
    ///
    /// The converged boundary value is re-integrated with
    /// `profile_points - 1` equal steps, independent of `steps`.
    pub profile_points: usize,

    /// Temperature samples used to build each enthalpy inverse.
    pub interpolation_samples: usize,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the cold outlet temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the cold inlet residual (computed - known).
    pub residual_tol: TemperatureInterval,
}

impl Default for ShootingConfig {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::RungeKutta4,
            steps: 1000,
            profile_points: 100,
            interpolation_samples: 1000,
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-12),
            residual_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
        }
    }
}

impl ShootingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol.get::<delta_kelvin>(),
        }
    }
}
