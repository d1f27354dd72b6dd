use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::TemperatureInterval;

use crate::support::{interpolate::InterpolateError, ode::IntegrationError};

/// Errors that can occur while solving the exchanger boundary-value problem.
#[derive(Debug, Error)]
pub enum ShootingError {
    /// The configuration asks for zero integration steps.
    #[error("at least one integration step is required")]
    NoSteps,

    /// The configuration asks for a profile without both end stations.
    #[error("a profile needs at least two points, got {points}")]
    TooFewProfilePoints { points: usize },

    /// An enthalpy inverse could not be built over the inlet temperature span.
    #[error("failed to build temperature interpolant")]
    Interpolation(#[from] InterpolateError),

    /// Integration over the exchanger length failed.
    #[error("integration along the exchanger failed")]
    Integration(#[from] IntegrationError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver stopped without matching the cold inlet temperature.
    #[error("boundary-value solve did not converge: residual={residual:?}")]
    NotConverged {
        /// Cold inlet residual (computed - known) at the best guess.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
