//! Fixed-step integration of [`OdeProblem`]s.
//!
//! Forward Euler delegates to [`twine_solvers::transient::euler`]. The classic
//! fourth-order Runge-Kutta scheme lives in [`rk4`] and works with the same
//! [`Model`] and [`OdeProblem`] contracts, so a problem can switch methods
//! without changes.

pub mod rk4;

use std::ops::{Add, Mul};

use thiserror::Error;
use twine_core::{DerivativeOf, Model, OdeProblem, Snapshot};
use twine_solvers::transient::euler;

/// Fixed-step integration scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// First-order explicit Euler.
    ForwardEuler,

    /// Classic fourth-order Runge-Kutta.
    #[default]
    RungeKutta4,
}

/// Errors that can occur during fixed-step integration.
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("forward Euler integration failed")]
    Euler(#[from] euler::Error),

    #[error("Runge-Kutta integration failed")]
    RungeKutta(#[from] rk4::Error),
}

/// Integrates `steps` fixed steps of size `delta` from `initial`.
///
/// The returned history holds `steps + 1` snapshots, starting with the
/// initial input.
///
/// # Errors
///
/// Returns [`IntegrationError`] if the model or problem fails at any step.
pub fn integrate<M, P>(
    method: IntegrationMethod,
    model: &M,
    problem: &P,
    initial: M::Input,
    delta: P::Delta,
    steps: usize,
) -> Result<Vec<Snapshot<M::Input, M::Output>>, IntegrationError>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
{
    let history = match method {
        IntegrationMethod::ForwardEuler => {
            euler::solve_unobserved(model, problem, initial, delta, steps)?.history
        }
        IntegrationMethod::RungeKutta4 => {
            rk4::solve(model, problem, initial, delta, steps)?.history
        }
    };

    Ok(history)
}
