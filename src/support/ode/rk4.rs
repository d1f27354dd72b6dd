//! Classic fourth-order Runge-Kutta solver for ODE problems.
//!
//! Each step evaluates the derivative four times and combines them:
//!
//! ```text
//! k1 = f(x_n,           s_n)
//! k2 = f(x_n + h/2,     s_n + k1·h/2)
//! k3 = f(x_n + h/2,     s_n + k2·h/2)
//! k4 = f(x_n + h,       s_n + k3·h)
//! s_{n+1} = s_n + (k1 + 2·k2 + 2·k3 + k4)·h/6
//! ```
//!
//! Intermediate stages are built with [`OdeProblem::build_input`] and
//! evaluated through the model, so only accepted steps reach
//! [`OdeProblem::finalize_step`] and the returned history.

use std::{
    error::Error as StdError,
    ops::{Add, Mul},
};

use twine_core::{DerivativeOf, Model, OdeProblem, Snapshot, StepIntegrable};

/// Errors that can occur during Runge-Kutta integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }

    fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}

/// The result of a Runge-Kutta integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// History of snapshots from each step (including initial state).
    pub history: Vec<Snapshot<I, O>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

/// Integrates an ODE problem using classic fourth-order Runge-Kutta.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any stage.
pub fn solve<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    delta: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
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
    let half = delta.clone() * 0.5;

    let initial_output = model.call(&initial).map_err(Error::model)?;
    let mut current = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(current.clone());

    for _ in 0..steps {
        let base = &current.input;
        let state = problem.state(base).map_err(Error::problem)?;

        let k1 = problem
            .derivative(base, &current.output)
            .map_err(Error::problem)?;
        let k2 = stage(model, problem, base, &state, k1.clone(), &half)?;
        let k3 = stage(model, problem, base, &state, k2.clone(), &half)?;
        let k4 = stage(model, problem, base, &state, k3.clone(), &delta)?;

        let slope = (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);
        let next_state = state.step(slope, delta.clone());

        let next_input = problem
            .build_input(base, &next_state, &delta)
            .map_err(Error::problem)?;
        let next_input = problem
            .finalize_step(next_input, base, &current.output, &delta)
            .map_err(Error::problem)?;

        let next_output = model.call(&next_input).map_err(Error::model)?;
        current = Snapshot::new(next_input, next_output);
        history.push(current.clone());
    }

    Ok(Solution { history, steps })
}

/// Evaluates the derivative at `state + derivative·offset`, located `offset`
/// past `base`.
fn stage<M, P>(
    model: &M,
    problem: &P,
    base: &M::Input,
    state: &P::State,
    derivative: DerivativeOf<P::State, P::Delta>,
    offset: &P::Delta,
) -> Result<DerivativeOf<P::State, P::Delta>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let trial = state.step(derivative, offset.clone());
    let input = problem
        .build_input(base, &trial, offset)
        .map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    problem.derivative(&input, &output).map_err(Error::problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use twine_solvers::transient::euler;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Amount(f64);

    #[derive(Debug, Clone, Copy)]
    struct Rate(f64);

    impl Add for Rate {
        type Output = Rate;

        fn add(self, rhs: Rate) -> Rate {
            Rate(self.0 + rhs.0)
        }
    }

    impl Mul<f64> for Rate {
        type Output = Rate;

        fn mul(self, rhs: f64) -> Rate {
            Rate(self.0 * rhs)
        }
    }

    impl StepIntegrable<f64> for Amount {
        type Derivative = Rate;

        fn step(&self, derivative: Rate, dt: f64) -> Self {
            Amount(self.0 + derivative.0 * dt)
        }
    }

    #[derive(Debug, Clone)]
    struct Input {
        amount: Amount,
        time: f64,
    }

    /// `dy/dt = -k·y`
    struct Decay {
        k: f64,
    }

    impl Model for Decay {
        type Input = Input;
        type Output = Rate;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<Rate, Infallible> {
            Ok(Rate(-self.k * input.amount.0))
        }
    }

    struct DecayProblem;

    impl OdeProblem for DecayProblem {
        type Input = Input;
        type Output = Rate;
        type Delta = f64;
        type State = Amount;
        type Error = Infallible;

        fn state(&self, input: &Input) -> Result<Amount, Infallible> {
            Ok(input.amount)
        }

        fn derivative(&self, _input: &Input, output: &Rate) -> Result<Rate, Infallible> {
            Ok(*output)
        }

        fn build_input(
            &self,
            base: &Input,
            state: &Amount,
            dt: &f64,
        ) -> Result<Input, Infallible> {
            Ok(Input {
                amount: *state,
                time: base.time + dt,
            })
        }
    }

    fn initial() -> Input {
        Input {
            amount: Amount(1.0),
            time: 0.0,
        }
    }

    #[test]
    fn exponential_decay() {
        let solution = solve(&Decay { k: 1.0 }, &DecayProblem, initial(), 0.1, 10).unwrap();

        assert_eq!(solution.steps, 10);
        assert_eq!(solution.history.len(), 11);

        let last = solution.history.last().unwrap();
        assert_relative_eq!(last.input.time, 1.0, epsilon = 1e-12);
        assert_relative_eq!(last.input.amount.0, (-1.0_f64).exp(), max_relative = 1e-5);
    }

    #[test]
    fn fourth_order_beats_euler() {
        let exact = (-2.0_f64).exp();
        let model = Decay { k: 2.0 };

        let rk4 = solve(&model, &DecayProblem, initial(), 0.05, 20).unwrap();
        let euler = euler::solve_unobserved(&model, &DecayProblem, initial(), 0.05, 20).unwrap();

        let rk4_error = (rk4.history[20].input.amount.0 - exact).abs();
        let euler_error = (euler.history[20].input.amount.0 - exact).abs();

        assert!(rk4_error < 1e-6);
        assert!(euler_error > 1e3 * rk4_error);
    }

    #[test]
    fn zero_steps_returns_initial() {
        let solution = solve(&Decay { k: 1.0 }, &DecayProblem, initial(), 0.1, 0).unwrap();

        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_relative_eq!(solution.history[0].output.0, -1.0);
    }
}
