//! Shooting-method solve of the crossflow exchanger ODE.
//!
//! The exchanger is reduced to a one-dimensional problem along its length.
//! Each stream's specific enthalpy is the state, temperatures come from
//! piecewise-linear inverses of the enthalpy correlations, and the unknown
//! cold outlet temperature is found by shooting from `z = 0` to `z = L`.

mod axial;
mod config;
mod input;
mod profile;
mod shooting;
mod state;

#[cfg(test)]
mod test_support;

pub use axial::{AxialError, LocalConditions};
pub use config::ShootingConfig;
pub use input::{Exchanger, Geometry, InletError, Inlets, MassFlows};
pub use profile::{Profile, ProfilePoint, Summary};
pub use shooting::{Prepared, ShootingError};
pub use state::{EnthalpyGradient, EnthalpyPair, Station};

use tracing::warn;
use uom::si::thermodynamic_temperature::kelvin;

use crate::support::properties::Compound;

/// Entry point for solving a crossflow exchanger.
///
/// Solving happens in two stages. [`CrossflowHx::initialize`] builds the
/// enthalpy inverses for both streams over the inlet temperature span, and
/// [`Prepared::solve`] runs the shooting method and assembles the profile.
/// [`CrossflowHx::solve`] does both.
#[derive(Debug, Clone)]
pub struct CrossflowHx {
    hot: Compound,
    cold: Compound,
    exchanger: Exchanger,
    config: ShootingConfig,
}

impl CrossflowHx {
    /// Creates an exchanger with the default [`ShootingConfig`].
    #[must_use]
    pub fn new(hot: Compound, cold: Compound, exchanger: Exchanger) -> Self {
        Self::with_config(hot, cold, exchanger, ShootingConfig::default())
    }

    /// Creates an exchanger with an explicit solver configuration.
    #[must_use]
    pub fn with_config(
        hot: Compound,
        cold: Compound,
        exchanger: Exchanger,
        config: ShootingConfig,
    ) -> Self {
        Self {
            hot,
            cold,
            exchanger,
            config,
        }
    }

    /// Returns the hot stream compound.
    #[must_use]
    pub fn hot(&self) -> &Compound {
        &self.hot
    }

    /// Returns the cold stream compound.
    #[must_use]
    pub fn cold(&self) -> &Compound {
        &self.cold
    }

    /// Returns the exchanger parameters.
    #[must_use]
    pub fn exchanger(&self) -> &Exchanger {
        &self.exchanger
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &ShootingConfig {
        &self.config
    }

    /// Builds the enthalpy inverses used by the solver.
    ///
    /// Logs a warning for each compound whose correlation range does not
    /// cover the inlet temperatures; the correlation is still evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`ShootingError::NoSteps`] if the configuration has zero
    /// steps, [`ShootingError::TooFewProfilePoints`] if it asks for fewer than
    /// two profile points, or [`ShootingError::Interpolation`] if either enthalpy function
    /// cannot be inverted over the inlet span.
    pub fn initialize(&self) -> Result<Prepared<'_>, ShootingError> {
        let inlets = self.exchanger.inlets;
        for compound in [&self.hot, &self.cold] {
            let covered =
                compound.is_within_range(inlets.cold()) && compound.is_within_range(inlets.hot());
            if !covered {
                let (t_min, t_max) = compound.valid_range();
                warn!(
                    compound = compound.name(),
                    t_min_k = t_min.get::<kelvin>(),
                    t_max_k = t_max.get::<kelvin>(),
                    "inlet temperatures fall outside the heat capacity correlation range"
                );
            }
        }

        Prepared::new(&self.hot, &self.cold, &self.exchanger, &self.config)
    }

    /// Solves for the temperature profile.
    ///
    /// # Errors
    ///
    /// Returns [`ShootingError`] if initialization fails, the shooting method
    /// does not converge, or integration fails.
    pub fn solve(&self) -> Result<Profile, ShootingError> {
        self.initialize()?.solve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::kelvin as delta_kelvin;

    use crate::support::ode::IntegrationMethod;

    use super::test_support::{exchanger, scenario};

    #[test]
    fn scenario_converges() {
        let (hot, cold, exchanger) = scenario();
        let profile = CrossflowHx::new(hot, cold, exchanger).solve().unwrap();

        assert_eq!(profile.len(), 100);
        assert!(profile.residual().get::<delta_kelvin>().abs() < 1e-6);

        // Hot inlet is an exact boundary value; cold inlet is matched by shooting
        // and reproduced by the coarser profile pass.
        assert_eq!(profile.first().hot, exchanger.inlets.hot());
        assert_relative_eq!(
            profile.last().cold.get::<kelvin>(),
            exchanger.inlets.cold().get::<kelvin>(),
            epsilon = 1e-3
        );

        // Both outlets lie strictly between the inlets.
        let (t_cold_in, t_hot_in) = (303.16, 323.16);
        let hot_out = profile.hot_outlet().get::<kelvin>();
        let cold_out = profile.cold_outlet().get::<kelvin>();
        assert!(t_cold_in < hot_out && hot_out < t_hot_in);
        assert!(t_cold_in < cold_out && cold_out < t_hot_in);
    }

    #[test]
    fn temperatures_fall_along_the_length() {
        let (hot, cold, exchanger) = scenario();
        let profile = CrossflowHx::new(hot, cold, exchanger).solve().unwrap();

        for pair in profile.points().windows(2) {
            assert!(pair[1].hot <= pair[0].hot, "hot rose at z={:?}", pair[1].z);
            assert!(pair[1].cold <= pair[0].cold, "cold rose at z={:?}", pair[1].z);
            assert!(pair[1].hot > pair[1].cold);
        }
    }

    #[test]
    fn large_hot_flow_keeps_hot_temperature_constant() {
        let (hot, cold, _) = scenario();
        let profile = CrossflowHx::new(hot, cold, exchanger(1e6, 0.10))
            .solve()
            .unwrap();

        for point in profile.points() {
            assert_relative_eq!(point.hot.get::<kelvin>(), 323.16, epsilon = 1e-4);
        }
    }

    #[test]
    fn large_cold_flow_keeps_cold_temperature_constant() {
        let (hot, cold, _) = scenario();
        let profile = CrossflowHx::new(hot, cold, exchanger(0.05, 1e6))
            .solve()
            .unwrap();

        for point in profile.points() {
            assert_relative_eq!(point.cold.get::<kelvin>(), 303.16, epsilon = 1e-4);
        }
    }

    #[test]
    fn solving_is_deterministic() {
        let (hot, cold, exchanger) = scenario();
        let hx = CrossflowHx::new(hot, cold, exchanger);

        assert_eq!(hx.solve().unwrap(), hx.solve().unwrap());
    }

    #[test]
    fn duties_balance() {
        let (hot, cold, exchanger) = scenario();
        let summary = CrossflowHx::new(hot, cold, exchanger)
            .solve()
            .unwrap()
            .summary();

        assert!(summary.hot_duty.value > 0.0);
        assert_relative_eq!(
            summary.hot_duty.value,
            summary.cold_duty.value,
            max_relative = 1e-9
        );
        assert!(summary.imbalance().abs() < 1e-9);
    }

    #[test]
    fn too_few_iterations_is_not_converged() {
        let (hot, cold, exchanger) = scenario();
        let config = ShootingConfig {
            max_iters: 3,
            ..ShootingConfig::default()
        };

        let err = CrossflowHx::with_config(hot, cold, exchanger, config)
            .solve()
            .unwrap_err();

        assert!(matches!(err, ShootingError::NotConverged { .. }));
    }

    #[test]
    fn zero_steps_is_rejected() {
        let (hot, cold, exchanger) = scenario();
        let config = ShootingConfig {
            steps: 0,
            ..ShootingConfig::default()
        };

        let err = CrossflowHx::with_config(hot, cold, exchanger, config)
            .initialize()
            .unwrap_err();

        assert!(matches!(err, ShootingError::NoSteps));
    }

    #[test]
    fn too_few_samples_is_rejected() {
        let (hot, cold, exchanger) = scenario();
        let config = ShootingConfig {
            interpolation_samples: 1,
            ..ShootingConfig::default()
        };

        let err = CrossflowHx::with_config(hot, cold, exchanger, config)
            .solve()
            .unwrap_err();

        assert!(matches!(err, ShootingError::Interpolation(_)));
    }

    #[test]
    fn euler_agrees_with_runge_kutta() {
        let (hot, cold, exchanger) = scenario();
        let euler = ShootingConfig {
            method: IntegrationMethod::ForwardEuler,
            ..ShootingConfig::default()
        };

        let rk4 = CrossflowHx::new(hot.clone(), cold.clone(), exchanger)
            .solve()
            .unwrap();
        let euler = CrossflowHx::with_config(hot, cold, exchanger, euler)
            .solve()
            .unwrap();

        for (a, b) in rk4.points().iter().zip(euler.points()) {
            assert_relative_eq!(a.hot.get::<kelvin>(), b.hot.get::<kelvin>(), epsilon = 0.05);
            assert_relative_eq!(a.cold.get::<kelvin>(), b.cold.get::<kelvin>(), epsilon = 0.05);
        }
    }
}
