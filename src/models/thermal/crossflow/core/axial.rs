//! The exchanger ODE right-hand side.
//!
//! Along the axial coordinate `z` both stream enthalpies follow
//!
//! ```text
//! dH_hot/dz  = -U·P·(T_hot - T_cold) / m_hot
//! dH_cold/dz = -U·P·(T_hot - T_cold) / m_cold
//! ```
//!
//! Both derivatives carry the same sign. While the hot stream is warmer, both
//! enthalpies fall with increasing `z`: the hot stream enters at `z = 0` and
//! the cold stream enters at `z = L`, flowing toward `z = 0`.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{DerivativeOf, Model, OdeProblem};
use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{properties::TemperatureInterpolant, units::TemperatureDifference};

use super::{EnthalpyGradient, EnthalpyPair, Exchanger, Station};

/// Errors that can occur while evaluating the exchanger ODE.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AxialError {
    /// A stream temperature or enthalpy gradient is not finite.
    #[error("non-finite state at z={z:?}: t_hot={t_hot:?}, t_cold={t_cold:?}")]
    NonFinite {
        z: Length,
        t_hot: ThermodynamicTemperature,
        t_cold: ThermodynamicTemperature,
    },
}

/// Local conditions at a [`Station`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalConditions {
    pub t_hot: ThermodynamicTemperature,
    pub t_cold: ThermodynamicTemperature,
    pub delta_t: TemperatureInterval,
    pub gradient: EnthalpyGradient,
}

/// Evaluates stream temperatures and enthalpy gradients at a station.
///
/// Temperatures are recovered through the interpolants the model is built
/// with; nothing else is looked up during integration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExchangerModel<'a> {
    exchanger: &'a Exchanger,
    hot: &'a TemperatureInterpolant,
    cold: &'a TemperatureInterpolant,
}

impl<'a> ExchangerModel<'a> {
    pub(crate) fn new(
        exchanger: &'a Exchanger,
        hot: &'a TemperatureInterpolant,
        cold: &'a TemperatureInterpolant,
    ) -> Self {
        Self {
            exchanger,
            hot,
            cold,
        }
    }
}

impl Model for ExchangerModel<'_> {
    type Input = Station;
    type Output = LocalConditions;
    type Error = AxialError;

    fn call(&self, input: &Station) -> Result<LocalConditions, AxialError> {
        let t_hot = self.hot.temperature(input.enthalpy.hot);
        let t_cold = self.cold.temperature(input.enthalpy.cold);
        let delta_t = t_hot.minus(t_cold);

        let geometry = &self.exchanger.geometry;
        let m_dot = &self.exchanger.m_dot;

        // Heat flow per unit length, with the sign applied to both streams.
        let flow = -(geometry.u() * geometry.perimeter() * delta_t);
        let gradient = EnthalpyGradient {
            hot: flow / m_dot.hot(),
            cold: flow / m_dot.cold(),
        };

        if !(gradient.hot.is_finite() && gradient.cold.is_finite()) {
            return Err(AxialError::NonFinite {
                z: input.z,
                t_hot,
                t_cold,
            });
        }

        Ok(LocalConditions {
            t_hot,
            t_cold,
            delta_t,
            gradient,
        })
    }
}

/// Integrates [`EnthalpyPair`] along `z`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AxialProblem;

impl OdeProblem for AxialProblem {
    type Input = Station;
    type Output = LocalConditions;
    type Delta = Length;
    type State = EnthalpyPair;
    type Error = Infallible;

    fn state(&self, input: &Station) -> Result<EnthalpyPair, Infallible> {
        Ok(input.enthalpy)
    }

    fn derivative(
        &self,
        _input: &Station,
        output: &LocalConditions,
    ) -> Result<DerivativeOf<EnthalpyPair, Length>, Infallible> {
        Ok(output.gradient)
    }

    fn build_input(
        &self,
        base: &Station,
        state: &EnthalpyPair,
        delta: &Length,
    ) -> Result<Station, Infallible> {
        Ok(Station {
            z: base.z + *delta,
            enthalpy: *state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared, available_energy::joule_per_kilogram,
        length::meter, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use crate::models::thermal::crossflow::core::test_support::{scenario, temp};
    use crate::support::{properties::Compound, units::SpecificEnthalpy};

    fn interpolants(
        hot: &Compound,
        cold: &Compound,
    ) -> (TemperatureInterpolant, TemperatureInterpolant) {
        (
            TemperatureInterpolant::new(hot, temp(303.16), temp(323.16), 1000).unwrap(),
            TemperatureInterpolant::new(cold, temp(303.16), temp(323.16), 1000).unwrap(),
        )
    }

    fn station(hot: SpecificEnthalpy, cold: SpecificEnthalpy) -> Station {
        Station {
            z: Length::new::<meter>(0.25),
            enthalpy: EnthalpyPair { hot, cold },
        }
    }

    #[test]
    fn gradients_share_sign_and_scale_with_flow() {
        let (hot, cold, exchanger) = scenario();
        let (hot_interp, cold_interp) = interpolants(&hot, &cold);
        let model = ExchangerModel::new(&exchanger, &hot_interp, &cold_interp);

        let input = station(hot.enthalpy(temp(320.0)), cold.enthalpy(temp(310.0)));
        let local = model.call(&input).unwrap();

        assert_relative_eq!(local.t_hot.get::<kelvin>(), 320.0, epsilon = 1e-6);
        assert_relative_eq!(local.t_cold.get::<kelvin>(), 310.0, epsilon = 1e-6);
        assert_relative_eq!(local.delta_t.get::<delta_kelvin>(), 10.0, epsilon = 1e-6);

        let hot_rate = local.gradient.hot.get::<meter_per_second_squared>();
        let cold_rate = local.gradient.cold.get::<meter_per_second_squared>();
        assert!(hot_rate < 0.0);
        assert!(cold_rate < 0.0);

        // U·P·ΔT / m with m_hot = 0.05 kg/s and m_cold = 0.10 kg/s.
        let flow = 350.0 * std::f64::consts::PI * 0.1 * local.delta_t.get::<delta_kelvin>();
        assert_relative_eq!(hot_rate, -flow / 0.05, max_relative = 1e-12);
        assert_relative_eq!(cold_rate, -flow / 0.10, max_relative = 1e-12);
    }

    #[test]
    fn equal_temperatures_give_zero_gradient() {
        let (hot, cold, exchanger) = scenario();
        let (hot_interp, cold_interp) = interpolants(&hot, &cold);
        let model = ExchangerModel::new(&exchanger, &hot_interp, &cold_interp);

        let input = station(hot.enthalpy(temp(323.16)), cold.enthalpy(temp(323.16)));
        let local = model.call(&input).unwrap();

        assert_eq!(local.gradient.hot.value, 0.0);
        assert_eq!(local.gradient.cold.value, 0.0);
    }

    #[test]
    fn non_finite_enthalpy_is_an_error() {
        let (hot, cold, exchanger) = scenario();
        let (hot_interp, cold_interp) = interpolants(&hot, &cold);
        let model = ExchangerModel::new(&exchanger, &hot_interp, &cold_interp);

        let input = station(
            SpecificEnthalpy::new::<joule_per_kilogram>(f64::NAN),
            cold.enthalpy(temp(310.0)),
        );

        assert!(matches!(
            model.call(&input),
            Err(AxialError::NonFinite { .. })
        ));
    }

    #[test]
    fn build_input_advances_z() {
        let (hot, cold, _) = scenario();
        let base = station(hot.enthalpy(temp(320.0)), cold.enthalpy(temp(310.0)));
        let next_state = EnthalpyPair {
            hot: hot.enthalpy(temp(319.0)),
            cold: cold.enthalpy(temp(309.0)),
        };

        let next = AxialProblem
            .build_input(&base, &next_state, &Length::new::<meter>(0.01))
            .unwrap();

        assert_relative_eq!(next.z.get::<meter>(), 0.26);
        assert_eq!(next.enthalpy, next_state);
    }
}
