use uom::si::{
    available_energy::joule_per_kilogram, f64::ThermodynamicTemperature,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    interpolate::{InterpolateError, LinearInterpolant, linspace},
    units::SpecificEnthalpy,
};

use super::Compound;

/// Piecewise-linear inverse of a compound's enthalpy function.
///
/// Built by sampling `H(T)` on an equally spaced temperature grid and
/// interpolating temperature against enthalpy. Enthalpies outside the sampled
/// range are extrapolated linearly; use [`contains`](Self::contains) to check.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureInterpolant {
    inner: LinearInterpolant,
}

impl TemperatureInterpolant {
    /// Samples `compound` at `samples` temperatures over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolateError`] if `samples < 2`, the range is empty, or
    /// the enthalpy is not strictly increasing over the range.
    pub fn new(
        compound: &Compound,
        low: ThermodynamicTemperature,
        high: ThermodynamicTemperature,
        samples: usize,
    ) -> Result<Self, InterpolateError> {
        let temperatures = linspace(low.get::<kelvin>(), high.get::<kelvin>(), samples)?;
        let enthalpies = temperatures
            .iter()
            .map(|&t| {
                compound
                    .enthalpy(ThermodynamicTemperature::new::<kelvin>(t))
                    .get::<joule_per_kilogram>()
            })
            .collect();

        Ok(Self {
            inner: LinearInterpolant::new(enthalpies, temperatures)?,
        })
    }

    /// Builds interpolants for both compounds over the overlap of their valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolateError::EmptyRange`] if the valid ranges do not
    /// overlap, or any error from [`TemperatureInterpolant::new`].
    pub fn over_overlap(
        hot: &Compound,
        cold: &Compound,
        samples: usize,
    ) -> Result<(Self, Self), InterpolateError> {
        let (hot_min, hot_max) = hot.valid_range();
        let (cold_min, cold_max) = cold.valid_range();

        let low = if hot_min > cold_min { hot_min } else { cold_min };
        let high = if hot_max < cold_max { hot_max } else { cold_max };

        Ok((
            Self::new(hot, low, high, samples)?,
            Self::new(cold, low, high, samples)?,
        ))
    }

    /// Returns the temperature at which the compound has `enthalpy`.
    #[must_use]
    pub fn temperature(&self, enthalpy: SpecificEnthalpy) -> ThermodynamicTemperature {
        let t = self.inner.eval(enthalpy.get::<joule_per_kilogram>());
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    /// Returns true if `enthalpy` lies within the sampled range.
    #[must_use]
    pub fn contains(&self, enthalpy: SpecificEnthalpy) -> bool {
        self.inner.contains(enthalpy.get::<joule_per_kilogram>())
    }

    /// Returns the sampled temperature range as `(low, high)`.
    #[must_use]
    pub fn temperature_range(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        let values = self.inner.values();
        (
            ThermodynamicTemperature::new::<kelvin>(values[0]),
            ThermodynamicTemperature::new::<kelvin>(values[values.len() - 1]),
        )
    }
}
