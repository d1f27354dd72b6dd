use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MolarMass, SpecificHeatCapacity, ThermodynamicTemperature},
    molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::SpecificEnthalpy,
};

/// Reference temperature shared by all compounds, in kelvin.
pub const REFERENCE_TEMPERATURE_KELVIN: f64 = 293.15;

/// Coefficients `C1..C5` of a molar heat-capacity polynomial in J/(kmol·K).
///
/// Missing coefficients are zero, so lower-order fits use the same type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatCapacityCoefficients(pub [f64; 5]);

impl HeatCapacityCoefficients {
    /// Molar heat capacity at `t` kelvin, J/(kmol·K).
    #[must_use]
    pub fn molar_cp(&self, t: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, c| acc * t + c)
    }

    /// Integral of the molar heat capacity from `t_ref` to `t`, J/kmol.
    #[must_use]
    pub fn molar_enthalpy(&self, t: f64, t_ref: f64) -> f64 {
        self.0
            .iter()
            .zip(1..=5)
            .map(|(c, k)| c * (t.powi(k) - t_ref.powi(k)) / f64::from(k))
            .sum()
    }
}

/// A liquid with a polynomial heat-capacity correlation.
///
/// Compounds are immutable once built and are usually obtained from a
/// [`PropertyTable`](super::PropertyTable) lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    name: String,
    molar_mass: MolarMass,
    t_min: ThermodynamicTemperature,
    t_max: ThermodynamicTemperature,
    coefficients: HeatCapacityCoefficients,
}

impl Compound {
    /// Creates a compound from its correlation data.
    ///
    /// `t_min` and `t_max` bound the range over which the correlation is valid.
    /// They are informational: property functions evaluate outside it.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        molar_mass: Constrained<MolarMass, StrictlyPositive>,
        t_min: ThermodynamicTemperature,
        t_max: ThermodynamicTemperature,
        coefficients: HeatCapacityCoefficients,
    ) -> Self {
        Self {
            name: name.into(),
            molar_mass: molar_mass.into_inner(),
            t_min,
            t_max,
            coefficients,
        }
    }

    /// Returns the compound name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the molecular weight.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    /// Returns the heat-capacity coefficients.
    #[must_use]
    pub fn coefficients(&self) -> HeatCapacityCoefficients {
        self.coefficients
    }

    /// Returns the correlation's valid temperature range as `(t_min, t_max)`.
    #[must_use]
    pub fn valid_range(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        (self.t_min, self.t_max)
    }

    /// Returns true if `temperature` lies within the valid range.
    #[must_use]
    pub fn is_within_range(&self, temperature: ThermodynamicTemperature) -> bool {
        temperature >= self.t_min && temperature <= self.t_max
    }

    /// Specific enthalpy relative to [`REFERENCE_TEMPERATURE_KELVIN`].
    ///
    /// Computes `H(T) = ∫ Cp dT / MW` from the reference temperature to `T`.
    /// The result is exactly zero at the reference temperature.
    #[must_use]
    pub fn enthalpy(&self, temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
        self.enthalpy_relative_to(
            temperature,
            ThermodynamicTemperature::new::<kelvin>(REFERENCE_TEMPERATURE_KELVIN),
        )
    }

    /// Specific enthalpy relative to an arbitrary reference temperature.
    #[must_use]
    pub fn enthalpy_relative_to(
        &self,
        temperature: ThermodynamicTemperature,
        reference: ThermodynamicTemperature,
    ) -> SpecificEnthalpy {
        let molar = self
            .coefficients
            .molar_enthalpy(temperature.get::<kelvin>(), reference.get::<kelvin>());
        SpecificEnthalpy::new::<joule_per_kilogram>(molar / self.kg_per_kmol())
    }

    /// Specific heat capacity at `temperature`.
    #[must_use]
    pub fn cp(&self, temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
        let molar = self.coefficients.molar_cp(temperature.get::<kelvin>());
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(molar / self.kg_per_kmol())
    }

    fn kg_per_kmol(&self) -> f64 {
        self.molar_mass.get::<kilogram_per_mole>() * 1000.0
    }
}
