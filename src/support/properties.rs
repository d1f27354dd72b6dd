//! Liquid heat-capacity correlations and the table they are loaded from.
//!
//! Each [`Compound`] carries the coefficients of Perry's liquid heat-capacity
//! polynomial
//!
//! ```text
//! Cp = C1 + C2·T + C3·T² + C4·T³ + C5·T⁴        [J/(kmol·K)], T in K
//! ```
//!
//! together with its molecular weight and the temperature range over which the
//! fit is valid. Specific enthalpy follows by integrating `Cp` from the shared
//! [`reference_temperature`] and dividing by the molecular weight, so every
//! compound reports enthalpy in J/kg with a common zero.
//!
//! [`PropertyTable`] parses the delimited table, and [`TemperatureInterpolant`]
//! inverts a compound's enthalpy function over a sampled temperature range.

mod compound;
mod error;
mod inverse;
mod table;

pub use compound::{Compound, HeatCapacityCoefficients, REFERENCE_TEMPERATURE_KELVIN};
pub use error::TableError;
pub use inverse::TemperatureInterpolant;
pub use table::PropertyTable;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Reference temperature at which every compound's specific enthalpy is zero.
#[must_use]
pub fn reference_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(REFERENCE_TEMPERATURE_KELVIN)
}
