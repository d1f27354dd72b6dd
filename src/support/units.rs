//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities. This module
//! adds the few pieces the model needs that [`uom`] does not name:
//!
//! - [`SpecificEnthalpy`]: J/kg, the state carried along the exchanger.
//! - [`SpecificEnthalpyGradient`]: J/(kg·m), its derivative along the length.
//! - [`TemperatureDifference`]: subtracting two absolute temperatures.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_crossflow::support::units::TemperatureDifference;
//!
//! let hot = ThermodynamicTemperature::new::<kelvin>(323.16);
//! let cold = ThermodynamicTemperature::new::<kelvin>(303.16);
//! let delta_t = hot.minus(cold);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificEnthalpy, SpecificEnthalpyGradient};
pub use temperature_difference::TemperatureDifference;
