//! # Twine Crossflow
//!
//! Steady-state temperature profiles for a crossflow heat exchanger, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Each stream's enthalpy evolves along the exchanger length according to the
//! local hot-to-cold temperature difference. Enthalpy comes from integrating
//! a polynomial heat-capacity correlation, temperature is recovered through a
//! piecewise-linear inverse, and the unknown cold outlet temperature is found
//! with a shooting method.
//!
//! ## Crate layout
//!
//! - [`models`]: The crossflow exchanger model and its [`twine_core::Model`] adapter.
//! - [`support`]: Property tables, interpolation, fixed-step integration,
//!   numeric constraints, and unit helpers used by the model.
//!
//! ## Example
//!
//! ```no_run
//! use twine_crossflow::models::thermal::crossflow::{
//!     CrossflowHx, Exchanger, Geometry, Inlets, MassFlows,
//! };
//! use twine_crossflow::support::properties::PropertyTable;
//! use uom::si::{
//!     f64::{HeatTransfer, Length, MassRate, ThermodynamicTemperature},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = PropertyTable::bundled()?;
//! let (hot, cold) = table.pair("Benzene", "Ethylene glycol")?;
//!
//! let exchanger = Exchanger {
//!     geometry: Geometry::new(
//!         HeatTransfer::new::<watt_per_square_meter_kelvin>(350.0),
//!         Length::new::<meter>(std::f64::consts::PI * 0.1),
//!         Length::new::<meter>(1.0),
//!     )?,
//!     m_dot: MassFlows::new(
//!         MassRate::new::<kilogram_per_second>(0.05),
//!         MassRate::new::<kilogram_per_second>(0.10),
//!     )?,
//!     inlets: Inlets::new(
//!         ThermodynamicTemperature::new::<kelvin>(323.16),
//!         ThermodynamicTemperature::new::<kelvin>(303.16),
//!     )?,
//! };
//!
//! let profile = CrossflowHx::new(hot, cold, exchanger).solve()?;
//! println!("{}", profile.to_table());
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod support;
