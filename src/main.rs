use std::{error::Error, path::Path};

use tracing::{debug, info};
use twine_core::Model;
use twine_crossflow::{
    models::thermal::crossflow::{CrossflowModel, Exchanger, Geometry, Inlets, MassFlows},
    support::properties::{PropertyTable, TableError, TemperatureInterpolant},
};
use uom::si::{
    f64::{HeatTransfer, Length, MassRate, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::kelvin,
};

/// Property table read in place of the bundled copy, relative to the working directory.
const TABLE_PATH: &str = "data/cp_data.csv";

/// Samples used when reporting the range both compounds can be inverted over.
const OVERLAP_SAMPLES: usize = 500;

/// Operating point of the exchanger, in SI base units.
#[derive(Debug, Clone)]
struct Scenario {
    hot: &'static str,
    cold: &'static str,
    u: f64,
    perimeter: f64,
    length: f64,
    m_hot: f64,
    m_cold: f64,
    t_hot_in: f64,
    t_cold_in: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            hot: "Benzene",
            cold: "Ethylene glycol",
            u: 350.0,
            perimeter: std::f64::consts::PI * 0.1,
            length: 1.0,
            m_hot: 0.05,
            m_cold: 0.10,
            t_hot_in: 323.16,
            t_cold_in: 303.16,
        }
    }
}

impl Scenario {
    fn exchanger(&self) -> Result<Exchanger, Box<dyn Error>> {
        Ok(Exchanger {
            geometry: Geometry::new(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(self.u),
                Length::new::<meter>(self.perimeter),
                Length::new::<meter>(self.length),
            )?,
            m_dot: MassFlows::new(
                MassRate::new::<kilogram_per_second>(self.m_hot),
                MassRate::new::<kilogram_per_second>(self.m_cold),
            )?,
            inlets: Inlets::new(
                ThermodynamicTemperature::new::<kelvin>(self.t_hot_in),
                ThermodynamicTemperature::new::<kelvin>(self.t_cold_in),
            )?,
        })
    }
}

/// Reads `data/cp_data.csv` from the working directory if present, and falls
/// back to the copy embedded in the library otherwise.
fn load_table() -> Result<PropertyTable, TableError> {
    let path = Path::new(TABLE_PATH);
    if path.is_file() {
        info!(path = TABLE_PATH, "loading property table");
        PropertyTable::from_path(path)
    } else {
        debug!(path = TABLE_PATH, "no property table on disk, using bundled data");
        PropertyTable::bundled()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let scenario = Scenario::default();
    let table = load_table()?;
    let (hot, cold) = table.pair(scenario.hot, scenario.cold)?;

    let (shared, _) = TemperatureInterpolant::over_overlap(&hot, &cold, OVERLAP_SAMPLES)?;
    let (t_min, t_max) = shared.temperature_range();
    info!(
        hot = hot.name(),
        cold = cold.name(),
        t_min_k = t_min.get::<kelvin>(),
        t_max_k = t_max.get::<kelvin>(),
        "shared correlation range"
    );

    let model = CrossflowModel::new(hot, cold);
    let profile = model.call(&scenario.exchanger()?)?;

    print!("{}", profile.to_table());
    println!();
    print!("{}", profile.summary());

    Ok(())
}
