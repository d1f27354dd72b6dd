use uom::si::{
    f64::{HeatTransfer, Length, MassRate, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::kelvin,
};

use crate::support::properties::{Compound, PropertyTable};

use super::{Exchanger, Geometry, Inlets, MassFlows};

pub(super) fn temp(t: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(t)
}

/// Benzene cooled by ethylene glycol in a 1 m tube of 0.1 m diameter.
pub(super) fn scenario() -> (Compound, Compound, Exchanger) {
    let (hot, cold) = PropertyTable::bundled()
        .and_then(|table| table.pair("Benzene", "Ethylene glycol"))
        .expect("bundled table has the scenario compounds");

    (hot, cold, exchanger(0.05, 0.10))
}

/// The scenario exchanger with the given mass flow rates in kg/s.
pub(super) fn exchanger(m_hot: f64, m_cold: f64) -> Exchanger {
    Exchanger {
        geometry: Geometry::new(
            HeatTransfer::new::<watt_per_square_meter_kelvin>(350.0),
            Length::new::<meter>(std::f64::consts::PI * 0.1),
            Length::new::<meter>(1.0),
        )
        .expect("scenario geometry is valid"),
        m_dot: MassFlows::new(
            MassRate::new::<kilogram_per_second>(m_hot),
            MassRate::new::<kilogram_per_second>(m_cold),
        )
        .expect("scenario flows are valid"),
        inlets: Inlets::new(temp(323.16), temp(303.16)).expect("scenario inlets are ordered"),
    }
}
