//! Converged temperature profiles and their summary.

use std::fmt;

use twine_core::Snapshot;
use uom::si::{
    f64::{Length, Power, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{EnthalpyPair, LocalConditions, MassFlows, Station};

/// Stream temperatures and enthalpies at one axial station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the hot inlet.
    pub z: Length,

    /// Hot stream temperature.
    pub hot: ThermodynamicTemperature,

    /// Cold stream temperature.
    pub cold: ThermodynamicTemperature,

    /// Stream specific enthalpies.
    pub enthalpy: EnthalpyPair,
}

/// Temperature profile of a solved exchanger.
///
/// Points are ordered by increasing `z`, from the hot inlet (`z = 0`) to the
/// cold inlet (`z = L`). A profile always has at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<ProfilePoint>,
    m_dot: MassFlows,
    residual: TemperatureInterval,
    iters: usize,
}

impl Profile {
    pub(super) fn from_history(
        history: &[Snapshot<Station, LocalConditions>],
        m_dot: MassFlows,
        residual: TemperatureInterval,
        iters: usize,
    ) -> Self {
        let points = history
            .iter()
            .map(|snapshot| ProfilePoint {
                z: snapshot.input.z,
                hot: snapshot.output.t_hot,
                cold: snapshot.output.t_cold,
                enthalpy: snapshot.input.enthalpy,
            })
            .collect();

        Self {
            points,
            m_dot,
            residual,
            iters,
        }
    }

    /// Returns the stations, ordered by increasing `z`.
    #[must_use]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Returns the number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the profile has no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the station at the hot inlet, `z = 0`.
    #[must_use]
    pub fn first(&self) -> &ProfilePoint {
        &self.points[0]
    }

    /// Returns the station at the cold inlet, `z = L`.
    #[must_use]
    pub fn last(&self) -> &ProfilePoint {
        &self.points[self.points.len() - 1]
    }

    /// Returns the hot stream outlet temperature, at `z = L`.
    #[must_use]
    pub fn hot_outlet(&self) -> ThermodynamicTemperature {
        self.last().hot
    }

    /// Returns the cold stream outlet temperature, at `z = 0`.
    #[must_use]
    pub fn cold_outlet(&self) -> ThermodynamicTemperature {
        self.first().cold
    }

    /// Returns the converged cold inlet residual (computed - known).
    #[must_use]
    pub fn residual(&self) -> TemperatureInterval {
        self.residual
    }

    /// Returns the number of shooting iterations used.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }

    /// Computes outlet temperatures and heat duties.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let (inlet_end, outlet_end) = (self.first(), self.last());

        Summary {
            hot_outlet: self.hot_outlet(),
            cold_outlet: self.cold_outlet(),
            hot_duty: self.m_dot.hot() * (inlet_end.enthalpy.hot - outlet_end.enthalpy.hot),
            cold_duty: self.m_dot.cold() * (inlet_end.enthalpy.cold - outlet_end.enthalpy.cold),
            residual: self.residual,
            iters: self.iters,
        }
    }

    /// Renders the profile as a fixed-width text table.
    #[must_use]
    pub fn to_table(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10} {:>12} {:>12}", "z [m]", "T_hot [K]", "T_cold [K]")?;
        for point in &self.points {
            writeln!(
                f,
                "{:>10.4} {:>12.4} {:>12.4}",
                point.z.get::<meter>(),
                point.hot.get::<kelvin>(),
                point.cold.get::<kelvin>(),
            )?;
        }
        Ok(())
    }
}

/// Outlet temperatures and heat duties of a solved exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,

    /// Heat released by the hot stream, `m_hot·(H_hot(0) - H_hot(L))`.
    pub hot_duty: Power,

    /// Heat absorbed by the cold stream, `m_cold·(H_cold(0) - H_cold(L))`.
    pub cold_duty: Power,

    pub residual: TemperatureInterval,
    pub iters: usize,
}

impl Summary {
    /// Relative difference between the hot and cold duties.
    ///
    /// Zero for an exact energy balance. Not finite if the hot duty is zero.
    #[must_use]
    pub fn imbalance(&self) -> f64 {
        ((self.hot_duty - self.cold_duty) / self.hot_duty).get::<ratio>()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "hot outlet:   {:.4} K", self.hot_outlet.get::<kelvin>())?;
        writeln!(f, "cold outlet:  {:.4} K", self.cold_outlet.get::<kelvin>())?;
        writeln!(f, "hot duty:     {:.3} W", self.hot_duty.get::<watt>())?;
        writeln!(f, "cold duty:    {:.3} W", self.cold_duty.get::<watt>())?;
        writeln!(f, "imbalance:    {:.3e}", self.imbalance())?;
        writeln!(
            f,
            "residual:     {:.3e} K after {} iterations",
            self.residual.get::<delta_kelvin>(),
            self.iters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::{available_energy::joule_per_kilogram, f64::MassRate, mass_rate::kilogram_per_second},
    };

    use crate::support::units::{SpecificEnthalpy, SpecificEnthalpyGradient};

    use super::super::{EnthalpyGradient, test_support::temp};

    fn snapshot(z: f64, hot: f64, cold: f64) -> Snapshot<Station, LocalConditions> {
        // Constant cp of 2000 J/(kg·K), zero at 300 K.
        let h = |t: f64| SpecificEnthalpy::new::<joule_per_kilogram>(2000.0 * (t - 300.0));
        let zero = EnthalpyGradient {
            hot: SpecificEnthalpyGradient::ZERO,
            cold: SpecificEnthalpyGradient::ZERO,
        };

        Snapshot::new(
            Station {
                z: Length::new::<meter>(z),
                enthalpy: EnthalpyPair {
                    hot: h(hot),
                    cold: h(cold),
                },
            },
            LocalConditions {
                t_hot: temp(hot),
                t_cold: temp(cold),
                delta_t: TemperatureInterval::new::<delta_kelvin>(hot - cold),
                gradient: zero,
            },
        )
    }

    fn profile() -> Profile {
        let history = [
            snapshot(0.0, 320.0, 315.0),
            snapshot(0.5, 318.0, 312.0),
            snapshot(1.0, 316.0, 310.0),
        ];
        let m_dot = MassFlows::new(
            MassRate::new::<kilogram_per_second>(0.5),
            MassRate::new::<kilogram_per_second>(0.4),
        )
        .unwrap();

        Profile::from_history(
            &history,
            m_dot,
            TemperatureInterval::new::<delta_kelvin>(1e-10),
            7,
        )
    }

    #[test]
    fn outlets_come_from_opposite_ends() {
        let profile = profile();

        assert_eq!(profile.len(), 3);
        assert_relative_eq!(profile.hot_outlet().get::<kelvin>(), 316.0);
        assert_relative_eq!(profile.cold_outlet().get::<kelvin>(), 315.0);
        assert_eq!(profile.iters(), 7);
    }

    #[test]
    fn summary_reports_duties() {
        let summary = profile().summary();

        // 0.5 kg/s · 2000 J/(kg·K) · 4 K and 0.4 kg/s · 2000 J/(kg·K) · 5 K
        assert_relative_eq!(summary.hot_duty.get::<watt>(), 4000.0, max_relative = 1e-12);
        assert_relative_eq!(summary.cold_duty.get::<watt>(), 4000.0, max_relative = 1e-12);
        assert!(summary.imbalance().abs() < 1e-12);
    }

    #[test]
    fn table_has_a_row_per_station() {
        let table = profile().to_table();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("T_hot [K]"));
        assert!(lines[3].contains("316.0000"));
        assert!(lines[3].contains("310.0000"));
    }
}
