use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{Area, HeatTransfer, Length};

/// Heat transfer coefficient and wall dimensions of the exchanger.
///
/// The heat transfer surface per unit length is the perimeter `P`, so the
/// local heat flow per unit length is `U·P·(T_hot - T_cold)`.
///
/// Each value is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    u: HeatTransfer,
    perimeter: Length,
    length: Length,
}

impl Geometry {
    /// Constructs validated geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not strictly positive.
    pub fn new(u: HeatTransfer, perimeter: Length, length: Length) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(u)?,
            StrictlyPositive::new(perimeter)?,
            StrictlyPositive::new(length)?,
        ))
    }

    /// Constructs geometry from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        u: Constrained<HeatTransfer, StrictlyPositive>,
        perimeter: Constrained<Length, StrictlyPositive>,
        length: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            u: u.into_inner(),
            perimeter: perimeter.into_inner(),
            length: length.into_inner(),
        }
    }

    /// Returns the overall heat transfer coefficient.
    #[must_use]
    pub fn u(&self) -> HeatTransfer {
        self.u
    }

    /// Returns the wetted perimeter.
    #[must_use]
    pub fn perimeter(&self) -> Length {
        self.perimeter
    }

    /// Returns the exchanger length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns the total heat transfer area, `P·L`.
    #[must_use]
    pub fn area(&self) -> Area {
        self.perimeter * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, heat_transfer::watt_per_square_meter_kelvin, length::meter,
    };

    use crate::support::constraint::ConstraintError;

    fn u(value: f64) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(value)
    }

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn accepts_positive_values() {
        let geometry = Geometry::new(u(350.0), m(0.5), m(2.0)).unwrap();

        assert_relative_eq!(geometry.u().get::<watt_per_square_meter_kelvin>(), 350.0);
        assert_relative_eq!(geometry.area().get::<square_meter>(), 1.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(
            Geometry::new(u(0.0), m(0.5), m(2.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            Geometry::new(u(350.0), m(-0.5), m(2.0)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            Geometry::new(u(350.0), m(0.5), m(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
