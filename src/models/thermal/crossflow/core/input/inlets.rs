use thiserror::Error;
use uom::si::f64::ThermodynamicTemperature;

/// Errors that can occur while constructing [`Inlets`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InletError {
    /// The hot inlet is not warmer than the cold inlet.
    #[error("hot inlet {hot:?} must be warmer than cold inlet {cold:?}")]
    NotOrdered {
        hot: ThermodynamicTemperature,
        cold: ThermodynamicTemperature,
    },
}

/// Inlet temperatures for the hot and cold streams.
///
/// The hot stream enters at `z = 0` and the cold stream at `z = L`.
/// The hot inlet is guaranteed to be strictly warmer than the cold inlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inlets {
    hot: ThermodynamicTemperature,
    cold: ThermodynamicTemperature,
}

impl Inlets {
    /// Constructs validated inlet temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`InletError::NotOrdered`] unless `hot > cold`, which also
    /// rejects `NaN` temperatures.
    pub fn new(
        hot: ThermodynamicTemperature,
        cold: ThermodynamicTemperature,
    ) -> Result<Self, InletError> {
        if hot > cold {
            Ok(Self { hot, cold })
        } else {
            Err(InletError::NotOrdered { hot, cold })
        }
    }

    /// Returns the hot stream inlet temperature.
    #[must_use]
    pub fn hot(&self) -> ThermodynamicTemperature {
        self.hot
    }

    /// Returns the cold stream inlet temperature.
    #[must_use]
    pub fn cold(&self) -> ThermodynamicTemperature {
        self.cold
    }
}
