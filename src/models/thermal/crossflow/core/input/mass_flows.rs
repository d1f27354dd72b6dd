use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::MassRate;

/// Mass flow rates for the hot and cold streams.
///
/// Each mass flow rate is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFlows {
    hot: MassRate,
    cold: MassRate,
}

impl MassFlows {
    /// Constructs validated mass flows.
    ///
    /// # Errors
    ///
    /// Returns an error if either flow rate is not strictly positive.
    pub fn new(hot: MassRate, cold: MassRate) -> ConstraintResult<Self> {
        let hot = Constrained::<MassRate, StrictlyPositive>::new(hot)?;
        let cold = Constrained::<MassRate, StrictlyPositive>::new(cold)?;
        Ok(Self::from_constrained(hot, cold))
    }

    /// Constructs mass flows from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        hot: Constrained<MassRate, StrictlyPositive>,
        cold: Constrained<MassRate, StrictlyPositive>,
    ) -> Self {
        Self {
            hot: hot.into_inner(),
            cold: cold.into_inner(),
        }
    }

    /// Returns the mass flow rate of the hot stream.
    #[must_use]
    pub fn hot(&self) -> MassRate {
        self.hot
    }

    /// Returns the mass flow rate of the cold stream.
    #[must_use]
    pub fn cold(&self) -> MassRate {
        self.cold
    }
}
