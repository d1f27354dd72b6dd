use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy change per unit length, J/(kg·m) in SI.
///
/// Dimensionally this is an acceleration (m/s²), so it gets its own name.
pub type SpecificEnthalpyGradient = Quantity<ISQ<P1, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
