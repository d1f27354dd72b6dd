mod geometry;
mod inlets;
mod mass_flows;

pub use geometry::Geometry;
pub use inlets::{InletError, Inlets};
pub use mass_flows::MassFlows;

/// Fixed parameters of a crossflow exchanger run.
///
/// Every field is validated at construction, so a value of this type always
/// describes a physically meaningful exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exchanger {
    /// Heat transfer coefficient, wetted perimeter, and length.
    pub geometry: Geometry,

    /// Mass flow rates for the two streams.
    pub m_dot: MassFlows,

    /// Inlet temperatures for the two streams.
    pub inlets: Inlets,
}
