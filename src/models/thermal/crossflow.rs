//! Crossflow heat exchanger temperature profiles.
//!
//! [`CrossflowModel`] is the [`twine_core::Model`] for this exchanger: given
//! an [`Exchanger`] it returns the solved [`Profile`]. The computation lives
//! in the internal `core` module; [`CrossflowHx`] exposes it directly for
//! callers that want the intermediate [`Prepared`] stage.

pub(crate) mod core;

pub use self::core::{
    AxialError, CrossflowHx, EnthalpyGradient, EnthalpyPair, Exchanger, Geometry, InletError,
    Inlets, LocalConditions, MassFlows, Prepared, Profile, ProfilePoint, ShootingConfig,
    ShootingError, Station, Summary,
};

use twine_core::Model;

use crate::support::properties::Compound;

/// Crossflow exchanger model for a fixed pair of compounds.
///
/// Each call builds a [`CrossflowHx`] for the given exchanger and solves it.
#[derive(Debug, Clone)]
pub struct CrossflowModel {
    hot: Compound,
    cold: Compound,
    config: ShootingConfig,
}

impl CrossflowModel {
    /// Creates a model with the default [`ShootingConfig`].
    #[must_use]
    pub fn new(hot: Compound, cold: Compound) -> Self {
        Self::with_config(hot, cold, ShootingConfig::default())
    }

    /// Creates a model with an explicit solver configuration.
    #[must_use]
    pub fn with_config(hot: Compound, cold: Compound, config: ShootingConfig) -> Self {
        Self { hot, cold, config }
    }
}

impl Model for CrossflowModel {
    type Input = Exchanger;
    type Output = Profile;
    type Error = ShootingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        CrossflowHx::with_config(self.hot.clone(), self.cold.clone(), *input, self.config).solve()
    }
}
