use uom::si::f64::Ratio;

use crate::support::constraint::{NonNegative, StrictlyPositive, UnitIntervalUpperOpen};

use super::RecordError;

/// Parameters of the top-hat (Jensen) wake model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WakeParameters {
    thrust_coefficient: Ratio,
    decay_constant: Ratio,
    ambient_turbulence_intensity: Ratio,
}

impl WakeParameters {
    /// Constructs validated wake parameters.
    ///
    /// The thrust coefficient must lie in `[0, 1)`: at `Ct ≥ 1` the deficit
    /// term `√(1 − Ct)` leaves the real domain, so such values are rejected
    /// here rather than surfacing as NaN in a deficit calculation. The
    /// decay constant must be strictly positive. Ambient turbulence
    /// intensity is descriptive (no formula consumes it) and only needs to
    /// be non-negative.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError::Parameter`] naming the offending field.
    pub fn new(
        thrust_coefficient: Ratio,
        decay_constant: Ratio,
        ambient_turbulence_intensity: Ratio,
    ) -> Result<Self, RecordError> {
        UnitIntervalUpperOpen::new(thrust_coefficient)
            .map_err(|e| RecordError::parameter("thrust coefficient", e))?;
        StrictlyPositive::new(decay_constant)
            .map_err(|e| RecordError::parameter("wake decay constant", e))?;
        NonNegative::new(ambient_turbulence_intensity)
            .map_err(|e| RecordError::parameter("ambient turbulence intensity", e))?;
        Ok(Self {
            thrust_coefficient,
            decay_constant,
            ambient_turbulence_intensity,
        })
    }

    /// Returns the thrust coefficient Ct.
    #[must_use]
    pub fn thrust_coefficient(&self) -> Ratio {
        self.thrust_coefficient
    }

    /// Returns the wake decay constant k.
    #[must_use]
    pub fn decay_constant(&self) -> Ratio {
        self.decay_constant
    }

    /// Returns the ambient turbulence intensity.
    #[must_use]
    pub fn ambient_turbulence_intensity(&self) -> Ratio {
        self.ambient_turbulence_intensity
    }
}
