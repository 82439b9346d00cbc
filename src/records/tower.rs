use uom::si::f64::{Frequency, Length, Mass};

use crate::support::constraint::StrictlyPositive;

use super::RecordError;

/// Tower shell material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerMaterial {
    Steel,
    Concrete,
    /// Concrete base section with a steel upper section.
    Hybrid,
}

/// A tower parameter record.
///
/// Only the first natural frequency enters a calculation (the resonance
/// band check); the remaining fields describe the structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tower {
    first_natural_frequency: Frequency,

    /// Shell outer diameter at the base.
    pub base_diameter: Length,

    /// Shell outer diameter at the top flange.
    pub top_diameter: Length,

    /// Shell wall thickness.
    pub wall_thickness: Length,

    /// Shell material.
    pub material: TowerMaterial,

    /// Total tower mass.
    pub mass: Mass,
}

impl Tower {
    /// Constructs a tower record.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError::Parameter`] if the first natural frequency
    /// is not strictly positive.
    pub fn new(
        first_natural_frequency: Frequency,
        base_diameter: Length,
        top_diameter: Length,
        wall_thickness: Length,
        material: TowerMaterial,
        mass: Mass,
    ) -> Result<Self, RecordError> {
        StrictlyPositive::new(first_natural_frequency)
            .map_err(|e| RecordError::parameter("first natural frequency", e))?;
        Ok(Self {
            first_natural_frequency,
            base_diameter,
            top_diameter,
            wall_thickness,
            material,
            mass,
        })
    }

    /// Returns the first natural frequency of the structure.
    #[must_use]
    pub fn first_natural_frequency(&self) -> Frequency {
        self.first_natural_frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{frequency::hertz, length::meter, mass::ton};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn rejects_non_positive_natural_frequency() {
        let err = Tower::new(
            Frequency::new::<hertz>(0.0),
            Length::new::<meter>(4.5),
            Length::new::<meter>(2.3),
            Length::new::<meter>(0.03),
            TowerMaterial::Steel,
            Mass::new::<ton>(250.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RecordError::Parameter {
                parameter: "first natural frequency",
                source: ConstraintError::Zero,
            }
        );
    }
}
