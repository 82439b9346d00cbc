//! Turbine and component parameter records.
//!
//! Records are plain value types supplied by the caller; the models read
//! them and never own, mutate, or cache them. Every numeric field a formula
//! consumes is validated when the record is constructed, which is what lets
//! the models stay total: once a record exists, no formula input can
//! produce NaN or a complex intermediate.
//!
//! Some fields are purely descriptive (a tower's wall thickness, a blade's
//! airfoil family). They travel with the records the way supplier data
//! sheets carry them, but no calculation reads them.
//!
//! Storage, lookup by identifier, and partial-field updates of records all
//! belong to the surrounding application, not to this crate.

mod components;
mod tower;
mod turbine;
mod wake;

use thiserror::Error;
use uom::si::f64::Velocity;

pub use components::{
    AirfoilFamily, Blade, BladeManufacture, BladeMaterial, Cooling, Gearbox, GearboxId, Generator,
    GeneratorTopology, Lubrication, PitchActuator, PitchControl, PitchSystem, YawDrive,
    YawDriveKind,
};
pub use tower::{Tower, TowerMaterial};
pub use turbine::{OperatingEnvelope, Rotor, Turbine};
pub use wake::WakeParameters;

use crate::support::constraint::ConstraintError;

/// An error returned when a record field violates its numeric domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecordError {
    /// A single field failed its constraint check.
    #[error("invalid {parameter}: {source}")]
    Parameter {
        /// Name of the offending field.
        parameter: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The cut-in/rated/cut-out wind speeds are out of order.
    #[error(
        "operating envelope must satisfy cut-in <= rated <= cut-out, \
         got cut-in {cut_in:?}, rated {rated:?}, cut-out {cut_out:?}"
    )]
    EnvelopeOrder {
        cut_in: Velocity,
        rated: Velocity,
        cut_out: Velocity,
    },
}

impl RecordError {
    pub(crate) fn parameter(parameter: &'static str, source: ConstraintError) -> Self {
        Self::Parameter { parameter, source }
    }
}
