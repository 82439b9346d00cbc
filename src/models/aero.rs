//! Aerodynamic performance models.

pub mod power_curve;
pub mod wake;
pub mod yaw;
