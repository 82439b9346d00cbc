//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (length, speed,
//! power, frequency). This module provides extensions that are useful for
//! modeling but aren't included in [`uom`].
//!
//! ## Rotational frequency
//!
//! [`uom`] gives angles their own "kind", so an [`AngularVelocity`] in
//! rad/s cannot be converted into a plain [`Frequency`] in Hz even though
//! rotor harmonics are exactly that conversion (1P = ω / 2π). The
//! [`RotationalFrequency`] trait bridges the gap:
//!
//! ```
//! use uom::si::angular_velocity::radian_per_second;
//! use uom::si::f64::AngularVelocity;
//! use uom::si::frequency::hertz;
//! use turbine_models::support::units::RotationalFrequency;
//!
//! let omega = AngularVelocity::new::<radian_per_second>(std::f64::consts::TAU);
//! let one_p = omega.rotational_frequency();
//! assert!((one_p.get::<hertz>() - 1.0).abs() < 1e-12);
//! ```

use std::f64::consts::TAU;

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Frequency},
    frequency::hertz,
};

/// Converts a shaft angular velocity into its once-per-revolution frequency.
pub trait RotationalFrequency {
    /// Returns the rotational frequency `ω / 2π` in cycles per second.
    fn rotational_frequency(self) -> Frequency;
}

impl RotationalFrequency for AngularVelocity {
    fn rotational_frequency(self) -> Frequency {
        Frequency::new::<hertz>(self.get::<radian_per_second>() / TAU)
    }
}
