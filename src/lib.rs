//! # Turbine Models
//!
//! Steady-state performance and siting models for horizontal-axis wind
//! turbines: power production, rotor kinematics, yaw misalignment loss,
//! tower resonance placement, and wake interaction between machines.
//!
//! ## Crate layout
//!
//! - [`records`]: Validated turbine and component parameter records.
//! - [`models`]: The physics models that consume those records.
//! - [`support`]: Supporting utilities used by records and models.
//! - [`fixtures`]: Reference records for a representative 2 MW machine.
//!
//! ## Design
//!
//! Every model is a pure function of its inputs: no hidden state, no
//! caching, no I/O. Identical inputs always produce identical outputs, and
//! any model may be called concurrently without coordination. Numeric
//! domains are enforced when a record is constructed, so the models
//! themselves are total functions that cannot return NaN or infinity.
//!
//! Storage of records, lookup by identifier, and request/response shaping
//! all belong to the surrounding application. This crate only computes.
//!
//! ## Example
//!
//! ```
//! use turbine_models::fixtures;
//! use turbine_models::models::aero::power_curve;
//! use turbine_models::support::constraint::NonNegative;
//! use uom::si::{f64::Velocity, power::megawatt, velocity::meter_per_second};
//!
//! let turbine = fixtures::reference_turbine();
//! let wind = NonNegative::new(Velocity::new::<meter_per_second>(10.0)).unwrap();
//!
//! let point = power_curve::power_curve_point(&turbine, wind);
//! assert!(point.power.get::<megawatt>() <= 2.0);
//! ```

pub mod fixtures;
pub mod models;
pub mod records;
pub mod support;
