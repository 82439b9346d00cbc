//! The physics models.
//!
//! Models are the primary public interface of this crate. They are
//! organized into domain-specific submodules:
//!
//! - [`aero`]: aerodynamic performance — the power curve, yaw misalignment
//!   loss, and wake interaction.
//! - [`structural`]: structural siting — tower resonance placement.
//!
//! Every model is a stateless pure function over validated
//! [`records`](crate::records) and caller-supplied operating conditions.
//! Models do not call each other at runtime; the only shared code is the
//! rotor geometry on [`Rotor`](crate::records::Rotor).

pub mod aero;
pub mod structural;
