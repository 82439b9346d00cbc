//! Structural siting models.

pub mod tower;
