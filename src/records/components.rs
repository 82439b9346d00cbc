//! Descriptive component data sheets.
//!
//! These records round out a machine description; no field here enters a
//! physics calculation. Catalogue fields that arrive as free text from
//! suppliers become enums so a record cannot hold an unknown variant.

use uom::si::f64::{Angle, AngularVelocity, ElectricPotential, Length, Mass, Power, Ratio, Torque};

/// Blade shell material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BladeMaterial {
    Fiberglass,
    CarbonFiber,
    /// Fiberglass shell with carbon spar caps.
    Hybrid,
}

/// Blade manufacturing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BladeManufacture {
    HandLayup,
    ResinInfusion,
    Prepreg,
}

/// Airfoil family used along the blade span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirfoilFamily {
    Naca,
    NrelS,
    FfaW3,
    Du,
}

/// A rotor blade data sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blade {
    /// Blade length, root to tip.
    pub length: Length,

    pub material: BladeMaterial,
    pub manufacturing: BladeManufacture,

    /// Mass of a single blade.
    pub mass: Mass,

    /// Widest chord of the airfoil cross-section.
    pub max_chord: Length,

    /// Chord at the blade root.
    pub root_chord: Length,

    /// Geometric twist from root to tip.
    pub total_twist: Angle,

    pub airfoil_family: AirfoilFamily,

    /// The tip-speed ratio the blade was shaped for.
    pub design_tip_speed_ratio: Ratio,

    /// Out-of-plane pre-bend at the tip, for tower clearance.
    pub pre_bend: Length,

    /// Blades on the rotor.
    pub count: u8,
}

/// Pitch actuator technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchActuator {
    Electric,
    Hydraulic,
}

/// Whether blades pitch together or independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchControl {
    Individual,
    Collective,
}

/// A pitch system data sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSystem {
    pub actuator: PitchActuator,
    pub control: PitchControl,

    /// Fastest achievable pitch change.
    pub max_pitch_rate: AngularVelocity,

    /// Optimal low-wind blade angle.
    pub fine_pitch_angle: Angle,

    /// Safe shutdown (feathered) blade angle.
    pub feather_angle: Angle,
}

/// Yaw drive arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YawDriveKind {
    /// Motor-driven yaw, the standard for large machines.
    Active,
    /// Free yaw, aligned by the rotor itself.
    Free,
}

/// A yaw drive data sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawDrive {
    pub kind: YawDriveKind,

    /// Number of yaw drive motors.
    pub drive_count: u8,

    /// Slew rate of the nacelle.
    pub yaw_rate: AngularVelocity,

    /// Smallest misalignment that triggers a correction.
    pub activation_threshold: Angle,

    /// Holding torque of the yaw brake.
    pub brake_torque: Torque,
}

/// Identifier an external store assigns to a gearbox record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GearboxId(pub u32);

/// Gearbox lubrication arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lubrication {
    ForcedOil,
    Splash,
}

/// A gearbox data sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Gearbox {
    /// Overall speed-up ratio, rotor shaft to generator shaft.
    pub ratio: Ratio,

    /// Number of gear stages.
    pub stages: u8,

    /// Stage arrangement, e.g. "planetary-helical-helical".
    pub stage_layout: String,

    /// Mechanical efficiency at rated load.
    pub efficiency: Ratio,

    pub lubrication: Lubrication,

    /// Low-speed (rotor side) shaft speed at rated output.
    pub input_speed: AngularVelocity,

    /// High-speed (generator side) shaft speed at rated output.
    pub output_speed: AngularVelocity,

    pub mass: Mass,
}

/// Generator electrical topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorTopology {
    /// Doubly-fed induction generator.
    Dfig,
    /// Permanent-magnet synchronous generator.
    Pmsg,
    /// Squirrel-cage induction generator.
    Scig,
    /// Electrically-excited synchronous generator.
    Eesg,
}

/// Generator cooling medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cooling {
    Air,
    Liquid,
}

/// A generator data sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generator {
    /// Gearbox this generator is coupled to; `None` means direct drive.
    pub gearbox: Option<GearboxId>,

    pub topology: GeneratorTopology,

    /// Nameplate electrical capacity.
    pub rated_power: Power,

    /// Stator voltage at rated output.
    pub rated_voltage: ElectricPotential,

    /// Shaft speed at rated output.
    pub rated_speed: AngularVelocity,

    /// Pole pairs, fixing the synchronous speed.
    pub pole_pairs: u8,

    /// Electrical efficiency at rated load.
    pub efficiency: Ratio,

    /// Power factor at rated load, lagging.
    pub power_factor: Ratio,

    pub cooling: Cooling,

    pub mass: Mass,
}
