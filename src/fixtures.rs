//! Reference records for a representative 2 MW onshore machine.
//!
//! The values describe a mid-size onshore turbine (112 m rotor, 94 m hub)
//! and give examples and tests a complete, mutually consistent machine
//! description. Nothing in the models depends on these records; they are
//! bootstrap data, loaded by whoever needs a populated machine.

use uom::si::{
    angle::degree,
    angular_velocity::{degree_per_second, revolution_per_minute},
    electric_potential::volt,
    f64::{
        Angle, AngularVelocity, ElectricPotential, Frequency, Length, Mass, MassDensity, Power,
        Ratio, Torque, Velocity,
    },
    frequency::hertz,
    length::{meter, millimeter},
    mass::{kilogram, ton},
    mass_density::kilogram_per_cubic_meter,
    power::{kilowatt, megawatt},
    ratio::ratio,
    torque::newton_meter,
    velocity::meter_per_second,
};

use crate::records::{
    AirfoilFamily, Blade, BladeManufacture, BladeMaterial, Cooling, Gearbox, GearboxId, Generator,
    GeneratorTopology, Lubrication, OperatingEnvelope, PitchActuator, PitchControl, PitchSystem,
    Rotor, Tower, TowerMaterial, Turbine, WakeParameters, YawDrive, YawDriveKind,
};

/// A 2 MW reference turbine: 112 m rotor, 94 m hub, 3/13/25 m/s envelope,
/// Cp 0.40, λ 8, sea-level air.
#[must_use]
pub fn reference_turbine() -> Turbine {
    let rotor = Rotor::new(
        Length::new::<meter>(112.0),
        Ratio::new::<ratio>(8.0),
        Ratio::new::<ratio>(0.40),
    )
    .expect("reference rotor values are valid");
    let envelope = OperatingEnvelope::new(
        Velocity::new::<meter_per_second>(3.0),
        Velocity::new::<meter_per_second>(13.0),
        Velocity::new::<meter_per_second>(25.0),
    )
    .expect("reference envelope values are valid");
    Turbine::new(
        rotor,
        envelope,
        Length::new::<meter>(94.0),
        MassDensity::new::<kilogram_per_cubic_meter>(1.225),
        Power::new::<megawatt>(2.0),
    )
    .expect("reference turbine values are valid")
}

/// The reference tower: 0.28 Hz first natural frequency, steel, 250 t.
#[must_use]
pub fn reference_tower() -> Tower {
    Tower::new(
        Frequency::new::<hertz>(0.28),
        Length::new::<meter>(4.5),
        Length::new::<meter>(2.3),
        Length::new::<millimeter>(30.0),
        TowerMaterial::Steel,
        Mass::new::<ton>(250.0),
    )
    .expect("reference tower values are valid")
}

/// Onshore top-hat wake parameters: Ct 0.8, k 0.04, 6 % ambient turbulence.
#[must_use]
pub fn reference_wake() -> WakeParameters {
    WakeParameters::new(
        Ratio::new::<ratio>(0.8),
        Ratio::new::<ratio>(0.04),
        Ratio::new::<ratio>(0.06),
    )
    .expect("reference wake values are valid")
}

/// A single blade of the reference rotor.
#[must_use]
pub fn reference_blade() -> Blade {
    Blade {
        length: Length::new::<meter>(56.0),
        material: BladeMaterial::Fiberglass,
        manufacturing: BladeManufacture::ResinInfusion,
        mass: Mass::new::<kilogram>(12_000.0),
        max_chord: Length::new::<meter>(4.2),
        root_chord: Length::new::<meter>(3.0),
        total_twist: Angle::new::<degree>(13.0),
        airfoil_family: AirfoilFamily::NrelS,
        design_tip_speed_ratio: Ratio::new::<ratio>(8.0),
        pre_bend: Length::new::<meter>(3.0),
        count: 3,
    }
}

/// The reference pitch system: individual electric pitch.
#[must_use]
pub fn reference_pitch_system() -> PitchSystem {
    PitchSystem {
        actuator: PitchActuator::Electric,
        control: PitchControl::Individual,
        max_pitch_rate: AngularVelocity::new::<degree_per_second>(8.0),
        fine_pitch_angle: Angle::new::<degree>(0.0),
        feather_angle: Angle::new::<degree>(90.0),
    }
}

/// The reference yaw drive: four active drives.
#[must_use]
pub fn reference_yaw_drive() -> YawDrive {
    YawDrive {
        kind: YawDriveKind::Active,
        drive_count: 4,
        yaw_rate: AngularVelocity::new::<degree_per_second>(0.5),
        activation_threshold: Angle::new::<degree>(5.0),
        brake_torque: Torque::new::<newton_meter>(400_000.0),
    }
}

/// The reference geared drivetrain: a three-stage gearbox feeding a DFIG.
#[must_use]
pub fn reference_drivetrain() -> (Gearbox, Generator) {
    let gearbox = Gearbox {
        ratio: Ratio::new::<ratio>(100.0),
        stages: 3,
        stage_layout: "planetary-helical-helical".to_owned(),
        efficiency: Ratio::new::<ratio>(0.97),
        lubrication: Lubrication::ForcedOil,
        input_speed: AngularVelocity::new::<revolution_per_minute>(15.0),
        output_speed: AngularVelocity::new::<revolution_per_minute>(1_500.0),
        mass: Mass::new::<ton>(50.0),
    };
    let generator = Generator {
        gearbox: Some(GearboxId(1)),
        topology: GeneratorTopology::Dfig,
        rated_power: Power::new::<kilowatt>(2_000.0),
        rated_voltage: ElectricPotential::new::<volt>(690.0),
        rated_speed: AngularVelocity::new::<revolution_per_minute>(1_500.0),
        pole_pairs: 2,
        efficiency: Ratio::new::<ratio>(0.95),
        power_factor: Ratio::new::<ratio>(0.90),
        cooling: Cooling::Air,
        mass: Mass::new::<ton>(70.0),
    };
    (gearbox, generator)
}

/// A direct-drive generator variant: no gearbox record referenced, the
/// rotor turns the generator shaft itself.
#[must_use]
pub fn direct_drive_generator() -> Generator {
    Generator {
        gearbox: None,
        topology: GeneratorTopology::Pmsg,
        rated_power: Power::new::<kilowatt>(2_000.0),
        rated_voltage: ElectricPotential::new::<volt>(690.0),
        rated_speed: AngularVelocity::new::<revolution_per_minute>(15.0),
        pole_pairs: 48,
        efficiency: Ratio::new::<ratio>(0.94),
        power_factor: Ratio::new::<ratio>(0.90),
        cooling: Cooling::Liquid,
        mass: Mass::new::<ton>(85.0),
    }
}
