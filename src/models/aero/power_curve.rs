//! The turbine power curve: available and delivered power, rotor
//! kinematics.
//!
//! The curve has the classic three regions: zero below cut-in, a cubic ramp
//! from cut-in until the rated-capacity cap engages, and a flat plateau at
//! rated capacity until cut-out. Cut-out is a strict shutdown: at or above
//! the cut-out speed, output drops to exactly zero. The model does not
//! derate output between rated and cut-out speed; pitching to hold rated
//! power is approximated by the flat plateau.

use uom::{
    ConstZero,
    si::f64::{AngularVelocity, Area, Power, Velocity},
};

use crate::{
    records::Turbine,
    support::constraint::{Constrained, NonNegative},
};

/// One sample of the power curve and the kinematics behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurvePoint {
    /// The sampled free-stream wind speed.
    pub wind_speed: Velocity,

    /// Electrical power delivered, after cut-in/cut-out gating and the
    /// rated-capacity cap.
    pub power: Power,

    /// Kinetic power flowing through the swept area, before the rotor's
    /// capture efficiency is applied.
    pub wind_power_available: Power,

    /// Rotor shaft speed.
    pub rotor_speed: AngularVelocity,

    /// Rotor swept area.
    pub swept_area: Area,

    /// Blade tip speed.
    pub tip_speed: Velocity,
}

/// Returns the kinetic power `½·ρ·A·v³` available in the free stream.
///
/// This is the physical ceiling before the power coefficient is applied.
/// It is defined (and reported) for any wind speed, including speeds
/// outside the turbine's operating envelope.
#[must_use]
pub fn wind_power_available(
    turbine: &Turbine,
    wind_speed: Constrained<Velocity, NonNegative>,
) -> Power {
    let v = wind_speed.into_inner();
    0.5 * turbine.air_density() * turbine.rotor().swept_area() * (v * v * v)
}

/// Returns the electrical power delivered at the given wind speed.
///
/// Output is zero below cut-in and at or above cut-out, and otherwise
/// `min(available · Cp, capacity)`.
#[must_use]
pub fn actual_power(turbine: &Turbine, wind_speed: Constrained<Velocity, NonNegative>) -> Power {
    let v = wind_speed.into_inner();
    let envelope = turbine.envelope();
    if v < envelope.cut_in() || v >= envelope.cut_out() {
        return Power::ZERO;
    }
    let captured = wind_power_available(turbine, wind_speed) * turbine.rotor().power_coefficient();
    captured.min(turbine.capacity())
}

/// Returns the rotor shaft speed at the given wind speed.
#[must_use]
pub fn rotor_speed(
    turbine: &Turbine,
    wind_speed: Constrained<Velocity, NonNegative>,
) -> AngularVelocity {
    turbine.rotor().angular_speed(wind_speed.into_inner())
}

/// Samples the full power curve at one wind speed.
#[must_use]
pub fn power_curve_point(
    turbine: &Turbine,
    wind_speed: Constrained<Velocity, NonNegative>,
) -> PowerCurvePoint {
    let rotor = turbine.rotor();
    let v = wind_speed.into_inner();
    PowerCurvePoint {
        wind_speed: v,
        power: actual_power(turbine, wind_speed),
        wind_power_available: wind_power_available(turbine, wind_speed),
        rotor_speed: rotor.angular_speed(v),
        swept_area: rotor.swept_area(),
        tip_speed: rotor.tip_speed(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassDensity, Ratio},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        power::megawatt,
        ratio::ratio,
        velocity::meter_per_second,
    };

    use crate::fixtures;
    use crate::records::{OperatingEnvelope, Rotor, Turbine};

    fn wind(mps: f64) -> Constrained<Velocity, NonNegative> {
        NonNegative::new(Velocity::new::<meter_per_second>(mps)).unwrap()
    }

    /// The reference machine with thinner air, where the cap engages below
    /// rated wind speed.
    fn thin_air_turbine() -> Turbine {
        let mps = Velocity::new::<meter_per_second>;
        Turbine::new(
            Rotor::new(
                Length::new::<meter>(112.0),
                Ratio::new::<ratio>(8.0),
                Ratio::new::<ratio>(0.40),
            )
            .unwrap(),
            OperatingEnvelope::new(mps(3.0), mps(13.0), mps(25.0)).unwrap(),
            Length::new::<meter>(94.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.18),
            Power::new::<megawatt>(2.0),
        )
        .unwrap()
    }

    #[test]
    fn available_power_at_ten_mps() {
        let turbine = fixtures::reference_turbine();
        assert_relative_eq!(
            wind_power_available(&turbine, wind(10.0)).get::<megawatt>(),
            6.034,
            epsilon = 1e-3
        );
    }

    #[test]
    fn zero_below_cut_in() {
        let turbine = fixtures::reference_turbine();
        assert_eq!(actual_power(&turbine, wind(0.0)).get::<megawatt>(), 0.0);
        assert_eq!(actual_power(&turbine, wind(2.9)).get::<megawatt>(), 0.0);
    }

    #[test]
    fn cut_out_is_a_strict_shutdown() {
        let turbine = fixtures::reference_turbine();
        // Just below cut-out the machine still delivers rated capacity;
        // at cut-out it is exactly zero.
        assert_relative_eq!(actual_power(&turbine, wind(24.9)).get::<megawatt>(), 2.0);
        assert_eq!(actual_power(&turbine, wind(25.0)).get::<megawatt>(), 0.0);
        assert_eq!(actual_power(&turbine, wind(30.0)).get::<megawatt>(), 0.0);
    }

    #[test]
    fn cubic_ramp_inside_the_envelope() {
        let turbine = fixtures::reference_turbine();
        // 0.5 · 1.225 · 9852.035 · 5³ · 0.40 / 1e6
        assert_relative_eq!(
            actual_power(&turbine, wind(5.0)).get::<megawatt>(),
            0.302,
            epsilon = 1e-3
        );
    }

    #[test]
    fn cap_engages_before_rated_speed_in_thin_air() {
        let turbine = thin_air_turbine();
        // Unclamped capture at 10 m/s is ≈ 2.33 MW, above the 2 MW
        // nameplate, so the cap engages three m/s below rated speed.
        let unclamped = wind_power_available(&turbine, wind(10.0)).get::<megawatt>() * 0.40;
        assert_relative_eq!(unclamped, 2.325, epsilon = 1e-3);
        assert_relative_eq!(actual_power(&turbine, wind(10.0)).get::<megawatt>(), 2.0);
    }

    #[test]
    fn available_power_is_reported_outside_the_envelope() {
        let turbine = fixtures::reference_turbine();
        let point = power_curve_point(&turbine, wind(30.0));
        assert_eq!(point.power.get::<megawatt>(), 0.0);
        assert!(point.wind_power_available.get::<megawatt>() > 0.0);
    }

    #[test]
    fn point_collects_consistent_kinematics() {
        let turbine = fixtures::reference_turbine();
        let point = power_curve_point(&turbine, wind(10.0));
        assert_relative_eq!(point.tip_speed.get::<meter_per_second>(), 80.0);
        assert_relative_eq!(
            point.swept_area.get::<uom::si::area::square_meter>(),
            9852.035,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            point
                .rotor_speed
                .get::<uom::si::angular_velocity::revolution_per_minute>(),
            13.642,
            epsilon = 1e-3
        );
    }

    #[test]
    fn identical_inputs_give_bit_identical_outputs() {
        let turbine = fixtures::reference_turbine();
        let a = actual_power(&turbine, wind(11.3)).get::<megawatt>();
        let b = actual_power(&turbine, wind(11.3)).get::<megawatt>();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
