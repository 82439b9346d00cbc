//! Tower resonance placement (soft-stiff band check).
//!
//! A rotating rotor excites the tower at its rotational frequency (1P) and
//! at blade-passing frequency (3P for a three-bladed machine). A soft-stiff
//! tower is designed so its first natural frequency sits strictly between
//! the two. The check is strict on both boundaries: a natural frequency
//! exactly on 1P or 3P is resonance, not a safety margin.

use uom::si::{
    f64::{Frequency, Velocity},
    frequency::hertz,
};

use crate::{
    records::{Rotor, Tower},
    support::{
        constraint::{Constrained, NonNegative},
        rounding::round_to,
        units::RotationalFrequency,
    },
};

/// Blade-passing harmonic order for a three-bladed rotor.
const BLADE_PASSING_ORDER: f64 = 3.0;

/// Outcome of the soft-stiff placement check at one wind speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonanceCheck {
    /// The tower's first natural frequency.
    pub natural_frequency: Frequency,

    /// Once-per-revolution excitation frequency.
    pub one_p: Frequency,

    /// Blade-passing excitation frequency.
    pub three_p: Frequency,

    /// Whether the natural frequency sits strictly inside (1P, 3P).
    pub is_soft_stiff: bool,

    /// `f_n − 1P`; negative once the natural frequency drops to or below
    /// 1P.
    pub margin_to_one_p: Frequency,

    /// `3P − f_n`; negative once the natural frequency reaches or passes
    /// 3P.
    pub margin_to_three_p: Frequency,
}

/// Checks whether the tower's natural frequency sits in the soft-stiff band
/// at the given wind speed.
///
/// At zero wind both harmonics are zero and the check reports `false`: a
/// parked rotor has no band to sit inside, since `f_n < 3P` fails for any
/// positive natural frequency.
#[must_use]
pub fn frequency_check(
    tower: &Tower,
    rotor: &Rotor,
    wind_speed: Constrained<Velocity, NonNegative>,
) -> ResonanceCheck {
    let one_p = rotor
        .angular_speed(wind_speed.into_inner())
        .rotational_frequency();
    let three_p = BLADE_PASSING_ORDER * one_p;
    let natural_frequency = tower.first_natural_frequency();

    ResonanceCheck {
        natural_frequency,
        one_p,
        three_p,
        is_soft_stiff: one_p < natural_frequency && natural_frequency < three_p,
        margin_to_one_p: natural_frequency - one_p,
        margin_to_three_p: three_p - natural_frequency,
    }
}

impl ResonanceCheck {
    /// Returns a copy rounded for presentation: harmonics and margins to
    /// four decimal places (Hz). The natural frequency is reported as
    /// given.
    #[must_use]
    pub fn rounded(&self) -> Self {
        let round_hz = |f: Frequency| Frequency::new::<hertz>(round_to(f.get::<hertz>(), 4));
        Self {
            natural_frequency: self.natural_frequency,
            one_p: round_hz(self.one_p),
            three_p: round_hz(self.three_p),
            is_soft_stiff: self.is_soft_stiff,
            margin_to_one_p: round_hz(self.margin_to_one_p),
            margin_to_three_p: round_hz(self.margin_to_three_p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{
        f64::{Length, Mass, Ratio},
        length::meter,
        mass::ton,
        ratio::ratio,
        velocity::meter_per_second,
    };

    use crate::fixtures;

    fn wind(mps: f64) -> Constrained<Velocity, NonNegative> {
        NonNegative::new(Velocity::new::<meter_per_second>(mps)).unwrap()
    }

    fn tower_with_frequency(f_n: Frequency) -> Tower {
        Tower::new(
            f_n,
            Length::new::<meter>(4.5),
            Length::new::<meter>(2.3),
            Length::new::<meter>(0.03),
            crate::records::TowerMaterial::Steel,
            Mass::new::<ton>(250.0),
        )
        .unwrap()
    }

    #[test]
    fn reference_tower_is_soft_stiff_at_ten_mps() {
        let check = frequency_check(
            &fixtures::reference_tower(),
            &fixtures::reference_turbine().rotor(),
            wind(10.0),
        );
        assert_relative_eq!(check.one_p.get::<hertz>(), 0.227364, epsilon = 1e-6);
        assert_relative_eq!(check.three_p.get::<hertz>(), 0.682093, epsilon = 1e-6);
        assert!(check.is_soft_stiff);
        assert_relative_eq!(check.margin_to_one_p.get::<hertz>(), 0.052636, epsilon = 1e-6);
        assert_relative_eq!(
            check.margin_to_three_p.get::<hertz>(),
            0.402093,
            epsilon = 1e-6
        );
    }

    #[test]
    fn parked_rotor_is_never_soft_stiff() {
        let check = frequency_check(
            &fixtures::reference_tower(),
            &fixtures::reference_turbine().rotor(),
            wind(0.0),
        );
        assert_eq!(check.one_p.get::<hertz>(), 0.0);
        assert_eq!(check.three_p.get::<hertz>(), 0.0);
        assert!(!check.is_soft_stiff);
        assert_relative_eq!(check.margin_to_one_p.get::<hertz>(), 0.28);
        assert_relative_eq!(check.margin_to_three_p.get::<hertz>(), -0.28);
    }

    #[test]
    fn natural_frequency_exactly_on_a_harmonic_is_unsafe() {
        let rotor = fixtures::reference_turbine().rotor();
        let probe = frequency_check(&fixtures::reference_tower(), &rotor, wind(10.0));

        let on_one_p = frequency_check(&tower_with_frequency(probe.one_p), &rotor, wind(10.0));
        assert!(!on_one_p.is_soft_stiff);
        assert_abs_diff_eq!(on_one_p.margin_to_one_p.get::<hertz>(), 0.0);

        let on_three_p = frequency_check(&tower_with_frequency(probe.three_p), &rotor, wind(10.0));
        assert!(!on_three_p.is_soft_stiff);
        assert_abs_diff_eq!(on_three_p.margin_to_three_p.get::<hertz>(), 0.0);
    }

    #[test]
    fn strong_wind_pushes_the_band_past_the_tower() {
        // At 20 m/s the 1P harmonic (≈ 0.45 Hz) has risen past a 0.28 Hz
        // tower; the lower margin goes negative.
        let check = frequency_check(
            &fixtures::reference_tower(),
            &fixtures::reference_turbine().rotor(),
            wind(20.0),
        );
        assert!(!check.is_soft_stiff);
        assert!(check.margin_to_one_p.get::<hertz>() < 0.0);
    }

    #[test]
    fn soft_tower_sits_below_the_band() {
        let soft = tower_with_frequency(Frequency::new::<hertz>(0.1));
        let check = frequency_check(
            &soft,
            &fixtures::reference_turbine().rotor(),
            wind(10.0),
        );
        assert!(!check.is_soft_stiff);
        assert!(check.margin_to_one_p.get::<hertz>() < 0.0);
        assert!(check.margin_to_three_p.get::<hertz>() > 0.0);
    }

    #[test]
    fn rounding_reports_four_decimal_places() {
        let rounded = frequency_check(
            &fixtures::reference_tower(),
            &fixtures::reference_turbine().rotor(),
            wind(10.0),
        )
        .rounded();
        assert_eq!(rounded.one_p.get::<hertz>(), 0.2274);
        assert_eq!(rounded.three_p.get::<hertz>(), 0.6821);
        assert_eq!(rounded.margin_to_one_p.get::<hertz>(), 0.0526);
        assert_eq!(rounded.margin_to_three_p.get::<hertz>(), 0.4021);
    }

    #[test]
    fn rotor_with_slower_tips_narrows_the_band() {
        // A lower tip-speed ratio spins the rotor slower at the same wind,
        // pulling both harmonics down.
        let slow = Rotor::new(
            Length::new::<meter>(112.0),
            Ratio::new::<ratio>(6.0),
            Ratio::new::<ratio>(0.40),
        )
        .unwrap();
        let fast = fixtures::reference_turbine().rotor();
        let tower = fixtures::reference_tower();

        let slow_check = frequency_check(&tower, &slow, wind(10.0));
        let fast_check = frequency_check(&tower, &fast, wind(10.0));
        assert!(slow_check.one_p < fast_check.one_p);
        assert!(slow_check.three_p < fast_check.three_p);
    }
}
