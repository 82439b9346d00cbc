use std::f64::consts::PI;

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Area, Length, MassDensity, Power, Ratio, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::RecordError;

/// Rotor geometry and aerodynamic coefficients.
///
/// The rotor is shared by the aerodynamic and structural models, so its
/// derived geometry (swept area, tip speed, shaft angular speed) lives here
/// rather than in any one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotor {
    diameter: Length,
    tip_speed_ratio: Ratio,
    power_coefficient: Ratio,
}

impl Rotor {
    /// The Betz limit: the largest fraction of kinetic energy any rotor can
    /// extract from the wind.
    pub const BETZ_LIMIT: f64 = 0.593;

    /// Constructs a validated rotor.
    ///
    /// The diameter, tip-speed ratio, and power coefficient must all be
    /// strictly positive. A power coefficient above the [Betz
    /// limit](Self::BETZ_LIMIT) is physically implausible but is not
    /// rejected; realistic inputs are the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError::Parameter`] naming the offending field.
    pub fn new(
        diameter: Length,
        tip_speed_ratio: Ratio,
        power_coefficient: Ratio,
    ) -> Result<Self, RecordError> {
        StrictlyPositive::new(diameter)
            .map_err(|e| RecordError::parameter("rotor diameter", e))?;
        StrictlyPositive::new(tip_speed_ratio)
            .map_err(|e| RecordError::parameter("tip-speed ratio", e))?;
        StrictlyPositive::new(power_coefficient)
            .map_err(|e| RecordError::parameter("power coefficient", e))?;
        Ok(Self {
            diameter,
            tip_speed_ratio,
            power_coefficient,
        })
    }

    /// Returns the rotor diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Returns the tip-speed ratio λ.
    #[must_use]
    pub fn tip_speed_ratio(&self) -> Ratio {
        self.tip_speed_ratio
    }

    /// Returns the power coefficient Cp.
    #[must_use]
    pub fn power_coefficient(&self) -> Ratio {
        self.power_coefficient
    }

    /// Returns the rotor radius.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.diameter / 2.0
    }

    /// Returns the swept area `π·(d/2)²`.
    #[must_use]
    pub fn swept_area(&self) -> Area {
        PI * self.radius() * self.radius()
    }

    /// Returns the blade tip speed `λ·v` at the given wind speed.
    #[must_use]
    pub fn tip_speed(&self, wind_speed: Velocity) -> Velocity {
        self.tip_speed_ratio * wind_speed
    }

    /// Returns the shaft angular speed `λ·v / (d/2)` at the given wind
    /// speed. Calm air gives a parked rotor (zero speed).
    #[must_use]
    pub fn angular_speed(&self, wind_speed: Velocity) -> AngularVelocity {
        // Velocity over length is a plain s⁻¹ to uom; rebuild it under the
        // angle kind as rad/s.
        let omega = self.tip_speed(wind_speed).get::<meter_per_second>()
            / self.radius().get::<meter>();
        AngularVelocity::new::<radian_per_second>(omega)
    }
}

/// The cut-in / rated / cut-out boundaries of a power curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingEnvelope {
    cut_in: Velocity,
    rated: Velocity,
    cut_out: Velocity,
}

impl OperatingEnvelope {
    /// Constructs a validated operating envelope.
    ///
    /// Each speed must be non-negative and the three must be ordered:
    /// cut-in ≤ rated ≤ cut-out.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError::Parameter`] if a speed is negative or NaN,
    /// or a [`RecordError::EnvelopeOrder`] if the speeds are out of order.
    pub fn new(cut_in: Velocity, rated: Velocity, cut_out: Velocity) -> Result<Self, RecordError> {
        NonNegative::new(cut_in).map_err(|e| RecordError::parameter("cut-in wind speed", e))?;
        NonNegative::new(rated).map_err(|e| RecordError::parameter("rated wind speed", e))?;
        NonNegative::new(cut_out).map_err(|e| RecordError::parameter("cut-out wind speed", e))?;
        if cut_in > rated || rated > cut_out {
            return Err(RecordError::EnvelopeOrder {
                cut_in,
                rated,
                cut_out,
            });
        }
        Ok(Self {
            cut_in,
            rated,
            cut_out,
        })
    }

    /// Returns the cut-in wind speed.
    #[must_use]
    pub fn cut_in(&self) -> Velocity {
        self.cut_in
    }

    /// Returns the rated wind speed.
    #[must_use]
    pub fn rated(&self) -> Velocity {
        self.rated
    }

    /// Returns the cut-out wind speed.
    #[must_use]
    pub fn cut_out(&self) -> Velocity {
        self.cut_out
    }
}

/// A complete turbine parameter record.
///
/// The hub height is descriptive: no formula consumes it, but it travels
/// with the record the way the source data sheets carry it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turbine {
    rotor: Rotor,
    envelope: OperatingEnvelope,
    hub_height: Length,
    air_density: MassDensity,
    capacity: Power,
}

impl Turbine {
    /// Constructs a validated turbine record.
    ///
    /// Hub height, air density, and rated capacity must be strictly
    /// positive; the rotor and envelope carry their own validation.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError::Parameter`] naming the offending field.
    pub fn new(
        rotor: Rotor,
        envelope: OperatingEnvelope,
        hub_height: Length,
        air_density: MassDensity,
        capacity: Power,
    ) -> Result<Self, RecordError> {
        StrictlyPositive::new(hub_height).map_err(|e| RecordError::parameter("hub height", e))?;
        StrictlyPositive::new(air_density)
            .map_err(|e| RecordError::parameter("air density", e))?;
        StrictlyPositive::new(capacity)
            .map_err(|e| RecordError::parameter("rated capacity", e))?;
        Ok(Self {
            rotor,
            envelope,
            hub_height,
            air_density,
            capacity,
        })
    }

    /// Returns the rotor.
    #[must_use]
    pub fn rotor(&self) -> Rotor {
        self.rotor
    }

    /// Returns the operating envelope.
    #[must_use]
    pub fn envelope(&self) -> OperatingEnvelope {
        self.envelope
    }

    /// Returns the hub height.
    #[must_use]
    pub fn hub_height(&self) -> Length {
        self.hub_height
    }

    /// Returns the air density at the site.
    #[must_use]
    pub fn air_density(&self) -> MassDensity {
        self.air_density
    }

    /// Returns the rated electrical capacity.
    #[must_use]
    pub fn capacity(&self) -> Power {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angular_velocity::revolution_per_minute, area::square_meter, ratio::ratio,
        velocity::meter_per_second,
    };

    use crate::support::constraint::ConstraintError;

    fn rotor_112() -> Rotor {
        Rotor::new(
            Length::new::<meter>(112.0),
            Ratio::new::<ratio>(8.0),
            Ratio::new::<ratio>(0.40),
        )
        .unwrap()
    }

    #[test]
    fn swept_area_of_a_112_m_rotor() {
        assert_relative_eq!(
            rotor_112().swept_area().get::<square_meter>(),
            9852.035,
            epsilon = 1e-2
        );
    }

    #[test]
    fn tip_speed_scales_with_wind() {
        let v = Velocity::new::<meter_per_second>(10.0);
        assert_relative_eq!(
            rotor_112().tip_speed(v).get::<meter_per_second>(),
            80.0
        );
    }

    #[test]
    fn angular_speed_in_rpm() {
        let v = Velocity::new::<meter_per_second>(10.0);
        let omega = rotor_112().angular_speed(v);
        assert_relative_eq!(
            omega.get::<revolution_per_minute>(),
            13.642,
            epsilon = 1e-3
        );
    }

    #[test]
    fn parked_rotor_at_calm_air() {
        let omega = rotor_112().angular_speed(Velocity::new::<meter_per_second>(0.0));
        assert_eq!(omega.get::<radian_per_second>(), 0.0);
    }

    #[test]
    fn rejects_non_positive_diameter_by_name() {
        let err = Rotor::new(
            Length::new::<meter>(-1.0),
            Ratio::new::<ratio>(8.0),
            Ratio::new::<ratio>(0.40),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RecordError::Parameter {
                parameter: "rotor diameter",
                source: ConstraintError::Negative,
            }
        );
    }

    #[test]
    fn power_coefficient_above_betz_is_allowed() {
        // The Betz limit is a soft expectation, not an enforced bound.
        let rotor = Rotor::new(
            Length::new::<meter>(112.0),
            Ratio::new::<ratio>(8.0),
            Ratio::new::<ratio>(0.70),
        );
        assert!(rotor.is_ok());
    }

    #[test]
    fn envelope_must_be_ordered() {
        let mps = Velocity::new::<meter_per_second>;
        assert!(OperatingEnvelope::new(mps(3.0), mps(13.0), mps(25.0)).is_ok());
        assert!(matches!(
            OperatingEnvelope::new(mps(13.0), mps(3.0), mps(25.0)),
            Err(RecordError::EnvelopeOrder { .. })
        ));
        assert!(matches!(
            OperatingEnvelope::new(mps(3.0), mps(26.0), mps(25.0)),
            Err(RecordError::EnvelopeOrder { .. })
        ));
    }

    #[test]
    fn envelope_rejects_negative_speeds_by_name() {
        let mps = Velocity::new::<meter_per_second>;
        let err = OperatingEnvelope::new(mps(-1.0), mps(13.0), mps(25.0)).unwrap_err();
        assert_eq!(
            err,
            RecordError::Parameter {
                parameter: "cut-in wind speed",
                source: ConstraintError::Negative,
            }
        );
    }

    #[test]
    fn turbine_rejects_non_positive_air_density() {
        let mps = Velocity::new::<meter_per_second>;
        let envelope = OperatingEnvelope::new(mps(3.0), mps(13.0), mps(25.0)).unwrap();
        let err = Turbine::new(
            rotor_112(),
            envelope,
            Length::new::<meter>(94.0),
            MassDensity::new::<uom::si::mass_density::kilogram_per_cubic_meter>(0.0),
            Power::new::<uom::si::power::megawatt>(2.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RecordError::Parameter {
                parameter: "air density",
                source: ConstraintError::Zero,
            }
        );
    }
}
