//! Downstream wake deficit (top-hat model).
//!
//! A turbine extracting thrust from the flow leaves a slower, expanding
//! wake behind it. The top-hat model reduces that to two parameters: the
//! thrust coefficient sets the initial deficit and the decay constant sets
//! how quickly the wake re-expands with distance.

use uom::si::{
    f64::{Length, Ratio, Velocity},
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::{
    records::{Rotor, WakeParameters},
    support::{
        constraint::{Constrained, NonNegative, StrictlyPositive},
        rounding::round_to,
    },
};

/// Wind-speed reduction at a point downstream of an operating rotor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WakeDeficit {
    /// Undisturbed free-stream wind speed.
    pub free_stream: Velocity,

    /// Downwind distance from the rotor plane.
    pub distance: Length,

    /// Wind speed remaining inside the wake.
    pub wake_speed: Velocity,

    /// Fractional speed reduction, `1 − v_wake / v_free`.
    pub deficit: Ratio,
}

/// Computes the wake deficit `(1 − √(1 − Ct)) · (D / (D + 2·k·x))²` and the
/// wind speed remaining at the downwind distance.
///
/// The deficit is largest against the rotor plane, approaching
/// `1 − √(1 − Ct)` as `x → 0`, and decays toward full recovery far
/// downstream, so the wake speed never exceeds the free stream. The
/// square-root term is always real because `Ct < 1` is enforced when the
/// [`WakeParameters`] record is constructed.
#[must_use]
pub fn wake_deficit(
    wake: &WakeParameters,
    rotor: &Rotor,
    distance: Constrained<Length, StrictlyPositive>,
    free_stream: Constrained<Velocity, NonNegative>,
) -> WakeDeficit {
    let x = distance.into_inner();
    let v = free_stream.into_inner();

    let ct = wake.thrust_coefficient().get::<ratio>();
    let diameter = rotor.diameter();
    let expansion: Ratio = diameter / (diameter + 2.0 * wake.decay_constant() * x);
    let deficit = (1.0 - (1.0 - ct).sqrt()) * expansion.get::<ratio>().powi(2);

    WakeDeficit {
        free_stream: v,
        distance: x,
        wake_speed: v * (1.0 - deficit),
        deficit: Ratio::new::<ratio>(deficit),
    }
}

impl WakeDeficit {
    /// Returns a copy rounded for presentation: wake speed to three decimal
    /// places (m/s), deficit fraction to four.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            free_stream: self.free_stream,
            distance: self.distance,
            wake_speed: Velocity::new::<meter_per_second>(round_to(
                self.wake_speed.get::<meter_per_second>(),
                3,
            )),
            deficit: Ratio::new::<ratio>(round_to(self.deficit.get::<ratio>(), 4)),
        }
    }
}
