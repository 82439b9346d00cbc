//! Yaw misalignment power loss.
//!
//! A rotor yawed off the wind captures power in proportion to `cos²θ`. The
//! relation is periodic: loss grows to total at 90° and returns to zero at
//! 180°, where the rotor plane is aerodynamically aligned again. The model
//! preserves that periodicity rather than clamping beyond 90°.

use std::cmp::Ordering;

use uom::{
    ConstZero,
    si::{
        angle::degree,
        f64::{Angle, Ratio},
        ratio::ratio,
    },
};

use crate::support::{
    constraint::{Constrained, Constraint, ConstraintError, ConstraintResult},
    rounding::round_to,
};

/// Marker type bounding a yaw error to `[0°, 180°]`.
///
/// Yaw error is an unsigned misalignment magnitude; half a turn is the
/// largest distinguishable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YawErrorRange;

impl Constraint<Angle> for YawErrorRange {
    fn check(value: &Angle) -> Result<(), ConstraintError> {
        let half_turn = Angle::new::<degree>(180.0);
        match (value.partial_cmp(&Angle::ZERO), value.partial_cmp(&half_turn)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// A validated yaw misalignment angle.
///
/// # Examples
///
/// ```
/// use turbine_models::models::aero::yaw::YawMisalignment;
/// use uom::si::{angle::degree, f64::Angle, ratio::ratio};
///
/// let aligned = YawMisalignment::new(Angle::new::<degree>(0.0)).unwrap();
/// assert_eq!(aligned.loss().retention_factor.get::<ratio>(), 1.0);
///
/// assert!(YawMisalignment::new(Angle::new::<degree>(181.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct YawMisalignment(Constrained<Angle, YawErrorRange>);

impl YawMisalignment {
    /// Constructs a yaw misalignment from an error angle in `[0°, 180°]`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the angle is outside that range or NaN.
    pub fn new(yaw_error: Angle) -> ConstraintResult<Self> {
        Ok(Self(Constrained::new(yaw_error)?))
    }

    /// Returns the yaw error angle.
    #[must_use]
    pub fn angle(&self) -> Angle {
        *self.0.as_ref()
    }

    /// Evaluates the cosine-squared power loss at this misalignment.
    #[must_use]
    pub fn loss(&self) -> YawLoss {
        let cos = self.angle().cos().get::<ratio>();
        let cos2 = cos * cos;
        YawLoss {
            yaw_error: self.angle(),
            retention_factor: Ratio::new::<ratio>(cos2),
            loss_fraction: Ratio::new::<ratio>(1.0 - cos2),
        }
    }
}

/// Power retention and loss at a yaw misalignment.
///
/// The two fractions are complementary: retention plus loss is one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawLoss {
    /// The yaw error angle the loss was evaluated at.
    pub yaw_error: Angle,

    /// Fraction of aligned power still captured, `cos²θ`.
    pub retention_factor: Ratio,

    /// Fraction of aligned power lost, `1 − cos²θ`.
    pub loss_fraction: Ratio,
}

impl YawLoss {
    /// Returns a copy rounded for presentation: both fractions to six
    /// decimal places.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            yaw_error: self.yaw_error,
            retention_factor: Ratio::new::<ratio>(round_to(
                self.retention_factor.get::<ratio>(),
                6,
            )),
            loss_fraction: Ratio::new::<ratio>(round_to(self.loss_fraction.get::<ratio>(), 6)),
        }
    }
}
