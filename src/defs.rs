//! Definitions.

use thiserror::Error as ThisError;

/// A decimal scale: the value of a number is `unscaled * 10^(-scale)`.
pub type Scale = i64;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default number of significant decimal digits.
pub const DEFAULT_DIGITS: usize = 50;

/// Default number of series or continued fraction terms.
pub const DEFAULT_TERM_COUNT: usize = 100;

/// Digits added to the requested precision for intermediate computations.
pub const GUARD_DIGITS: usize = 8;

/// Upper bound for the number of steps of the Newton iteration.
pub const MAX_NEWTON_ITERATIONS: usize = 10_000;

/// Largest magnitude of the scale of a computed number.
/// Operations which would produce a larger scale fail with [`Error::ExponentOverflow`].
pub const MAX_SCALE: Scale = Scale::MAX / 4;

/// Upper bound for the number of transitions of the tangent argument reduction.
pub const MAX_TAN_REDUCTION_STEPS: usize = 8;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The argument is outside of the domain of the function.
    #[error("argument is out of the function domain: {0}")]
    Domain(&'static str),

    /// Divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Precision parameters are not usable.
    #[error("invalid precision configuration: {0}")]
    InvalidConfig(&'static str),

    /// An iterative method did not reach the stopping criterion.
    #[error("iteration did not converge in {0} steps")]
    NoConvergence(usize),

    /// The exponent of the result does not fit into the scale type.
    #[error("exponent overflow")]
    ExponentOverflow,

    /// A string is not a valid decimal number.
    #[error("invalid decimal syntax")]
    Parse,
}

/// Rounding modes.
///
/// Half modes define which way a discarded part of exactly one half goes;
/// any other discarded part rounds to the nearest value.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Discard the digits (truncation toward zero).
    None,

    /// Round half toward positive infinity.
    Up,

    /// Round half toward negative infinity.
    Down,

    /// Round half toward zero.
    ToZero,

    /// Round half away from zero.
    FromZero,

    /// Round half to even.
    #[default]
    ToEven,

    /// Round half to odd.
    ToOdd,

    /// Round toward positive infinity.
    Ceiling,

    /// Round toward negative infinity.
    Floor,

    /// Round away from zero.
    AwayFromZero,
}

impl RoundingMode {
    /// Decides whether the magnitude of a truncated value must be incremented.
    ///
    /// `half` is the comparison of the discarded part with one half of the last retained unit,
    /// `discarded` is true if any non-zero digit was discarded, `odd` is true if the last
    /// retained digit is odd.
    pub(crate) fn round_up(&self, half: core::cmp::Ordering, discarded: bool, odd: bool, s: Sign) -> bool {
        use core::cmp::Ordering;

        if !discarded {
            return false;
        }

        match self {
            RoundingMode::None => false,
            RoundingMode::Ceiling => s.is_positive(),
            RoundingMode::Floor => s.is_negative(),
            RoundingMode::AwayFromZero => true,
            _ => match half {
                Ordering::Less => false,
                Ordering::Greater => true,
                Ordering::Equal => match self {
                    RoundingMode::Up => s.is_positive(),
                    RoundingMode::Down => s.is_negative(),
                    RoundingMode::ToZero => false,
                    RoundingMode::FromZero => true,
                    RoundingMode::ToEven => odd,
                    RoundingMode::ToOdd => !odd,
                    _ => unreachable!(),
                },
            },
        }
    }
}
