//! Precision parameters of function evaluation.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_DIGITS;
use crate::defs::DEFAULT_RM;
use crate::defs::DEFAULT_TERM_COUNT;
use crate::num::Decimal;

/// Precision parameters: the number of series or continued fraction terms, the stopping
/// threshold of iterative methods, the number of significant decimal digits of results,
/// and the rounding mode.
///
/// `Precision` is immutable, and is validated when created.
///
/// ## Examples
///
/// ```
/// use decimal_elementary::{Precision, RoundingMode, dec};
///
/// let prec = Precision::new(100, 30).unwrap()
///     .with_rounding_mode(RoundingMode::FromZero)
///     .with_epsilon(dec!(1e-35)).unwrap();
///
/// assert_eq!(prec.term_count(), 100);
/// assert_eq!(prec.digits(), 30);
/// assert_eq!(prec.epsilon(), Some(&dec!(1e-35)));
///
/// assert!(Precision::new(0, 30).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PrecisionConfig", into = "PrecisionConfig"))]
pub struct Precision {
    term_count: usize,
    epsilon: Option<Decimal>,
    digits: usize,
    rm: RoundingMode,
}

impl Precision {
    /// Creates precision parameters with `term_count` terms, `digits` significant digits,
    /// the default rounding mode, and no epsilon.
    ///
    /// ## Errors
    ///
    ///  - InvalidConfig: `term_count` or `digits` is zero.
    pub fn new(term_count: usize, digits: usize) -> Result<Self, Error> {
        if term_count == 0 {
            return Err(Error::InvalidConfig("term count must be positive"));
        }

        if digits == 0 {
            return Err(Error::InvalidConfig("number of digits must be positive"));
        }

        Ok(Precision {
            term_count,
            epsilon: None,
            digits,
            rm: DEFAULT_RM,
        })
    }

    /// Sets the stopping threshold of iterative methods.
    ///
    /// ## Errors
    ///
    ///  - InvalidConfig: `epsilon` is not positive.
    pub fn with_epsilon(mut self, epsilon: Decimal) -> Result<Self, Error> {
        if !epsilon.is_positive() {
            return Err(Error::InvalidConfig("epsilon must be positive"));
        }

        self.epsilon = Some(epsilon);
        Ok(self)
    }

    /// Sets the rounding mode.
    pub fn with_rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Returns the number of series or continued fraction terms.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Returns the number of significant decimal digits of results.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Returns the rounding mode.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns the stopping threshold of iterative methods.
    /// Without epsilon, an iteration stops when it reaches the working precision.
    pub fn epsilon(&self) -> Option<&Decimal> {
        self.epsilon.as_ref()
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision {
            term_count: DEFAULT_TERM_COUNT,
            epsilon: None,
            digits: DEFAULT_DIGITS,
            rm: DEFAULT_RM,
        }
    }
}

/// Unvalidated form of `Precision` used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PrecisionConfig {
    term_count: usize,
    #[serde(default)]
    epsilon: Option<Decimal>,
    digits: usize,
    #[serde(default)]
    rounding_mode: RoundingMode,
}

#[cfg(feature = "serde")]
impl TryFrom<PrecisionConfig> for Precision {
    type Error = Error;

    fn try_from(c: PrecisionConfig) -> Result<Self, Self::Error> {
        let prec = Precision::new(c.term_count, c.digits)?.with_rounding_mode(c.rounding_mode);
        match c.epsilon {
            Some(eps) => prec.with_epsilon(eps),
            None => Ok(prec),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Precision> for PrecisionConfig {
    fn from(p: Precision) -> Self {
        PrecisionConfig {
            term_count: p.term_count,
            epsilon: p.epsilon,
            digits: p.digits,
            rounding_mode: p.rm,
        }
    }
}
