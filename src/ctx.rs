//! Context binds precision parameters to the constants cache and evaluates functions.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::Decimal;
use crate::ops::consts::Consts;
use crate::prec::Precision;

/// Context contains the precision parameters and the cache of mathematical constants.
///
/// All functions of the context return results with `precision().digits()` significant digits,
/// rounded using the rounding mode of the precision parameters.
/// A context is immutable and can be shared between threads.
///
/// ## Examples
///
/// ```
/// use decimal_elementary::{Context, Precision, dec};
///
/// let ctx = Context::new(Precision::new(100, 20).unwrap());
///
/// assert_eq!(ctx.sqrt(&dec!(2)).unwrap(), dec!(1.4142135623730950488));
/// assert_eq!(ctx.pi().unwrap(), dec!(3.1415926535897932385));
/// assert!(ctx.ln(&dec!(-1)).is_err());
/// ```
#[derive(Debug)]
pub struct Context {
    prec: Precision,
    cc: Consts,
}

impl Context {
    /// Creates a new context with precision parameters `prec` and an empty constants cache.
    pub fn new(prec: Precision) -> Self {
        Context {
            prec,
            cc: Consts::new(),
        }
    }

    /// Returns the precision parameters of the context.
    pub fn precision(&self) -> &Precision {
        &self.prec
    }

    /// Returns the number of significant digits of results.
    pub fn digits(&self) -> usize {
        self.prec.digits()
    }

    /// Returns the rounding mode of the context.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.prec.rounding_mode()
    }

    /// Returns the number of series or continued fraction terms.
    pub fn term_count(&self) -> usize {
        self.prec.term_count()
    }

    /// Returns the stopping threshold of iterative methods if it is configured.
    pub fn epsilon(&self) -> Option<&Decimal> {
        self.prec.epsilon()
    }

    pub(crate) fn pi_num(&self, p: usize) -> Result<Decimal, Error> {
        self.cc.pi_num(p, &self.prec)
    }

    pub(crate) fn e_num(&self, p: usize) -> Result<Decimal, Error> {
        self.cc.e_num(p, &self.prec)
    }

    pub(crate) fn ln_2_num(&self, p: usize) -> Result<Decimal, Error> {
        self.cc.ln_2_num(p, &self.prec)
    }

    pub(crate) fn ln_10_num(&self, p: usize) -> Result<Decimal, Error> {
        self.cc.ln_10_num(p, &self.prec)
    }

    /// Returns the value of the pi number.
    pub fn pi(&self) -> Result<Decimal, Error> {
        self.pi_num(self.digits())
    }

    /// Returns the value of the Euler number.
    pub fn e(&self) -> Result<Decimal, Error> {
        self.e_num(self.digits())
    }

    /// Returns the value of the natural logarithm of 2.
    pub fn ln2(&self) -> Result<Decimal, Error> {
        self.ln_2_num(self.digits())
    }

    /// Returns the value of the natural logarithm of 10.
    pub fn ln10(&self) -> Result<Decimal, Error> {
        self.ln_10_num(self.digits())
    }

    /// Computes the square root of `x`.
    pub fn sqrt(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.sqrt(self.digits(), self)
    }

    /// Computes the cube root of `x`.
    pub fn cbrt(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.cbrt(self.digits(), self)
    }

    /// Computes the natural logarithm of `x`.
    pub fn ln(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.ln(self.digits(), self)
    }

    /// Computes the decimal logarithm of `x`.
    pub fn log10(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.log10(self.digits(), self)
    }

    /// Computes the binary logarithm of `x`.
    pub fn log2(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.log2(self.digits(), self)
    }

    /// Computes the logarithm of `x` with base `b`.
    pub fn log_base(&self, x: &Decimal, b: &Decimal) -> Result<Decimal, Error> {
        x.log_base(b, self.digits(), self)
    }

    /// Computes `e` to the power of `x`.
    pub fn exp(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.exp(self.digits(), self)
    }

    /// Computes the sine of `x`.
    pub fn sin(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.sin(self.digits(), self)
    }

    /// Computes the cosine of `x`.
    pub fn cos(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.cos(self.digits(), self)
    }

    /// Computes the versine `1 - cos(x)` of `x`.
    pub fn versin(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.versin(self.digits(), self)
    }

    /// Computes the tangent of `x`.
    pub fn tan(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.tan(self.digits(), self)
    }

    /// Computes the arcsine of `x`.
    pub fn asin(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.asin(self.digits(), self)
    }

    /// Computes the arccosine of `x`.
    pub fn acos(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.acos(self.digits(), self)
    }

    /// Computes the arctangent of `x`.
    pub fn atan(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.atan(self.digits(), self)
    }

    /// Computes the angle of the point (`x`, `y`) in the range from -pi to pi.
    pub fn atan2(&self, y: &Decimal, x: &Decimal) -> Result<Decimal, Error> {
        y.atan2(x, self.digits(), self)
    }

    /// Computes the hyperbolic sine of `x`.
    pub fn sinh(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.sinh(self.digits(), self)
    }

    /// Computes the hyperbolic cosine of `x`.
    pub fn cosh(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.cosh(self.digits(), self)
    }

    /// Computes the hyperbolic tangent of `x`.
    pub fn tanh(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.tanh(self.digits(), self)
    }

    /// Computes the inverse hyperbolic sine of `x`.
    pub fn asinh(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.asinh(self.digits(), self)
    }

    /// Computes the inverse hyperbolic cosine of `x`.
    pub fn acosh(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.acosh(self.digits(), self)
    }

    /// Computes the inverse hyperbolic tangent of `x`.
    pub fn atanh(&self, x: &Decimal) -> Result<Decimal, Error> {
        x.atanh(self.digits(), self)
    }

    /// Computes `x` to the power of the integer `n`.
    pub fn powi(&self, x: &Decimal, n: i64) -> Result<Decimal, Error> {
        x.powi(n, self.digits(), self)
    }

    /// Computes `x` to the power of `y`.
    pub fn pow(&self, x: &Decimal, y: &Decimal) -> Result<Decimal, Error> {
        x.pow(y, self.digits(), self)
    }

    /// Computes the length of the hypotenuse `sqrt(x^2 + y^2)`.
    pub fn hypot(&self, x: &Decimal, y: &Decimal) -> Result<Decimal, Error> {
        x.hypot(y, self.digits(), self)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(Precision::default())
    }
}
