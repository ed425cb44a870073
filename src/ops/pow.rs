//! Power and hypotenuse.

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes `self` to the power of the integer `n` with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero and `n` is negative.
    ///  - ExponentOverflow: the result is too large or too small to be represented.
    pub fn powi(&self, n: i64, p: usize, ctx: &Context) -> Result<Self, Error> {
        if n == 0 {
            return Ok(Self::one());
        }

        if self.is_zero() {
            if n < 0 {
                return Err(Error::Domain("zero to a negative power is division by zero"));
            }
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();

        // each squaring adds a rounding error
        let p_wrk = p + GUARD_DIGITS + Self::from_i64(n).digits() as usize;
        let ret = self.powu(n.unsigned_abs(), p_wrk, rm)?;

        if n < 0 {
            ONE.div(&ret, p, rm)
        } else {
            Ok(ret.round(p, rm))
        }
    }

    /// Computes `self` to the power of `n` using binary exponentiation.
    /// Intermediate results are rounded to `p` digits.
    pub(crate) fn powu(&self, mut n: u64, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        let mut ret = Self::one();
        let mut x = self.round(p, rm);

        while n > 0 {
            if n & 1 != 0 {
                ret = ret.mul(&x, p, rm)?;
            }
            n >>= 1;
            if n > 0 {
                x = x.mul(&x, p, rm)?;
            }
        }

        Ok(ret)
    }

    /// Computes `self` to the power of `e` with precision `p`.
    /// Integral exponents are computed by binary exponentiation, other exponents as `exp(e*ln(self))`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero and `e` is negative, or `self` is negative and `e` is not an integer,
    ///    or `self` is negative and `e` does not fit into `i64`.
    ///  - ExponentOverflow: the result is too large or too small to be represented.
    pub fn pow(&self, e: &Self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if e.is_zero() {
            return Ok(Self::one());
        }

        if *e == *ONE {
            return Ok(self.clone());
        }

        if self.is_zero() {
            if e.is_negative() {
                return Err(Error::Domain("zero to a negative power is division by zero"));
            }
            return Ok(Self::zero());
        }

        if let Some(n) = e.to_i64() {
            return self.powi(n, p, ctx);
        }

        if self.is_negative() {
            return if e.is_integer() {
                Err(Error::Domain("integral exponent of a negative base is too large"))
            } else {
                Err(Error::Domain("negative base with a non-integral exponent"))
            };
        }

        let rm = ctx.rounding_mode();
        let mut p_wrk = p + GUARD_DIGITS;

        // integer digits of e*ln(x) are lost in the argument reduction of exp
        let mut t = e.mul(&self.ln(p_wrk, ctx)?, p_wrk, rm)?;
        let int_digits = t.exponent() + 1;
        if int_digits > 0 {
            p_wrk += int_digits as usize;
            t = e.mul(&self.ln(p_wrk, ctx)?, p_wrk, rm)?;
        }

        t.exp(p, ctx)
    }

    /// Computes the length of the hypotenuse `sqrt(self^2 + y^2)` with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the squares of the arguments are too large or too small to be represented.
    pub fn hypot(&self, y: &Self, p: usize, ctx: &Context) -> Result<Self, Error> {
        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        let xx = self.mul(self, p_wrk, rm)?;
        let yy = y.mul(y, p_wrk, rm)?;

        xx.add(&yy, p_wrk, rm).sqrt(p, ctx)
    }
}
