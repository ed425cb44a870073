//! Inverse hyperbolic cosine.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the inverse hyperbolic cosine of a number with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is less than 1.
    pub fn acosh(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if *self < *ONE {
            return Err(Error::Domain("inverse hyperbolic cosine argument is less than 1"));
        }

        if *self == *ONE {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // acosh(x) = ln(2x) - 1/(4x^2) - ...
        if self.exponent() > p_wrk as i64 {
            return self.mul_full_prec(&TWO)?.ln(p, ctx);
        }

        // acosh(x) = ln(x + sqrt((x - 1)(x + 1))), evaluated as ln(1 + y) to keep digits of x - 1
        let xm1 = self.sub(&ONE, p_wrk + self.digits() as usize, rm);
        let xp1 = self.add(&ONE, p_wrk, rm);
        let s = xm1.mul(&xp1, p_wrk, rm)?.sqrt(p_wrk, ctx)?;

        xm1.add(&s, p_wrk, rm).ln_1p(p, ctx)
    }
}
