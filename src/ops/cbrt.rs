//! Cube root.

use crate::common::consts::ONE;
use crate::common::consts::THREE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_NEWTON_ITERATIONS;
use crate::num::Decimal;
use crate::ops::sqrt::newton;

impl Decimal {
    /// Computes the cube root of a number with precision `p` using Newton's method.
    /// The stopping threshold and the rounding mode are taken from the context `ctx`.
    ///
    /// ## Errors
    ///
    ///  - NoConvergence: the stopping threshold is not reached in the maximum number of steps.
    pub fn cbrt(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        if *self == *ONE {
            return Ok(Self::one());
        }

        if self.is_negative() {
            return Ok(-self.abs().cbrt(p, ctx)?);
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // cbrt(a * 10^(3k)) = cbrt(a) * 10^k, where 1 <= a < 1000
        let k = self.exponent().div_euclid(3);
        let a = self.mul_pow10(-3 * k)?;

        // x_(n+1) = (2*x_n + a/x_n^2) / 3
        let y = newton(&a.round(p_wrk, rm), MAX_NEWTON_ITERATIONS, p_wrk, ctx, |x| {
            let xx = x.mul(x, p_wrk, rm)?;
            let q = a.div(&xx, p_wrk, rm)?;
            x.mul_full_prec(&TWO)?.add_full_prec(&q).div(&THREE, p_wrk, rm)
        })?;

        Ok(y.mul_pow10(k)?.round(p, rm))
    }
}
