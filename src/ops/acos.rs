//! Arccosine.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the arccosine of a number with precision `p` as pi/2 - asin(x).
    ///
    /// ## Errors
    ///
    ///  - Domain: the absolute value of the argument is larger than 1.
    pub fn acos(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.abs_cmp(&ONE).is_gt() {
            return Err(Error::Domain("arccosine argument is outside of [-1, 1]"));
        }

        let rm = ctx.rounding_mode();

        if *self == *ONE {
            return Ok(Self::zero());
        }

        if self.is_zero() {
            return Ok(ctx.pi_num(p + GUARD_DIGITS)?.mul(&HALF, p, rm)?);
        }

        if *self == -&*ONE {
            return ctx.pi_num(p);
        }

        let mut p_wrk = p + GUARD_DIGITS;

        // arguments close to 1 lose leading digits in the subtraction
        loop {
            let half_pi = ctx.pi_num(p_wrk)?.mul_full_prec(&HALF)?;
            let ret = half_pi.sub(&self.asin(p_wrk, ctx)?, p_wrk, rm);

            let lost = -ret.exponent();
            if lost <= 0 || p_wrk >= p + GUARD_DIGITS + lost as usize {
                return Ok(ret.round(p, rm));
            }

            p_wrk = p + GUARD_DIGITS + lost as usize;
            log::debug!("arccosine lost {} digits, recomputing with {} digits", lost, p_wrk);
        }
    }
}
