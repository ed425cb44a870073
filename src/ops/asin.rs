//! Arcsine.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the arcsine of a number with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the absolute value of the argument is larger than 1.
    pub fn asin(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.abs_cmp(&ONE).is_gt() {
            return Err(Error::Domain("arcsine argument is outside of [-1, 1]"));
        }

        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();

        if self.abs_cmp(&ONE).is_eq() {
            let half_pi = ctx.pi_num(p + GUARD_DIGITS)?.mul(&HALF, p, rm)?;
            return Ok(half_pi.with_sign(self.sign()));
        }

        let p_wrk = p + GUARD_DIGITS;

        // asin(x) = x + x^3/6 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign(), p, rm));
        }

        // asin(x) = atan(x / sqrt((1 - x)*(1 + x)))
        let d = ONE.sub_full_prec(self).mul(&ONE.add_full_prec(self), p_wrk, rm)?;
        let s = d.sqrt(p_wrk, ctx)?;

        self.div(&s, p_wrk, rm)?.atan(p, ctx)
    }
}
