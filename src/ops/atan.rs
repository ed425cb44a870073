//! Arctangent.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the arctangent of a number with precision `p`.
    /// The number of continued fraction terms and the rounding mode are taken from the context `ctx`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: an intermediate denominator turned out to be zero.
    pub fn atan(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let n = ctx.term_count();
        let p_wrk = p + GUARD_DIGITS;

        // atan(x) = x - x^3/3 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign().invert(), p, rm));
        }

        let ret = if self.abs_cmp(&ONE).is_gt() {
            // atan(x) = sign(x)*pi/2 - atan(1/x)
            let x = self.reciprocal(p_wrk, rm)?;
            let a = x.atan(p_wrk, ctx)?;

            let half_pi = ctx.pi_num(p_wrk)?.mul_full_prec(&HALF)?.with_sign(self.sign());

            half_pi.sub(&a, p_wrk, rm)
        } else {
            self.atan_cf(n, p_wrk, rm)?
        };

        Ok(ret.round(p, rm))
    }

    /// Arctangent by the continued fraction with `n` terms.
    /// Converges quickly for arguments not exceeding 1 in magnitude.
    pub(crate) fn atan_cf(&self, n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // atan(x) = x / (1 + x^2 / (3 + 4x^2 / (5 + 9x^2 / (7 + ...))))
        let xx = self.mul(self, p, rm)?;
        let mut a = Self::zero();

        for i in (1..=n).rev() {
            let num = xx.mul_full_prec(&Self::from_usize(i * i))?;
            let den = Self::from_usize(2 * i + 1).add(&a, p, rm);
            a = num.div(&den, p, rm)?;
        }

        let den = ONE.add(&a, p, rm);
        self.div(&den, p, rm)
    }
}
