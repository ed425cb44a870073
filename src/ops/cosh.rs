//! Hyperbolic cosine.

use crate::common::consts::HALF;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the hyperbolic cosine of a number with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large to be represented.
    pub fn cosh(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::one());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // cosh(x) = 1 + x^2/2 + ...
        if self.is_tiny(p_wrk) {
            return Ok(Self::one().round_perturbed(Sign::Pos, p, rm));
        }

        // cosh(x) = (e^x + e^-x) / 2
        let ex = self.exp(p_wrk, ctx)?;
        let emx = ex.reciprocal(p_wrk, rm)?;

        Ok(ex.add(&emx, p_wrk, rm).mul_full_prec(&HALF)?.round(p, rm))
    }
}
