//! Inverse hyperbolic tangent.

use crate::common::consts::HALF;
use crate::common::consts::INV_HYPERBOLIC_SERIES_BOUND;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the inverse hyperbolic tangent of a number with precision `p`.
    /// The number of series terms and the rounding mode are taken from the context `ctx`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is outside of the open interval (-1, 1).
    pub fn atanh(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.abs() >= *ONE {
            return Err(Error::Domain("inverse hyperbolic tangent argument is outside of (-1, 1)"));
        }

        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // atanh(x) = x + x^3/3 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign(), p, rm));
        }

        if self.abs() < *INV_HYPERBOLIC_SERIES_BOUND {
            let ret = self.atanh_series(ctx.term_count(), p_wrk, rm)?;
            return Ok(ret.round(p, rm));
        }

        // atanh(x) = ln((1 + x) / (1 - x)) / 2
        let num = ONE.add_full_prec(self);
        let den = ONE.sub_full_prec(self);
        let q = num.div(&den, p_wrk, rm)?;

        Ok(q.ln(p_wrk, ctx)?.mul_full_prec(&HALF)?.round(p, rm))
    }

    /// Inverse hyperbolic tangent by the series with `n` terms.
    fn atanh_series(&self, n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // atanh(x) = x + x^3/3 + x^5/5 + ...
        let xx = self.mul(self, p, rm)?;
        let mut xn = self.round(p, rm);
        let mut ret = xn.clone();

        for i in 1..n {
            xn = xn.mul(&xx, p, rm)?;
            let term = xn.div(&Self::from_usize(2 * i + 1), p, rm)?;
            ret = ret.add(&term, p, rm);
        }

        Ok(ret)
    }
}
