//! Exponential function.

use crate::common::consts::HALF;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes `e` to the power of a number with precision `p`.
    /// The number of continued fraction terms and the rounding mode are taken from the context `ctx`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large or too small to be represented.
    pub fn exp(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::one());
        }

        let rm = ctx.rounding_mode();
        let n = ctx.term_count();
        let p_wrk = p + GUARD_DIGITS;

        // e^x = 1 + x + ...
        if self.is_tiny(p_wrk) {
            return Ok(Self::one().round_perturbed(self.sign(), p, rm));
        }

        // x/ln(2) does not fit into i64
        if self.exponent() > 18 {
            return Err(Error::ExponentOverflow);
        }

        // k = trunc(x/ln(2) +- 1/2)
        let int_digits = self.exponent().max(0) as usize;
        let ln2 = ctx.ln_2_num(int_digits + GUARD_DIGITS)?;
        let q = self.div(&ln2, int_digits + GUARD_DIGITS, RoundingMode::None)?;
        let k = q
            .add_full_prec(&HALF.with_sign(self.sign()))
            .trunc()
            .to_i64()
            .ok_or(Error::ExponentOverflow)?;

        // digits of k*ln(2) cancel with the digits of x
        let kd = Self::from_i64(k);
        let p_x = p_wrk + kd.digits() as usize;
        let ln2 = ctx.ln_2_num(p_x)?;
        let r = self.sub_full_prec(&ln2.mul_full_prec(&kd)?).round(p_wrk, rm);

        log::trace!("exp: k = {}, r = {}", k, r);

        let er = r.exp_cf(n, p_wrk, rm)?;

        let ret = if k == 0 {
            er
        } else {
            let pow2 = TWO.powu(k.unsigned_abs(), p_x, rm)?;
            if k > 0 {
                er.mul(&pow2, p_wrk, rm)?
            } else {
                er.div(&pow2, p_wrk, rm)?
            }
        };

        Ok(ret.round(p, rm))
    }

    /// `e` to the power of `self` by the continued fraction with `n` terms.
    /// The argument is expected to be not greater than ln(2)/2 in magnitude.
    fn exp_cf(&self, n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // e^r = (2 + w + r) / (2 + w - r), where
        // w = r^2 / (6 + r^2 / (10 + r^2 / (14 + ...)))
        let rr = self.mul(self, p, rm)?;
        let mut w = Self::zero();

        for i in (6..=4 * n + 2).rev().step_by(4) {
            let den = Self::from_usize(i).add(&w, p, rm);
            w = rr.div(&den, p, rm)?;
        }

        let s = TWO.add_full_prec(&w);
        let num = s.add(self, p, rm);
        let den = s.sub(self, p, rm);

        num.div(&den, p, rm)
    }
}
