//! Auxiliary functions of the trigonometric operations.

use crate::common::consts::HALF;
use crate::common::consts::THREE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::Decimal;

/// Angles at which trigonometric functions take exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Angle {
    /// 0 or 2*pi.
    Zero,

    /// pi/2.
    HalfPi,

    /// pi.
    Pi,

    /// 3*pi/2.
    ThreeHalfPi,
}

impl Decimal {
    /// Returns true if the number is not zero and its magnitude is less than `10^(-p)`.
    /// Series of the elementary functions at such arguments have no terms after the leading one within `p` digits.
    pub(crate) fn is_tiny(&self, p: usize) -> bool {
        !self.is_zero() && self.exponent() < -(p as i64)
    }

    /// Reduces the number into the range [0, 2*pi) with `p` significant digits.
    /// Returns the reduced value and true if a multiple of 2*pi was actually subtracted.
    pub(crate) fn reduce_full_cycle(&self, p: usize, ctx: &Context) -> Result<(Self, bool), Error> {
        // integer digits of the quotient are lost to cancellation
        let p_ext = p + self.exponent().max(0) as usize;
        let two_pi = ctx.pi_num(p_ext)?.mul_full_prec(&TWO)?;

        if !self.is_negative() && *self < two_pi {
            return Ok((self.clone(), false));
        }

        let k = self.div(&two_pi, p_ext, RoundingMode::None)?.floor();
        let mut r = self.sub(&two_pi.mul_full_prec(&k)?, p, ctx.rounding_mode());

        // quotient truncation may leave the remainder one period off
        if r.is_negative() {
            r = r.add_full_prec(&two_pi);
        } else if r >= two_pi {
            r = r.sub_full_prec(&two_pi);
        }

        log::trace!("full cycle reduction: k = {}, r = {}", k, r);

        Ok((r.round(p, ctx.rounding_mode()), true))
    }

    /// Returns true if `self` differs from `v` by at most two units in the `p`-th significant digit
    /// of the larger of `v` and `x` in magnitude.
    pub(crate) fn is_near(&self, v: &Self, x: &Self, p: usize) -> bool {
        let m = if x.abs_cmp(v).is_gt() { x } else { v };
        let ulp = m.ulp(p);
        let tol = ulp.add_full_prec(&ulp);
        self.sub(v, p + 2, RoundingMode::None).abs() <= tol
    }

    /// Classifies the angle `self` in [0, 2*pi) reduced from the argument `x`.
    /// Comparison precision is `p` digits of `x` or of the angle, whichever is larger, and the zero angle
    /// is only recognized when the angle is the remainder of a full cycle reduction.
    pub(crate) fn classify_angle(&self, x: &Self, reduced: bool, p: usize, ctx: &Context) -> Result<Option<Angle>, Error> {
        let p_ext = 2 * p;
        let pi = ctx.pi_num(p_ext)?;
        let half_pi = pi.mul_full_prec(&HALF)?;
        let three_half_pi = half_pi.mul_full_prec(&THREE)?;
        let two_pi = pi.mul_full_prec(&TWO)?;

        let cycle = x.abs().max(two_pi.clone());

        let ret = if self.is_zero()
            || (reduced && self.is_near(&Self::zero(), &cycle, p))
            || self.is_near(&two_pi, x, p)
        {
            Some(Angle::Zero)
        } else if self.is_near(&half_pi, x, p) {
            Some(Angle::HalfPi)
        } else if self.is_near(&pi, x, p) {
            Some(Angle::Pi)
        } else if self.is_near(&three_half_pi, x, p) {
            Some(Angle::ThreeHalfPi)
        } else {
            None
        };

        Ok(ret)
    }
}
