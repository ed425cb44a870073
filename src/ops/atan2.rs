//! Two-argument arctangent.

use core::cmp::Ordering;

use crate::common::consts::HALF;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the angle of the point (`x`, `self`) with precision `p`.
    /// The result is in the range from -pi to pi, and atan2(0, 0) is 0.
    pub fn atan2(&self, x: &Self, p: usize, ctx: &Context) -> Result<Self, Error> {
        let y = self;
        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        match (x.cmp_zero(), y.cmp_zero()) {
            (Ordering::Equal, Ordering::Equal) => Ok(Self::zero()),
            (Ordering::Equal, Ordering::Greater) => Ok(ctx.pi_num(p_wrk)?.mul(&HALF, p, rm)?),
            (Ordering::Equal, Ordering::Less) => Ok(-ctx.pi_num(p_wrk)?.mul(&HALF, p, rm)?),
            (Ordering::Greater, Ordering::Equal) => Ok(Self::zero()),
            (Ordering::Greater, _) => y.div(x, p_wrk, rm)?.atan(p, ctx),
            (Ordering::Less, Ordering::Equal) => ctx.pi_num(p),
            (Ordering::Less, Ordering::Greater) => {
                let a = y.div(x, p_wrk, rm)?.atan(p_wrk, ctx)?;
                Ok(a.add(&ctx.pi_num(p_wrk)?, p, rm))
            }
            (Ordering::Less, Ordering::Less) => {
                let a = y.div(x, p_wrk, rm)?.atan(p_wrk, ctx)?;
                Ok(a.sub(&ctx.pi_num(p_wrk)?, p, rm))
            }
        }
    }
}
