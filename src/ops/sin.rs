//! Sine.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::ops::util::Angle;

impl Decimal {
    /// Computes the sine of a number with precision `p`.
    /// The number of continued fraction terms and the rounding mode are taken from the context `ctx`.
    /// Arguments within two units in the `p`-th digit of a multiple of pi/2 give exact results.
    pub fn sin(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;
        let p_ext = p_wrk + p;

        // sin(x) = x - x^3/6 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign().invert(), p, rm));
        }

        let (r, reduced) = self.reduce_full_cycle(p_ext, ctx)?;

        match r.classify_angle(self, reduced, p, ctx)? {
            Some(Angle::Zero) | Some(Angle::Pi) => return Ok(Self::zero()),
            Some(Angle::HalfPi) => return Ok(Self::one()),
            Some(Angle::ThreeHalfPi) => return Ok(-Self::one()),
            None => {}
        }

        // sin(x) = 2t / (1 + t^2), t = tan(x/2)
        let t = r.mul_full_prec(&HALF)?.tan(p_wrk, ctx)?;
        let tt = t.mul(&t, p_wrk, rm)?;
        let den = ONE.add(&tt, p_wrk, rm);

        t.mul_full_prec(&TWO)?.div(&den, p, rm)
    }
}
