//! Cosine and versine.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::ops::util::Angle;

impl Decimal {
    /// Computes the cosine of a number with precision `p` as 1 - versin(x).
    /// The number of continued fraction terms and the rounding mode are taken from the context `ctx`.
    /// Arguments within two units in the `p`-th digit of a multiple of pi/2 give exact results.
    pub fn cos(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::one());
        }

        let rm = ctx.rounding_mode();
        let p_ext = 2 * p + GUARD_DIGITS;

        // cos(x) = 1 - x^2/2 + ...
        if self.is_tiny(p + GUARD_DIGITS) {
            return Ok(Self::one().round_perturbed(Sign::Neg, p, rm));
        }

        let (r, reduced) = self.reduce_full_cycle(p_ext, ctx)?;

        match r.classify_angle(self, reduced, p, ctx)? {
            Some(Angle::Zero) => return Ok(Self::one()),
            Some(Angle::HalfPi) | Some(Angle::ThreeHalfPi) => return Ok(Self::zero()),
            Some(Angle::Pi) => return Ok(-Self::one()),
            None => {}
        }

        let mut p_wrk = p + GUARD_DIGITS;

        // the subtraction cancels leading digits of the versine close to pi/2 and 3pi/2
        loop {
            let v = r.versin_reduced(p_wrk, ctx)?;
            let ret = ONE.sub(&v, p_wrk, rm);

            let lost = -ret.exponent();
            if lost <= 0 || p_wrk >= p + GUARD_DIGITS + lost as usize {
                return Ok(ret.round(p, rm));
            }

            p_wrk = p + GUARD_DIGITS + lost as usize;
            log::debug!("cosine lost {} digits, recomputing with {} digits", lost, p_wrk);
        }
    }

    /// Computes the versine `1 - cos(x)` of a number with precision `p`.
    /// The number of continued fraction terms and the rounding mode are taken from the context `ctx`.
    /// Arguments within two units in the `p`-th digit of a multiple of pi/2 give exact results.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too small to be represented.
    pub fn versin(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let p_ext = 2 * p + GUARD_DIGITS;

        // 1 - cos(x) = x^2/2 - x^4/24 + ...
        if self.is_tiny(p + GUARD_DIGITS) {
            let rm = ctx.rounding_mode();
            let xx = self.mul(self, p + GUARD_DIGITS, rm)?;
            return Ok(xx.mul_full_prec(&HALF)?.round_perturbed(Sign::Neg, p, rm));
        }

        let (r, reduced) = self.reduce_full_cycle(p_ext, ctx)?;

        match r.classify_angle(self, reduced, p, ctx)? {
            Some(Angle::Zero) => return Ok(Self::zero()),
            Some(Angle::HalfPi) | Some(Angle::ThreeHalfPi) => return Ok(Self::one()),
            Some(Angle::Pi) => return Ok(TWO.clone()),
            None => {}
        }

        r.versin_reduced(p, ctx)
    }

    // versine of the angle in [0, 2*pi) which is not a multiple of pi/2.
    fn versin_reduced(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        // 1 - cos(x) = 2t^2 / (1 + t^2), t = tan(x/2)
        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        let t = self.mul_full_prec(&HALF)?.tan(p_wrk, ctx)?;
        let tt = t.mul(&t, p_wrk, rm)?;
        let den = ONE.add(&tt, p_wrk, rm);

        tt.mul_full_prec(&TWO)?.div(&den, p, rm)
    }
}
