//! Inverse hyperbolic sine.

use crate::common::consts::INV_HYPERBOLIC_SERIES_BOUND;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the inverse hyperbolic sine of a number with precision `p`.
    /// The number of series terms and the rounding mode are taken from the context `ctx`.
    pub fn asinh(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // asinh(x) = x - x^3/6 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign().invert(), p, rm));
        }

        if self.abs() < *INV_HYPERBOLIC_SERIES_BOUND {
            let ret = self.asinh_series(ctx.term_count(), p_wrk, rm)?;
            return Ok(ret.round(p, rm));
        }

        // asinh(-x) = -asinh(x)
        if self.is_negative() {
            return Ok(-(-self).asinh(p, ctx)?);
        }

        // asinh(x) = ln(2x) + 1/(4x^2) - ...
        if self.exponent() > p_wrk as i64 {
            return self.mul_full_prec(&TWO)?.ln(p, ctx);
        }

        // asinh(x) = ln(x + sqrt(x^2 + 1))
        let xx = self.mul(self, p_wrk, rm)?;
        let s = xx.add(&ONE, p_wrk, rm).sqrt(p_wrk, ctx)?;

        self.add(&s, p_wrk, rm).ln(p, ctx)
    }

    /// Inverse hyperbolic sine by the series with `n` terms.
    fn asinh_series(&self, n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // asinh(x) = x - 1/2 * x^3/3 + 1*3/(2*4) * x^5/5 - ...
        let xx = self.mul(self, p, rm)?;
        let mut a = Self::one();
        let mut xn = self.round(p, rm);
        let mut ret = xn.clone();

        for i in 1..n {
            a = -a
                .mul_full_prec(&Self::from_usize(2 * i - 1))?
                .div(&Self::from_usize(2 * i), p, rm)?;
            xn = xn.mul(&xx, p, rm)?;

            let term = a.mul(&xn, p, rm)?.div(&Self::from_usize(2 * i + 1), p, rm)?;
            ret = ret.add(&term, p, rm);
        }

        Ok(ret)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::prec::Precision;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_asinh() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1").asinh(p, &ctx).unwrap(), d("0.881373587019543025232609324980"));
        assert_eq!(d("-1").asinh(p, &ctx).unwrap(), d("-0.881373587019543025232609324980"));
        assert_eq!(d("0.05").asinh(p, &ctx).unwrap(), d("0.0499791900693486652313949621364"));
        assert_eq!(d("-0.05").asinh(p, &ctx).unwrap(), d("-0.0499791900693486652313949621364"));
        assert_eq!(d("0.1").asinh(p, &ctx).unwrap(), d("0.0998340788992075633273031247048"));
        assert_eq!(d("1e10").asinh(p, &ctx).unwrap(), d("23.7189981105004021495996466683"));
        assert_eq!(d("1e-40").asinh(p, &ctx).unwrap(), d("1e-40"));
        assert!(d("0").asinh(p, &ctx).unwrap().is_zero());
    }

    #[test]
    fn test_asinh_extreme_arguments() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1e-5000000000").asinh(p, &ctx).unwrap(), d("1e-5000000000"));
        assert_eq!(d("-1e-5000000000").asinh(p, &ctx).unwrap(), d("-1e-5000000000"));

        // asinh(x) = ln(2x) up to the last digit
        assert_eq!(d("1e5000000000").asinh(p, &ctx).unwrap(), d("11512925465.6633756006499025828"));
        assert_eq!(d("-1e5000000000").asinh(p, &ctx).unwrap(), d("-11512925465.6633756006499025828"));
        assert_eq!(d("1e2000000000000000000").asinh(p, &ctx).unwrap(), d("4605170185988091368.72913008993"));
    }

    #[test]
    fn test_asinh_series() {
        let rm = RoundingMode::ToEven;

        // two terms: x - x^3/6
        assert_eq!(d("0.1").asinh_series(2, 20, rm).unwrap(), d("0.099833333333333333333"));
    }
}
