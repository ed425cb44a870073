//! Hyperbolic sine.

use crate::common::consts::HALF;
use crate::common::consts::SINH_SERIES_BOUND;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the hyperbolic sine of a number with precision `p`.
    /// The number of series terms and the rounding mode are taken from the context `ctx`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large to be represented.
    pub fn sinh(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // sinh(x) = x + x^3/6 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign(), p, rm));
        }

        if self.abs() < *SINH_SERIES_BOUND {
            let ret = self.sinh_series(ctx.term_count(), p_wrk, rm)?;
            return Ok(ret.round(p, rm));
        }

        // sinh(x) = (e^x - e^-x) / 2, the difference cancels leading digits for small x
        let p_x = p_wrk + (-self.exponent()).max(0) as usize;
        let ex = self.exp(p_x, ctx)?;
        let emx = ex.reciprocal(p_x, rm)?;

        Ok(ex.sub(&emx, p_x, rm).mul_full_prec(&HALF)?.round(p, rm))
    }

    /// Hyperbolic sine by the series with `n` terms.
    fn sinh_series(&self, n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // sinh(x) = x + x^3/3! + x^5/5! + ...
        let xx = self.mul(self, p, rm)?;
        let mut term = self.round(p, rm);
        let mut ret = term.clone();

        for i in 1..n {
            let k = 2 * i;
            term = term.mul(&xx, p, rm)?.div(&Self::from_usize(k * (k + 1)), p, rm)?;
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
    fn test_sinh() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1").sinh(p, &ctx).unwrap(), d("1.17520119364380145688238185060"));
        assert_eq!(d("-1").sinh(p, &ctx).unwrap(), d("-1.17520119364380145688238185060"));
        assert_eq!(d("0.01").sinh(p, &ctx).unwrap(), d("0.0100001666675000019841297398614"));
        assert_eq!(d("0.0005").sinh(p, &ctx).unwrap(), d("0.000500000020833333593750001550099"));
        assert_eq!(d("-0.0005").sinh(p, &ctx).unwrap(), d("-0.000500000020833333593750001550099"));
        assert_eq!(d("50").sinh(p, &ctx).unwrap(), d("2.59235276429353623204372666147e21"));
        assert_eq!(d("1e-40").sinh(p, &ctx).unwrap(), d("1e-40"));
        assert!(d("0").sinh(p, &ctx).unwrap().is_zero());
    }

    #[test]
    fn test_sinh_extreme_arguments() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1e-5000000000").sinh(p, &ctx).unwrap(), d("1e-5000000000"));
        assert_eq!(d("-1e-2000000000000000000").sinh(p, &ctx).unwrap(), d("-1e-2000000000000000000"));
        assert_eq!(d("1e20").sinh(p, &ctx), Err(Error::ExponentOverflow));

        let ctx = Context::new(Precision::new(100, 30).unwrap().with_rounding_mode(RoundingMode::Ceiling));
        assert_eq!(d("1e-5000000000").sinh(p, &ctx).unwrap(), d("1.00000000000000000000000000001e-5000000000"));
    }

    #[test]
    fn test_sinh_series() {
        let rm = RoundingMode::ToEven;

        // two terms: x + x^3/6
        let x = d("0.1");
        assert_eq!(x.sinh_series(2, 20, rm).unwrap(), d("0.10016666666666666667"));
        assert_eq!(x.sinh_series(1, 20, rm).unwrap(), x);
    }
}
