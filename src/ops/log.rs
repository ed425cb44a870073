//! Logarithms.

use lazy_static::lazy_static;

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

lazy_static! {
    /// Upper bound of the reduced logarithm argument, approximately sqrt(10).
    static ref SQRT_TEN: Decimal = Decimal::from_i64_scaled(31622776601683793, 16);
}

impl Decimal {
    /// Computes the natural logarithm of a number with precision `p`.
    /// The number of continued fraction terms and the rounding mode are taken from the context `ctx`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is zero or negative.
    pub fn ln(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        match self.cmp_zero() {
            core::cmp::Ordering::Equal => return Err(Error::Domain("logarithm of zero is negative infinity")),
            core::cmp::Ordering::Less => return Err(Error::Domain("logarithm of a negative number is not a number")),
            core::cmp::Ordering::Greater => {}
        }

        if *self == *ONE {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let n = ctx.term_count();
        let p_wrk = p + GUARD_DIGITS;

        // x = r * 10^j, where 10^(-1/2) <= r < 10^(1/2)
        let mut j = self.exponent();
        let mut r = self.mul_pow10(-j)?;
        if r >= *SQRT_TEN {
            r = r.mul_pow10(-1)?;
            j += 1;
        }

        // r - 1 is exact, so arguments close to 1 keep their digits
        let y = r.sub_full_prec(&ONE).round(p_wrk, rm);
        let ln_r = y.ln_cf(n, p_wrk, rm)?;

        let ret = if j == 0 {
            ln_r
        } else {
            let jd = Self::from_i64(j);
            let ln10 = ctx.ln_10_num(p_wrk + jd.digits() as usize)?;
            ln10.mul_full_prec(&jd)?.add(&ln_r, p_wrk, rm)
        };

        log::trace!("ln: r = {}, j = {}", r, j);

        Ok(ret.round(p, rm))
    }

    /// Computes `ln(1 + self)` with precision `p` without losing the digits of small arguments.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is not greater than -1.
    pub(crate) fn ln_1p(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        let x = ONE.add(self, p + GUARD_DIGITS, ctx.rounding_mode());

        // inside the range of the reduced argument of ln
        let lo = Self::from_i64_scaled(-6, 1);
        if *self >= lo && x < *SQRT_TEN {
            if self.is_zero() {
                return Ok(Self::zero());
            }

            let rm = ctx.rounding_mode();
            let p_wrk = p + GUARD_DIGITS;
            let y = self.round(p_wrk, rm);
            let ret = y.ln_cf(ctx.term_count(), p_wrk, rm)?;

            Ok(ret.round(p, rm))
        } else {
            x.ln(p, ctx)
        }
    }

    /// Computes the decimal logarithm of a number with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is zero or negative.
    pub fn log10(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        let p_wrk = p + GUARD_DIGITS;
        let rm = ctx.rounding_mode();

        let ln = self.ln(p_wrk, ctx)?;
        let ln10 = ctx.ln_10_num(p_wrk)?;

        ln.div(&ln10, p, rm)
    }

    /// Computes the binary logarithm of a number with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is zero or negative.
    pub fn log2(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        let p_wrk = p + GUARD_DIGITS;
        let rm = ctx.rounding_mode();

        let ln = self.ln(p_wrk, ctx)?;
        let ln2 = ctx.ln_2_num(p_wrk)?;

        ln.div(&ln2, p, rm)
    }

    /// Computes the logarithm of a number with base `b` and precision `p`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is zero or negative, or the base is not positive, or the base is 1.
    pub fn log_base(&self, b: &Self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if !b.is_positive() {
            return Err(Error::Domain("logarithm base must be positive"));
        }

        if *b == *ONE {
            return Err(Error::Domain("logarithm base must not be 1"));
        }

        let p_wrk = p + GUARD_DIGITS;
        let rm = ctx.rounding_mode();

        let ln = self.ln(p_wrk, ctx)?;
        let ln_b = b.ln(p_wrk, ctx)?;

        ln.div(&ln_b, p, rm)
    }

    /// Natural logarithm of `1 + self` by the continued fraction with `n` terms.
    pub(crate) fn ln_cf(&self, n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // ln(1 + y) = y / (1 + y / (2 + y / (3 + 4y / (4 + 4y / (5 + 9y / (6 + ...))))))
        let mut s = Self::zero();

        for i in (1..=n).rev() {
            let c = (i + 1) / 2;
            let num = self.mul_full_prec(&Self::from_usize(c * c))?;
            let den = Self::from_usize(i + 1).add(&s, p, rm);
            s = num.div(&den, p, rm)?;
        }

        let den = ONE.add(&s, p, rm);
        self.div(&den, p, rm)
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
    fn test_ln() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("2").ln(p, &ctx).unwrap(), d("0.693147180559945309417232121458"));
        assert_eq!(d("10").ln(p, &ctx).unwrap(), d("2.30258509299404568401799145468"));
        assert_eq!(d("0.5").ln(p, &ctx).unwrap(), d("-0.693147180559945309417232121458"));
        assert_eq!(d("12345.678").ln(p, &ctx).unwrap(), d("9.42106132129183197652678399107"));
        assert_eq!(d("1e-100").ln(p, &ctx).unwrap(), d("-230.258509299404568401799145468"));
        assert_eq!(d("1.000000000000000000000000000001").ln(p, &ctx).unwrap(), d("1.0e-30"));

        assert!(d("1").ln(p, &ctx).unwrap().is_zero());
        assert_eq!(d("0").ln(p, &ctx), Err(Error::Domain("logarithm of zero is negative infinity")));
        assert_eq!(d("-1").ln(p, &ctx), Err(Error::Domain("logarithm of a negative number is not a number")));
    }

    #[test]
    fn test_ln_1p() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1e-40").ln_1p(p, &ctx).unwrap(), d("1e-40"));
        assert_eq!(d("0.5").ln_1p(p, &ctx).unwrap(), d("1.5").ln(p, &ctx).unwrap());
        assert_eq!(d("99").ln_1p(p, &ctx).unwrap(), d("100").ln(p, &ctx).unwrap());
        assert!(d("-1").ln_1p(p, &ctx).is_err());
    }

    #[test]
    fn test_log() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1000").log10(p, &ctx).unwrap(), d("3"));
        assert_eq!(d("0.001").log10(p, &ctx).unwrap(), d("-3"));
        assert_eq!(d("8").log2(p, &ctx).unwrap(), d("3"));
        assert_eq!(d("2").log10(p, &ctx).unwrap(), d("0.301029995663981195213738894724"));
        assert_eq!(d("10").log2(p, &ctx).unwrap(), d("3.32192809488736234787031942949"));

        assert_eq!(d("81").log_base(&d("3"), p, &ctx).unwrap(), d("4"));
        assert!(d("5").log_base(&d("1"), p, &ctx).is_err());
        assert!(d("5").log_base(&d("0"), p, &ctx).is_err());
        assert!(d("5").log_base(&d("-2"), p, &ctx).is_err());
        assert!(d("0").log10(p, &ctx).is_err());
        assert!(d("-8").log2(p, &ctx).is_err());
    }
}
