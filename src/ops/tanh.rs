//! Hyperbolic tangent.

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the hyperbolic tangent of a number with precision `p` as sinh(x)/cosh(x).
    /// Arguments large in magnitude give 1 or -1 without evaluating the exponent.
    pub fn tanh(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // tanh(x) = x - x^3/3 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign().invert(), p, rm));
        }

        // 1 - |tanh(x)| = 2/(e^(2|x|) + 1) < 10^(-p_wrk) when |x| > 1.2*p_wrk > ln(10)*p_wrk/2
        let bound = Self::from_parts((12 * p_wrk).into(), 1)?;
        if self.abs() > bound {
            log::trace!("tanh saturated at |x| > {}", bound);
            let one = Self::one().with_sign(self.sign());
            return Ok(one.round_perturbed(self.sign().invert(), p, rm));
        }

        let s = self.sinh(p_wrk, ctx)?;
        let c = self.cosh(p_wrk, ctx)?;

        s.div(&c, p, rm)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use crate::prec::Precision;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_tanh() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("0.5").tanh(p, &ctx).unwrap(), d("0.462117157260009758502318483644"));
        assert_eq!(d("-0.5").tanh(p, &ctx).unwrap(), d("-0.462117157260009758502318483644"));
        assert_eq!(d("0.0001").tanh(p, &ctx).unwrap(), d("0.0000999999996666666679999999946032"));
        assert_eq!(d("100").tanh(p, &ctx).unwrap(), d("1"));
        assert_eq!(d("-100").tanh(p, &ctx).unwrap(), d("-1"));
        assert!(d("0").tanh(p, &ctx).unwrap().is_zero());
    }

    #[test]
    fn test_tanh_saturation() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1e20").tanh(p, &ctx).unwrap(), d("1"));
        assert_eq!(d("-1e20").tanh(p, &ctx).unwrap(), d("-1"));
        assert_eq!(d("1e5000000000").tanh(p, &ctx).unwrap(), d("1"));
        assert_eq!(d("45").tanh(p, &ctx).unwrap(), d("1"));
        assert_eq!(d("46").tanh(p, &ctx).unwrap(), d("1"));

        // the distance to 1 is seen by directed rounding
        let ctx = Context::new(Precision::new(100, 30).unwrap().with_rounding_mode(RoundingMode::Floor));
        assert_eq!(d("1e20").tanh(p, &ctx).unwrap(), d("0.999999999999999999999999999999"));

        let ctx = Context::new(Precision::new(100, 30).unwrap().with_rounding_mode(RoundingMode::Ceiling));
        assert_eq!(d("-1e20").tanh(p, &ctx).unwrap(), d("-0.999999999999999999999999999999"));
    }

    #[test]
    fn test_tanh_tiny() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1e-5000000000").tanh(p, &ctx).unwrap(), d("1e-5000000000"));
        assert_eq!(d("-4e-2000000000000000000").tanh(p, &ctx).unwrap(), d("-4e-2000000000000000000"));
    }
}
