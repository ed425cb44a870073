//! Square root.

use crate::common::consts::HALF;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_NEWTON_ITERATIONS;
use crate::num::Decimal;

impl Decimal {
    /// Computes the square root of a number with precision `p` using Newton's method.
    /// The stopping threshold and the rounding mode are taken from the context `ctx`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is negative.
    ///  - NoConvergence: the stopping threshold is not reached in the maximum number of steps.
    pub fn sqrt(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::Domain("square root of a negative number"));
        }

        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let p_wrk = p + GUARD_DIGITS;

        // sqrt(a * 10^(2k)) = sqrt(a) * 10^k, where 1 <= a < 100
        let k = self.exponent().div_euclid(2);
        let a = self.mul_pow10(-2 * k)?;

        // x_(n+1) = (x_n + a/x_n) / 2
        let y = newton(&a.round(p_wrk, rm), MAX_NEWTON_ITERATIONS, p_wrk, ctx, |x| {
            let q = a.div(x, p_wrk, rm)?;
            Ok(x.add_full_prec(&q).mul_full_prec(&HALF)?.round(p_wrk, rm))
        })?;

        Ok(y.mul_pow10(k)?.round(p, rm))
    }
}

/// Runs Newton's iteration `x_(n+1) = step(x_n)` from `seed` with working precision `p`
/// until [`newton_done`] stops it.
///
/// ## Errors
///
///  - NoConvergence: the iteration did not stop in `max_steps` steps.
pub(crate) fn newton<F>(seed: &Decimal, max_steps: usize, p: usize, ctx: &Context, step: F) -> Result<Decimal, Error>
where
    F: Fn(&Decimal) -> Result<Decimal, Error>,
{
    let mut x = seed.clone();
    let mut prev_diff: Option<Decimal> = None;

    for i in 0..max_steps {
        let y = step(&x)?;
        let diff = x.sub_full_prec(&y).abs();

        log::trace!("newton step {}: diff = {}", i, diff);

        if newton_done(&diff, prev_diff.as_ref(), &y, p, ctx) {
            return Ok(y);
        }

        prev_diff = Some(diff);
        x = y;
    }

    log::debug!("newton iteration did not converge in {} steps", max_steps);

    Err(Error::NoConvergence(max_steps))
}

/// Stopping criterion shared by Newton iterations.
/// The step `diff` is compared with epsilon if it is configured,
/// or with the unit in the last place of the approximation `y` otherwise.
/// Iteration stops also when the step stops decreasing, which means rounding noise dominates.
pub(crate) fn newton_done(diff: &Decimal, prev_diff: Option<&Decimal>, y: &Decimal, p: usize, ctx: &Context) -> bool {
    let converged = match ctx.epsilon() {
        Some(eps) => diff < eps,
        None => *diff <= y.ulp(p),
    };

    converged || prev_diff.map_or(false, |prev| diff >= prev)
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
    fn test_sqrt() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("2").sqrt(p, &ctx).unwrap(), d("1.41421356237309504880168872421"));
        assert_eq!(d("4").sqrt(p, &ctx).unwrap(), d("2"));
        assert_eq!(d("0.0001").sqrt(p, &ctx).unwrap(), d("0.01"));
        assert_eq!(d("1e-100").sqrt(p, &ctx).unwrap(), d("1e-50"));
        assert_eq!(d("123456789e50").sqrt(p, &ctx).unwrap(), d("111111110605555554405416661434"));
        assert_eq!(d("0.5").sqrt(p, &ctx).unwrap(), d("0.707106781186547524400844362105"));
        assert!(d("0").sqrt(p, &ctx).unwrap().is_zero());
        assert_eq!(d("-1").sqrt(p, &ctx), Err(Error::Domain("square root of a negative number")));
    }

    #[test]
    fn test_sqrt_extreme_exponents() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let p = 30;

        assert_eq!(d("1e-20000").sqrt(p, &ctx).unwrap(), d("1e-10000"));
        assert_eq!(d("1e-20001").sqrt(p, &ctx).unwrap(), d("3.16227766016837933199889354443e-10001"));
        assert_eq!(d("4e20000").sqrt(p, &ctx).unwrap(), d("2e10000"));
        assert_eq!(d("2e-5000000000").sqrt(p, &ctx).unwrap(), d("1.41421356237309504880168872421e-2500000000"));
        assert_eq!(d("9e2000000000000000000").sqrt(p, &ctx).unwrap(), d("3e1000000000000000000"));
    }

    #[test]
    fn test_newton_step_limit() {
        let ctx = Context::new(Precision::new(100, 30).unwrap());
        let two = d("2");
        let step = |x: &Decimal| -> Result<Decimal, Error> {
            let q = two.div(x, 38, RoundingMode::ToEven)?;
            Ok(x.add_full_prec(&q).mul_full_prec(&HALF)?.round(38, RoundingMode::ToEven))
        };

        // a distant seed only halves per step
        assert_eq!(newton(&d("1e6"), 5, 38, &ctx, step), Err(Error::NoConvergence(5)));

        let r = newton(&d("1e6"), MAX_NEWTON_ITERATIONS, 38, &ctx, step).unwrap();
        assert_eq!(r.round(30, RoundingMode::ToEven), d("1.41421356237309504880168872421"));

        // no steps at all
        assert_eq!(newton(&two, 0, 38, &ctx, step), Err(Error::NoConvergence(0)));
    }

    #[test]
    fn test_sqrt_epsilon() {
        // loose epsilon stops early
        let prec = Precision::new(100, 30).unwrap().with_epsilon(d("0.01")).unwrap();
        let ctx = Context::new(prec);
        let r = d("2").sqrt(30, &ctx).unwrap();
        assert!(r.sub_full_prec(&d("1.41421356237309504880168872421")).abs() < d("0.01"));
        assert_ne!(r, d("1.41421356237309504880168872421"));

        // tight epsilon is limited by the working precision
        let prec = Precision::new(100, 30).unwrap().with_epsilon(d("1e-100")).unwrap();
        let ctx = Context::new(prec);
        assert_eq!(d("2").sqrt(30, &ctx).unwrap(), d("1.41421356237309504880168872421"));
    }
}
