//! Tangent.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_TAN_REDUCTION_STEPS;
use crate::num::Decimal;
use crate::ops::util::Angle;

/// States of the tangent argument reduction.
#[derive(Debug)]
enum TanReduction {
    /// Reduce the argument into [0, 2*pi).
    FullCycle(Decimal),

    /// Reduce the angle in [0, 2*pi) into [0, pi/4] using the period and the symmetries.
    Quadrant { r: Decimal, reduced: bool },

    /// Evaluate the continued fraction for the angle in [0, pi/4].
    Base { x: Decimal, reciprocal: bool, sign: Sign },
}

impl Decimal {
    /// Computes the tangent of a number with precision `p`.
    /// The number of continued fraction terms and the rounding mode are taken from the context `ctx`.
    /// Arguments within two units in the `p`-th digit of a multiple of pi give exactly zero.
    ///
    /// ## Errors
    ///
    ///  - Domain: the argument is an odd multiple of pi/2.
    pub fn tan(&self, p: usize, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let rm = ctx.rounding_mode();
        let n = ctx.term_count();
        let p_wrk = p + GUARD_DIGITS;

        // tan(x) = x + x^3/3 + ...
        if self.is_tiny(p_wrk) {
            return Ok(self.round_perturbed(self.sign(), p, rm));
        }

        // angles close to pi/2 lose up to p digits to cancellation
        let p_ext = p_wrk + p;

        let mut state = TanReduction::FullCycle(self.clone());
        let mut steps = 0;

        loop {
            steps += 1;
            assert!(
                steps <= MAX_TAN_REDUCTION_STEPS,
                "tangent argument reduction exceeded {} steps",
                MAX_TAN_REDUCTION_STEPS
            );

            log::trace!("tan reduction step {}: {:?}", steps, state);

            state = match state {
                TanReduction::FullCycle(x) => {
                    let (r, reduced) = x.reduce_full_cycle(p_ext, ctx)?;
                    TanReduction::Quadrant { r, reduced }
                }
                TanReduction::Quadrant { r, reduced } => {
                    match r.classify_angle(self, reduced, p, ctx)? {
                        Some(Angle::Zero) | Some(Angle::Pi) => return Ok(Self::zero()),
                        Some(Angle::HalfPi) | Some(Angle::ThreeHalfPi) => {
                            return Err(Error::Domain("tangent of an odd multiple of pi/2 is undefined"))
                        }
                        None => {}
                    }

                    let pi = ctx.pi_num(p_ext)?;
                    let half_pi = pi.mul_full_prec(&HALF)?;
                    let quarter_pi = half_pi.mul_full_prec(&HALF)?;

                    // period pi
                    let mut r = r;
                    if r > pi {
                        r = r.sub_full_prec(&pi);
                    }

                    // tan(x - pi) = tan(x), and tan(-x) = -tan(x)
                    if r > half_pi {
                        r = r.sub_full_prec(&pi);
                    }
                    let sign = r.sign();
                    let r = r.abs();

                    // tan(x) = 1 / tan(pi/2 - x)
                    if r > quarter_pi {
                        TanReduction::Base {
                            x: half_pi.sub(&r, p_wrk, rm),
                            reciprocal: true,
                            sign,
                        }
                    } else {
                        TanReduction::Base {
                            x: r.round(p_wrk, rm),
                            reciprocal: false,
                            sign,
                        }
                    }
                }
                TanReduction::Base { x, reciprocal, sign } => {
                    let t = x.tan_cf(n, p_wrk, rm)?;
                    let t = if reciprocal { t.reciprocal(p_wrk, rm)? } else { t };

                    return Ok(t.with_sign(sign).round(p, rm));
                }
            };
        }
    }

    /// Tangent by the continued fraction with `n` terms.
    /// The argument is expected to be in the range [0, pi/4].
    fn tan_cf(&self, n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // tan(x) = x / (1 - x^2 / (3 - x^2 / (5 - x^2 / (7 - ...))))
        let xx = self.mul(self, p, rm)?;
        let mut s = Self::zero();

        for k in (2..=n).rev() {
            let den = Self::from_usize(2 * k - 1).sub(&s, p, rm);
            s = xx.div(&den, p, rm)?;
        }

        let den = ONE.sub(&s, p, rm);
        self.div(&den, p, rm)
    }
}
