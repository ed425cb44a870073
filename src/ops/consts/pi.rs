//! Archimedes' constant.

use crate::common::consts::ONE_FIFTH;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

/// Computes pi with `p` digits using `n` continued fraction terms for each arctangent.
pub(crate) fn compute_pi(n: usize, p: usize, rm: RoundingMode) -> Result<Decimal, Error> {
    // pi = 16*atan(1/5) - 4*atan(1/239)
    let p_wrk = p + GUARD_DIGITS;

    let a = ONE_FIFTH.atan_cf(n, p_wrk, rm)?;
    let x = Decimal::from_i64(239).reciprocal(p_wrk, rm)?;
    let b = x.atan_cf(n, p_wrk, rm)?;

    let ret = a
        .mul_full_prec(&Decimal::from_i64(16))?
        .sub_full_prec(&b.mul_full_prec(&Decimal::from_i64(4))?);

    Ok(ret.round(p, rm))
}
