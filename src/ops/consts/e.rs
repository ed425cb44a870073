//! Euler's number.

use num_bigint::BigInt;

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

/// Computes e with `p` digits as the sum of the first `n` terms of 1/0! + 1/1! + 1/2! + ...
pub(crate) fn compute_e(n: usize, p: usize, rm: RoundingMode) -> Result<Decimal, Error> {
    let p_wrk = p + GUARD_DIGITS;

    let mut ret = Decimal::one();
    let mut fct = BigInt::from(1u32);

    for k in 1..n {
        fct *= k;
        let term = Decimal::one().div(&Decimal::from(fct.clone()), p_wrk, rm)?;
        ret = ret.add(&term, p_wrk, rm);
    }

    Ok(ret.round(p, rm))
}
