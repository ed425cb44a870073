//! Natural logarithm of 10.

use crate::common::consts::THREE;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::ops::consts::compute_ln2;

/// Computes ln(10) with `p` digits using `n` continued fraction terms.
pub(crate) fn compute_ln10(n: usize, p: usize, rm: RoundingMode) -> Result<Decimal, Error> {
    // ln(10) = 3*ln(2) + ln(1 + 0.25)
    let p_wrk = p + GUARD_DIGITS;

    let ln2 = compute_ln2(n, p_wrk, rm)?;
    let quarter = Decimal::from_i64_scaled(25, 2);
    let ln125 = quarter.ln_cf(n, p_wrk, rm)?;

    let ret = ln2.mul_full_prec(&THREE)?.add_full_prec(&ln125);

    Ok(ret.round(p, rm))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ln10_const() {
        let ln10 = compute_ln10(100, 40, RoundingMode::ToEven).unwrap();
        let expected: Decimal = "2.302585092994045684017991454684364207601".parse().unwrap();
        assert_eq!(ln10, expected);
    }
}
