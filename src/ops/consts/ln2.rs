//! Natural logarithm of 2.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;

/// Computes ln(2) with `p` digits using `n` continued fraction terms.
pub(crate) fn compute_ln2(n: usize, p: usize, rm: RoundingMode) -> Result<Decimal, Error> {
    // ln(2) = ln(1 + 1)
    let p_wrk = p + GUARD_DIGITS;
    let ret = Decimal::one().ln_cf(n, p_wrk, rm)?;
    Ok(ret.round(p, rm))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ln2_const() {
        let ln2 = compute_ln2(100, 40, RoundingMode::ToEven).unwrap();
        let expected: Decimal = "0.6931471805599453094172321214581765680755".parse().unwrap();
        assert_eq!(ln2, expected);
    }
}
