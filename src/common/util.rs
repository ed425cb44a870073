//! Auxiliary functions.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::Pow;
use num_traits::Signed;
use num_traits::Zero;

use crate::common::consts::TEN_POWERS;
use crate::defs::RoundingMode;
use crate::defs::Sign;

/// Returns 10 to the power of `n`.
/// The result has `n + 1` digits, so callers keep `n` within the digit count of their operands
/// or the requested precision.
pub fn ten_pow(n: u64) -> BigInt {
    if n < TEN_POWERS.len() as u64 {
        TEN_POWERS[n as usize].clone()
    } else {
        Pow::pow(BigInt::from(10u32), n)
    }
}

/// Number of decimal digits in the magnitude of `m`. Zero has one digit.
pub fn digit_count(m: &BigInt) -> u64 {
    let bits = m.bits();
    if bits <= 1 {
        return 1;
    }

    // lower estimate: log10(2) > 0.301029995
    let mut d = ((bits - 1) as u128 * 301_029_995 / 1_000_000_000) as u64 + 1;
    let mag = m.abs();
    while mag >= ten_pow(d) {
        d += 1;
    }
    d
}

/// Divides `m` by `10^k` and rounds the quotient using rounding mode `rm`.
/// `sticky` marks that `m` itself was already truncated, i.e. the true value is slightly larger in magnitude.
/// The sign `s` of the true value is used by directional rounding modes.
pub fn round_div_pow10(m: &BigInt, k: u64, sticky: bool, s: Sign, rm: RoundingMode) -> BigInt {
    if k == 0 {
        if sticky && rm.round_up(Ordering::Less, true, false, s) {
            return m + s.to_int() as i32;
        }
        return m.clone();
    }

    let d = ten_pow(k);
    let q = m / &d;
    let r = (m % &d).abs();

    let twice = &r + &r;
    let half = match twice.cmp(&d) {
        Ordering::Equal if sticky => Ordering::Greater,
        o => o,
    };

    let discarded = sticky || !r.is_zero();
    let odd = q.bit(0);

    if rm.round_up(half, discarded, odd, s) {
        q + s.to_int() as i32
    } else {
        q
    }
}
