//! Static constants.

use crate::num::Decimal;
use lazy_static::lazy_static;
use num_bigint::BigInt;

/// Number of cached powers of ten.
const TEN_POWERS_LEN: usize = 256;

lazy_static! {

    /// 10^0, 10^1, ..., 10^255
    pub(crate) static ref TEN_POWERS: Vec<BigInt> = {
        let mut v = Vec::with_capacity(TEN_POWERS_LEN);
        let mut p = BigInt::from(1u32);
        for _ in 0..TEN_POWERS_LEN {
            v.push(p.clone());
            p *= 10u32;
        }
        v
    };

    /// 1
    pub(crate) static ref ONE: Decimal = Decimal::from_i64(1);

    /// 2
    pub(crate) static ref TWO: Decimal = Decimal::from_i64(2);

    /// 3
    pub(crate) static ref THREE: Decimal = Decimal::from_i64(3);

    /// 0.5
    pub(crate) static ref HALF: Decimal = Decimal::from_i64_scaled(5, 1);

    /// 0.2
    pub(crate) static ref ONE_FIFTH: Decimal = Decimal::from_i64_scaled(2, 1);

    /// Argument bound below which hyperbolic sine is computed by series.
    pub(crate) static ref SINH_SERIES_BOUND: Decimal = Decimal::from_i64_scaled(1, 3);

    /// Argument bound below which inverse hyperbolic sine and tangent are computed by series.
    pub(crate) static ref INV_HYPERBOLIC_SERIES_BOUND: Decimal = Decimal::from_i64_scaled(1, 1);
}
