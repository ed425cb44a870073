//! Mathematical constants.

mod e;
mod ln10;
mod ln2;
mod pi;

use once_cell::sync::OnceCell;

use crate::defs::Error;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::prec::Precision;

pub(crate) use e::compute_e;
pub(crate) use ln10::compute_ln10;
pub(crate) use ln2::compute_ln2;
pub(crate) use pi::compute_pi;

/// Holds the value of a constant computed once with the precision of the cache.
#[derive(Debug)]
struct ConstCache {
    name: &'static str,
    val: OnceCell<Decimal>,
}

impl ConstCache {
    fn new(name: &'static str) -> Self {
        ConstCache {
            name,
            val: OnceCell::new(),
        }
    }

    // Return the value with `p` digits.
    // Precision above the cache precision is served by a fresh computation that is not stored.
    fn for_prec<F>(&self, p: usize, prec: &Precision, compute: F) -> Result<Decimal, Error>
    where
        F: Fn(usize, usize, crate::defs::RoundingMode) -> Result<Decimal, Error>,
    {
        let rm = prec.rounding_mode();
        let n = prec.term_count();
        let cache_p = cache_digits(prec);

        if p > cache_p {
            log::debug!("{} requested with {} digits above the cache precision {}", self.name, p, cache_p);
            return compute(n, p, rm);
        }

        let v = self.val.get_or_try_init(|| {
            log::debug!("computing {} with {} digits and {} terms", self.name, cache_p, n);
            compute(n, cache_p, rm)
        })?;

        Ok(v.round(p, rm))
    }
}

// Argument reduction of trigonometric functions doubles the working precision,
// and sine and cosine call the tangent with guard digits added twice.
fn cache_digits(prec: &Precision) -> usize {
    2 * prec.digits() + 6 * GUARD_DIGITS
}

/// Constants cache contains arbitrary-precision mathematical constants.
/// Each constant is computed on first use, and can be shared between threads.
#[derive(Debug)]
pub struct Consts {
    pi: ConstCache,
    e: ConstCache,
    ln2: ConstCache,
    ln10: ConstCache,
}

impl Consts {
    /// Initializes an empty constants cache.
    pub fn new() -> Self {
        Consts {
            pi: ConstCache::new("pi"),
            e: ConstCache::new("e"),
            ln2: ConstCache::new("ln(2)"),
            ln10: ConstCache::new("ln(10)"),
        }
    }

    /// Returns the value of the pi number with `p` digits.
    pub(crate) fn pi_num(&self, p: usize, prec: &Precision) -> Result<Decimal, Error> {
        self.pi.for_prec(p, prec, compute_pi)
    }

    /// Returns the value of the Euler number with `p` digits.
    pub(crate) fn e_num(&self, p: usize, prec: &Precision) -> Result<Decimal, Error> {
        self.e.for_prec(p, prec, compute_e)
    }

    /// Returns the value of the natural logarithm of 2 with `p` digits.
    pub(crate) fn ln_2_num(&self, p: usize, prec: &Precision) -> Result<Decimal, Error> {
        self.ln2.for_prec(p, prec, compute_ln2)
    }

    /// Returns the value of the natural logarithm of 10 with `p` digits.
    pub(crate) fn ln_10_num(&self, p: usize, prec: &Precision) -> Result<Decimal, Error> {
        self.ln10.for_prec(p, prec, compute_ln10)
    }
}

impl Default for Consts {
    fn default() -> Self {
        Self::new()
    }
}
