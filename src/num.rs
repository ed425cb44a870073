//! Decimal definition and basic arithmetic, comparison, and number manipulation operations.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Neg;
use core::str::FromStr;

use num_bigint::BigInt;
use num_traits::Signed;
use num_traits::ToPrimitive;
use num_traits::Zero;

use crate::common::util::digit_count;
use crate::common::util::round_div_pow10;
use crate::common::util::ten_pow;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Scale;
use crate::defs::Sign;
use crate::defs::MAX_SCALE;

/// An arbitrary precision decimal floating point number.
///
/// The value of the number is `unscaled * 10^(-scale)`. Arithmetic that can produce
/// more digits than requested takes the precision `p` as the number of significant
/// decimal digits of the result, and the rounding mode `rm`.
#[derive(Clone, Debug, Default)]
pub struct Decimal {
    m: BigInt,
    scale: Scale,
}

impl Decimal {
    /// Returns a new number with value of 0.
    pub fn zero() -> Self {
        Decimal {
            m: BigInt::zero(),
            scale: 0,
        }
    }

    /// Returns a new number with value of 1.
    pub fn one() -> Self {
        Self::from_i64(1)
    }

    /// Constructs a number with the value `m * 10^(-scale)`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the magnitude of `scale` is larger than [`MAX_SCALE`].
    ///
    /// [`MAX_SCALE`]: crate::MAX_SCALE
    pub fn from_parts(m: BigInt, scale: Scale) -> Result<Self, Error> {
        let scale = check_scale(Some(scale))?;
        Ok(Decimal { m, scale })
    }

    /// Constructs a number with the value `v * 10^(-scale)`.
    pub(crate) fn from_i64_scaled(v: i64, scale: i16) -> Self {
        Decimal {
            m: BigInt::from(v),
            scale: scale as Scale,
        }
    }

    /// Constructs a number from a signed integer.
    pub fn from_i64(v: i64) -> Self {
        Decimal {
            m: BigInt::from(v),
            scale: 0,
        }
    }

    /// Constructs a number from an unsigned integer.
    pub fn from_u64(v: u64) -> Self {
        Decimal {
            m: BigInt::from(v),
            scale: 0,
        }
    }

    /// Constructs a number from `usize`.
    pub fn from_usize(v: usize) -> Self {
        Decimal {
            m: BigInt::from(v),
            scale: 0,
        }
    }

    /// Decomposes the number into the unscaled value and the scale.
    pub fn to_raw_parts(self) -> (BigInt, Scale) {
        (self.m, self.scale)
    }

    /// Returns the unscaled value.
    pub fn unscaled(&self) -> &BigInt {
        &self.m
    }

    /// Returns the scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the number is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.m.is_positive()
    }

    /// Returns true if the number is less than zero.
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Returns the sign of the number. Zero is positive.
    pub fn sign(&self) -> Sign {
        if self.m.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns -1, 0, or 1 depending on the sign of the number.
    pub fn signum(&self) -> i8 {
        match self.cmp_zero() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares the number with zero.
    pub fn cmp_zero(&self) -> Ordering {
        self.m.sign().cmp(&num_bigint::Sign::NoSign)
    }

    /// Number of decimal digits in the unscaled value.
    pub fn digits(&self) -> u64 {
        digit_count(&self.m)
    }

    /// Returns the decimal exponent `e` of the most significant digit: `10^e <= |self| < 10^(e+1)`.
    /// For zero, returns the negated scale.
    pub fn exponent(&self) -> i64 {
        (self.digits() as i64 - 1).saturating_sub(self.scale)
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Decimal {
            m: self.m.abs(),
            scale: self.scale,
        }
    }

    /// Changes the sign of the number to the opposite.
    pub fn inv_sign(&mut self) {
        self.m = -core::mem::take(&mut self.m);
    }

    /// Returns the number with the given sign and the magnitude of `self`.
    pub fn with_sign(&self, s: Sign) -> Self {
        if self.sign() == s {
            self.clone()
        } else {
            -self
        }
    }

    /// Returns true if the number has no fractional part.
    pub fn is_integer(&self) -> bool {
        if self.scale <= 0 || self.m.is_zero() {
            return true;
        }

        // a non-zero number with all digits after the point is less than 1
        (self.scale as u64) < self.digits() && (&self.m % ten_pow(self.scale as u64)).is_zero()
    }

    /// Returns the integer value of the number if it is an integer that fits into `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }

        if self.m.is_zero() {
            Some(0)
        } else if self.scale > 0 {
            (&self.m / ten_pow(self.scale as u64)).to_i64()
        } else if self.scale < -19 {
            None
        } else {
            (&self.m * ten_pow(self.scale.unsigned_abs())).to_i64()
        }
    }

    /// Returns the integer part of the number (truncation toward zero).
    pub fn trunc(&self) -> Self {
        if self.scale <= 0 {
            self.clone()
        } else if self.scale as u64 >= self.digits() {
            Self::zero()
        } else {
            Decimal {
                m: &self.m / ten_pow(self.scale as u64),
                scale: 0,
            }
        }
    }

    /// Returns the largest integer not greater than the number.
    pub fn floor(&self) -> Self {
        let t = self.trunc();
        if self.is_negative() && !self.is_integer() {
            t.sub_full_prec(&Self::one())
        } else {
            t
        }
    }

    /// Returns `self * 10^n`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the scale of the result is out of range.
    pub fn mul_pow10(&self, n: i64) -> Result<Self, Error> {
        Ok(Decimal {
            m: self.m.clone(),
            scale: check_scale(self.scale.checked_sub(n))?,
        })
    }

    /// Returns the unit in the last place of `self` rounded to `p` significant digits.
    pub fn ulp(&self, p: usize) -> Self {
        Decimal {
            m: BigInt::from(1u32),
            scale: p as i64 - 1 - self.exponent(),
        }
    }

    /// Removes trailing zeroes of the unscaled value while the scale stays above `min_scale`.
    fn strip_to_scale(mut self, min_scale: Scale) -> Self {
        if self.m.is_zero() {
            self.scale = self.scale.min(min_scale.max(0));
            return self;
        }

        let ten = BigInt::from(10u32);
        while self.scale > min_scale {
            let r = &self.m % &ten;
            if !r.is_zero() {
                break;
            }
            self.m /= &ten;
            self.scale -= 1;
        }
        self
    }

    /// Returns the same value without trailing zeroes in the unscaled value.
    pub fn strip_trailing_zeros(&self) -> Self {
        self.clone().strip_to_scale(Scale::MIN)
    }

    // Round `m * 10^(-scale)` with sticky flag to `p` significant digits.
    // `k` is bounded by the digit count of `m`, and scales stay within `MAX_SCALE`
    // up to digit counts, so the scale arithmetic does not overflow.
    fn round_raw(m: BigInt, scale: Scale, sticky: bool, s: Sign, p: usize, rm: RoundingMode) -> Self {
        let d = digit_count(&m);
        let p = p.max(1) as u64;

        if d <= p && !sticky {
            return Decimal { m, scale };
        }

        let k = d.saturating_sub(p);
        let m = round_div_pow10(&m, k, sticky, s, rm);
        let mut ret = Decimal {
            m,
            scale: scale - k as i64,
        };

        // carry, e.g. 999 -> 1000
        if k > 0 && ret.digits() > p {
            ret.m /= 10u32;
            ret.scale -= 1;
        }

        ret
    }

    /// Rounds the number to `p` significant digits using rounding mode `rm`.
    pub fn round(&self, p: usize, rm: RoundingMode) -> Self {
        if self.digits() <= p as u64 {
            return self.clone();
        }
        Self::round_raw(self.m.clone(), self.scale, false, self.sign(), p, rm)
    }

    /// Rounds the number to have scale not greater than `scale` using rounding mode `rm`.
    pub fn round_to_scale(&self, scale: Scale, rm: RoundingMode) -> Self {
        if self.scale <= scale {
            return self.clone();
        }

        let k = self.scale.abs_diff(scale);
        let m = if k > self.digits() {
            // the whole number is less than one half of the retained unit
            round_div_pow10(&BigInt::zero(), 0, !self.m.is_zero(), self.sign(), rm)
        } else {
            round_div_pow10(&self.m, k, false, self.sign(), rm)
        };

        Decimal { m, scale }
    }

    /// Rounds the value `self + s*eps` to `p` significant digits using rounding mode `rm`,
    /// where `eps` is positive and less than one unit in the digit `p + 2` of `self`.
    /// `self` must not be zero.
    pub(crate) fn round_perturbed(&self, s: Sign, p: usize, rm: RoundingMode) -> Self {
        let p = p.max(1);
        let ext = (p as u64 + 2).saturating_sub(self.digits());

        let m = &self.m * ten_pow(ext);
        let m = if s == self.sign() {
            m
        } else {
            m - self.sign().to_int() as i32
        };

        Self::round_raw(m, self.scale + ext as i64, true, self.sign(), p, rm)
    }

    // Sum rounded to `p` digits when the smaller operand lies below the digit `p + 2` of the larger one.
    // Such sums are not aligned, since the scales can be arbitrarily far apart.
    fn add_far(&self, d2: &Self, p: usize, rm: RoundingMode) -> Option<Self> {
        if self.is_zero() || d2.is_zero() {
            return None;
        }

        let (a, b) = if self.exponent() >= d2.exponent() {
            (self, d2)
        } else {
            (d2, self)
        };

        let last = a.scale.max((p.max(1) as i64 + 1).saturating_sub(a.exponent()));
        if b.exponent() >= last.saturating_neg() {
            return None;
        }

        Some(a.round_perturbed(b.sign(), p, rm))
    }

    // Unscaled values of `self` and `d2` brought to the common scale.
    fn align(&self, d2: &Self) -> (BigInt, BigInt, Scale) {
        match self.scale.cmp(&d2.scale) {
            Ordering::Equal => (self.m.clone(), d2.m.clone(), self.scale),
            Ordering::Less => (
                &self.m * ten_pow((d2.scale - self.scale) as u64),
                d2.m.clone(),
                d2.scale,
            ),
            Ordering::Greater => (
                self.m.clone(),
                &d2.m * ten_pow((self.scale - d2.scale) as u64),
                self.scale,
            ),
        }
    }

    /// Adds `d2` to `self` exactly.
    /// The result has as many digits as needed to hold both operands at a common scale.
    pub fn add_full_prec(&self, d2: &Self) -> Self {
        if d2.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return d2.clone();
        }

        let (m1, m2, scale) = self.align(d2);
        Decimal { m: m1 + m2, scale }
    }

    /// Subtracts `d2` from `self` exactly.
    /// The result has as many digits as needed to hold both operands at a common scale.
    pub fn sub_full_prec(&self, d2: &Self) -> Self {
        self.add_full_prec(&-d2)
    }

    /// Multiplies `self` by `d2` exactly.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the scale of the result is out of range.
    pub fn mul_full_prec(&self, d2: &Self) -> Result<Self, Error> {
        Ok(Decimal {
            m: &self.m * &d2.m,
            scale: check_scale(self.scale.checked_add(d2.scale))?,
        })
    }

    /// Adds `d2` to `self` and returns the result rounded to `p` digits using rounding mode `rm`.
    pub fn add(&self, d2: &Self, p: usize, rm: RoundingMode) -> Self {
        match self.add_far(d2, p, rm) {
            Some(ret) => ret,
            None => self.add_full_prec(d2).round(p, rm),
        }
    }

    /// Subtracts `d2` from `self` and returns the result rounded to `p` digits using rounding mode `rm`.
    pub fn sub(&self, d2: &Self, p: usize, rm: RoundingMode) -> Self {
        self.add(&-d2, p, rm)
    }

    /// Multiplies `self` by `d2` and returns the result rounded to `p` digits using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the scale of the result is out of range.
    pub fn mul(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Ok(self.mul_full_prec(d2)?.round(p, rm))
    }

    /// Divides `self` by `d2` and returns the result rounded to `p` digits using rounding mode `rm`.
    /// Exact quotients keep no trailing zeroes beyond the preferred scale `self.scale - d2.scale`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - ExponentOverflow: the scale of the result is out of range.
    pub fn div(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let preferred_scale = check_scale(self.scale.checked_sub(d2.scale))?;

        if self.is_zero() {
            return Ok(Decimal {
                m: BigInt::zero(),
                scale: preferred_scale,
            });
        }

        let p = p.max(1);
        let shift = (p as i64 + 1 + d2.digits() as i64 - self.digits() as i64).max(0) as u64;

        let a = &self.m * ten_pow(shift);
        let q = &a / &d2.m;
        let r = &a % &d2.m;

        let sticky = !r.is_zero();
        let s = if self.sign() == d2.sign() {
            Sign::Pos
        } else {
            Sign::Neg
        };

        let ret = Self::round_raw(q, preferred_scale + shift as i64, sticky, s, p, rm);

        if sticky {
            Ok(ret)
        } else {
            Ok(ret.strip_to_scale(preferred_scale))
        }
    }

    /// Returns `1 / self` rounded to `p` digits using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    ///  - ExponentOverflow: the scale of the result is out of range.
    pub fn reciprocal(&self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Self::one().div(self, p, rm)
    }

    /// Compares absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        match (self.is_zero(), d2.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let e = self.exponent().cmp(&d2.exponent());
        if e != Ordering::Equal {
            return e;
        }

        let (m1, m2, _) = self.align(d2);
        m1.abs().cmp(&m2.abs())
    }

    /// Generates a random number with `p` significant digits and the exponent in range from `exp_from` to `exp_to` inclusive.
    #[cfg(feature = "random")]
    pub fn random_normal(p: usize, exp_from: i64, exp_to: i64) -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let p = p.max(1);

        let mut s = String::with_capacity(p + 1);
        if rng.gen::<bool>() {
            s.push('-');
        }
        s.push(char::from(b'1' + rng.gen_range(0..9u8)));
        for _ in 1..p {
            s.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }

        let m = BigInt::parse_bytes(s.as_bytes(), 10).unwrap_or_default();
        let e = if exp_to > exp_from {
            rng.gen_range(exp_from..=exp_to)
        } else {
            exp_from
        };

        Decimal {
            m,
            scale: p as i64 - 1 - e,
        }
    }
}

// Scales of computed numbers stay within `MAX_SCALE`.
fn check_scale(scale: Option<Scale>) -> Result<Scale, Error> {
    match scale {
        Some(s) if (-MAX_SCALE..=MAX_SCALE).contains(&s) => Ok(s),
        _ => Err(Error::ExponentOverflow),
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let s1 = self.cmp_zero();
        let s2 = other.cmp_zero();

        if s1 != s2 {
            return s1.cmp(&s2);
        }

        match s1 {
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => self.abs_cmp(other),
            Ordering::Less => self.abs_cmp(other).reverse(),
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(mut self) -> Self::Output {
        self.inv_sign();
        self
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal {
            m: -&self.m,
            scale: self.scale,
        }
    }
}

impl From<i64> for Decimal {
    fn from(v: i64) -> Self {
        Decimal::from_i64(v)
    }
}

impl From<i32> for Decimal {
    fn from(v: i32) -> Self {
        Decimal::from_i64(v as i64)
    }
}

impl From<u64> for Decimal {
    fn from(v: u64) -> Self {
        Decimal::from_u64(v)
    }
}

impl From<BigInt> for Decimal {
    fn from(m: BigInt) -> Self {
        Decimal { m, scale: 0 }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses numbers like `12`, `-0.5`, `.25`, `1.5e-3`, `+7E10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (mantissa, exp) = match s.find(|c| c == 'e' || c == 'E') {
            Some(pos) => {
                let exp = s[pos + 1..].parse::<i64>().map_err(|_| Error::Parse)?;
                (&s[..pos], exp)
            }
            None => (s, 0),
        };

        let (neg, body) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (int_part, frac_part) = match body.find('.') {
            Some(pos) => (&body[..pos], &body[pos + 1..]),
            None => (body, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::Parse);
        }

        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(Error::Parse);
        }

        let mut digits = String::with_capacity(int_part.len() + frac_part.len() + 1);
        if neg {
            digits.push('-');
        }
        digits.push_str(int_part);
        digits.push_str(frac_part);

        let m = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(Error::Parse)?;
        let scale = check_scale((frac_part.len() as i64).checked_sub(exp))?;

        Ok(Decimal { m, scale })
    }
}

/// Plain notation pads at most this many zeroes.
const MAX_PLAIN_ZEROS: u64 = 32;

impl fmt::Display for Decimal {
    /// Formats the number in plain notation, e.g. `-0.00125` or `1200`.
    /// Numbers which need more than 32 padding zeroes in plain notation, and all numbers
    /// with the alternate flag `{:#}`, are formatted in exponent notation, e.g. `1.25e-40`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.m.abs().to_string();
        let sign = if self.m.is_negative() { "-" } else { "" };

        let pad = if self.scale > 0 {
            (self.scale as u64).saturating_sub(digits.len() as u64)
        } else if self.m.is_zero() {
            0
        } else {
            self.scale.unsigned_abs()
        };

        if f.alternate() || pad > MAX_PLAIN_ZEROS {
            let (lead, rest) = digits.split_at(1);
            return if rest.is_empty() {
                write!(f, "{}{}e{}", sign, lead, self.exponent())
            } else {
                write!(f, "{}{}.{}e{}", sign, lead, rest, self.exponent())
            };
        }

        if self.scale <= 0 {
            write!(f, "{}{}{}", sign, digits, "0".repeat(pad as usize))
        } else {
            let scale = self.scale as usize;
            if digits.len() > scale {
                let (int_part, frac_part) = digits.split_at(digits.len() - scale);
                write!(f, "{}{}.{}", sign, int_part, frac_part)
            } else {
                write!(f, "{}0.{}{}", sign, "0".repeat(pad as usize), digits)
            }
        }
    }
}

/// Constructs a [`Decimal`] from a literal.
/// Converts the input tokens to a string, and then parses the string into a [`Decimal`].
/// Panics if the provided input is not a valid decimal literal.
///
/// [`Decimal`]: crate::Decimal
///
/// # Examples:
/// ```
/// use decimal_elementary::dec;
///
/// assert_eq!(dec!(1.753).to_string(), "1.753");
/// assert!(dec!(-0.1).is_negative());
/// ```
#[macro_export]
macro_rules! dec {
    ($l:expr) => {
        <$crate::Decimal as ::core::str::FromStr>::from_str(&stringify!($l).replace(' ', ""))
            .unwrap_or_else(|e| panic!("{}", e))
    };
}

#[cfg(test)]
mod tests {

    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(d("0").to_string(), "0");
        assert_eq!(d("-12.50").to_string(), "-12.50");
        assert_eq!(d(".25").to_string(), "0.25");
        assert_eq!(d("1.5e-3").to_string(), "0.0015");
        assert_eq!(d("+12E2").to_string(), "1200");
        assert_eq!(d("-0.000123").to_string(), "-0.000123");
        assert_eq!(d("7.").to_string(), "7");

        assert_eq!("".parse::<Decimal>(), Err(Error::Parse));
        assert_eq!(".".parse::<Decimal>(), Err(Error::Parse));
        assert_eq!("1.2.3".parse::<Decimal>(), Err(Error::Parse));
        assert_eq!("1e".parse::<Decimal>(), Err(Error::Parse));
        assert_eq!("abc".parse::<Decimal>(), Err(Error::Parse));
        assert_eq!("--1".parse::<Decimal>(), Err(Error::Parse));

        let x = d("-12.345");
        assert_eq!(x.unscaled(), &BigInt::from(-12345));
        assert_eq!(x.scale(), 3);
        assert_eq!(x.digits(), 5);
        assert_eq!(x.exponent(), 1);
        assert_eq!(d("0.00123").exponent(), -3);
        assert_eq!(crate::dec!(1.753).to_string(), "1.753");
    }

    #[test]
    fn test_format_exponent() {
        assert_eq!(d("1e-32").to_string(), "0.00000000000000000000000000000001");
        assert_eq!(d("1e-34").to_string(), "1e-34");
        assert_eq!(d("-1.25e-40").to_string(), "-1.25e-40");
        assert_eq!(d("12e40").to_string(), "1.2e41");
        assert_eq!(d("1e32").to_string(), "100000000000000000000000000000000");
        assert_eq!(d("0e-50").to_string(), "0e-50");
        assert_eq!(d("1e-1000000000").to_string(), "1e-1000000000");
        assert_eq!(format!("{:#}", d("-12.5")), "-1.25e1");
        assert_eq!(format!("{:#}", d("7")), "7e0");

        for s in ["1e-1000000000", "-1.25e-40", "12e40", "0e-50"] {
            assert_eq!(d(s).to_string().parse::<Decimal>().unwrap(), d(s));
        }
    }

    #[test]
    fn test_scale_range() {
        let big = d("1e2000000000000000000");
        assert_eq!(big.exponent(), 2_000_000_000_000_000_000);
        assert_eq!(big.mul_full_prec(&big), Err(Error::ExponentOverflow));
        assert_eq!(big.mul(&big, 10, RoundingMode::ToEven), Err(Error::ExponentOverflow));
        assert_eq!(big.mul_pow10(MAX_SCALE), Err(Error::ExponentOverflow));
        assert_eq!(Decimal::one().div(&big, 10, RoundingMode::ToEven).unwrap(), d("1e-2000000000000000000"));
        assert_eq!(big.reciprocal(10, RoundingMode::ToEven).unwrap().reciprocal(10, RoundingMode::ToEven), Ok(big.clone()));

        assert_eq!("1e3000000000000000000".parse::<Decimal>(), Err(Error::ExponentOverflow));
        assert_eq!(Decimal::from_parts(BigInt::from(1), Scale::MIN).unwrap_err(), Error::ExponentOverflow);
        assert_eq!(Decimal::from_parts(BigInt::from(15), 1).unwrap(), d("1.5"));
    }

    #[test]
    fn test_far_operands() {
        let rm = RoundingMode::ToEven;
        let tiny = d("1e-5000000000");
        let one = Decimal::one();

        assert_eq!(one.add(&tiny, 10, rm), one);
        assert_eq!(one.sub(&tiny, 10, rm), one);
        assert_eq!(tiny.add(&one, 10, rm), one);
        assert_eq!(one.add(&tiny, 10, RoundingMode::Ceiling), d("1.000000001"));
        assert_eq!(one.sub(&tiny, 10, RoundingMode::Floor), d("0.9999999999"));
        assert_eq!(one.sub(&tiny, 10, RoundingMode::Ceiling), one);
        assert_eq!(one.add(&tiny, 10, RoundingMode::AwayFromZero), d("1.000000001"));
        assert_eq!(d("-2").add(&tiny, 3, RoundingMode::Ceiling), d("-1.99"));
        assert_eq!(d("-2").sub(&tiny, 3, RoundingMode::Floor), d("-2.01"));

        // operands in reach of the last digit are summed exactly
        assert_eq!(d("1").add(&d("5e-11"), 10, rm), d("1"));
        assert_eq!(d("1").add(&d("6e-10"), 10, rm), d("1.000000001"));
        assert_eq!(d("1").add(&d("1e-11"), 10, RoundingMode::Ceiling), d("1.000000001"));

        assert_eq!(tiny.add_full_prec(&Decimal::zero()), tiny);
        assert_eq!(Decimal::zero().sub_full_prec(&tiny), -&tiny);

        assert!(!tiny.is_integer());
        assert_eq!(tiny.trunc(), Decimal::zero());
        assert_eq!(tiny.to_i64(), None);
        assert_eq!(tiny.floor(), Decimal::zero());
        assert_eq!((-&tiny).floor(), d("-1"));
        assert_eq!(tiny.round_to_scale(2, rm), Decimal::zero());
        assert_eq!(tiny.round_to_scale(2, RoundingMode::Ceiling), d("0.01"));
        assert!(tiny < d("1e-4999999999"));
        assert!(tiny > Decimal::zero());
    }

    #[test]
    fn test_round_perturbed() {
        let rm = RoundingMode::ToEven;

        assert_eq!(d("1").round_perturbed(Sign::Pos, 5, rm), d("1"));
        assert_eq!(d("1").round_perturbed(Sign::Neg, 5, rm), d("1"));
        assert_eq!(d("1").round_perturbed(Sign::Pos, 5, RoundingMode::Ceiling), d("1.0001"));
        assert_eq!(d("1").round_perturbed(Sign::Neg, 5, RoundingMode::Floor), d("0.99999"));
        assert_eq!(d("1").round_perturbed(Sign::Neg, 5, RoundingMode::None), d("0.99999"));
        assert_eq!(d("-1").round_perturbed(Sign::Pos, 5, RoundingMode::None), d("-0.99999"));
        assert_eq!(d("-1").round_perturbed(Sign::Neg, 5, RoundingMode::Floor), d("-1.0001"));
        assert_eq!(d("2.5").round_perturbed(Sign::Pos, 1, rm), d("3"));
        assert_eq!(d("2.5").round_perturbed(Sign::Neg, 1, rm), d("2"));
        assert_eq!(d("1.23456789").round_perturbed(Sign::Pos, 3, rm), d("1.23"));
    }

    #[test]
    fn test_cmp() {
        assert_eq!(d("1.0"), d("1.000"));
        assert!(d("1.01") > d("1.001"));
        assert!(d("-1.01") < d("-1.001"));
        assert!(d("-1") < d("0"));
        assert!(d("0.0") == d("0"));
        assert!(d("100") > d("99.999"));
        assert!(d("1e3") == d("1000"));
        assert_eq!(d("-5").abs_cmp(&d("4")), Ordering::Greater);
        assert_eq!(d("-5").cmp_zero(), Ordering::Less);
        assert_eq!(d("0.00").cmp_zero(), Ordering::Equal);
        assert_eq!(d("-0.3").signum(), -1);
        assert_eq!(d("0.00").signum(), 0);
        assert_eq!(d("12").signum(), 1);
    }

    #[test]
    fn test_arith() {
        let rm = RoundingMode::ToEven;

        assert_eq!(d("1.5").add_full_prec(&d("0.25")), d("1.75"));
        assert_eq!(d("1.5").sub_full_prec(&d("0.25")), d("1.25"));
        assert_eq!(d("1.5").mul_full_prec(&d("-0.25")).unwrap(), d("-0.375"));

        assert_eq!(d("1").div(&d("3"), 5, rm).unwrap().to_string(), "0.33333");
        assert_eq!(d("2").div(&d("3"), 5, rm).unwrap().to_string(), "0.66667");
        assert_eq!(d("2").div(&d("3"), 5, RoundingMode::None).unwrap().to_string(), "0.66666");
        assert_eq!(d("-2").div(&d("3"), 5, RoundingMode::Floor).unwrap().to_string(), "-0.66667");
        assert_eq!(d("1").div(&d("8"), 50, rm).unwrap().to_string(), "0.125");
        assert_eq!(d("10").div(&d("4"), 50, rm).unwrap().to_string(), "2.5");
        assert_eq!(d("1").div(&d("0"), 5, rm), Err(Error::DivisionByZero));
        assert_eq!(d("0").div(&d("7"), 5, rm).unwrap(), Decimal::zero());

        assert_eq!(d("123456").round(3, rm).to_string(), "123000");
        assert_eq!(d("9.995").round(3, rm).to_string(), "10.0");
        assert_eq!(d("0.0012345").round(2, rm).to_string(), "0.0012");
        assert_eq!(d("2.5").round(1, rm).to_string(), "2");
        assert_eq!(d("3.5").round(1, rm).to_string(), "4");
        assert_eq!(d("2.5").round(1, RoundingMode::FromZero).to_string(), "3");
        assert_eq!(d("-2.5").round(1, RoundingMode::Up).to_string(), "-2");

        assert_eq!(d("2.567").round_to_scale(1, rm).to_string(), "2.6");
        assert_eq!(d("1.2300").strip_trailing_zeros().to_string(), "1.23");
        assert_eq!(d("1.23").ulp(5), d("0.0001"));
        assert_eq!(d("1.23").mul_pow10(2).unwrap(), d("123"));
    }

    #[test]
    fn test_integers() {
        assert!(d("3.000").is_integer());
        assert!(!d("3.001").is_integer());
        assert!(d("12e5").is_integer());
        assert_eq!(d("3.000").to_i64(), Some(3));
        assert_eq!(d("-12e2").to_i64(), Some(-1200));
        assert_eq!(d("3.5").to_i64(), None);
        assert_eq!(d("1e30").to_i64(), None);
        assert_eq!(d("-3.7").trunc(), d("-3"));
        assert_eq!(d("3.7").trunc(), d("3"));
        assert_eq!(d("3.7").floor(), d("3"));
        assert_eq!(d("-3.7").floor(), d("-4"));
        assert_eq!(d("-3.0").floor(), d("-3"));
        assert_eq!(-d("3.7"), d("-3.7"));
        assert_eq!(d("3.7").with_sign(Sign::Neg), d("-3.7"));
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random() {
        for _ in 0..100 {
            let x = Decimal::random_normal(20, -5, 5);
            assert_eq!(x.digits(), 20);
            assert!(x.exponent() >= -5 && x.exponent() <= 5);
            assert_eq!(x.to_string().parse::<Decimal>().unwrap(), x);
        }
    }
}
