//! Elementary functions of decimal numbers.

mod acos;
mod acosh;
mod asin;
mod asinh;
mod atan;
mod atan2;
mod atanh;
mod cbrt;
pub(crate) mod consts;
mod cos;
mod cosh;
mod exp;
mod log;
mod pow;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
mod util;
