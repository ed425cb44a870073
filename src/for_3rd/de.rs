//! Deserialization of Decimal.

use core::fmt::Formatter;
use core::str::FromStr;

use crate::num::Decimal;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct DecimalVisitor {}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor {})
    }
}

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a decimal number as `String` or `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Decimal::from_i64(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Decimal::from_u64(v))
    }

    // the shortest representation which converts back to the same f64
    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(Error::custom(format!("{} is not a finite number", v)));
        }

        Decimal::from_str(&format!("{:e}", v)).map_err(|e| Error::custom(format!("{e}")))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Decimal::from_str(v).map_err(|e| Error::custom(format!("{e}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
