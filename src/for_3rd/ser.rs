//! Serialization of Decimal.
//! A number is serialized as its display string, so no digits are lost.
//! Plain notation turns into exponent notation when it would be padded with many zeros.

use crate::num::Decimal;
use serde::{Serialize, Serializer};

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
