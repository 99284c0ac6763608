//! Floating-point payload values

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable in f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A TDLib `double` that remembers whether it was written as an integer
///
/// JSON writers differ on whether `0` or `0.0` is emitted for a whole
/// double. The written form is kept so a decoded payload encodes back to the
/// same JSON. Equality compares the numeric value only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Double {
    value: f64,
    integral: bool,
}

impl Double {
    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// True if the value was decoded from a JSON integer
    #[must_use]
    pub fn is_integral(self) -> bool {
        self.integral
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self {
            value,
            integral: false,
        }
    }
}

impl PartialEq for Double {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Serialize for Double {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.integral && self.value.fract() == 0.0 && self.value.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.value as i64)
        } else {
            serializer.serialize_f64(self.value)
        }
    }
}

impl<'de> Deserialize<'de> for Double {
    #[allow(clippy::cast_precision_loss)]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrFloat {
            Int(i64),
            Float(f64),
        }

        Ok(match IntOrFloat::deserialize(deserializer)? {
            IntOrFloat::Int(v) => Self {
                value: v as f64,
                integral: true,
            },
            IntOrFloat::Float(v) => Self::from(v),
        })
    }
}
