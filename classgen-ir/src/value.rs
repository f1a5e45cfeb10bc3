//! Literal values for class constants.

use serde::{
    Deserialize, Serialize,
    de::{self, Deserializer, MapAccess, Unexpected, Visitor},
    ser::{SerializeMap, Serializer},
};

/// Map key carrying a non-finite float, e.g. `{ "float": "NAN" }`.
const FLOAT_KEY: &str = "float";

/// The value of a class constant.
///
/// Deserializes from plain JSON scalars: `"text"`, `42`, `1.5`, `true`, `null`.
/// Non-finite floats have no JSON scalar and travel as `{ "float": "NAN" }`,
/// `{ "float": "INF" }` or `{ "float": "-INF" }`. Integers outside the `i64`
/// range are rejected rather than widened to a float.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
}

impl ConstantValue {
    /// Check if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Serialize for ConstantValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
            Self::Float(value) => {
                let token = if value.is_nan() {
                    "NAN"
                } else if value.is_sign_positive() {
                    "INF"
                } else {
                    "-INF"
                };
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(FLOAT_KEY, token)?;
                map.end()
            }
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for ConstantValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConstantValueVisitor;

        impl<'de> Visitor<'de> for ConstantValueVisitor {
            type Value = ConstantValue;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a constant literal or a `float` token map")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(ConstantValue::Bool(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(ConstantValue::Int(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
                i64::try_from(value).map(ConstantValue::Int).map_err(|_| {
                    E::invalid_value(Unexpected::Unsigned(value), &"an integer within the i64 range")
                })
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(ConstantValue::Float(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(ConstantValue::String(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(ConstantValue::String(value))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(ConstantValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(ConstantValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                ConstantValue::deserialize(deserializer)
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let Some((key, token)) = map.next_entry::<String, String>()? else {
                    return Err(de::Error::invalid_length(0, &self));
                };
                if key != FLOAT_KEY {
                    return Err(de::Error::unknown_field(&key, &[FLOAT_KEY]));
                }
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                let value = match token.as_str() {
                    "NAN" => f64::NAN,
                    "INF" => f64::INFINITY,
                    "-INF" => f64::NEG_INFINITY,
                    other => {
                        return Err(de::Error::invalid_value(
                            Unexpected::Str(other),
                            &"NAN, INF or -INF",
                        ));
                    }
                };
                Ok(ConstantValue::Float(value))
            }
        }

        deserializer.deserialize_any(ConstantValueVisitor)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<ConstantValue>> From<Option<T>> for ConstantValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
