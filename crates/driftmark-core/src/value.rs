//! # StructuredValue — The Closed Value Model
//!
//! Defines `StructuredValue`, the sum type over the six admissible value
//! kinds, and the ingestion paths that build one from host input.
//!
//! ## Ingestion
//!
//! - `From<serde_json::Value>` — infallible; every JSON document is
//!   representable.
//! - [`StructuredValue::from_yaml`] — fallible; YAML admits kinds this
//!   model does not (tagged values, non-finite floats), and those are
//!   rejected with `UnsupportedType` rather than coerced.
//! - [`StructuredValue::from_serialize`] — for in-process callers; routes
//!   through `serde_json::to_value`, so anything that is not
//!   JSON-representable is rejected at this boundary.
//!
//! Once a `StructuredValue` exists, downstream canonicalization is total —
//! there is no unsupported-kind failure past this point.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// A structured value: the input domain of the fingerprint pipeline.
///
/// Mapping entries keep their source order in memory; that order is
/// semantically insignificant and does not affect the canonical form.
/// Mapping keys may be any `StructuredValue` — ordering in the canonical
/// form is defined over the encoded pair, so it stays well-defined even
/// for non-string or composite keys.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredValue {
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number (integer or finite float).
    Number(serde_json::Number),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence; element order is semantically significant.
    Sequence(Vec<StructuredValue>),
    /// A key/value mapping; entry order is semantically insignificant.
    Mapping(Vec<(StructuredValue, StructuredValue)>),
}

impl StructuredValue {
    /// Name of this value's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Build a `StructuredValue` from any serializable in-process value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::Serialization` when the value is not
    /// JSON-representable (e.g. a map keyed by a non-string type).
    pub fn from_serialize(value: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let json = serde_json::to_value(value)?;
        Ok(Self::from(json))
    }

    /// Build a `StructuredValue` from a parsed YAML document.
    ///
    /// YAML is a superset of the admissible model; the extra kinds are
    /// rejected here rather than silently coerced.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::UnsupportedType` for tagged values
    /// and for non-finite floats (`.nan`, `.inf`), carrying the offending
    /// kind and its representation.
    pub fn from_yaml(value: &serde_yaml::Value) -> Result<Self, CanonicalizationError> {
        match value {
            serde_yaml::Value::Null => Ok(Self::Null),
            serde_yaml::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_yaml::Value::Number(n) => from_yaml_number(n).map(Self::Number),
            serde_yaml::Value::String(s) => Ok(Self::String(s.clone())),
            serde_yaml::Value::Sequence(seq) => seq
                .iter()
                .map(Self::from_yaml)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Sequence),
            serde_yaml::Value::Mapping(map) => map
                .iter()
                .map(|(k, v)| Ok((Self::from_yaml(k)?, Self::from_yaml(v)?)))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Mapping),
            serde_yaml::Value::Tagged(tagged) => {
                Err(CanonicalizationError::UnsupportedType {
                    kind: "tagged value",
                    repr: format!("{} {:?}", tagged.tag, tagged.value),
                })
            }
        }
    }
}

impl From<serde_json::Value> for StructuredValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(arr) => {
                Self::Sequence(arr.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Self::String(k), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<serde_yaml::Value> for StructuredValue {
    type Error = CanonicalizationError;

    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        Self::from_yaml(&value)
    }
}

/// Convert a YAML number into a JSON number, rejecting non-finite floats.
fn from_yaml_number(n: &serde_yaml::Number) -> Result<serde_json::Number, CanonicalizationError> {
    if let Some(i) = n.as_i64() {
        return Ok(serde_json::Number::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(serde_json::Number::from(u));
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| CanonicalizationError::UnsupportedType {
            kind: "non-finite number",
            repr: n.to_string(),
        })
}
