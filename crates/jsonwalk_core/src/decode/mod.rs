//! Boundary between an external JSON decode and the document model.

use crate::{Kind, Map, Result, Value, WalkError};

const SAFE_INTEGER_BOUND: u64 = 1 << 53;

/// Classify one externally decoded node.
///
/// Integers that the floating-point number representation cannot hold
/// exactly fail with [`WalkError::UnsupportedValueType`].
pub fn classify(raw: &serde_json::Value) -> Result<Kind> {
	match raw {
		serde_json::Value::Null => Ok(Kind::Null),
		serde_json::Value::Bool(_) => Ok(Kind::Bool),
		serde_json::Value::String(_) => Ok(Kind::String),
		serde_json::Value::Number(number) => number_to_f64(number).map(|_| Kind::Number),
		serde_json::Value::Array(_) => Ok(Kind::Array),
		serde_json::Value::Object(_) => Ok(Kind::Object),
	}
}

/// Converts pre-order; the first unsupported node aborts the whole conversion.
impl TryFrom<serde_json::Value> for Value {
	type Error = WalkError;

	fn try_from(raw: serde_json::Value) -> Result<Self> {
		classify(&raw)?;
		match raw {
			serde_json::Value::Null => Ok(Self::Null),
			serde_json::Value::Bool(value) => Ok(Self::Bool(value)),
			serde_json::Value::String(value) => Ok(Self::String(value)),
			serde_json::Value::Number(number) => Ok(Self::Number(number_to_f64(&number)?)),
			serde_json::Value::Array(items) => items.into_iter().map(Self::try_from).collect::<Result<Vec<_>>>().map(Self::Array),
			serde_json::Value::Object(members) => members
				.into_iter()
				.map(|(key, value)| Self::try_from(value).map(|value| (key, value)))
				.collect::<Result<Map>>()
				.map(Self::Object),
		}
	}
}

impl TryFrom<&serde_json::Value> for Value {
	type Error = WalkError;

	fn try_from(raw: &serde_json::Value) -> Result<Self> {
		Self::try_from(raw.clone())
	}
}

fn number_to_f64(number: &serde_json::Number) -> Result<f64> {
	let exact = if let Some(value) = number.as_i64() {
		value.unsigned_abs() <= SAFE_INTEGER_BOUND
	} else if let Some(value) = number.as_u64() {
		value <= SAFE_INTEGER_BOUND
	} else {
		true
	};

	match number.as_f64() {
		Some(value) if exact && value.is_finite() => Ok(value),
		_ => Err(WalkError::UnsupportedValueType {
			shape: format!("integer {number} outside the exact floating-point range"),
		}),
	}
}
