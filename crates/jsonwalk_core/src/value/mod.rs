use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{Result, WalkError};

/// Largest magnitude at which every integer is exactly representable as `f64`.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Object member storage. Iteration order carries no meaning for traversal.
pub type Map = BTreeMap<String, Value>;

/// Decoded document node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// JSON `null`.
	Null,
	/// JSON boolean.
	Bool(bool),
	/// JSON string.
	String(String),
	/// JSON number, always held as floating point.
	Number(f64),
	/// Ordered sequence of nodes.
	Array(Vec<Value>),
	/// Keyed collection of nodes.
	Object(Map),
}

/// Shape tag for a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// `null` leaf.
	Null,
	/// Boolean leaf.
	Bool,
	/// String leaf.
	String,
	/// Number leaf.
	Number,
	/// Array container.
	Array,
	/// Object container.
	Object,
}

impl Kind {
	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::String => "string",
			Self::Number => "number",
			Self::Array => "array",
			Self::Object => "object",
		}
	}

	/// Whether nodes of this kind have children.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Array | Self::Object)
	}

	/// Parse a label produced by [`Kind::as_str`].
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"null" => Some(Self::Null),
			"bool" => Some(Self::Bool),
			"string" => Some(Self::String),
			"number" => Some(Self::Number),
			"array" => Some(Self::Array),
			"object" => Some(Self::Object),
			_ => None,
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Shape tag of this node, without validating its payload.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::Bool(_) => Kind::Bool,
			Self::String(_) => Kind::String,
			Self::Number(_) => Kind::Number,
			Self::Array(_) => Kind::Array,
			Self::Object(_) => Kind::Object,
		}
	}

	/// Classify this node, rejecting payloads no JSON decode can produce.
	///
	/// Non-finite numbers fail with [`WalkError::UnsupportedValueType`].
	pub fn classify(&self) -> Result<Kind> {
		match self {
			Self::Number(number) if !number.is_finite() => Err(WalkError::UnsupportedValueType {
				shape: format!("non-finite number {number}"),
			}),
			other => Ok(other.kind()),
		}
	}

	/// Borrow string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value.as_str()),
			_ => None,
		}
	}

	/// Read number payload.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// Read boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Borrow object members.
	pub fn as_object(&self) -> Option<&Map> {
		match self {
			Self::Object(map) => Some(map),
			_ => None,
		}
	}

	/// Whether this node is `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::String(value) => serializer.serialize_str(value),
			Self::Number(value) => {
				if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
					serializer.serialize_i64(*value as i64)
				} else {
					serializer.serialize_f64(*value)
				}
			}
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Object(map) => {
				let mut out = serializer.serialize_map(Some(map.len()))?;
				for (key, value) in map {
					out.serialize_entry(key, value)?;
				}
				out.end()
			}
		}
	}
}

/// Compact JSON rendering.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
		f.write_str(&text)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<Map> for Value {
	fn from(map: Map) -> Self {
		Self::Object(map)
	}
}
