use thiserror::Error;

use crate::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, WalkError>;

/// Errors produced while loading, classifying, and traversing documents.
#[derive(Debug, Error)]
pub enum WalkError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A node did not match any of the six document kinds.
	#[error("unsupported value type: {shape}")]
	UnsupportedValueType {
		/// Description of the rejected runtime shape.
		shape: String,
	},
	/// Mutating walks require an object at the root.
	#[error("mutating walk requires an object root, got {kind}")]
	RootNotObject {
		/// Kind of the rejected root.
		kind: Kind,
	},
	/// Document nesting exceeded the configured limit.
	#[error("walk depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
	/// Path expression syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
	/// No node in the document matched the requested path.
	#[error("path not found: {path}")]
	PathNotFound {
		/// Rendered path that had no match.
		path: String,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}
