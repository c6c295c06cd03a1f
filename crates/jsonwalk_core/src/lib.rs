//! Path-aware traversal of decoded JSON documents.
//!
//! A document is a [`Value`] tree. [`walk`] hands every node to an
//! [`Observer`] in pre-order together with its [`Path`]; [`walk_mut`] hands
//! nodes to a [`Transformer`] that may replace them in their parent slot.
//! Both can thread a different location type through the walk by
//! implementing [`WalkPath`], as [`Pointer`] does.

mod decode;
mod error;
mod input;
mod output;
mod path;
mod value;
mod visit;
mod walk;

/// External-decode classifier.
pub use decode::classify;
/// Error and result aliases.
pub use error::{Result, WalkError};
/// Document loading and compression detection.
pub use input::{Compression, ZSTD_MAGIC, decode_bytes, load, load_reader, load_reader_with, load_with, parse_json, parse_json_with};
/// Indented text diagnostic sink.
pub use output::Output;
/// Node locations.
pub use path::{Path, Pointer, Segment, WalkPath};
/// Document value model.
pub use value::{Kind, MAX_SAFE_INTEGER, Map, Value};
/// Visitor contract.
pub use visit::{Callback, Key, Node, Observer, Rewrite, Transformer, callback, rewrite};
/// Traversal entry points.
pub use walk::{DEFAULT_MAX_DEPTH, WalkOptions, check, walk, walk_mut, walk_mut_with, walk_with};
