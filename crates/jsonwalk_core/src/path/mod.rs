use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::{Result, WalkError};

mod pointer;

pub use pointer::Pointer;

/// Location type threaded through a walk.
///
/// The walker only derives child locations and reads levels, so any type
/// that can do both can stand in for [`Path`]. [`Pointer`] renders locations
/// as JSON Pointers instead.
pub trait WalkPath: Clone + fmt::Display {
	/// Location of the walked root when no origin is given.
	fn root() -> Self;
	/// Location of an object member below `self`.
	fn key(&self, name: &str) -> Self;
	/// Location of an array element below `self`.
	fn index(&self, index: usize) -> Self;
	/// Number of steps below the root.
	fn level(&self) -> usize;
}

/// One step from a container to a child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
	/// Object member, joined to its predecessor with `.`.
	Key(Arc<str>),
	/// Array element, rendered as `[index]`.
	Index(usize),
}

/// Location of a node relative to the walked root.
///
/// Paths are persistent: deriving a child shares the parent's links and
/// never modifies the parent, so sibling subtrees cannot observe each other.
#[derive(Clone, Default)]
pub struct Path {
	tip: Option<Arc<Link>>,
}

struct Link {
	parent: Option<Arc<Link>>,
	segment: Segment,
	level: usize,
}

impl Path {
	/// Empty path at level 0.
	pub fn root() -> Self {
		Self::default()
	}

	/// Derive a path with one more segment.
	pub fn child(&self, segment: Segment) -> Self {
		Self {
			tip: Some(Arc::new(Link {
				parent: self.tip.clone(),
				segment,
				level: self.level() + 1,
			})),
		}
	}

	/// Derive the path of an object member.
	pub fn key(&self, name: &str) -> Self {
		self.child(Segment::Key(Arc::from(name)))
	}

	/// Derive the path of an array element.
	pub fn index(&self, index: usize) -> Self {
		self.child(Segment::Index(index))
	}

	/// Number of segments from the root.
	pub fn level(&self) -> usize {
		self.tip.as_ref().map_or(0, |link| link.level)
	}

	/// Whether this is the empty root path.
	pub fn is_root(&self) -> bool {
		self.tip.is_none()
	}

	/// Final segment, if any.
	pub fn last(&self) -> Option<&Segment> {
		self.tip.as_ref().map(|link| &link.segment)
	}

	/// Path with the final segment removed.
	pub fn parent(&self) -> Option<Self> {
		self.tip.as_ref().map(|link| Self { tip: link.parent.clone() })
	}

	/// Segments in root-to-node order.
	pub fn segments(&self) -> Vec<Segment> {
		let mut out = Vec::with_capacity(self.level());
		let mut cursor = self.tip.as_deref();
		while let Some(link) = cursor {
			out.push(link.segment.clone());
			cursor = link.parent.as_deref();
		}
		out.reverse();
		out
	}

	/// Render as dotted keys with `[index]` selectors.
	pub fn render(&self) -> String {
		let mut out = String::new();
		for segment in self.segments() {
			match segment {
				Segment::Key(name) => {
					if !out.is_empty() {
						out.push('.');
					}
					out.push_str(&name);
				}
				Segment::Index(index) => {
					out.push('[');
					out.push_str(&index.to_string());
					out.push(']');
				}
			}
		}
		out
	}

	/// Parse the rendered form back into a path.
	///
	/// Keys are runs of characters other than `.` and `[`. A leading `[n]`
	/// addresses an array root, and the empty string is the root path.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || WalkError::InvalidPath { path: input.to_owned() };
		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut path = Self::root();

		while idx < bytes.len() {
			if bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				path = path.index(number);
				idx += 1;
				continue;
			}

			if !path.is_root() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
			}

			let start = idx;
			while idx < bytes.len() && bytes[idx] != b'.' && bytes[idx] != b'[' {
				idx += 1;
			}
			if idx == start {
				return Err(invalid());
			}
			path = path.key(&input[start..idx]);
		}

		Ok(path)
	}
}

impl WalkPath for Path {
	fn root() -> Self {
		Path::root()
	}

	fn key(&self, name: &str) -> Self {
		Path::key(self, name)
	}

	fn index(&self, index: usize) -> Self {
		Path::index(self, index)
	}

	fn level(&self) -> usize {
		Path::level(self)
	}
}

impl FromStr for Path {
	type Err = WalkError;

	fn from_str(input: &str) -> Result<Self> {
		Self::parse(input)
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl fmt::Debug for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Path").field(&self.render()).finish()
	}
}

impl PartialEq for Path {
	fn eq(&self, other: &Self) -> bool {
		if self.level() != other.level() {
			return false;
		}

		let mut left = self.tip.as_ref();
		let mut right = other.tip.as_ref();
		while let (Some(a), Some(b)) = (left, right) {
			if Arc::ptr_eq(a, b) {
				return true;
			}
			if a.segment != b.segment {
				return false;
			}
			left = a.parent.as_ref();
			right = b.parent.as_ref();
		}
		true
	}
}

impl Eq for Path {}

impl Hash for Path {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.segments().hash(state);
	}
}
