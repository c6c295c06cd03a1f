use std::fmt;

use super::WalkPath;

/// JSON Pointer location (`/Actors/0/Born At`).
///
/// Member names escape `~` as `~0` and `/` as `~1`, so every key is
/// addressable, including empty ones. The root is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
	text: String,
	level: usize,
}

impl Pointer {
	/// Rendered pointer text.
	pub fn as_str(&self) -> &str {
		&self.text
	}

	fn push(&self, token: &str) -> Self {
		let mut text = String::with_capacity(self.text.len() + token.len() + 1);
		text.push_str(&self.text);
		text.push('/');
		for ch in token.chars() {
			match ch {
				'~' => text.push_str("~0"),
				'/' => text.push_str("~1"),
				_ => text.push(ch),
			}
		}
		Self { text, level: self.level + 1 }
	}
}

impl WalkPath for Pointer {
	fn root() -> Self {
		Self::default()
	}

	fn key(&self, name: &str) -> Self {
		self.push(name)
	}

	fn index(&self, index: usize) -> Self {
		self.push(&index.to_string())
	}

	fn level(&self) -> usize {
		self.level
	}
}

impl fmt::Display for Pointer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}
