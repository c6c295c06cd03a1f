use std::io::{self, Write};

use crate::{Key, Kind, Node, Observer, WalkPath};

/// Observer rendering each node as one indented line of text.
///
/// Lines look like:
///
/// ```text
/// (object)
/// "Actors" |Actors| (string:array)
///   0 |Actors[0]| (0:object)
///     "name": "Tom Cruise" |Actors[0].name| (string:string)
/// ```
///
/// Indentation is two spaces per level below the first. The trailing hint is
/// `(key:kind)`, where the key part is `string` for object members and the
/// index for array elements. The root line shows only its kind, or its value
/// and kind for a scalar root.
pub struct Output<W: Write> {
	out: W,
	error: Option<io::Error>,
}

impl<W: Write> Output<W> {
	/// Create a sink writing to `out`.
	pub fn new(out: W) -> Self {
		Self { out, error: None }
	}

	/// Flush and return the destination, or the first write error.
	pub fn finish(mut self) -> io::Result<W> {
		if let Some(err) = self.error.take() {
			return Err(err);
		}
		self.out.flush()?;
		Ok(self.out)
	}

	fn write_node<P: WalkPath>(&mut self, node: &Node<'_, P>) -> io::Result<()> {
		let Some(key) = node.key else {
			if node.kind.is_container() {
				return writeln!(self.out, "({})", node.kind);
			}
			return writeln!(self.out, "{} ({})", node.value, node.kind);
		};

		let pad = "  ".repeat(node.path.level().saturating_sub(1));
		let slot = match key {
			Key::Name(_) => Kind::String.to_string(),
			Key::Index(index) => index.to_string(),
		};
		if node.kind.is_container() {
			writeln!(self.out, "{pad}{key} |{}| ({slot}:{})", node.path, node.kind)
		} else {
			writeln!(self.out, "{pad}{key}: {} |{}| ({slot}:{})", node.value, node.path, node.kind)
		}
	}
}

impl Output<io::Stdout> {
	/// Sink printing to the process's standard output.
	pub fn stdout() -> Self {
		Self::new(io::stdout())
	}
}

impl<W: Write, P: WalkPath> Observer<P> for Output<W> {
	fn visit(&mut self, node: &Node<'_, P>) {
		if self.error.is_some() {
			return;
		}
		if let Err(err) = self.write_node(node) {
			self.error = Some(err);
		}
	}
}
