use tracing::{debug, trace, warn};

use crate::{Key, Kind, Node, Observer, Path, Result, Transformer, Value, WalkError, WalkPath};

/// Nesting depth accepted when no limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Traversal limits and starting location.
#[derive(Debug, Clone)]
pub struct WalkOptions<P = Path> {
	/// Maximum nesting depth below the walked root.
	pub max_depth: usize,
	/// Location assigned to the walked root; descendants extend it.
	pub origin: P,
}

impl<P: WalkPath> Default for WalkOptions<P> {
	fn default() -> Self {
		Self::with_origin(P::root())
	}
}

impl<P: WalkPath> WalkOptions<P> {
	/// Default limits, starting from `origin`.
	pub fn with_origin(origin: P) -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			origin,
		}
	}

	/// Preset for untrusted input where deep nesting should fail early.
	pub fn shallow() -> Self {
		Self {
			max_depth: 64,
			..Self::default()
		}
	}
}

/// Visit every node of `root` in pre-order with default options.
pub fn walk<O: Observer + ?Sized>(root: &Value, observer: &mut O) -> Result<()> {
	let options: WalkOptions = WalkOptions::default();
	walk_with(root, observer, &options)
}

/// Visit every node of `root` in pre-order.
///
/// Array elements arrive in ascending index order. Object members arrive in
/// no particular order. A classification failure aborts the walk.
pub fn walk_with<P, O>(root: &Value, observer: &mut O, options: &WalkOptions<P>) -> Result<()>
where
	P: WalkPath,
	O: Observer<P> + ?Sized,
{
	debug!(max_depth = options.max_depth, origin = %options.origin, "walk started");
	let mut walker = Walker::new(observer, options.max_depth);
	walker.visit(&options.origin, None, root, 0)?;
	debug!(nodes = walker.visited, "walk finished");
	Ok(())
}

/// Walk without a visitor, only classifying nodes and enforcing depth limits.
pub fn check(root: &Value) -> Result<()> {
	walk(root, &mut ())
}

/// Rewrite `root` in place with default options.
pub fn walk_mut<T: Transformer + ?Sized>(root: &mut Value, transformer: &mut T) -> Result<()> {
	let options: WalkOptions = WalkOptions::default();
	walk_mut_with(root, transformer, &options)
}

/// Visit every node of an object-rooted document, applying replacements.
///
/// A replacement is written into the node's slot in its parent container,
/// but traversal continues into the value the transformer was shown. That
/// detached subtree is dropped afterwards, together with any replacements
/// made inside it. The root has no parent slot, so a replacement returned
/// for the root is discarded.
pub fn walk_mut_with<P, T>(root: &mut Value, transformer: &mut T, options: &WalkOptions<P>) -> Result<()>
where
	P: WalkPath,
	T: Transformer<P> + ?Sized,
{
	let kind = root.classify()?;
	if kind != Kind::Object {
		return Err(WalkError::RootNotObject { kind });
	}

	debug!(max_depth = options.max_depth, origin = %options.origin, "mutating walk started");
	let mut walker = Walker::new(transformer, options.max_depth);
	let origin = &options.origin;
	if let Some(replacement) = walker.visitor.transform(&Node {
		path: origin,
		key: None,
		value: &*root,
		kind,
	}) {
		warn!(kind = %replacement.kind(), "root replacement discarded");
	}
	walker.visited += 1;

	walker.descend_mut(origin, root, 0)?;
	debug!(nodes = walker.visited, replaced = walker.replaced, "mutating walk finished");
	Ok(())
}

struct Walker<'v, V: ?Sized> {
	visitor: &'v mut V,
	max_depth: usize,
	visited: usize,
	replaced: usize,
}

impl<'v, V: ?Sized> Walker<'v, V> {
	fn new(visitor: &'v mut V, max_depth: usize) -> Self {
		Self {
			visitor,
			max_depth,
			visited: 0,
			replaced: 0,
		}
	}

	fn enter(&self, depth: usize) -> Result<()> {
		if depth > self.max_depth {
			return Err(WalkError::DepthExceeded { max_depth: self.max_depth });
		}
		Ok(())
	}
}

impl<V: ?Sized> Walker<'_, V> {
	fn visit<P>(&mut self, path: &P, key: Option<Key<'_>>, value: &Value, depth: usize) -> Result<()>
	where
		P: WalkPath,
		V: Observer<P>,
	{
		self.enter(depth)?;
		let kind = value.classify()?;
		self.visitor.visit(&Node { path, key, value, kind });
		self.visited += 1;

		match value {
			Value::Array(items) => {
				for (index, item) in items.iter().enumerate() {
					self.visit(&path.index(index), Some(Key::Index(index)), item, depth + 1)?;
				}
			}
			Value::Object(map) => {
				for (name, item) in map {
					self.visit(&path.key(name), Some(Key::Name(name)), item, depth + 1)?;
				}
			}
			Value::Null | Value::Bool(_) | Value::String(_) | Value::Number(_) => {}
		}
		Ok(())
	}

	fn visit_slot<P>(&mut self, path: &P, key: Option<Key<'_>>, slot: &mut Value, depth: usize) -> Result<()>
	where
		P: WalkPath,
		V: Transformer<P>,
	{
		self.enter(depth)?;
		let kind = slot.classify()?;
		let replacement = self.visitor.transform(&Node {
			path,
			key,
			value: &*slot,
			kind,
		});
		self.visited += 1;

		match replacement {
			Some(value) => {
				trace!(path = %path, from = %kind, to = %value.kind(), "slot replaced");
				self.replaced += 1;
				let mut original = std::mem::replace(slot, value);
				self.descend_mut(path, &mut original, depth)
			}
			None => self.descend_mut(path, slot, depth),
		}
	}

	fn descend_mut<P>(&mut self, path: &P, value: &mut Value, depth: usize) -> Result<()>
	where
		P: WalkPath,
		V: Transformer<P>,
	{
		match value {
			Value::Array(items) => {
				for (index, item) in items.iter_mut().enumerate() {
					self.visit_slot(&path.index(index), Some(Key::Index(index)), item, depth + 1)?;
				}
			}
			Value::Object(map) => {
				for (name, item) in map.iter_mut() {
					self.visit_slot(&path.key(name), Some(Key::Name(name)), item, depth + 1)?;
				}
			}
			Value::Null | Value::Bool(_) | Value::String(_) | Value::Number(_) => {}
		}
		Ok(())
	}
}
