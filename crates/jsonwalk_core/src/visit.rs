use std::fmt;

use crate::{Kind, Path, Value};

/// Position of a node inside its parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
	/// Object member name.
	Name(&'a str),
	/// Array element index.
	Index(usize),
}

impl fmt::Display for Key<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Name(name) => write!(f, "{name:?}"),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}

/// One visitor invocation. Created fresh for every node.
///
/// `P` is the location type threaded through the walk, [`Path`] unless the
/// walk was started with another [`WalkPath`](crate::WalkPath).
#[derive(Debug)]
pub struct Node<'a, P = Path> {
	/// Location of the node.
	pub path: &'a P,
	/// Key relative to the parent; `None` for the walked root.
	pub key: Option<Key<'a>>,
	/// Node value as classified before the callback.
	pub value: &'a Value,
	/// Classified kind of `value`.
	pub kind: Kind,
}

impl<P> Clone for Node<'_, P> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<P> Copy for Node<'_, P> {}

/// Read-only visitor.
pub trait Observer<P = Path> {
	/// Called once per node, parents before children.
	fn visit(&mut self, node: &Node<'_, P>);
}

/// Visitor that may replace nodes in their parent container.
pub trait Transformer<P = Path> {
	/// Return `Some` to store a replacement in the node's parent slot.
	///
	/// The replacement may be of any kind. Traversal still descends into the
	/// value passed in `node`, not into the replacement.
	fn transform(&mut self, node: &Node<'_, P>) -> Option<Value>;
}

/// No visitor at all; walking only validates structure.
impl<P> Observer<P> for () {
	fn visit(&mut self, _node: &Node<'_, P>) {}
}

impl<P, O: Observer<P> + ?Sized> Observer<P> for &mut O {
	fn visit(&mut self, node: &Node<'_, P>) {
		(**self).visit(node);
	}
}

impl<P, T: Transformer<P> + ?Sized> Transformer<P> for &mut T {
	fn transform(&mut self, node: &Node<'_, P>) -> Option<Value> {
		(**self).transform(node)
	}
}

/// Observer delegating to a closure. Built with [`callback`].
pub struct Callback<F>(F);

/// Wrap a closure as an [`Observer`].
pub fn callback<P, F>(f: F) -> Callback<F>
where
	F: FnMut(&Node<'_, P>),
{
	Callback(f)
}

impl<P, F> Observer<P> for Callback<F>
where
	F: FnMut(&Node<'_, P>),
{
	fn visit(&mut self, node: &Node<'_, P>) {
		(self.0)(node);
	}
}

/// Transformer delegating to a closure. Built with [`rewrite`].
pub struct Rewrite<F>(F);

/// Wrap a closure as a [`Transformer`].
pub fn rewrite<P, F>(f: F) -> Rewrite<F>
where
	F: FnMut(&Node<'_, P>) -> Option<Value>,
{
	Rewrite(f)
}

impl<P, F> Transformer<P> for Rewrite<F>
where
	F: FnMut(&Node<'_, P>) -> Option<Value>,
{
	fn transform(&mut self, node: &Node<'_, P>) -> Option<Value> {
		(self.0)(node)
	}
}
