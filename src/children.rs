use crate::ElementSpec;
use core::fmt::{self, Debug, Formatter};
use std::borrow::Cow;
use web_sys::{Element, Node, Text};

/// The content of a new element.
///
/// A string and a node list can't be mixed in one call. Nest an element (or pass a [`Text`] node as [`Child::Built`]) to get both.
pub enum Children<'a> {
	/// Becomes a single text node, unless it is empty, in which case nothing is added.
	Text(Cow<'a, str>),
	/// Appended in order. [`None`] entries are skipped.
	Nodes(Vec<Option<Child<'a>>>),
}

/// One entry of [`Children::Nodes`].
#[derive(Debug)]
pub enum Child<'a> {
	/// An existing node, appended as-is (and so moved if it already has a parent).
	Built(Node),
	/// Built recursively before it's appended.
	Build(Box<ElementSpec<'a>>),
}

impl Debug for Children<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Children::Text(text) if cfg!(feature = "dangerous-logging") => f.debug_tuple("Text").field(text).finish(),
			Children::Text(text) => f.debug_tuple("Text").field(&format_args!("<{} bytes>", text.len())).finish(),
			Children::Nodes(nodes) => f.debug_tuple("Nodes").field(nodes).finish(),
		}
	}
}

impl<'a> From<&'a str> for Children<'a> {
	fn from(text: &'a str) -> Self {
		Self::Text(Cow::Borrowed(text))
	}
}

impl From<String> for Children<'_> {
	fn from(text: String) -> Self {
		Self::Text(Cow::Owned(text))
	}
}

impl<'a> From<Cow<'a, str>> for Children<'a> {
	fn from(text: Cow<'a, str>) -> Self {
		Self::Text(text)
	}
}

impl<'a> From<Vec<Option<Child<'a>>>> for Children<'a> {
	fn from(nodes: Vec<Option<Child<'a>>>) -> Self {
		Self::Nodes(nodes)
	}
}

impl<'a> From<Vec<Child<'a>>> for Children<'a> {
	fn from(nodes: Vec<Child<'a>>) -> Self {
		Self::Nodes(nodes.into_iter().map(Some).collect())
	}
}

impl From<Node> for Child<'_> {
	fn from(node: Node) -> Self {
		Self::Built(node)
	}
}

impl From<Element> for Child<'_> {
	fn from(element: Element) -> Self {
		Self::Built(element.into())
	}
}

impl From<Text> for Child<'_> {
	fn from(text: Text) -> Self {
		Self::Built(text.into())
	}
}

impl<'a> From<ElementSpec<'a>> for Child<'a> {
	fn from(spec: ElementSpec<'a>) -> Self {
		Self::Build(Box::new(spec))
	}
}
