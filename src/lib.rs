#![doc(html_root_url = "https://docs.rs/hyperscript-dom/0.0.1")]
#![warn(clippy::pedantic)]
//! A minimal hyperscript-style helper that builds one [`web_sys::Element`] per call.
//!
//! There is no virtual DOM here: every call creates a new element (and its new descendants) and returns it.
//! See [`create_element_in`] for the exact order in which [`Options`] are applied.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod build;
mod children;
mod listener;
pub mod namespace;
mod options;
mod reference;
mod tag;

pub use build::{create_element, create_element_in, ElementSpec};
pub use children::{Child, Children};
pub use listener::listener;
pub use namespace::{attribute_namespace, is_svg_tag, NAMESPACED_ATTRIBUTES, SVG_NAMESPACE, SVG_TAGS, XLINK_NAMESPACE};
pub use options::{AttributeValue, Options};
pub use reference::{bind_reference, ReferenceBinder, ReferenceTarget};
pub use tag::{Classes, TagSpec};
