//! The two closed lookup tables that decide namespaced creation.
//!
//! Neither table can be extended at runtime. An SVG element whose tag isn't listed in [`SVG_TAGS`]
//! (for example `<a>`, `<animate>` or `<foreignObject>`) is created as plain HTML element.

/// [***createElementNS***](https://developer.mozilla.org/en-US/docs/Web/API/Document/createElementNS) namespace for SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Namespace of the `xlink:` attribute prefix.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Tag names that are created in the [`SVG_NAMESPACE`].
///
/// Matching is exact and case-sensitive.
pub const SVG_TAGS: &[&str] = &[
	"circle",
	"clipPath",
	"defs",
	"desc",
	"ellipse",
	"g",
	"image",
	"line",
	"linearGradient",
	"marker",
	"mask",
	"path",
	"pattern",
	"polygon",
	"polyline",
	"radialGradient",
	"rect",
	"stop",
	"svg",
	"switch",
	"symbol",
	"text",
	"textPath",
	"title",
	"tspan",
	"use",
];

/// Attribute names that are set through [***setAttributeNS***](https://developer.mozilla.org/en-US/docs/Web/API/Element/setAttributeNS), with their namespace.
pub const NAMESPACED_ATTRIBUTES: &[(&str, &str)] = &[("xlink:href", XLINK_NAMESPACE)];

#[must_use]
pub fn is_svg_tag(tag_name: &str) -> bool {
	SVG_TAGS.contains(&tag_name)
}

/// Looks up the namespace an attribute must be set with, if any.
#[must_use]
pub fn attribute_namespace(name: &str) -> Option<&'static str> {
	NAMESPACED_ATTRIBUTES.iter().find(|&&(n, _)| n == name).map(|&(_, namespace)| namespace)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn svg_tags() {
		for tag in &["svg", "g", "path", "use", "clipPath", "textPath", "title"] {
			assert!(is_svg_tag(tag), "{} should be an SVG tag", tag);
		}
		for tag in &["div", "a", "span", "foreignObject", "SVG", "clippath", ""] {
			assert!(!is_svg_tag(tag), "{:?} should not be an SVG tag", tag);
		}
	}

	#[test]
	fn svg_tags_are_unique() {
		let mut sorted = SVG_TAGS.to_vec();
		sorted.sort_unstable();
		sorted.dedup();
		assert_eq!(sorted.len(), SVG_TAGS.len());
	}

	#[test]
	fn namespaced_attributes() {
		assert_eq!(attribute_namespace("xlink:href"), Some(XLINK_NAMESPACE));
		assert_eq!(attribute_namespace("href"), None);
		assert_eq!(attribute_namespace("xlink:title"), None);
	}
}
