use core::{iter::Flatten, option, str::Split};

/// A parsed `tagName.class1.class2…` descriptor.
///
/// Parsing never fails. Empty segments (as in `"div..a"` or `""`) are kept and handed to the DOM as-is,
/// which will usually reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec<'a> {
	tag_name: &'a str,
	classes: Option<&'a str>,
}
impl<'a> TagSpec<'a> {
	#[must_use]
	pub fn parse(tag_spec: &'a str) -> Self {
		match tag_spec.split_once('.') {
			Some((tag_name, classes)) => Self { tag_name, classes: Some(classes) },
			None => Self { tag_name: tag_spec, classes: None },
		}
	}

	/// The first dot-separated segment.
	#[must_use]
	pub fn tag_name(&self) -> &'a str {
		self.tag_name
	}

	/// The remaining segments, in order.
	#[must_use]
	pub fn classes(&self) -> Classes<'a> {
		Classes(self.classes.map(|classes| classes.split('.')).into_iter().flatten())
	}

	#[must_use]
	pub fn is_svg(&self) -> bool {
		crate::namespace::is_svg_tag(self.tag_name)
	}
}

/// Iterator over the class names of a [`TagSpec`].
#[derive(Debug, Clone)]
pub struct Classes<'a>(Flatten<option::IntoIter<Split<'a, char>>>);
impl<'a> Iterator for Classes<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}

#[cfg(test)]
mod tests {
	use super::TagSpec;

	fn classes<'a>(spec: &TagSpec<'a>) -> Vec<&'a str> {
		spec.classes().collect()
	}

	#[test]
	fn tag_only() {
		let spec = TagSpec::parse("div");
		assert_eq!(spec.tag_name(), "div");
		assert!(classes(&spec).is_empty());
	}

	#[test]
	fn tag_with_classes() {
		let spec = TagSpec::parse("tag.a.b.c");
		assert_eq!(spec.tag_name(), "tag");
		assert_eq!(classes(&spec), ["a", "b", "c"]);
	}

	#[test]
	fn empty_segments_are_kept() {
		let spec = TagSpec::parse("div..b.");
		assert_eq!(spec.tag_name(), "div");
		assert_eq!(classes(&spec), ["", "b", ""]);

		let spec = TagSpec::parse(".a");
		assert_eq!(spec.tag_name(), "");
		assert_eq!(classes(&spec), ["a"]);

		assert_eq!(TagSpec::parse("").tag_name(), "");
	}

	#[test]
	fn svg_lookup() {
		assert!(TagSpec::parse("svg.icon").is_svg());
		assert!(!TagSpec::parse("div.svg").is_svg());
	}
}
