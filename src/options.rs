use core::fmt::{self, Debug, Formatter};
use js_sys::Function;
use std::borrow::Cow;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Everything that is applied to a newly created element aside from its tag, classes and children.
///
/// All members are independent. An empty list (or [`None`] for [`reference`](`Options::reference`)) skips that step entirely.
/// Entries are applied in insertion order.
#[derive(Default)]
pub struct Options<'a> {
	/// Inline style assignments, as in `element.style[key] = value`.
	///
	/// Keys are the [***CSSStyleDeclaration***](https://developer.mozilla.org/en-US/docs/Web/API/CSSStyleDeclaration) property names, so `backgroundColor` rather than `background-color`.
	pub style: Vec<(Cow<'a, str>, Cow<'a, str>)>,

	/// Non-capturing event listeners, by event name.
	pub listeners: Vec<(Cow<'a, str>, Function)>,

	/// Attributes. Entries with a [falsy](`AttributeValue::is_truthy`) value are skipped.
	pub attributes: Vec<(Cow<'a, str>, AttributeValue<'a>)>,

	/// Called once with the finished element, before [`dataset`](`Options::dataset`) is assigned.
	pub reference: Option<Box<dyn 'a + FnOnce(&Element)>>,

	/// Direct property assignments, as in `element[key] = value`. Nothing is skipped here.
	pub dom_props: Vec<(Cow<'a, str>, JsValue)>,

	/// [***dataset***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLElement/dataset) entries, by camelCase key.
	pub dataset: Vec<(Cow<'a, str>, Cow<'a, str>)>,
}
impl<'a> Options<'a> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn style(mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
		self.style.push((key.into(), value.into()));
		self
	}

	#[must_use]
	pub fn listener(mut self, event: impl Into<Cow<'a, str>>, handler: Function) -> Self {
		self.listeners.push((event.into(), handler));
		self
	}

	#[must_use]
	pub fn attribute(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<AttributeValue<'a>>) -> Self {
		self.attributes.push((name.into(), value.into()));
		self
	}

	/// Replaces any previously set reference callback.
	#[must_use]
	pub fn reference(mut self, reference: impl 'a + FnOnce(&Element)) -> Self {
		self.reference = Some(Box::new(reference));
		self
	}

	#[must_use]
	pub fn dom_prop(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<JsValue>) -> Self {
		self.dom_props.push((name.into(), value.into()));
		self
	}

	#[must_use]
	pub fn data(mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
		self.dataset.push((key.into(), value.into()));
		self
	}
}

impl Debug for Options<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		fn keys<'b, V>(entries: &'b [(Cow<'_, str>, V)]) -> Vec<&'b str> {
			entries.iter().map(|(key, _)| key.as_ref()).collect()
		}

		let mut debug = f.debug_struct("Options");
		debug.field("style", &keys(&self.style)).field("listeners", &keys(&self.listeners));
		if cfg!(feature = "dangerous-logging") {
			debug.field("attributes", &self.attributes);
		} else {
			debug.field("attributes", &keys(&self.attributes));
		}
		debug
			.field("reference", &self.reference.is_some())
			.field("dom_props", &keys(&self.dom_props))
			.field("dataset", &keys(&self.dataset))
			.finish()
	}
}

/// An attribute value with the host's truthiness rules.
///
/// Only truthy values are ever written to the DOM. Falsy are the empty string, `0`, `NaN`, `false` and [`Absent`](`AttributeValue::Absent`).
/// A falsy value doesn't remove an existing attribute either, it's just not set.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue<'a> {
	Text(Cow<'a, str>),
	Number(f64),
	Bool(bool),
	Absent,
}
impl<'a> AttributeValue<'a> {
	#[must_use]
	pub fn is_truthy(&self) -> bool {
		match self {
			AttributeValue::Text(text) => !text.is_empty(),
			AttributeValue::Number(number) => *number != 0.0 && !number.is_nan(),
			AttributeValue::Bool(bool) => *bool,
			AttributeValue::Absent => false,
		}
	}

	/// The string that is written for this value, or [`None`] if it is falsy.
	///
	/// Numbers are formatted like JavaScript's `String(number)`, so `1e21` becomes `"1e+21"`.
	#[must_use]
	pub fn to_attribute_value(&self) -> Option<Cow<'_, str>> {
		match self {
			AttributeValue::Text(text) if !text.is_empty() => Some(Cow::Borrowed(text.as_ref())),
			AttributeValue::Number(number) if self.is_truthy() => Some(Cow::Owned(ryu_js::Buffer::new().format(*number).to_owned())),
			AttributeValue::Bool(true) => Some(Cow::Borrowed("true")),
			_ => None,
		}
	}
}

impl<'a> From<&'a str> for AttributeValue<'a> {
	fn from(text: &'a str) -> Self {
		Self::Text(Cow::Borrowed(text))
	}
}

impl From<String> for AttributeValue<'_> {
	fn from(text: String) -> Self {
		Self::Text(Cow::Owned(text))
	}
}

impl<'a> From<Cow<'a, str>> for AttributeValue<'a> {
	fn from(text: Cow<'a, str>) -> Self {
		Self::Text(text)
	}
}

impl From<bool> for AttributeValue<'_> {
	fn from(bool: bool) -> Self {
		Self::Bool(bool)
	}
}

impl From<f64> for AttributeValue<'_> {
	fn from(number: f64) -> Self {
		Self::Number(number)
	}
}

macro_rules! from_number {
	($($t:ty),*$(,)?) => {$(
		impl From<$t> for AttributeValue<'_> {
			#[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
			fn from(number: $t) -> Self {
				Self::Number(number as f64)
			}
		}
	)*};
}
from_number!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a, T: Into<AttributeValue<'a>>> From<Option<T>> for AttributeValue<'a> {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Absent, Into::into)
	}
}
