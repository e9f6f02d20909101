use crate::{
	namespace::{attribute_namespace, SVG_NAMESPACE},
	AttributeValue, Child, Children, Options, TagSpec,
};
use js_sys::{Function, ReferenceError, Reflect};
use std::borrow::Cow;
use tracing::{error, field, instrument, trace, trace_span, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// An owned `(tag_spec, options, children)` triple, mainly used to nest elements through [`Child::Build`].
#[derive(Debug, Default)]
pub struct ElementSpec<'a> {
	pub tag_spec: Cow<'a, str>,
	pub options: Options<'a>,
	pub children: Option<Children<'a>>,
}
impl<'a> ElementSpec<'a> {
	#[must_use]
	pub fn new(tag_spec: impl Into<Cow<'a, str>>) -> Self {
		Self {
			tag_spec: tag_spec.into(),
			options: Options::default(),
			children: None,
		}
	}

	#[must_use]
	pub fn options(self, options: Options<'a>) -> Self {
		Self { options, ..self }
	}

	#[must_use]
	pub fn children(self, children: impl Into<Children<'a>>) -> Self {
		Self {
			children: Some(children.into()),
			..self
		}
	}

	/// Builds this element through `document`.
	///
	/// # Errors
	///
	/// Any error thrown by the DOM, see [`create_element_in`].
	pub fn build(self, document: &Document) -> Result<Element, JsValue> {
		let Self { tag_spec, options, children } = self;
		create_element_in(document, &tag_spec, options, children)
	}
}

/// Like [`create_element_in`], but with the global `window.document`.
///
/// # Errors
///
/// A [***ReferenceError***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/ReferenceError) if there is no global document,
/// otherwise see [`create_element_in`].
pub fn create_element(tag_spec: &str, options: Options<'_>, children: Option<Children<'_>>) -> Result<Element, JsValue> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from(ReferenceError::new("document is not defined")))?;
	create_element_in(&document, tag_spec, options, children)
}

/// Creates a new element from `tag_spec` (`"tag.class1.class2…"`), applies `options` and appends `children`.
///
/// The steps run in this order:
///
/// 1. create the element, in the SVG namespace iff the tag is one of [`SVG_TAGS`](`crate::SVG_TAGS`),
/// 2. add classes,
/// 3. set truthy attributes,
/// 4. assign DOM properties,
/// 5. assign inline styles,
/// 6. add non-capturing event listeners,
/// 7. build and append children,
/// 8. call [`Options::reference`],
/// 9. assign dataset entries.
///
/// Nothing is validated up front.
///
/// # Errors
///
/// The first error thrown by the DOM (for example for an invalid tag name or an empty class) is returned as-is,
/// and the remaining steps are skipped.
/// The partially built element is then dropped without having been attached anywhere.
#[instrument(skip(document))]
pub fn create_element_in(document: &Document, tag_spec: &str, options: Options<'_>, children: Option<Children<'_>>) -> Result<Element, JsValue> {
	let Options {
		style,
		listeners,
		attributes,
		reference,
		dom_props,
		dataset,
	} = options;

	let tag = TagSpec::parse(tag_spec);
	let element = create_node(document, &tag)?;

	add_classes(&element, &tag)?;
	set_attributes(&element, &attributes)?;
	assign_dom_props(&element, &dom_props)?;
	assign_style(&element, &style)?;
	add_listeners(&element, &listeners)?;
	if let Some(children) = children {
		append_children(document, &element, children)?;
	}

	if let Some(reference) = reference {
		let span = trace_span!("Calling reference");
		let _enter = span.enter();
		reference(&element);
	}

	assign_dataset(&element, &dataset)?;
	Ok(element)
}

fn create_node(document: &Document, tag: &TagSpec<'_>) -> Result<Element, JsValue> {
	let name = tag.tag_name();
	if tag.is_svg() {
		let span = trace_span!("Creating SVG element", name);
		let _enter = span.enter();
		document.create_element_ns(Some(SVG_NAMESPACE), name).map_err(|error| {
			error!("Failed to create SVG element <{}>: {:?}", name, error);
			error
		})
	} else {
		let span = trace_span!("Creating HTML element", name);
		let _enter = span.enter();
		document.create_element(name).map_err(|error| {
			error!("Failed to create HTML element <{}>: {:?}", name, error);
			error
		})
	}
}

fn add_classes(element: &Element, tag: &TagSpec<'_>) -> Result<(), JsValue> {
	let mut classes = tag.classes().peekable();
	if classes.peek().is_none() {
		return Ok(());
	}

	let class_list = element.class_list();
	for class in classes {
		let span = trace_span!("Adding class", class);
		let _enter = span.enter();
		class_list.add_1(class).map_err(|error| {
			error!("Failed to add class {:?}: {:?}", class, error);
			error
		})?;
	}
	Ok(())
}

fn set_attributes(element: &Element, attributes: &[(Cow<'_, str>, AttributeValue<'_>)]) -> Result<(), JsValue> {
	for (name, value) in attributes {
		let name: &str = name;
		let value = match value.to_attribute_value() {
			Some(value) => value,
			None => {
				trace!("Skipping falsy attribute {:?}.", name);
				continue;
			}
		};

		let namespace = attribute_namespace(name);
		let span = trace_span!("Setting attribute", name, ?namespace, value = field::Empty);
		if cfg!(feature = "dangerous-logging") {
			span.record("value", &&*value);
		}
		let _enter = span.enter();

		match namespace {
			Some(namespace) => element.set_attribute_ns(Some(namespace), name, &value),
			None => element.set_attribute(name, &value),
		}
		.map_err(|error| {
			error!("Failed to set attribute {:?}: {:?}", name, error);
			error
		})?;
	}
	Ok(())
}

fn assign_dom_props(element: &Element, dom_props: &[(Cow<'_, str>, JsValue)]) -> Result<(), JsValue> {
	for (name, value) in dom_props {
		let name: &str = name;
		let span = trace_span!("Assigning property", name);
		let _enter = span.enter();
		assign(element, name, value).map_err(|error| {
			error!("Failed to assign property {:?}: {:?}", name, error);
			error
		})?;
	}
	Ok(())
}

fn assign_style(element: &Element, style: &[(Cow<'_, str>, Cow<'_, str>)]) -> Result<(), JsValue> {
	if style.is_empty() {
		return Ok(());
	}

	let declaration = Reflect::get(element, &JsValue::from_str("style"))?;
	for (key, value) in style {
		let key: &str = key;
		let span = trace_span!("Assigning style", key, value = field::Empty);
		if cfg!(feature = "dangerous-logging") {
			span.record("value", &&**value);
		}
		let _enter = span.enter();
		assign(&declaration, key, &JsValue::from_str(value)).map_err(|error| {
			error!("Failed to assign style {:?}: {:?}", key, error);
			error
		})?;
	}
	Ok(())
}

fn add_listeners(element: &Element, listeners: &[(Cow<'_, str>, Function)]) -> Result<(), JsValue> {
	for (event, handler) in listeners {
		let event: &str = event;
		let span = trace_span!("Adding event listener", event);
		let _enter = span.enter();
		element.add_event_listener_with_callback_and_bool(event, handler, false).map_err(|error| {
			error!("Failed to add event listener {:?}: {:?}", event, error);
			error
		})?;
	}
	Ok(())
}

fn append_children(document: &Document, element: &Element, children: Children<'_>) -> Result<(), JsValue> {
	match children {
		Children::Nodes(nodes) => {
			let span = trace_span!("Appending children", "nodes.len()" = nodes.len());
			let _enter = span.enter();
			for child in nodes.into_iter().flatten() {
				let node = match child {
					Child::Built(node) => node,
					Child::Build(spec) => (*spec).build(document)?.into(),
				};
				element.append_child(&node).map_err(|error| {
					error!("Failed to append child {:?}: {:?}", node, error);
					error
				})?;
			}
		}
		Children::Text(text) if text.is_empty() => trace!("Skipping empty text."),
		Children::Text(text) => {
			let span = trace_span!("Appending text node", "text.len()" = text.len(), text = field::Empty);
			if cfg!(feature = "dangerous-logging") {
				span.record("text", &&*text);
			}
			let _enter = span.enter();
			let text_node = document.create_text_node(&text);
			element.append_child(&text_node).map_err(|error| {
				error!("Failed to append text node: {:?}", error);
				error
			})?;
		}
	}
	Ok(())
}

fn assign_dataset(element: &Element, dataset: &[(Cow<'_, str>, Cow<'_, str>)]) -> Result<(), JsValue> {
	if dataset.is_empty() {
		return Ok(());
	}

	let map = Reflect::get(element, &JsValue::from_str("dataset"))?;
	for (key, value) in dataset {
		let key: &str = key;
		let span = trace_span!("Assigning dataset entry", key, value = field::Empty);
		if cfg!(feature = "dangerous-logging") {
			span.record("value", &&**value);
		}
		let _enter = span.enter();
		assign(&map, key, &JsValue::from_str(value)).map_err(|error| {
			error!("Failed to assign dataset entry {:?}: {:?}", key, error);
			error
		})?;
	}
	Ok(())
}

/// `target[key] = value`, with [`Reflect.set`](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Reflect/set).
///
/// Like a sloppy-mode assignment, a rejected write (to a read-only property, say) is not an error.
/// Exceptions thrown by setters are.
pub(crate) fn assign(target: &JsValue, key: &str, value: &JsValue) -> Result<(), JsValue> {
	if !Reflect::set(target, &JsValue::from_str(key), value)? {
		warn!("Assignment to {:?} was rejected.", key);
	}
	Ok(())
}
