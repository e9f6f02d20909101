#![cfg(target_arch = "wasm32")]

use hyperscript_dom::{create_element_in, Child, ElementSpec, Options, ReferenceBinder};
use js_sys::{Function, Object, Reflect};
use std::cell::Cell;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::DomException;

wasm_bindgen_test_configure!(run_in_browser);

use web_common_::document;

fn exception_name(error: JsValue) -> String {
	error.dyn_into::<DomException>().expect("Expected a DOMException").name()
}

#[wasm_bindgen_test]
fn empty_tag_spec() {
	let error = create_element_in(&document(), "", Options::new(), None).unwrap_err();
	assert_eq!(exception_name(error), "InvalidCharacterError");
}

#[wasm_bindgen_test]
fn invalid_tag_name() {
	let error = create_element_in(&document(), "no good", Options::new(), None).unwrap_err();
	assert_eq!(exception_name(error), "InvalidCharacterError");
}

#[wasm_bindgen_test]
fn empty_class_aborts() {
	let called = Cell::new(false);
	let error = create_element_in(&document(), "div..a", Options::new().reference(|_| called.set(true)), None).unwrap_err();
	assert_eq!(exception_name(error), "SyntaxError");
	assert!(!called.get());
}

#[wasm_bindgen_test]
fn invalid_attribute_name() {
	let error = create_element_in(&document(), "div", Options::new().attribute("invalid name", "x"), None).unwrap_err();
	assert_eq!(exception_name(error), "InvalidCharacterError");
}

#[wasm_bindgen_test]
fn falsy_invalid_attribute_is_never_reached() {
	assert!(create_element_in(&document(), "div", Options::new().attribute("invalid name", ""), None).is_ok());
}

#[wasm_bindgen_test]
fn invalid_dataset_key() {
	let error = create_element_in(&document(), "div", Options::new().data("a-b", "x"), None).unwrap_err();
	assert_eq!(exception_name(error), "SyntaxError");
}

#[wasm_bindgen_test]
fn nested_failure_propagates() {
	let called = Cell::new(false);
	let error = create_element_in(
		&document(),
		"div",
		Options::new().reference(|_| called.set(true)),
		Some(vec![Child::from(ElementSpec::new("span")), Child::from(ElementSpec::new("bad tag"))].into()),
	)
	.unwrap_err();
	assert_eq!(exception_name(error), "InvalidCharacterError");
	assert!(!called.get());
}

#[wasm_bindgen_test]
fn throwing_setter_propagates() {
	let target = Object::new();
	let descriptor = Object::new();
	let setter = Function::new_with_args("value", "throw new Error('setter failed')");
	Reflect::set(&descriptor, &"set".into(), &setter).unwrap();
	Object::define_property(&target, &"guarded".into(), &descriptor);

	let error = ReferenceBinder::new(target, "guarded").bind(JsValue::TRUE).unwrap_err();
	assert_eq!(error.dyn_into::<js_sys::Error>().unwrap().message(), "setter failed");
}
