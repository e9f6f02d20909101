//! Deferred reference binding: "put the finished element into field `key` of `target`".
//!
//! ```
//! use hyperscript_dom::{bind_reference, ReferenceBinder};
//! use std::{cell::RefCell, collections::HashMap, rc::Rc};
//!
//! let registry = Rc::new(RefCell::new(HashMap::<String, u32>::new()));
//!
//! // With a value, the assignment happens right away.
//! assert!(bind_reference(registry.clone(), "now", Some(1_u32)).unwrap().is_none());
//!
//! // Without, a reusable binder is returned.
//! let later: ReferenceBinder<_> = bind_reference(registry.clone(), "later", None::<u32>).unwrap().unwrap();
//! later.bind(2_u32).unwrap();
//! later.bind(3_u32).unwrap();
//!
//! assert_eq!(registry.borrow()["now"], 1);
//! assert_eq!(registry.borrow()["later"], 3);
//! ```

use crate::build::assign;
use core::hash::BuildHasher;
use std::{borrow::Cow, cell::RefCell, collections, rc::Rc};
use tracing::trace;
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use web_sys::Element;

/// Something with named fields that values can be assigned into.
pub trait ReferenceTarget<V> {
	/// `self[key] = value`, overwriting any previous value.
	///
	/// # Errors
	///
	/// Only JavaScript targets can fail, when a setter throws.
	fn assign(&self, key: &str, value: V) -> Result<(), JsValue>;
}

impl<V, S: BuildHasher> ReferenceTarget<V> for RefCell<hashbrown::HashMap<String, V, S>> {
	fn assign(&self, key: &str, value: V) -> Result<(), JsValue> {
		self.borrow_mut().insert(key.to_owned(), value);
		Ok(())
	}
}

impl<V, S: BuildHasher> ReferenceTarget<V> for RefCell<collections::HashMap<String, V, S>> {
	fn assign(&self, key: &str, value: V) -> Result<(), JsValue> {
		self.borrow_mut().insert(key.to_owned(), value);
		Ok(())
	}
}

impl<V: Into<JsValue>> ReferenceTarget<V> for js_sys::Object {
	fn assign(&self, key: &str, value: V) -> Result<(), JsValue> {
		assign(self, key, &value.into())
	}
}

impl<V, T: ?Sized + ReferenceTarget<V>> ReferenceTarget<V> for &T {
	fn assign(&self, key: &str, value: V) -> Result<(), JsValue> {
		(**self).assign(key, value)
	}
}

impl<V, T: ?Sized + ReferenceTarget<V>> ReferenceTarget<V> for Rc<T> {
	fn assign(&self, key: &str, value: V) -> Result<(), JsValue> {
		(**self).assign(key, value)
	}
}

/// A `(target, key)` pair that assigns into `target[key]` whenever it's [bound](`ReferenceBinder::bind`).
///
/// There's no one-shot lock: each call overwrites the field again.
#[derive(Debug, Clone)]
pub struct ReferenceBinder<T> {
	target: T,
	key: Cow<'static, str>,
}
impl<T> ReferenceBinder<T> {
	#[must_use]
	pub fn new(target: T, key: impl Into<Cow<'static, str>>) -> Self {
		Self { target, key: key.into() }
	}

	#[must_use]
	pub fn key(&self) -> &str {
		&self.key
	}

	/// `target[key] = value`.
	///
	/// # Errors
	///
	/// Iff the target's [`ReferenceTarget::assign`] fails.
	pub fn bind<V>(&self, value: V) -> Result<(), JsValue>
	where
		T: ReferenceTarget<V>,
	{
		trace!("Binding reference {:?}.", self.key);
		self.target.assign(&self.key, value)
	}

	/// Converts this binder into an [`Options::reference`](`crate::Options::reference`) callback,
	/// which routes the finished element into `target[key]`.
	///
	/// A failing assignment is thrown into JavaScript.
	pub fn into_reference<'a>(self) -> impl 'a + FnOnce(&Element)
	where
		T: 'a + ReferenceTarget<Element>,
	{
		move |element: &Element| self.bind(element.clone()).unwrap_throw()
	}
}

/// Binds `link` into `target[key]` right away if given, and returns [`None`].
///
/// [`Some`] binds immediately whatever the value, even an empty or zero one. Only [`None`] defers.
///
/// Without `link`, returns a [`ReferenceBinder`] for `target` and `key` instead, which can be bound (repeatedly) later.
///
/// # Errors
///
/// Iff an immediate assignment fails.
pub fn bind_reference<T, V>(target: T, key: impl Into<Cow<'static, str>>, link: Option<V>) -> Result<Option<ReferenceBinder<T>>, JsValue>
where
	T: ReferenceTarget<V>,
{
	let binder = ReferenceBinder::new(target, key);
	match link {
		Some(link) => binder.bind(link).map(|()| None),
		None => Ok(Some(binder)),
	}
}

#[cfg(test)]
mod tests {
	use super::{bind_reference, ReferenceBinder, ReferenceTarget};
	use std::{cell::RefCell, rc::Rc};

	type Registry = RefCell<hashbrown::HashMap<String, &'static str>>;

	#[test]
	fn immediate() {
		let registry = Registry::default();
		let binder = bind_reference(&registry, "field", Some("value")).unwrap();
		assert!(binder.is_none());
		assert_eq!(registry.borrow().get("field"), Some(&"value"));
	}

	#[test]
	fn some_falsy_value_binds_immediately() {
		let registry = RefCell::new(hashbrown::HashMap::<String, i32>::new());
		assert!(bind_reference(&registry, "zero", Some(0)).unwrap().is_none());
		assert_eq!(registry.borrow()["zero"], 0);
	}

	#[test]
	fn deferred_overwrites() {
		let registry = Rc::new(Registry::default());
		let binder = bind_reference(Rc::clone(&registry), "field", None::<&str>).unwrap().unwrap();
		assert!(registry.borrow().is_empty());

		binder.bind("first").unwrap();
		assert_eq!(registry.borrow()["field"], "first");

		binder.bind("second").unwrap();
		assert_eq!(registry.borrow()["field"], "second");
		assert_eq!(registry.borrow().len(), 1);
	}

	#[test]
	fn binders_are_independent() {
		let registry = Registry::default();
		let a = ReferenceBinder::new(&registry, "a");
		let b = ReferenceBinder::new(&registry, String::from("b"));
		a.bind("1").unwrap();
		b.bind("2").unwrap();
		a.bind("3").unwrap();
		assert_eq!(registry.borrow()["a"], "3");
		assert_eq!(registry.borrow()["b"], "2");
		assert_eq!(b.key(), "b");
	}

	#[test]
	fn std_hash_map() {
		let registry = RefCell::new(std::collections::HashMap::<String, i32>::new());
		registry.assign("x", 1).unwrap();
		registry.assign("x", 2).unwrap();
		assert_eq!(registry.borrow()["x"], 2);
	}
}
