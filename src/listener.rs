use js_sys::Function;
use tracing::trace;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Event;

/// Wraps `handler` into a [`Function`] for [`Options::listeners`](`crate::Options::listeners`).
///
/// Ownership of the closure moves to the JavaScript side, so it stays callable for as long as
/// any element can dispatch to it. It is not freed when the element is dropped on the Rust side.
pub fn listener(handler: impl 'static + FnMut(Event)) -> Function {
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	trace!("Created listener Closure.");
	closure.into_js_value().unchecked_into()
}
