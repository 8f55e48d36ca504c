use image::RgbaImage;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::composite::Support;
use crate::overlay::{self, spawn};
use crate::state::RenderState;
use crate::Error;

/// A render primitive, driven through `start`, any number of `draw` calls, then `finish`.
///
/// `finish` is only called after a successful `start`. A primitive must release everything it
/// acquired in `start` by the end of `finish`, and a repeated `finish` must not release anything
/// twice.
pub trait Primitive: Send {
	/// Name the primitive is registered under.
	fn name(&self) -> &'static str;

	fn start(&mut self, state: &RenderState, support: &Support) -> Result<(), Error>;

	fn finish(&mut self, state: &RenderState);

	fn draw(&self, state: &RenderState, img: &mut RgbaImage);
}

/// Builds a primitive from its JSON options.
pub type Constructor = fn(&Value) -> Result<Box<dyn Primitive>, Error>;

/// Primitive constructors keyed by name.
pub struct Registry {
	constructors: FxHashMap<&'static str, Constructor>
}

impl Registry {
	pub fn new() -> Self {
		Registry { constructors: FxHashMap::default() }
	}

	/// A registry containing `overlay` and `overlay-spawn`.
	pub fn with_defaults() -> Self {
		let mut registry = Registry::new();

		registry.register(overlay::NAME, overlay::create);
		registry.register(spawn::NAME, spawn::create);

		registry
	}

	/// Registers a constructor, replacing any previous one with the same name.
	pub fn register(&mut self, name: &'static str, constructor: Constructor) {
		if self.constructors.insert(name, constructor).is_some() {
			warn!("replacing the render primitive registered as {}", name);
		}
	}

	pub fn create(&self, name: &str, options: &Value) -> Result<Box<dyn Primitive>, Error> {
		let constructor = self.constructors.get(name).ok_or_else(|| Error::UnknownPrimitive(name.to_owned()))?;

		constructor(options)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.constructors.keys().copied().collect();
		names.sort_unstable();

		names
	}
}

impl Default for Registry {
	fn default() -> Self {
		Registry::with_defaults()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_defaults() {
		let registry = Registry::with_defaults();

		assert_eq!(registry.names(), vec!["overlay", "overlay-spawn"]);
		assert_eq!(registry.create("overlay-spawn", &Value::Null).unwrap().name(), "overlay-spawn");
		assert_eq!(registry.create("overlay", &Value::Null).unwrap().name(), "overlay");
	}

	#[test]
	fn test_unknown() {
		let registry = Registry::with_defaults();

		assert!(matches!(
			registry.create("overlay-mineral", &Value::Null),
			Err(Error::UnknownPrimitive(ref name)) if name == "overlay-mineral"
		));
	}

	#[test]
	fn test_bad_options() {
		let registry = Registry::with_defaults();
		let options = serde_json::json!({ "overlay_color": [1, 2] });

		assert!(matches!(
			registry.create("overlay", &options),
			Err(Error::Options { primitive: "overlay", .. })
		));
	}
}
