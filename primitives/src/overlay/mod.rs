//! Overlay primitives tint the top face of blocks that have open space above them.

use std::sync::Arc;
use image::{GrayImage, Rgba, RgbaImage};
use serde_json::Value;

use crate::block::{Property, SNOW_LAYER, STONE_SLAB};
use crate::composite::{self, Support};
use crate::primitive::Primitive;
use crate::state::RenderState;
use crate::Error;

pub mod spawn;

pub const NAME: &str = "overlay";

/// Color used when no `overlay_color` option is given.
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([200, 200, 255, 155]);

/// Supplies the overlay color of each block. An alpha of 0 leaves the block untouched.
pub trait OverlayColor {
	fn color(&self, state: &RenderState) -> Rgba<u8>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverlayOptions {
	overlay_color: Option<[u8; 4]>
}

/// Shared overlay machinery: holds the top face mask between `start` and `finish` and paints
/// whatever color an `OverlayColor` picks. On its own it paints one flat color.
#[derive(Debug, Clone)]
pub struct Overlay {
	color: Rgba<u8>,
	facemask_top: Option<Arc<GrayImage>>
}

impl Overlay {
	pub fn new() -> Self {
		Overlay::with_color(DEFAULT_COLOR)
	}

	pub fn with_color(color: Rgba<u8>) -> Self {
		Overlay { color, facemask_top: None }
	}

	/// Reads `{ "overlay_color": [r, g, b, a] }`. Null options select the default color.
	pub fn from_options(options: &Value) -> Result<Self, Error> {
		if options.is_null() {
			return Ok(Overlay::new());
		}

		let options: OverlayOptions = serde_json::from_value(options.clone())
			.map_err(|source| Error::Options { primitive: NAME, source })?;

		Ok(Overlay::with_color(options.overlay_color.map(Rgba).unwrap_or(DEFAULT_COLOR)))
	}

	pub fn is_started(&self) -> bool {
		self.facemask_top.is_some()
	}

	/// Paints the top face of the current block with the color chosen by `colors`.
	pub fn draw_with(&self, colors: &dyn OverlayColor, state: &RenderState, img: &mut RgbaImage) {
		let mask = match self.facemask_top {
			Some(ref mask) => mask,
			None => return
		};

		// Only faces that can be seen from above get an overlay.
		let above = state.block_above();
		let properties = state.properties;

		if !properties.has(above, Property::Transparent) {
			return;
		}

		if properties.has(above, Property::Solid) || properties.has(above, Property::Fluid) {
			return;
		}

		let Rgba([r, g, b, a]) = colors.color(state);

		if a == 0 {
			return;
		}

		// Slabs and snow have their top face lower in the sprite.
		let offset = match state.block.id() {
			id if id == STONE_SLAB.id() => 6,
			id if id == SNOW_LAYER.id() => 9,
			_ => 0
		};

		composite::alpha_over_white(img, mask, state.img_x, state.img_y + offset, a);
		composite::tint_with_mask(img, [r, g, b], mask, state.img_x, state.img_y + offset);
	}
}

impl Default for Overlay {
	fn default() -> Self {
		Overlay::new()
	}
}

impl OverlayColor for Overlay {
	fn color(&self, _: &RenderState) -> Rgba<u8> {
		self.color
	}
}

impl Primitive for Overlay {
	fn name(&self) -> &'static str {
		NAME
	}

	fn start(&mut self, _: &RenderState, support: &Support) -> Result<(), Error> {
		let mask = support.facemask_top.clone().ok_or(Error::MissingSupport("top face mask"))?;

		self.facemask_top = Some(mask);

		Ok(())
	}

	fn finish(&mut self, _: &RenderState) {
		self.facemask_top = None;
	}

	fn draw(&self, state: &RenderState, img: &mut RgbaImage) {
		self.draw_with(self, state, img)
	}
}

pub fn create(options: &Value) -> Result<Box<dyn Primitive>, Error> {
	Ok(Box::new(Overlay::from_options(options)?))
}
