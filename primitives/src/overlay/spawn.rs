//! Marks blocks hostile mobs can spawn on: strongly where it is dark enough even in daylight,
//! more faintly where it only gets dark enough at night.

use std::cmp;
use std::sync::Arc;
use image::{Rgba, RgbaImage};
use lightfield::position::ColumnPosition;
use lightfield::{Dimensions, LightField, LightKind};
use serde_json::Value;

use crate::block::Property;
use crate::composite::Support;
use crate::overlay::{Overlay, OverlayColor};
use crate::primitive::Primitive;
use crate::source::{ChunkSource, Region};
use crate::state::RenderState;
use crate::Error;

pub const NAME: &str = "overlay-spawn";

pub const SPAWN_RED: [u8; 3] = [229, 36, 38];

/// Alpha for blocks mobs can spawn on at any time of day.
pub const DAY_ALPHA: u8 = 240;
/// Alpha for blocks mobs can only spawn on at night.
pub const NIGHT_ALPHA: u8 = 150;

/// Hostile mobs spawn where the light level is at most this.
const SPAWN_LIGHT: i16 = 7;
/// How much darker sky light gets at night.
const NIGHT_DIMMING: i16 = 11;

/// Overlay alpha for a block with the given light levels in the space above it.
pub fn spawn_alpha(block_light: u8, sky_light: u8) -> u8 {
	let block_light = block_light as i16;
	let sky_light = sky_light as i16;

	if cmp::max(block_light, sky_light) <= SPAWN_LIGHT {
		DAY_ALPHA
	} else if cmp::max(block_light, sky_light - NIGHT_DIMMING) <= SPAWN_LIGHT {
		NIGHT_ALPHA
	} else {
		0
	}
}

/// Light fields held for the duration of one render pass.
#[derive(Debug)]
struct SpawnLight {
	dimensions: Dimensions,
	block: Arc<LightField>,
	sky: Arc<LightField>
}

impl SpawnLight {
	fn acquire(chunk: &dyn ChunkSource) -> Result<Self, Error> {
		let dimensions = chunk.dimensions();

		// The light that matters is in the space a mob would stand in, one level up.
		let block = acquire_field(chunk, LightKind::Block, dimensions)?;
		let sky = acquire_field(chunk, LightKind::Sky, dimensions)?;

		Ok(SpawnLight { dimensions, block, sky })
	}

	/// Block light and sky light one level above `at`. Above the top of the world there is no
	/// block light to read past the top layer, and the sky is always fully lit.
	fn above(&self, at: ColumnPosition) -> (u8, u8) {
		let height = self.dimensions.height();
		let z = at.z() as u16 + 1;

		let block_light = self.block.get(at.with_z(cmp::min(z, height - 1) as u8)).raw();

		let sky_light = if z == height {
			15
		} else {
			self.sky.get(at.with_z(z as u8)).raw()
		};

		(block_light, sky_light)
	}
}

fn acquire_field(chunk: &dyn ChunkSource, kind: LightKind, dimensions: Dimensions) -> Result<Arc<LightField>, Error> {
	let field = chunk.light_field(Region::Current, kind, 1)?;

	if field.dimensions() != dimensions {
		return Err(Error::LightHeight {
			kind,
			expected: dimensions.height(),
			actual: field.dimensions().height()
		});
	}

	Ok(field)
}

/// The `overlay-spawn` primitive.
#[derive(Debug)]
pub struct SpawnOverlay {
	parent: Overlay,
	light: Option<SpawnLight>
}

impl SpawnOverlay {
	pub fn new() -> Self {
		SpawnOverlay {
			parent: Overlay::new(),
			light: None
		}
	}

	pub fn from_options(options: &Value) -> Result<Self, Error> {
		match options {
			Value::Null => (),
			Value::Object(map) if map.is_empty() => (),
			other => warn!("{} takes no options, ignoring {}", NAME, other)
		}

		Ok(SpawnOverlay::new())
	}

	pub fn is_started(&self) -> bool {
		self.light.is_some()
	}
}

impl Default for SpawnOverlay {
	fn default() -> Self {
		SpawnOverlay::new()
	}
}

impl OverlayColor for SpawnOverlay {
	fn color(&self, state: &RenderState) -> Rgba<u8> {
		let [r, g, b] = SPAWN_RED;
		let clear = Rgba([r, g, b, 0]);

		let light = match self.light {
			Some(ref light) => light,
			None => return clear
		};

		if state.properties.has(state.block, Property::NoSpawn) {
			return clear;
		}

		let (block_light, sky_light) = light.above(state.position);

		Rgba([r, g, b, spawn_alpha(block_light, sky_light)])
	}
}

impl Primitive for SpawnOverlay {
	fn name(&self) -> &'static str {
		NAME
	}

	fn start(&mut self, state: &RenderState, support: &Support) -> Result<(), Error> {
		self.parent.start(state, support)?;

		match SpawnLight::acquire(state.chunk) {
			Ok(light) => {
				debug!("{} started on a {} block high column", NAME, light.dimensions.height());
				self.light = Some(light);

				Ok(())
			},
			Err(e) => {
				self.parent.finish(state);

				Err(e)
			}
		}
	}

	fn finish(&mut self, state: &RenderState) {
		if self.light.take().is_some() {
			trace!("{} released its light fields", NAME);
		}

		self.parent.finish(state);
	}

	fn draw(&self, state: &RenderState, img: &mut RgbaImage) {
		self.parent.draw_with(self, state, img)
	}
}

pub fn create(options: &Value) -> Result<Box<dyn Primitive>, Error> {
	Ok(Box::new(SpawnOverlay::from_options(options)?))
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::block::{Block, BlockProperties, GLASS, STONE};
	use crate::source::MemoryChunk;
	use lightfield::nibbles::u4;

	fn at(z: u8) -> ColumnPosition {
		ColumnPosition::new(3, 4, z).unwrap()
	}

	/// A column with `block` at z=`z` and the given light levels in the space above it.
	fn column(z: u8, block: Block, block_light: u8, sky_light: u8) -> MemoryChunk {
		let mut chunk = MemoryChunk::new(Dimensions::BETA);
		chunk.set_block(at(z), block).unwrap();

		if let Some(above) = at(z).up().filter(|p| Dimensions::BETA.contains(*p)) {
			chunk.light_mut(LightKind::Block).set(above, u4::new(block_light));
			chunk.light_mut(LightKind::Sky).set(above, u4::new(sky_light));
		}

		chunk
	}

	fn color_of(chunk: &MemoryChunk, z: u8) -> Rgba<u8> {
		let properties = BlockProperties::beta();
		let state = RenderState::new(chunk, &properties, at(z), 0, 0).unwrap();
		let mut spawn = SpawnOverlay::new();

		spawn.start(&state, &Support::new()).unwrap();
		let color = spawn.color(&state);
		spawn.finish(&state);

		color
	}

	#[test]
	fn test_alpha_rule() {
		assert_eq!(spawn_alpha(5, 5), DAY_ALPHA);
		assert_eq!(spawn_alpha(3, 12), NIGHT_ALPHA);
		assert_eq!(spawn_alpha(10, 12), 0);
		assert_eq!(spawn_alpha(0, 0), DAY_ALPHA);
		assert_eq!(spawn_alpha(7, 7), DAY_ALPHA);
		assert_eq!(spawn_alpha(8, 0), 0);
		assert_eq!(spawn_alpha(7, 15), NIGHT_ALPHA);
	}

	#[test]
	fn test_light_bands() {
		assert_eq!(color_of(&column(60, GLASS, 0, 0), 60), Rgba([229, 36, 38, 0]));
		assert_eq!(color_of(&column(60, STONE, 5, 5), 60), Rgba([229, 36, 38, 240]));
		assert_eq!(color_of(&column(60, STONE, 3, 12), 60), Rgba([229, 36, 38, 150]));
		assert_eq!(color_of(&column(60, STONE, 10, 12), 60), Rgba([229, 36, 38, 0]));
	}

	/// The light sampled is the light of the space above the block, not of the block itself.
	#[test]
	fn test_samples_above() {
		let mut chunk = column(60, STONE, 0, 0);
		chunk.light_mut(LightKind::Sky).set(at(60), u4::MAX);

		assert_eq!(color_of(&chunk, 60).0[3], DAY_ALPHA);
	}

	/// On the top layer there is no space above inside the field: the sky counts as fully lit,
	/// while block light is read from the top layer itself.
	#[test]
	fn test_top_of_world() {
		let mut chunk = column(127, STONE, 0, 0);
		chunk.light_mut(LightKind::Sky).fill(u4::new(0));

		assert_eq!(color_of(&chunk, 127).0[3], NIGHT_ALPHA);

		chunk.light_mut(LightKind::Block).set(at(127), u4::new(12));

		assert_eq!(color_of(&chunk, 127).0[3], 0);
	}

	#[test]
	fn test_taller_world() {
		let dimensions = Dimensions::new(256).unwrap();
		let mut chunk = MemoryChunk::new(dimensions);
		chunk.set_block(at(255), STONE).unwrap();
		chunk.set_block(at(127), STONE).unwrap();
		chunk.light_mut(LightKind::Sky).fill(u4::new(0));

		let properties = BlockProperties::beta();
		let state = RenderState::new(&chunk, &properties, at(255), 0, 0).unwrap();
		let mut spawn = SpawnOverlay::new();
		spawn.start(&state, &Support::new()).unwrap();

		assert_eq!(spawn.color(&state).0[3], NIGHT_ALPHA);

		let below = RenderState::new(&chunk, &properties, at(127), 0, 0).unwrap();

		assert_eq!(spawn.color(&below).0[3], DAY_ALPHA);
	}

	#[test]
	fn test_lifecycle_handles() {
		let chunk = MemoryChunk::new(Dimensions::BETA);
		let properties = BlockProperties::beta();
		let state = RenderState::new(&chunk, &properties, at(0), 0, 0).unwrap();
		let mut spawn = SpawnOverlay::new();

		spawn.start(&state, &Support::new()).unwrap();

		assert!(spawn.is_started());
		assert_eq!(Arc::strong_count(chunk.light(LightKind::Block)), 2);
		assert_eq!(Arc::strong_count(chunk.light(LightKind::Sky)), 2);

		spawn.finish(&state);
		spawn.finish(&state);

		assert!(!spawn.is_started());
		assert_eq!(Arc::strong_count(chunk.light(LightKind::Block)), 1);
		assert_eq!(Arc::strong_count(chunk.light(LightKind::Sky)), 1);
	}

	#[test]
	fn test_failed_start_acquires_nothing() {
		let chunk = MemoryChunk::new(Dimensions::BETA);
		let properties = BlockProperties::beta();
		let state = RenderState::new(&chunk, &properties, at(0), 0, 0).unwrap();
		let mut spawn = SpawnOverlay::new();

		let result = spawn.start(&state, &Support::empty());

		assert!(matches!(result, Err(Error::MissingSupport("top face mask"))));
		assert!(!spawn.is_started());
		assert_eq!(Arc::strong_count(chunk.light(LightKind::Block)), 1);
		assert_eq!(Arc::strong_count(chunk.light(LightKind::Sky)), 1);
	}

	/// A source whose light fields do not match its own height is a configuration error.
	#[test]
	fn test_light_height_mismatch() {
		struct Mismatched(MemoryChunk, Arc<LightField>);

		impl ChunkSource for Mismatched {
			fn dimensions(&self) -> Dimensions {
				self.0.dimensions()
			}

			fn block(&self, region: Region, at: ColumnPosition) -> Option<Block> {
				self.0.block(region, at)
			}

			fn light_field(&self, _: Region, _: LightKind, _: u8) -> Result<Arc<LightField>, Error> {
				Ok(self.1.clone())
			}
		}

		let source = Mismatched(
			MemoryChunk::new(Dimensions::BETA),
			Arc::new(LightField::new(Dimensions::new(64).unwrap()))
		);

		let properties = BlockProperties::beta();
		let state = RenderState::new(&source, &properties, at(0), 0, 0).unwrap();
		let support = Support::new();
		let mut spawn = SpawnOverlay::new();

		assert!(matches!(
			spawn.start(&state, &support),
			Err(Error::LightHeight { kind: LightKind::Block, expected: 128, actual: 64 })
		));
		assert!(!spawn.is_started());
		assert_eq!(Arc::strong_count(&source.1), 1);
		assert_eq!(support.facemask_top.as_ref().map(Arc::strong_count), Some(1));
	}

	#[test]
	fn test_color_before_start() {
		let chunk = column(60, STONE, 0, 0);
		let properties = BlockProperties::beta();
		let state = RenderState::new(&chunk, &properties, at(60), 0, 0).unwrap();

		assert_eq!(SpawnOverlay::new().color(&state), Rgba([229, 36, 38, 0]));
	}

	#[test]
	fn test_options_ignored() {
		assert!(SpawnOverlay::from_options(&Value::Null).is_ok());
		assert!(SpawnOverlay::from_options(&serde_json::json!({ "overlay_color": [0, 0, 0, 0] })).is_ok());
	}
}
