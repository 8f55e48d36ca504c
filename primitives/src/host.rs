use lightfield::position::ColumnPosition;
use lightfield::Dimensions;
use image::RgbaImage;

use crate::block::{BlockProperties, AIR};
use crate::composite::{Support, SPRITE_SIZE};
use crate::primitive::Primitive;
use crate::source::{ChunkSource, Region};
use crate::state::RenderState;
use crate::Error;

/// Size of the image needed to hold one isometric column.
pub fn chunk_image_size(dimensions: Dimensions) -> (u32, u32) {
	let height = dimensions.height() as u32;

	(16 * 12 * 2, height * 12 + 15 * 6 * 2 + SPRITE_SIZE - 12)
}

/// Sprite position of a block, relative to the column's origin.
pub fn sprite_position(position: ColumnPosition, dimensions: Dimensions) -> (i32, i32) {
	let (x, y, z) = (position.x() as i32, position.y() as i32, position.z() as i32);
	let height = dimensions.height() as i32;

	(x * 12 + y * 12, -x * 6 + y * 6 + (height - 1 - z) * 12 + 15 * 6)
}

/// Runs one primitive over every non-air block of the current column, back to front.
/// Returns the number of blocks drawn.
///
/// `finish` is called whenever `start` succeeded, even if drawing fails part way.
pub fn render_chunk(primitive: &mut dyn Primitive, chunk: &dyn ChunkSource, properties: &BlockProperties, support: &Support, img: &mut RgbaImage, origin: (i32, i32)) -> Result<usize, Error> {
	let dimensions = chunk.dimensions();
	let corner = ColumnPosition::new(0, 0, 0).ok_or(Error::MissingChunk(Region::Current))?;
	let state = RenderState::new(chunk, properties, corner, origin.0, origin.1)?;

	primitive.start(&state, support)?;
	debug!("rendering a column with {}", primitive.name());

	let drawn = draw_chunk(&*primitive, chunk, properties, img, origin, dimensions);

	primitive.finish(&state);

	if let Ok(count) = drawn {
		debug!("{} drew {} blocks", primitive.name(), count);
	}

	drawn
}

fn draw_chunk(primitive: &dyn Primitive, chunk: &dyn ChunkSource, properties: &BlockProperties, img: &mut RgbaImage, origin: (i32, i32), dimensions: Dimensions) -> Result<usize, Error> {
	let mut drawn = 0;

	for x in (0..16).rev() {
		for y in 0..16 {
			for z in 0..dimensions.height() {
				let position = ColumnPosition::new(x, y, z as u8).ok_or(Error::MissingChunk(Region::Current))?;

				if chunk.block(Region::Current, position) == Some(AIR) {
					continue;
				}

				let (sprite_x, sprite_y) = sprite_position(position, dimensions);
				let state = RenderState::new(chunk, properties, position, origin.0 + sprite_x, origin.1 + sprite_y)?;

				primitive.draw(&state, img);
				drawn += 1;
			}
		}
	}

	Ok(drawn)
}
