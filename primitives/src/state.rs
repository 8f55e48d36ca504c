use lightfield::position::ColumnPosition;

use crate::block::{Block, BlockProperties, AIR};
use crate::source::{ChunkSource, Region};
use crate::Error;

/// Everything a primitive knows about the block currently being drawn.
#[derive(Copy, Clone)]
pub struct RenderState<'a> {
	pub chunk: &'a dyn ChunkSource,
	pub properties: &'a BlockProperties,
	pub position: ColumnPosition,
	pub block: Block,
	/// Top left corner of the block's sprite in the target image.
	pub img_x: i32,
	pub img_y: i32
}

impl<'a> RenderState<'a> {
	/// Creates the state for one block of the current column. Fails if the position is above the
	/// top of the world or the column is not loaded.
	pub fn new(chunk: &'a dyn ChunkSource, properties: &'a BlockProperties, position: ColumnPosition, img_x: i32, img_y: i32) -> Result<Self, Error> {
		if !chunk.dimensions().contains(position) {
			return Err(Error::OutOfBounds(position));
		}

		let block = chunk.block(Region::Current, position).ok_or(Error::MissingChunk(Region::Current))?;

		Ok(RenderState { chunk, properties, position, block, img_x, img_y })
	}

	pub fn x(&self) -> u8 {
		self.position.x()
	}

	pub fn y(&self) -> u8 {
		self.position.y()
	}

	pub fn z(&self) -> u8 {
		self.position.z()
	}

	/// The block directly above this one. Everything above the top of the world is air.
	pub fn block_above(&self) -> Block {
		self.position.up()
			.and_then(|above| self.chunk.block(Region::Current, above))
			.unwrap_or(AIR)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::block::STONE;
	use crate::source::MemoryChunk;
	use lightfield::Dimensions;

	#[test]
	fn test_new_reads_block() {
		let mut chunk = MemoryChunk::new(Dimensions::BETA);
		let position = ColumnPosition::new(4, 5, 60).unwrap();
		chunk.set_block(position, STONE).unwrap();

		let properties = BlockProperties::beta();
		let state = RenderState::new(&chunk, &properties, position, 10, 20).unwrap();

		assert_eq!(state.block, STONE);
		assert_eq!((state.x(), state.y(), state.z()), (4, 5, 60));
		assert_eq!(state.block_above(), AIR);
	}

	#[test]
	fn test_block_above_top() {
		let mut chunk = MemoryChunk::new(Dimensions::BETA);
		let top = ColumnPosition::new(0, 0, 127).unwrap();
		chunk.set_block(top, STONE).unwrap();

		let properties = BlockProperties::beta();
		let below = RenderState::new(&chunk, &properties, top.with_z(126), 0, 0).unwrap();
		let state = RenderState::new(&chunk, &properties, top, 0, 0).unwrap();

		assert_eq!(below.block_above(), STONE);
		assert_eq!(state.block_above(), AIR);
	}

	#[test]
	fn test_new_out_of_bounds() {
		let chunk = MemoryChunk::new(Dimensions::BETA);
		let properties = BlockProperties::beta();
		let position = ColumnPosition::new(0, 0, 128).unwrap();

		assert!(matches!(
			RenderState::new(&chunk, &properties, position, 0, 0),
			Err(Error::OutOfBounds(p)) if p == position
		));
	}
}
