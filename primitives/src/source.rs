use std::sync::Arc;
use lightfield::nibbles::u4;
use lightfield::position::ColumnPosition;
use lightfield::{Dimensions, LightField, LightKind};
use rustc_hash::FxHashMap;

use crate::block::{Block, AIR};
use crate::Error;

/// Selects the column being rendered or one of its horizontal neighbors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
	Current,
	MinusX,
	PlusX,
	MinusY,
	PlusY
}

/// Chunk data provider for one render pass.
///
/// Light fields are handed out as shared handles: the source keeps its own reference, and a
/// primitive holds another one from `start` until `finish`. Fields are never mutated while shared.
pub trait ChunkSource {
	fn dimensions(&self) -> Dimensions;

	/// Returns the block at a position of the selected column, or `None` if that column is not
	/// loaded or the position is above the top of the world.
	fn block(&self, region: Region, at: ColumnPosition) -> Option<Block>;

	/// Acquires a light field. `headroom` is how many levels above a rendered block the caller
	/// is going to sample; levels above the top of the world are never requested from the field.
	fn light_field(&self, region: Region, kind: LightKind, headroom: u8) -> Result<Arc<LightField>, Error>;
}

/// A fully resident chunk column, with optional neighbors.
#[derive(Debug, Clone)]
pub struct MemoryChunk {
	dimensions: Dimensions,
	blocks: Vec<Block>,
	block_light: Arc<LightField>,
	sky_light: Arc<LightField>,
	neighbors: FxHashMap<Region, Arc<MemoryChunk>>
}

impl MemoryChunk {
	/// An empty column: all air, no block light, full sky light.
	pub fn new(dimensions: Dimensions) -> Self {
		MemoryChunk {
			dimensions,
			blocks: vec![AIR; dimensions.volume()],
			block_light: Arc::new(LightField::new(dimensions)),
			sky_light: Arc::new(LightField::filled(dimensions, u4::MAX)),
			neighbors: FxHashMap::default()
		}
	}

	pub fn set_block(&mut self, at: ColumnPosition, block: Block) -> Result<(), Error> {
		if !self.dimensions.contains(at) {
			return Err(Error::OutOfBounds(at));
		}

		self.blocks[self.dimensions.index(at)] = block;

		Ok(())
	}

	/// Replaces one of the light fields. The field must have the same height as the column.
	pub fn set_light(&mut self, kind: LightKind, field: LightField) -> Result<(), Error> {
		let actual = field.dimensions().height();

		if field.dimensions() != self.dimensions {
			return Err(Error::LightHeight { kind, expected: self.dimensions.height(), actual });
		}

		*self.light_slot(kind) = Arc::new(field);

		Ok(())
	}

	/// Mutable access to a light field. If a render pass still holds the field, the column gets
	/// its own copy and the pass keeps seeing the old values.
	pub fn light_mut(&mut self, kind: LightKind) -> &mut LightField {
		Arc::make_mut(self.light_slot(kind))
	}

	/// The column's own handle to a light field.
	pub fn light(&self, kind: LightKind) -> &Arc<LightField> {
		match kind {
			LightKind::Block => &self.block_light,
			LightKind::Sky => &self.sky_light
		}
	}

	pub fn set_neighbor(&mut self, region: Region, chunk: Arc<MemoryChunk>) {
		if region == Region::Current {
			warn!("ignoring a neighbor registered as the current column");
			return;
		}

		self.neighbors.insert(region, chunk);
	}

	fn light_slot(&mut self, kind: LightKind) -> &mut Arc<LightField> {
		match kind {
			LightKind::Block => &mut self.block_light,
			LightKind::Sky => &mut self.sky_light
		}
	}

	fn column(&self, region: Region) -> Option<&MemoryChunk> {
		match region {
			Region::Current => Some(self),
			other => self.neighbors.get(&other).map(|chunk| &**chunk)
		}
	}
}

impl ChunkSource for MemoryChunk {
	fn dimensions(&self) -> Dimensions {
		self.dimensions
	}

	fn block(&self, region: Region, at: ColumnPosition) -> Option<Block> {
		let column = self.column(region)?;

		if !column.dimensions.contains(at) {
			return None;
		}

		Some(column.blocks[column.dimensions.index(at)])
	}

	fn light_field(&self, region: Region, kind: LightKind, headroom: u8) -> Result<Arc<LightField>, Error> {
		let column = self.column(region).ok_or(Error::MissingChunk(region))?;

		trace!("acquiring {} of the {:?} column with a headroom of {}", kind, region, headroom);

		Ok(column.light(kind).clone())
	}
}
