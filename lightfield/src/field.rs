use std::fmt::{self, Display};
use crate::dimensions::Dimensions;
use crate::nibbles::{u4, NibbleArray};
use crate::position::ColumnPosition;
use crate::Error;

/// Which of the two light channels a field holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LightKind {
	Block,
	Sky
}

impl LightKind {
	pub fn name(self) -> &'static str {
		match self {
			LightKind::Block => "blocklight",
			LightKind::Sky => "skylight"
		}
	}
}

impl Display for LightKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Light levels for every block of one chunk column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightField {
	dimensions: Dimensions,
	nibbles: NibbleArray
}

impl LightField {
	/// Creates a completely dark field.
	pub fn new(dimensions: Dimensions) -> Self {
		LightField {
			dimensions,
			nibbles: NibbleArray::new(dimensions.volume())
		}
	}

	pub fn filled(dimensions: Dimensions, value: u4) -> Self {
		let mut field = LightField::new(dimensions);
		field.fill(value);

		field
	}

	/// Wraps a raw `BlockLight` / `SkyLight` array as stored in beta chunks.
	pub fn from_raw(dimensions: Dimensions, raw: Vec<u8>) -> Result<Self, Error> {
		let actual = raw.len();
		let expected = dimensions.volume() / 2;

		NibbleArray::from_raw(raw, dimensions.volume())
			.map(|nibbles| LightField { dimensions, nibbles })
			.ok_or(Error::RawLength { height: dimensions.height(), expected, actual })
	}

	pub fn dimensions(&self) -> Dimensions {
		self.dimensions
	}

	/// Reads one light level.
	///
	/// # Panics
	///
	/// Panics if the position is above the top of the field. Use `get_checked` when the position
	/// has not already been validated against `dimensions()`.
	pub fn get(&self, at: ColumnPosition) -> u4 {
		match self.get_checked(at) {
			Some(value) => value,
			None => panic!("position {} is outside of a {} block high light field", at, self.dimensions.height())
		}
	}

	pub fn get_checked(&self, at: ColumnPosition) -> Option<u4> {
		if !self.dimensions.contains(at) {
			return None;
		}

		self.nibbles.get_checked(self.dimensions.index(at))
	}

	pub fn set(&mut self, at: ColumnPosition, value: u4) {
		if !self.dimensions.contains(at) {
			panic!("position {} is outside of a {} block high light field", at, self.dimensions.height());
		}

		self.nibbles.set(self.dimensions.index(at), value);
	}

	pub fn fill(&mut self, value: u4) {
		self.nibbles.fill(value);
	}

	/// Returns the packed nibbles in the beta on-disk layout.
	pub fn raw(&self) -> &[u8] {
		self.nibbles.raw()
	}
}
