use crate::position::ColumnPosition;
use crate::Error;

/// Shape of a chunk column. Columns are always 16x16 horizontally; only the height varies
/// between world formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
	height: u16
}

impl Dimensions {
	/// Beta-format worlds are 128 blocks high.
	pub const BETA: Dimensions = Dimensions { height: 128 };

	pub fn new(height: u32) -> Result<Self, Error> {
		if height == 0 || height > 256 {
			return Err(Error::InvalidHeight(height));
		}

		Ok(Dimensions { height: height as u16 })
	}

	pub fn height(self) -> u16 {
		self.height
	}

	/// Z coordinate of the topmost stored layer.
	pub fn top(self) -> u8 {
		(self.height - 1) as u8
	}

	/// Number of blocks in one column.
	pub fn volume(self) -> usize {
		256 * self.height as usize
	}

	pub fn contains(self, position: ColumnPosition) -> bool {
		(position.z() as u16) < self.height
	}

	/// Storage index in the beta on-disk layout, where the vertical axis varies fastest:
	/// `z + height * (y + 16 * x)`.
	pub fn index(self, position: ColumnPosition) -> usize {
		let column = position.y() as usize + 16 * position.x() as usize;

		position.z() as usize + self.height as usize * column
	}
}

impl Default for Dimensions {
	fn default() -> Self {
		Dimensions::BETA
	}
}
