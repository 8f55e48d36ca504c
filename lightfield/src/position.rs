use std::fmt::{Debug, Display, Formatter, Result};

/// A block position inside a chunk column, packed as `(Z<<8) | (Y<<4) | X`.
/// `x` and `y` are horizontal (0 to 15), `z` is vertical (0 to 255).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ColumnPosition(u16);

impl ColumnPosition {
	/// Creates a new ColumnPosition from the X, Y, and Z components.
	/// Returns `None` if either horizontal component is 16 or larger.
	pub fn new(x: u8, y: u8, z: u8) -> Option<Self> {
		if x > 15 || y > 15 {
			return None;
		}

		Some(ColumnPosition(((z as u16) << 8) | ((y as u16) << 4) | (x as u16)))
	}

	/// Returns the X component.
	pub fn x(&self) -> u8 {
		(self.0 & 0x00F) as u8
	}

	/// Returns the Y component.
	pub fn y(&self) -> u8 {
		((self.0 & 0x0F0) >> 4) as u8
	}

	/// Returns the Z (vertical) component.
	pub fn z(&self) -> u8 {
		(self.0 >> 8) as u8
	}

	/// Returns the index represented as `(Z<<8) | (Y<<4) | X`.
	pub fn zyx(&self) -> u16 {
		self.0
	}

	/// Returns the same column at a different height.
	pub fn with_z(&self, z: u8) -> ColumnPosition {
		ColumnPosition((self.0 & 0x0FF) | ((z as u16) << 8))
	}

	/// Returns the position directly above, if it can be represented.
	pub fn up(&self) -> Option<ColumnPosition> {
		if self.z() != 255 {
			Some(ColumnPosition(self.0 + 0x0100))
		} else {
			None
		}
	}

	pub fn down(&self) -> Option<ColumnPosition> {
		if self.z() != 0 {
			Some(ColumnPosition(self.0 - 0x0100))
		} else {
			None
		}
	}
}

impl Debug for ColumnPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "ColumnPosition {{ x: {}, y: {}, z: {} }}", self.x(), self.y(), self.z())
	}
}

impl Display for ColumnPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
	}
}

#[cfg(test)]
mod test {
	use super::ColumnPosition;

	#[test]
	fn test_components() {
		let position = ColumnPosition::new(3, 14, 127).unwrap();

		assert_eq!((position.x(), position.y(), position.z()), (3, 14, 127));
		assert_eq!(position.with_z(5).z(), 5);
		assert_eq!(position.with_z(5).x(), 3);
	}

	#[test]
	fn test_out_of_bounds() {
		assert!(ColumnPosition::new(16, 0, 0).is_none());
		assert!(ColumnPosition::new(0, 16, 0).is_none());
		assert!(ColumnPosition::new(15, 15, 255).is_some());
	}

	#[test]
	fn test_vertical_neighbors() {
		let top = ColumnPosition::new(0, 0, 255).unwrap();
		let bottom = ColumnPosition::new(0, 0, 0).unwrap();

		assert_eq!(top.up(), None);
		assert_eq!(bottom.down(), None);
		assert_eq!(bottom.up().map(|p| p.z()), Some(1));
	}
}
