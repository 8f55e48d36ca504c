/// Returns the index into a packed nibble array. Returns in the form (index, shift).
fn nibble_index(index: usize) -> (usize, u8) {
	(index >> 1, ((index & 1) as u8) << 2)
}

/// The 4-bit unsigned integer type, used for light levels.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Default)]
pub struct u4(u8);
impl u4 {
	/// The brightest light level.
	pub const MAX: u4 = u4(15);

	/// Casts a u8 to a u4, truncating the value in the process.
	pub fn new(x: u8) -> Self {
		u4(x & 0xF)
	}

	/// Casts a u4 to an u8, returning a value in the range 0-15 (inclusive).
	pub fn raw(self) -> u8 {
		self.0
	}

	/// Adds a u4 to another u4, capping the result to 15 if it were to overflow.
	pub fn saturating_add(self, rhs: Self) -> Self {
		u4(::std::cmp::min(self.0 + rhs.0, 15))
	}

	/// Subtracts a u4 from another u4, capping the result to 0 if it were to underflow.
	pub fn saturating_sub(self, rhs: Self) -> Self {
		u4(self.0.saturating_sub(rhs.0))
	}
}

impl From<u4> for u8 {
	fn from(value: u4) -> u8 {
		value.0
	}
}

/// A fixed length array of nibbles, packed two to a byte.
/// The even element of each pair is stored in the low 4 bits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NibbleArray {
	data: Vec<u8>,
	len: usize
}

impl NibbleArray {
	pub fn new(len: usize) -> Self {
		NibbleArray {
			data: vec![0; (len + 1) / 2],
			len
		}
	}

	/// Wraps already packed nibbles. Returns `None` if `raw` does not hold exactly `len` nibbles
	/// (rounded up to a whole byte).
	pub fn from_raw(raw: Vec<u8>, len: usize) -> Option<Self> {
		if raw.len() != (len + 1) / 2 {
			return None;
		}

		Some(NibbleArray { data: raw, len })
	}

	pub fn get(&self, index: usize) -> u4 {
		if index >= self.len {
			panic!("index out of bounds: the len is {} but the index is {}", self.len, index);
		}

		let (index, shift) = nibble_index(index);

		u4::new(self.data[index] >> shift)
	}

	pub fn get_checked(&self, index: usize) -> Option<u4> {
		if index < self.len {
			Some(self.get(index))
		} else {
			None
		}
	}

	pub fn set(&mut self, index: usize, value: u4) {
		if index >= self.len {
			panic!("index out of bounds: the len is {} but the index is {}", self.len, index);
		}

		let (index, shift) = nibble_index(index);

		let cleared = self.data[index] & !(0xF << shift);

		self.data[index] = cleared | (value.raw() << shift);
	}

	pub fn fill(&mut self, value: u4) {
		let fill = (value.raw() << 4) | value.raw();

		for term in self.data.iter_mut() {
			*term = fill;
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the packed bytes. When the length is odd, the high nibble of the last byte is
	/// padding.
	pub fn raw(&self) -> &[u8] {
		&self.data
	}

	pub fn iter(&self) -> impl Iterator<Item = u4> + '_ {
		(0..self.len).map(move |index| self.get(index))
	}
}
