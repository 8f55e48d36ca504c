use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;
use bit_vec::BitVec;

use crate::Error;

pub const AIR: Block = Block(0);
pub const STONE: Block = Block(1 * 16);
pub const GRASS: Block = Block(2 * 16);
pub const DIRT: Block = Block(3 * 16);
pub const BEDROCK: Block = Block(7 * 16);
pub const FLOWING_WATER: Block = Block(8 * 16);
pub const STILL_WATER: Block = Block(9 * 16);
pub const FLOWING_LAVA: Block = Block(10 * 16);
pub const STILL_LAVA: Block = Block(11 * 16);
pub const SAND: Block = Block(12 * 16);
pub const OAK_LEAVES: Block = Block(18 * 16);
pub const GLASS: Block = Block(20 * 16);
pub const TALL_GRASS: Block = Block(31 * 16 + 1);
pub const STONE_SLAB: Block = Block(44 * 16);
pub const TORCH: Block = Block(50 * 16);
pub const OAK_STAIRS: Block = Block(53 * 16);
pub const SNOW_LAYER: Block = Block(78 * 16);
pub const ICE: Block = Block(79 * 16);
pub const FENCE: Block = Block(85 * 16);

/// Beta block ID with its 4-bit data value, stored as `(id << 4) | data`.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub struct Block(u16);

impl Block {
	pub const fn from_id(id: u8) -> Self {
		Block((id as u16) << 4)
	}

	pub const fn from_id_data(id: u8, data: u8) -> Self {
		Block(((id as u16) << 4) | (data & 15) as u16)
	}

	pub fn id(self) -> u8 {
		(self.0 >> 4) as u8
	}

	pub fn data(self) -> u8 {
		(self.0 & 15) as u8
	}
}

impl Display for Block {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.id(), self.data())
	}
}

/// Static per-block-type flags consulted while rendering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Property {
	/// Light and the blocks behind it are visible through this block.
	Transparent,
	/// Occupies its whole space.
	Solid,
	Fluid,
	/// Mobs never spawn on top of this block.
	NoSpawn
}

impl Property {
	pub const ALL: [Property; 4] = [Property::Transparent, Property::Solid, Property::Fluid, Property::NoSpawn];

	pub fn name(self) -> &'static str {
		match self {
			Property::Transparent => "transparent",
			Property::Solid => "solid",
			Property::Fluid => "fluid",
			Property::NoSpawn => "nospawn"
		}
	}

	fn slot(self) -> usize {
		self as usize
	}
}

impl FromStr for Property {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self, Error> {
		Property::ALL.iter()
			.copied()
			.find(|property| property.name() == name)
			.ok_or_else(|| Error::UnknownProperty(name.to_owned()))
	}
}

const TRANSPARENT: &[u8] = &[
	0, 6, 8, 9, 10, 11, 18, 20, 26, 27, 28, 30, 31, 32, 37, 38, 39, 40, 44, 50, 51, 52, 53, 55,
	59, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 75, 76, 77, 78, 79, 81, 83, 85, 90, 92, 93, 94, 96
];

const FLUID: &[u8] = &[8, 9, 10, 11];

const TRANSPARENT_SOLID: &[u8] = &[18, 20, 52, 79];

/// One bit per block ID for every `Property`.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockProperties {
	sets: Vec<BitVec>
}

impl BlockProperties {
	/// A table where no block has any property.
	pub fn empty() -> Self {
		BlockProperties {
			sets: Property::ALL.iter().map(|_| BitVec::from_elem(256, false)).collect()
		}
	}

	/// Properties of the beta block set. Every non-transparent block is solid, and mobs never
	/// spawn on transparent blocks.
	pub fn beta() -> Self {
		let mut properties = BlockProperties::empty();

		for id in 0..=255u8 {
			let transparent = TRANSPARENT.contains(&id);

			properties.set(id, Property::Transparent, transparent);
			properties.set(id, Property::NoSpawn, transparent);
			properties.set(id, Property::Solid, !transparent || TRANSPARENT_SOLID.contains(&id));
		}

		for &id in FLUID {
			properties.set(id, Property::Fluid, true);
		}

		properties
	}

	pub fn set(&mut self, id: u8, property: Property, value: bool) {
		self.sets[property.slot()].set(id as usize, value);
	}

	pub fn has(&self, block: Block, property: Property) -> bool {
		self.sets[property.slot()].get(block.id() as usize).unwrap_or(false)
	}

	/// Looks up a property by its configuration name, such as `"nospawn"`.
	pub fn has_named(&self, block: Block, name: &str) -> Result<bool, Error> {
		Ok(self.has(block, name.parse()?))
	}

	pub fn from_config(config: &BlockPropertiesConfig) -> Result<Self, Error> {
		let mut properties = if config.extend_beta {
			BlockProperties::beta()
		} else {
			BlockProperties::empty()
		};

		for (name, ids) in &config.set {
			let property: Property = name.parse()?;

			for &id in ids {
				properties.set(id, property, true);
			}
		}

		for (name, ids) in &config.unset {
			let property: Property = name.parse()?;

			for &id in ids {
				properties.set(id, property, false);
			}
		}

		Ok(properties)
	}
}

impl Default for BlockProperties {
	fn default() -> Self {
		BlockProperties::beta()
	}
}

/// Adjustments to the block property table, keyed by property name.
///
/// ```json
/// { "extend_beta": true, "set": { "nospawn": [89] }, "unset": { "solid": [20] } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BlockPropertiesConfig {
	#[serde(default = "extend_beta_default")]
	pub extend_beta: bool,
	#[serde(default)]
	pub set: HashMap<String, Vec<u8>>,
	#[serde(default)]
	pub unset: HashMap<String, Vec<u8>>
}

fn extend_beta_default() -> bool {
	true
}

impl Default for BlockPropertiesConfig {
	fn default() -> Self {
		BlockPropertiesConfig {
			extend_beta: true,
			set: HashMap::new(),
			unset: HashMap::new()
		}
	}
}
