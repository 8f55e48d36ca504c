use lightfield::Dimensions;
use serde_json::Value;

use crate::block::{BlockProperties, BlockPropertiesConfig};
use crate::primitive::{Primitive, Registry};
use crate::Error;

fn world_height_default() -> u32 {
	Dimensions::BETA.height() as u32
}

/// Render setup read from JSON:
///
/// ```json
/// {
///     "world_height": 128,
///     "properties": { "set": { "nospawn": [20] } },
///     "primitives": [{ "name": "overlay-spawn" }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
	#[serde(default = "world_height_default")]
	pub world_height: u32,
	#[serde(default)]
	pub properties: BlockPropertiesConfig,
	#[serde(default)]
	pub primitives: Vec<PrimitiveConfig>
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimitiveConfig {
	pub name: String,
	#[serde(default)]
	pub options: Value
}

impl RenderConfig {
	pub fn from_json(json: &str) -> Result<Self, Error> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn dimensions(&self) -> Result<Dimensions, Error> {
		Ok(Dimensions::new(self.world_height)?)
	}

	pub fn block_properties(&self) -> Result<BlockProperties, Error> {
		BlockProperties::from_config(&self.properties)
	}

	/// Instantiates every configured primitive, in order.
	pub fn build_primitives(&self, registry: &Registry) -> Result<Vec<Box<dyn Primitive>>, Error> {
		let mut primitives = Vec::with_capacity(self.primitives.len());

		for primitive in &self.primitives {
			debug!("creating render primitive {}", primitive.name);
			primitives.push(registry.create(&primitive.name, &primitive.options)?);
		}

		Ok(primitives)
	}
}

impl Default for RenderConfig {
	fn default() -> Self {
		RenderConfig {
			world_height: world_height_default(),
			properties: BlockPropertiesConfig::default(),
			primitives: Vec::new()
		}
	}
}
