use lightfield::position::ColumnPosition;
use lightfield::LightKind;
use thiserror::Error;

use crate::source::Region;

#[derive(Debug, Error)]
pub enum Error {
	#[error("support data is missing the {0}")]
	MissingSupport(&'static str),
	#[error("the {0:?} chunk is not loaded")]
	MissingChunk(Region),
	#[error("{kind} data is {actual} blocks high, but the world is {expected} blocks high")]
	LightHeight { kind: LightKind, expected: u16, actual: u16 },
	#[error("position {0} is outside of the column")]
	OutOfBounds(ColumnPosition),
	#[error("unknown render primitive '{0}'")]
	UnknownPrimitive(String),
	#[error("unknown block property '{0}'")]
	UnknownProperty(String),
	#[error("invalid options for {primitive}: {source}")]
	Options { primitive: &'static str, source: serde_json::Error },
	#[error("invalid render configuration: {0}")]
	Config(#[from] serde_json::Error),
	#[error(transparent)]
	Light(#[from] lightfield::Error),
}
