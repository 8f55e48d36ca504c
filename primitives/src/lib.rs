#![forbid(unsafe_code)]

//! # `primitives`: render primitives for isometric map tiles
//!
//! A render primitive is driven once per chunk column: `start` acquires whatever chunk data it
//! needs, `draw` is called for every visible block in back-to-front order, and `finish` releases
//! what `start` acquired. Overlay primitives draw a translucent layer over the top face of each
//! block instead of terrain; `overlay-spawn` marks where hostile mobs are able to spawn.

extern crate bit_vec;
extern crate image;
extern crate lightfield;
#[macro_use]
extern crate log;
extern crate rustc_hash;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;

pub mod block;
pub mod composite;
pub mod config;
pub mod host;
pub mod overlay;
pub mod primitive;
pub mod source;
pub mod state;

mod error;

pub use error::Error;
pub use overlay::spawn::SpawnOverlay;
pub use overlay::{Overlay, OverlayColor};
pub use primitive::{Primitive, Registry};
pub use state::RenderState;
