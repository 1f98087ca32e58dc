//! Core library for packing sprites into a texture atlas.
//!
//! - Algorithms: Shelf (row-based, unbounded growth), MaxRects (BSSF with
//!   bin doubling and a forced fallback bin)
//! - Pipeline: `pack_sprites` takes in-memory images plus trim margins and
//!   returns placements and a composited RGBA canvas; `pack_layout` packs
//!   dimensions only.
//! - Data model is serde-serializable; a JSON-hash exporter is provided.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sprite_atlas_core::{InputSprite, PackConfig, Trim, pack_sprites};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("a.png")?.decode()?;
//! let img2 = ImageReader::open("b.png")?.decode()?;
//! let inputs = vec![
//!   InputSprite { key: "a".into(), image: img1, trim: Trim::ZERO },
//!   InputSprite { key: "b".into(), image: img2, trim: Trim::ZERO },
//! ];
//! let cfg = PackConfig { padding: 2, ..Default::default() };
//! let out = pack_sprites(inputs, cfg)?;
//! println!("atlas: {}x{}", out.layout.width, out.layout.height);
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_atlas_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{
        Background, OverflowPolicy, PackConfig, PackConfigBuilder, Strategy,
    };
    pub use crate::model::{Frame, Layout, PackStats, Rect, SourceSpec, Trim};
    pub use crate::packer::{Packer, maxrects::MaxRectsPacker, shelf::ShelfPacker};
    pub use crate::{InputSprite, PackOutput, compute_trim, pack_layout, pack_sprites};
}
