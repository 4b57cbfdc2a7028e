//! Procedural texture synthesis for the machine room viewer
//!
//! The machine room scene shows server cabinets skinned with procedurally
//! generated PBR texture sets instead of shipped image assets. This crate
//! implements the synthesis engine (brick, metal and wood patterns, noise
//! injection, normal map derivation, channel encoding) plus the small
//! pieces of scene-side state it feeds: a texture cache and hover
//! bookkeeping.
//!
//! # Example
//! ```
//! use machine_room::{MapKind, TextureOptions, generate_brick_textures};
//!
//! let set = generate_brick_textures(TextureOptions::new(64, 64), 0.0)?;
//! let color = set.get(MapKind::Color).unwrap();
//! assert_eq!((color.width(), color.height()), (64, 64));
//! # Ok::<(), machine_room::TextureError>(())
//! ```

pub mod scene;
pub mod texture;

pub use texture::{
    MapKind, MaterialTextureSet, TextureError, TextureOptions, generate_brick_textures,
    generate_metal_textures, generate_wood_textures,
};
