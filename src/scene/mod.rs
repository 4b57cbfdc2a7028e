//! Scene-side consumers of the texture engine
//!
//! The machine room scene binds generated color channels to cabinet
//! surfaces, swaps them on hover, and converts pointer positions into the
//! normalized space its picking queries expect. Only the pure state logic
//! lives here; model loading, ray casting and rendering belong to the host
//! application.

mod cache;
mod interaction;

pub use cache::TextureCache;
pub use interaction::{HoverChange, HoverTracker, pointer_to_ndc};
