//! Procedural texture generation
//!
//! This module synthesizes the PBR texture sets used to skin the machine
//! room cabinets: a base color pattern (brick, metal or wood), a normal map
//! derived from it, and flat noisy roughness/metalness channels.
//!
//! # Example
//! ```
//! use machine_room::texture::{generate_metal_textures, MapKind, TextureOptions};
//!
//! let set = generate_metal_textures(TextureOptions::new(64, 64), 30.0)?;
//! let color = set.get(MapKind::Color).unwrap();
//! assert_eq!((color.width(), color.height()), (64, 64));
//! # Ok::<(), machine_room::texture::TextureError>(())
//! ```

mod export;
mod materials;
mod noise;
mod normal;
mod patterns;
mod surface;

// Core type
pub use self::buffer::PixelBuffer;

// Drawing capability
pub use surface::{SoftwareSurface, Surface};

// Pattern painters
pub use patterns::{paint_brick, paint_metal, paint_wood};

// Per-step operations
pub use noise::inject_noise;
pub use normal::derive_normal_map;

// Material set builders
pub use materials::{
    MapKind, MaterialTextureSet, TextureOptions, generate_brick_textures,
    generate_brick_textures_with, generate_metal_textures, generate_metal_textures_with,
    generate_wood_textures, generate_wood_textures_with,
};

// Channel encoding
pub use export::{EncodedImage, encode_png};

/// Errors produced while generating a material texture set
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Zero-sized output was requested
    #[error("invalid texture dimensions {width}x{height} (must be positive)")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// A drawing surface could not be obtained
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Channel encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

mod buffer {
    /// RGBA pixel buffer backing every texture generation step
    #[derive(Clone, PartialEq, Eq)]
    pub struct PixelBuffer {
        /// Width in pixels
        pub width: u32,
        /// Height in pixels
        pub height: u32,
        /// RGBA pixel data (4 bytes per pixel, row-major, top-left origin)
        pub pixels: Vec<u8>,
    }

    impl PixelBuffer {
        /// Create a new pixel buffer initialized to transparent black
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0u8; (width as usize) * (height as usize) * 4],
            }
        }

        /// Create a pixel buffer filled with a solid color
        pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
            let mut buffer = Self::new(width, height);
            for chunk in buffer.pixels.chunks_exact_mut(4) {
                chunk.copy_from_slice(&color);
            }
            buffer
        }

        /// Get pixel at (x, y)
        #[inline]
        pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
            let idx = ((y * self.width + x) * 4) as usize;
            [
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ]
        }

        /// Set pixel at (x, y)
        #[inline]
        pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
            let idx = ((y * self.width + x) * 4) as usize;
            self.pixels[idx] = color[0];
            self.pixels[idx + 1] = color[1];
            self.pixels[idx + 2] = color[2];
            self.pixels[idx + 3] = color[3];
        }
    }

    impl std::fmt::Debug for PixelBuffer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("PixelBuffer")
                .field("width", &self.width)
                .field("height", &self.height)
                .finish_non_exhaustive()
        }
    }
}
