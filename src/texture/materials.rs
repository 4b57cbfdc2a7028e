//! Material texture set builders
//!
//! One builder per material family. Each runs the same fixed sequence on a
//! single surface: paint the family pattern at the requested rotation, add
//! noise, snapshot the color channel, derive the normal map from the buffer
//! as it stands, then refill with flat grays for the roughness (and, for
//! metal, metalness) channels.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;

use super::TextureError;
use super::export::{EncodedImage, encode_png};
use super::noise::inject_noise;
use super::normal::derive_normal_map;
use super::patterns::{paint_brick, paint_metal, paint_wood};
use super::surface::{SoftwareSurface, Surface};

const BRICK_BASE: [u8; 4] = [0x8B, 0x45, 0x13, 255];
const BRICK_MORTAR: [u8; 4] = [0x46, 0x32, 0x39, 255];
const METAL_BASE: [u8; 4] = [0xA8, 0xA8, 0xA8, 255];
const WOOD_BASE: [u8; 4] = [0x8B, 0x45, 0x13, 255];

const MID_GRAY: [u8; 4] = [0x66, 0x66, 0x66, 255];
const DARK_GRAY: [u8; 4] = [0x22, 0x22, 0x22, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Requested output dimensions for a material texture set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureOptions {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl TextureOptions {
    /// Create options for a `width` x `height` set
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

/// PBR channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKind {
    /// Base color / albedo
    Color,
    /// Tangent-space normal map
    Normal,
    /// Roughness map
    Roughness,
    /// Metalness map (metal family only)
    Metalness,
}

impl MapKind {
    /// Stable channel name consumers can key on
    pub fn as_str(self) -> &'static str {
        match self {
            MapKind::Color => "color",
            MapKind::Normal => "normal",
            MapKind::Roughness => "roughness",
            MapKind::Metalness => "metalness",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete set of encoded PBR channels for one material.
///
/// Produced atomically by one builder call; the engine never caches or
/// deduplicates sets.
#[derive(Debug, Clone)]
pub struct MaterialTextureSet {
    channels: BTreeMap<MapKind, EncodedImage>,
}

impl MaterialTextureSet {
    fn new() -> Self {
        Self {
            channels: BTreeMap::new(),
        }
    }

    fn insert(&mut self, kind: MapKind, image: EncodedImage) {
        self.channels.insert(kind, image);
    }

    /// Look up a channel by kind
    pub fn get(&self, kind: MapKind) -> Option<&EncodedImage> {
        self.channels.get(&kind)
    }

    /// Look up a channel by its stable name (`"color"`, `"normal"`, ...)
    pub fn get_named(&self, name: &str) -> Option<&EncodedImage> {
        self.channels
            .iter()
            .find(|(kind, _)| kind.as_str() == name)
            .map(|(_, image)| image)
    }

    /// Kinds present in this set
    pub fn kinds(&self) -> impl Iterator<Item = MapKind> + '_ {
        self.channels.keys().copied()
    }

    /// Iterate over all channels
    pub fn iter(&self) -> impl Iterator<Item = (MapKind, &EncodedImage)> {
        self.channels.iter().map(|(kind, image)| (*kind, image))
    }

    /// Number of channels in the set
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the set holds no channels
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

fn new_surface(options: TextureOptions) -> Result<SoftwareSurface, TextureError> {
    if options.width == 0 || options.height == 0 {
        return Err(TextureError::InvalidDimensions {
            width: options.width,
            height: options.height,
        });
    }
    Ok(SoftwareSurface::new(options.width, options.height))
}

/// Untransformed flat fill of the whole canvas, used for the roughness and
/// metalness channels
fn fill_flat(surface: &mut SoftwareSurface, color: [u8; 4]) {
    let (w, h) = (surface.width() as f32, surface.height() as f32);
    surface.fill_rect(0.0, 0.0, w, h, color);
}

/// Generate a brick texture set (color, normal, roughness) using the thread
/// RNG
pub fn generate_brick_textures(
    options: TextureOptions,
    rotation: f32,
) -> Result<MaterialTextureSet, TextureError> {
    generate_brick_textures_with(options, rotation, &mut rand::rng())
}

/// Generate a brick texture set with a caller-supplied RNG
pub fn generate_brick_textures_with<R: Rng>(
    options: TextureOptions,
    rotation: f32,
    rng: &mut R,
) -> Result<MaterialTextureSet, TextureError> {
    let mut surface = new_surface(options)?;
    tracing::debug!(
        width = options.width,
        height = options.height,
        rotation,
        "generating brick texture set"
    );
    let mut set = MaterialTextureSet::new();

    paint_brick(&mut surface, BRICK_BASE, BRICK_MORTAR, rotation);
    inject_noise(surface.pixels_mut(), 0.3, rng);
    set.insert(MapKind::Color, encode_png(surface.pixels())?);

    let normal = derive_normal_map(surface.pixels(), 2.0);
    surface.put_pixels(normal);
    set.insert(MapKind::Normal, encode_png(surface.pixels())?);

    fill_flat(&mut surface, MID_GRAY);
    inject_noise(surface.pixels_mut(), 0.5, rng);
    set.insert(MapKind::Roughness, encode_png(surface.pixels())?);

    Ok(set)
}

/// Generate a metal texture set (color, normal, roughness, metalness) using
/// the thread RNG
pub fn generate_metal_textures(
    options: TextureOptions,
    rotation: f32,
) -> Result<MaterialTextureSet, TextureError> {
    generate_metal_textures_with(options, rotation, &mut rand::rng())
}

/// Generate a metal texture set with a caller-supplied RNG
pub fn generate_metal_textures_with<R: Rng>(
    options: TextureOptions,
    rotation: f32,
    rng: &mut R,
) -> Result<MaterialTextureSet, TextureError> {
    let mut surface = new_surface(options)?;
    tracing::debug!(
        width = options.width,
        height = options.height,
        rotation,
        "generating metal texture set"
    );
    let mut set = MaterialTextureSet::new();

    paint_metal(&mut surface, METAL_BASE, rotation, rng);
    inject_noise(surface.pixels_mut(), 0.1, rng);
    set.insert(MapKind::Color, encode_png(surface.pixels())?);

    let normal = derive_normal_map(surface.pixels(), 1.5);
    surface.put_pixels(normal);
    set.insert(MapKind::Normal, encode_png(surface.pixels())?);

    fill_flat(&mut surface, DARK_GRAY);
    inject_noise(surface.pixels_mut(), 0.3, rng);
    set.insert(MapKind::Roughness, encode_png(surface.pixels())?);

    fill_flat(&mut surface, WHITE);
    inject_noise(surface.pixels_mut(), 0.1, rng);
    set.insert(MapKind::Metalness, encode_png(surface.pixels())?);

    Ok(set)
}

/// Generate a wood texture set (color, normal, roughness) using the thread
/// RNG
pub fn generate_wood_textures(
    options: TextureOptions,
    rotation: f32,
) -> Result<MaterialTextureSet, TextureError> {
    generate_wood_textures_with(options, rotation, &mut rand::rng())
}

/// Generate a wood texture set with a caller-supplied RNG
pub fn generate_wood_textures_with<R: Rng>(
    options: TextureOptions,
    rotation: f32,
    rng: &mut R,
) -> Result<MaterialTextureSet, TextureError> {
    let mut surface = new_surface(options)?;
    tracing::debug!(
        width = options.width,
        height = options.height,
        rotation,
        "generating wood texture set"
    );
    let mut set = MaterialTextureSet::new();

    paint_wood(&mut surface, WOOD_BASE, rotation, rng);
    inject_noise(surface.pixels_mut(), 0.2, rng);
    set.insert(MapKind::Color, encode_png(surface.pixels())?);

    let normal = derive_normal_map(surface.pixels(), 1.5);
    surface.put_pixels(normal);
    set.insert(MapKind::Normal, encode_png(surface.pixels())?);

    fill_flat(&mut surface, MID_GRAY);
    inject_noise(surface.pixels_mut(), 0.4, rng);
    set.insert(MapKind::Roughness, encode_png(surface.pixels())?);

    Ok(set)
}
