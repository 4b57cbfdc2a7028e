//! Material pattern painters
//!
//! Each painter fills a surface with the base look of one material family:
//! a running-bond brick wall, brushed metal with random scratches, or wood
//! with wandering grain lines. All drawing happens under a rotation pivoted
//! at the surface center, and base fills overscan the canvas by 3x so a
//! rotated pattern never exposes unpainted corners.

use std::f32::consts::PI;

use glam::{Affine2, Vec2};
use rand::Rng;

use super::surface::Surface;

/// Mortar band thickness in pattern units
const MORTAR_THICKNESS: f32 = 2.0;

/// Number of scratch strokes on a metal surface, independent of canvas size
const SCRATCH_COUNT: u32 = 50;

/// Vertical spacing between wood grain lines in pattern units
const GRAIN_SPACING: f32 = 4.0;

/// Rotation about the surface center, canvas-style
/// (translate to center, rotate, translate back)
fn center_rotation(width: f32, height: f32, degrees: f32) -> Affine2 {
    let center = Vec2::new(width / 2.0, height / 2.0);
    Affine2::from_translation(center)
        * Affine2::from_angle(degrees.to_radians())
        * Affine2::from_translation(-center)
}

/// Paint a running-bond brick wall: a 4x8 brick grid with horizontal mortar
/// bands every brick height and vertical bands within alternating rows,
/// offset by half a brick on odd rows.
pub fn paint_brick<S: Surface>(surface: &mut S, base: [u8; 4], mortar: [u8; 4], rotation: f32) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let brick_h = h / 8.0;
    let brick_w = w / 4.0;

    let pivot = center_rotation(w, h, rotation);
    surface.with_transform(pivot, |s| {
        s.fill_rect(-w, -h, w * 3.0, h * 3.0, base);

        // Horizontal mortar bands
        let mut y = -h;
        while y < h * 2.0 {
            s.fill_rect(-w, y, w * 3.0, MORTAR_THICKNESS, mortar);
            y += brick_h;
        }

        // Vertical mortar bands in every second band row, running bond on
        // odd rows
        let mut row = 0u32;
        let mut y = -h;
        while y < h * 2.0 {
            let offset = if row % 2 == 1 { brick_w / 2.0 } else { 0.0 };
            let mut x = -w;
            while x < w * 2.0 {
                s.fill_rect(x + offset, y, MORTAR_THICKNESS, brick_h, mortar);
                x += brick_w;
            }
            row += 1;
            y += brick_h * 2.0;
        }
    });
}

/// Paint brushed metal: a solid base with exactly 50 randomized scratch
/// strokes scattered over a 2x-oversized area, each with its own position,
/// length, angle, opacity and width.
pub fn paint_metal<S: Surface, R: Rng>(
    surface: &mut S,
    base: [u8; 4],
    rotation: f32,
    rng: &mut R,
) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;

    let pivot = center_rotation(w, h, rotation);
    surface.with_transform(pivot, |s| {
        s.fill_rect(-w, -h, w * 3.0, h * 3.0, base);

        for _ in 0..SCRATCH_COUNT {
            let x = (rng.random::<f32>() - 0.5) * w * 2.0;
            let y = (rng.random::<f32>() - 0.5) * h * 2.0;
            let length = rng.random::<f32>() * 100.0 + 50.0;
            let angle = rng.random::<f32>() * PI;
            let alpha = rng.random::<f32>() * 0.2;
            let width = rng.random::<f32>() * 2.0;

            let local = Affine2::from_translation(Vec2::new(x + w / 2.0, y + h / 2.0))
                * Affine2::from_angle(angle);
            s.with_transform(local, |s| {
                s.stroke_path(
                    &[Vec2::new(-length / 2.0, 0.0), Vec2::new(length / 2.0, 0.0)],
                    width,
                    [255, 255, 255, (alpha * 255.0) as u8],
                );
            });
        }
    });
}

/// Paint wood: a solid base with low-opacity grain lines every 4 units, each
/// a multi-segment path random-walking rightward with small vertical jitter.
pub fn paint_wood<S: Surface, R: Rng>(surface: &mut S, base: [u8; 4], rotation: f32, rng: &mut R) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;

    let pivot = center_rotation(w, h, rotation);
    surface.with_transform(pivot, |s| {
        s.fill_rect(-w, -h, w * 3.0, h * 3.0, base);

        let mut y = -h;
        while y < h * 2.0 {
            let alpha = rng.random::<f32>() * 0.1;
            let width = rng.random::<f32>() * 3.0 + 1.0;

            let mut points = vec![Vec2::new(-w, y)];
            let mut x = -w;
            while x < w * 2.0 {
                x += rng.random::<f32>() * 20.0;
                let jitter = rng.random::<f32>() * 10.0 - 5.0;
                points.push(Vec2::new(x, y + jitter));
            }
            s.stroke_path(&points, width, [0, 0, 0, (alpha * 255.0) as u8]);

            y += GRAIN_SPACING;
        }
    });
}
