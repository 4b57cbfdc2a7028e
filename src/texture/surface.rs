//! Drawing surface abstraction and software rasterizer
//!
//! Pattern painters draw through the `Surface` trait: rectangle fills,
//! stroked paths and a scoped transform stack. `SoftwareSurface` rasterizes
//! into a `PixelBuffer` in memory; an implementation backed by a native 2D
//! API can be substituted without touching the painters.

use glam::{Affine2, Vec2};

use super::PixelBuffer;

/// Drawing capability required by the pattern painters
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Fill an axis-aligned rectangle, given in local coordinates, under the
    /// current transform
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 4]);

    /// Stroke a polyline of local-coordinate points with the given width,
    /// alpha-blending over existing pixels. Overlapping segments of one
    /// stroke blend once.
    fn stroke_path(&mut self, points: &[Vec2], width: f32, color: [u8; 4]);

    /// Compose `transform` onto the current transform for the duration of
    /// `body`, restoring the previous transform afterwards
    fn with_transform(&mut self, transform: Affine2, body: impl FnOnce(&mut Self))
    where
        Self: Sized;

    /// Read access to the backing pixels
    fn pixels(&self) -> &PixelBuffer;

    /// Mutable access to the backing pixels
    fn pixels_mut(&mut self) -> &mut PixelBuffer;

    /// Replace the backing pixels wholesale; dimensions must match the surface
    fn put_pixels(&mut self, pixels: PixelBuffer);
}

/// In-memory software rasterizer
pub struct SoftwareSurface {
    buffer: PixelBuffer,
    transform: Affine2,
}

impl SoftwareSurface {
    /// Create a surface of the given size, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: PixelBuffer::new(width, height),
            transform: Affine2::IDENTITY,
        }
    }

    /// Consume the surface, returning the backing pixels
    pub fn into_pixels(self) -> PixelBuffer {
        self.buffer
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if color[3] == 255 {
            self.buffer.set_pixel(x, y, color);
            return;
        }
        let src_a = color[3] as f32 / 255.0;
        let dst = self.buffer.get_pixel(x, y);
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            self.buffer.set_pixel(x, y, [0, 0, 0, 0]);
            return;
        }
        let blend = |s: u8, d: u8| {
            let v = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
            v.clamp(0.0, 255.0).round() as u8
        };
        self.buffer.set_pixel(
            x,
            y,
            [
                blend(color[0], dst[0]),
                blend(color[1], dst[1]),
                blend(color[2], dst[2]),
                (out_a * 255.0).round() as u8,
            ],
        );
    }

    /// Integer pixel range covered by a device-space bounding box, clipped to
    /// the buffer
    fn clip_range(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.buffer.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.buffer.height);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }
}

impl Surface for SoftwareSurface {
    fn width(&self) -> u32 {
        self.buffer.width
    }

    fn height(&self) -> u32 {
        self.buffer.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 4]) {
        if w <= 0.0 || h <= 0.0 || color[3] == 0 {
            return;
        }
        let corners = [
            self.transform.transform_point2(Vec2::new(x, y)),
            self.transform.transform_point2(Vec2::new(x + w, y)),
            self.transform.transform_point2(Vec2::new(x + w, y + h)),
            self.transform.transform_point2(Vec2::new(x, y + h)),
        ];
        let mut min = corners[0];
        let mut max = corners[0];
        for corner in &corners[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }
        let Some((x0, y0, x1, y1)) = self.clip_range(min, max) else {
            return;
        };
        let inverse = self.transform.inverse();
        for py in y0..y1 {
            for px in x0..x1 {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let local = inverse.transform_point2(center);
                if local.x >= x && local.x < x + w && local.y >= y && local.y < y + h {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    fn stroke_path(&mut self, points: &[Vec2], width: f32, color: [u8; 4]) {
        if points.len() < 2 || color[3] == 0 {
            return;
        }
        let device: Vec<Vec2> = points
            .iter()
            .map(|p| self.transform.transform_point2(*p))
            .collect();
        // Hairline strokes still cover one pixel
        let half = (width * 0.5).max(0.5);

        let w = self.buffer.width as usize;
        let mut covered = vec![false; w * self.buffer.height as usize];
        for segment in device.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let pad = Vec2::splat(half + 1.0);
            let Some((x0, y0, x1, y1)) = self.clip_range(a.min(b) - pad, a.max(b) + pad) else {
                continue;
            };
            let ab = b - a;
            let len_sq = ab.length_squared();
            for py in y0..y1 {
                for px in x0..x1 {
                    let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                    let t = if len_sq > 0.0 {
                        ((center - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                    } else {
                        0.0
                    };
                    if center.distance(a + ab * t) <= half {
                        covered[py as usize * w + px as usize] = true;
                    }
                }
            }
        }
        for (idx, hit) in covered.iter().enumerate() {
            if *hit {
                self.blend_pixel((idx % w) as u32, (idx / w) as u32, color);
            }
        }
    }

    fn with_transform(&mut self, transform: Affine2, body: impl FnOnce(&mut Self)) {
        let saved = self.transform;
        self.transform = saved * transform;
        body(self);
        self.transform = saved;
    }

    fn pixels(&self) -> &PixelBuffer {
        &self.buffer
    }

    fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    fn put_pixels(&mut self, pixels: PixelBuffer) {
        debug_assert_eq!((pixels.width, pixels.height), (self.buffer.width, self.buffer.height));
        self.buffer = pixels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_identity() {
        let mut surface = SoftwareSurface::new(8, 8);
        surface.fill_rect(0.0, 0.0, 8.0, 8.0, [10, 20, 30, 255]);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(surface.pixels().get_pixel(x, y), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn test_fill_rect_partial_and_clipped() {
        let mut surface = SoftwareSurface::new(8, 8);
        surface.fill_rect(-4.0, -4.0, 8.0, 8.0, [255, 0, 0, 255]);
        assert_eq!(surface.pixels().get_pixel(3, 3), [255, 0, 0, 255]);
        assert_eq!(surface.pixels().get_pixel(4, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_rotated_overscan_covers_corners() {
        let mut surface = SoftwareSurface::new(32, 32);
        let center = Vec2::splat(16.0);
        let rotation = Affine2::from_translation(center)
            * Affine2::from_angle(45f32.to_radians())
            * Affine2::from_translation(-center);
        surface.with_transform(rotation, |s| {
            s.fill_rect(-32.0, -32.0, 96.0, 96.0, [50, 50, 50, 255]);
        });
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(surface.pixels().get_pixel(x, y), [50, 50, 50, 255]);
            }
        }
    }

    #[test]
    fn test_with_transform_is_scoped() {
        let mut surface = SoftwareSurface::new(8, 8);
        let shift = Affine2::from_translation(Vec2::new(4.0, 0.0));
        surface.with_transform(shift, |s| {
            s.fill_rect(0.0, 0.0, 1.0, 1.0, [255, 255, 255, 255]);
        });
        // Drawn at the shifted position
        assert_eq!(surface.pixels().get_pixel(4, 0), [255, 255, 255, 255]);
        // Transform restored: this lands at the origin
        surface.fill_rect(0.0, 0.0, 1.0, 1.0, [0, 255, 0, 255]);
        assert_eq!(surface.pixels().get_pixel(0, 0), [0, 255, 0, 255]);
    }

    #[test]
    fn test_stroke_blends_alpha_once() {
        let mut surface = SoftwareSurface::new(16, 4);
        surface.fill_rect(0.0, 0.0, 16.0, 4.0, [0, 0, 0, 255]);
        // Two overlapping segments of a single path must blend a pixel once
        surface.stroke_path(
            &[
                Vec2::new(0.0, 1.5),
                Vec2::new(8.0, 1.5),
                Vec2::new(16.0, 1.5),
            ],
            1.0,
            [255, 255, 255, 128],
        );
        let p = surface.pixels().get_pixel(8, 1);
        assert!((p[0] as i32 - 128).abs() <= 1, "got {}", p[0]);
    }

    #[test]
    fn test_stroke_hairline_still_paints() {
        let mut surface = SoftwareSurface::new(8, 8);
        surface.stroke_path(
            &[Vec2::new(0.0, 4.0), Vec2::new(8.0, 4.0)],
            0.0,
            [255, 255, 255, 255],
        );
        let painted = (0..8).any(|x| surface.pixels().get_pixel(x, 3)[3] != 0)
            || (0..8).any(|x| surface.pixels().get_pixel(x, 4)[3] != 0);
        assert!(painted);
    }

    #[test]
    fn test_stroke_outside_bounds_is_clipped() {
        let mut surface = SoftwareSurface::new(8, 8);
        surface.stroke_path(
            &[Vec2::new(-100.0, -50.0), Vec2::new(-20.0, -50.0)],
            4.0,
            [255, 255, 255, 255],
        );
        assert!(surface.pixels().pixels.iter().all(|&p| p == 0));
    }
}
