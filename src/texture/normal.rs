//! Normal map derivation from a height/luminance field
//!
//! Treats the red channel of a buffer as height and estimates a
//! tangent-space normal per pixel from the horizontal and vertical
//! gradients of its four neighbors.

use super::PixelBuffer;

/// Derive a tangent-space normal map from `buffer`.
///
/// For every interior pixel the gradient is taken from the red channel of
/// the adjacent pixels, scaled by `strength`, combined with a unit z
/// component, normalized and remapped to `[0, 255]`. Border pixels are left
/// at the zero-initialized `(0, 0, 0, 0)`; consumers rely on that edge
/// behavior, so it is kept as-is. The input is not mutated.
pub fn derive_normal_map(buffer: &PixelBuffer, strength: f32) -> PixelBuffer {
    let mut normal = PixelBuffer::new(buffer.width, buffer.height);
    if buffer.width < 3 || buffer.height < 3 {
        return normal;
    }

    for y in 1..buffer.height - 1 {
        for x in 1..buffer.width - 1 {
            let left = buffer.get_pixel(x - 1, y)[0] as f32;
            let right = buffer.get_pixel(x + 1, y)[0] as f32;
            let up = buffer.get_pixel(x, y - 1)[0] as f32;
            let down = buffer.get_pixel(x, y + 1)[0] as f32;

            let dx = (left - right) / 255.0 * strength;
            let dy = (up - down) / 255.0 * strength;
            let dz = 1.0;

            let len = (dx * dx + dy * dy + dz * dz).sqrt();
            let encode = |v: f32| ((v / len * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8;
            normal.set_pixel(x, y, [encode(dx), encode(dy), encode(dz), 255]);
        }
    }
    normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_input_gives_neutral_interior() {
        let height = PixelBuffer::filled(16, 16, [128, 128, 128, 255]);
        let normal = derive_normal_map(&height, 2.0);
        let p = normal.get_pixel(8, 8);
        assert_eq!(p, [128, 128, 255, 255]);
    }

    #[test]
    fn test_border_pixels_stay_zeroed() {
        let height = PixelBuffer::filled(8, 8, [200, 200, 200, 255]);
        let normal = derive_normal_map(&height, 1.0);
        for x in 0..8 {
            assert_eq!(normal.get_pixel(x, 0), [0, 0, 0, 0]);
            assert_eq!(normal.get_pixel(x, 7), [0, 0, 0, 0]);
        }
        for y in 0..8 {
            assert_eq!(normal.get_pixel(0, y), [0, 0, 0, 0]);
            assert_eq!(normal.get_pixel(7, y), [0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_blue_channel_dominates_interior() {
        let mut height = PixelBuffer::filled(16, 16, [90, 90, 90, 255]);
        // Put a bright vertical stripe down the middle
        for y in 0..16 {
            height.set_pixel(8, y, [250, 250, 250, 255]);
        }
        let normal = derive_normal_map(&height, 1.5);
        for y in 1..15 {
            for x in 1..15 {
                assert!(normal.get_pixel(x, y)[2] >= 127);
            }
        }
    }

    #[test]
    fn test_gradient_direction() {
        let mut height = PixelBuffer::filled(16, 16, [0, 0, 0, 255]);
        // Bright left half: left - right > 0 at the boundary, so R > 128
        for y in 0..16 {
            for x in 0..8 {
                height.set_pixel(x, y, [255, 255, 255, 255]);
            }
        }
        let normal = derive_normal_map(&height, 1.0);
        assert!(normal.get_pixel(8, 8)[0] > 128);
    }

    #[test]
    fn test_input_not_mutated_and_dimensions_match() {
        let height = PixelBuffer::filled(10, 12, [64, 64, 64, 255]);
        let before = height.pixels.clone();
        let normal = derive_normal_map(&height, 2.0);
        assert_eq!(height.pixels, before);
        assert_eq!((normal.width, normal.height), (10, 12));
    }

    #[test]
    fn test_degenerate_sizes_are_all_border() {
        let tiny = PixelBuffer::filled(2, 5, [100, 100, 100, 255]);
        let normal = derive_normal_map(&tiny, 1.0);
        assert!(normal.pixels.iter().all(|&p| p == 0));
    }
}
