//! Luminance noise injection
//!
//! Perturbs every pixel of a buffer by a single random scalar applied to all
//! three color channels, varying brightness while preserving hue.

use rand::Rng;

use super::PixelBuffer;

/// Add symmetric random noise to the RGB channels of `buffer` in place.
///
/// One perturbation in `(-0.5, 0.5] * intensity * 255` is drawn per pixel
/// and added to R, G and B alike; the result saturates at the u8 boundary.
/// Alpha is untouched. `intensity` is conventionally in `[0, 1]` but is not
/// enforced; an intensity of 0 leaves the buffer unchanged.
pub fn inject_noise<R: Rng>(buffer: &mut PixelBuffer, intensity: f32, rng: &mut R) {
    for pixel in buffer.pixels.chunks_exact_mut(4) {
        let noise = (rng.random::<f32>() - 0.5) * intensity * 255.0;
        for channel in &mut pixel[..3] {
            *channel = (*channel as f32 + noise).clamp(0.0, 255.0).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_zero_intensity_is_noop() {
        let mut buf = PixelBuffer::filled(16, 16, [100, 150, 200, 255]);
        let before = buf.pixels.clone();
        inject_noise(&mut buf, 0.0, &mut Pcg32::seed_from_u64(1));
        assert_eq!(buf.pixels, before);
    }

    #[test]
    fn test_alpha_untouched() {
        let mut buf = PixelBuffer::filled(16, 16, [100, 100, 100, 77]);
        inject_noise(&mut buf, 1.0, &mut Pcg32::seed_from_u64(2));
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(buf.get_pixel(x, y)[3], 77);
            }
        }
    }

    #[test]
    fn test_gray_stays_gray() {
        // The same scalar lands on R, G and B, so neutral pixels stay neutral
        let mut buf = PixelBuffer::filled(32, 32, [128, 128, 128, 255]);
        inject_noise(&mut buf, 0.5, &mut Pcg32::seed_from_u64(3));
        let mut changed = false;
        for y in 0..32 {
            for x in 0..32 {
                let p = buf.get_pixel(x, y);
                assert_eq!(p[0], p[1]);
                assert_eq!(p[1], p[2]);
                changed |= p[0] != 128;
            }
        }
        assert!(changed, "noise at intensity 0.5 should move some pixels");
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let mut a = PixelBuffer::filled(8, 8, [60, 70, 80, 255]);
        let mut b = a.clone();
        inject_noise(&mut a, 0.3, &mut Pcg32::seed_from_u64(9));
        inject_noise(&mut b, 0.3, &mut Pcg32::seed_from_u64(9));
        assert_eq!(a.pixels, b.pixels);
    }
}
