//! In-memory PNG encoding of pixel buffers

use super::{PixelBuffer, TextureError};

/// A PNG-encoded texture channel
#[derive(Clone)]
pub struct EncodedImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl EncodedImage {
    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The PNG byte stream
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning the PNG byte stream
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Encode a pixel buffer as an RGBA8 PNG held in memory
pub fn encode_png(buffer: &PixelBuffer) -> Result<EncodedImage, TextureError> {
    let mut data = Vec::new();
    let mut encoder = png::Encoder::new(&mut data, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&buffer.pixels)?;
    writer.finish()?;

    Ok(EncodedImage {
        width: buffer.width,
        height: buffer.height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_round_trips() {
        let mut buffer = PixelBuffer::filled(16, 8, [120, 60, 30, 255]);
        buffer.set_pixel(3, 2, [1, 2, 3, 4]);

        let image = encode_png(&buffer).unwrap();
        assert_eq!((image.width(), image.height()), (16, 8));
        assert!(!image.as_bytes().is_empty());

        let decoder = png::Decoder::new(image.as_bytes());
        let mut reader = decoder.read_info().unwrap();
        let mut out = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut out).unwrap();
        assert_eq!((info.width, info.height), (16, 8));
        assert_eq!(&out[..info.buffer_size()], &buffer.pixels[..]);
    }
}
