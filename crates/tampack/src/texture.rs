//! Texture buffers and input loading.

use std::path::Path;

use crate::error::{Result, TamError};
use crate::packing::ColorComponent;
use crate::TONE_COUNT;

/// A decoded input texture (RGBA8, row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data.
    pub data: Vec<[u8; 4]>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a pixel value.
    pub fn new(width: u32, height: u32, fill: [u8; 4]) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a grayscale texture filled with `value` (opaque).
    pub fn gray(width: u32, height: u32, value: u8) -> Self {
        Self::new(width, height, [value, value, value, 255])
    }

    /// Build a texture from tightly packed RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if bytes.len() != expected {
            return Err(TamError::InvalidTexture(format!(
                "expected {} bytes for {}x{} RGBA8, got {}",
                expected,
                width,
                height,
                bytes.len()
            )));
        }

        let data = bytes
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let idx = self.index(x, y);
        self.data[idx] = px;
    }

    /// Read one channel of a pixel.
    #[inline]
    pub fn component(&self, x: u32, y: u32, component: ColorComponent) -> u8 {
        self.get(x, y)[component.offset()]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// A packed output texture (RGB8, row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data.
    pub data: Vec<[u8; 3]>,
}

impl RgbBuffer {
    /// Create a new buffer filled with black.
    pub fn new_black(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![[0; 3]; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, px: [u8; 3]) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = px;
    }

    /// Convert to 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data.iter().flatten().copied().collect()
    }
}

/// The six tone slots of a Tonal Art Map, brightest first.
///
/// Slots may be empty; [`crate::validate_inputs`] decides whether the set is usable.
#[derive(Debug, Clone, Default)]
pub struct TamInputs {
    slots: [Option<TextureBuffer>; TONE_COUNT],
}

impl TamInputs {
    /// Create from six slots.
    pub fn new(slots: [Option<TextureBuffer>; TONE_COUNT]) -> Self {
        Self { slots }
    }

    /// Create from six present textures.
    pub fn from_textures(textures: [TextureBuffer; TONE_COUNT]) -> Self {
        Self {
            slots: textures.map(Some),
        }
    }

    /// Create from a list that must contain exactly six slots.
    pub fn from_vec(slots: Vec<Option<TextureBuffer>>) -> Result<Self> {
        let actual = slots.len();
        let slots: [Option<TextureBuffer>; TONE_COUNT] =
            slots.try_into().map_err(|_| TamError::InputCount {
                expected: TONE_COUNT,
                actual,
            })?;
        Ok(Self { slots })
    }

    /// The texture in slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<&TextureBuffer> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Replace the texture in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn set(&mut self, index: usize, texture: Option<TextureBuffer>) {
        self.slots[index] = texture;
    }

    /// Iterate over all six slots in tone order.
    pub fn slots(&self) -> impl Iterator<Item = Option<&TextureBuffer>> {
        self.slots.iter().map(Option::as_ref)
    }
}

/// Load a texture from disk, decoding any format the `image` crate supports.
///
/// Grayscale sources expand so that R, G and B all hold the luma value.
pub fn load_texture(path: &Path) -> Result<TextureBuffer> {
    let img = image::open(path).map_err(|source| TamError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    from_dynamic(img).map_err(|e| match e {
        TamError::InvalidTexture(msg) => {
            TamError::InvalidTexture(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Decode a texture from an in-memory encoded image.
pub fn load_texture_from_memory(bytes: &[u8]) -> Result<TextureBuffer> {
    let img = image::load_from_memory(bytes).map_err(|source| TamError::ImageLoad {
        path: "<memory>".into(),
        source,
    })?;
    from_dynamic(img)
}

fn from_dynamic(img: image::DynamicImage) -> Result<TextureBuffer> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(TamError::InvalidTexture(format!(
            "image has zero area ({}x{})",
            width, height
        )));
    }
    TextureBuffer::from_rgba8(width, height, rgba.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8_length_check() {
        let err = TextureBuffer::from_rgba8(2, 2, &[0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes"));

        let tex = TextureBuffer::from_rgba8(2, 1, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(tex.get(1, 0), [5, 6, 7, 8]);
    }

    #[test]
    fn test_get_set_row_major() {
        let mut tex = TextureBuffer::gray(3, 2, 0);
        tex.set(2, 1, [9, 8, 7, 6]);
        assert_eq!(tex.data[5], [9, 8, 7, 6]);
        assert_eq!(tex.component(2, 1, ColorComponent::G), 8);
        assert_eq!(tex.component(2, 1, ColorComponent::A), 6);
    }

    #[test]
    fn test_rgb_buffer_to_rgb8() {
        let mut buf = RgbBuffer::new_black(2, 1);
        buf.set(0, 0, [1, 2, 3]);
        buf.set(1, 0, [4, 5, 6]);
        assert_eq!(buf.to_rgb8(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_inputs_from_vec_requires_six() {
        let err = TamInputs::from_vec(vec![None; 5]).unwrap_err();
        assert!(matches!(
            err,
            TamError::InputCount {
                expected: 6,
                actual: 5
            }
        ));
        assert!(TamInputs::from_vec(vec![None; 6]).is_ok());
    }

    #[test]
    fn test_load_grayscale_png_expands_luma() {
        let img = image::GrayImage::from_raw(2, 1, vec![17, 200]).unwrap();
        let mut bytes = Vec::new();
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let tex = load_texture_from_memory(&bytes).unwrap();
        assert_eq!(tex.dimensions(), (2, 1));
        assert_eq!(tex.get(0, 0), [17, 17, 17, 255]);
        assert_eq!(tex.get(1, 0), [200, 200, 200, 255]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_texture(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, TamError::ImageLoad { .. }));
    }
}
