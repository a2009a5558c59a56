use bytes::Bytes;
use std::fmt;
use std::io;

/// A decoded image in 8-bit RGBA, or nothing at all.
///
/// An empty sprite has no pixels and zero dimensions. It stands in for
/// artwork that does not exist or could not be loaded.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    rgba: Bytes,
}

impl Sprite {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes raw image bytes, guessing the format from their contents.
    pub fn decode(bytes: impl AsRef<[u8]>) -> Result<Self, image::ImageError> {
        let image = image::ImageReader::new(io::Cursor::new(bytes.as_ref()))
            .with_guessed_format()?
            .decode()?
            .to_rgba8();

        Ok(Self {
            width: image.width(),
            height: image.height(),
            rgba: Bytes::from(image.into_raw()),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rgba.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &Bytes {
        &self.rgba
    }

    pub fn to_image(&self) -> Option<image::RgbaImage> {
        if self.is_empty() {
            return None;
        }

        image::RgbaImage::from_raw(self.width, self.height, self.rgba.to_vec())
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}
