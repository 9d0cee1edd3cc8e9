//! Upload decoding shared by every pipeline

use image::{
    ColorType, DynamicImage, GenericImageView, GrayImage, ImageFormat, ImageReader, Limits,
};
use std::io::Cursor;

use crate::error::AnalysisError;

/// Largest accepted width or height. Compressed uploads far below the size
/// limit can still describe enormous pixel grids.
pub const MAX_IMAGE_DIMENSION: u32 = 10_000;

/// A decoded upload together with the container format it was sniffed as.
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

impl DecodedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Container name in upper case ("JPEG", "PNG", "WEBP", ...).
    pub fn format_name(&self) -> String {
        self.format
            .map(|f| format!("{:?}", f).to_uppercase())
            .unwrap_or_else(|| "UNKNOWN".to_string())
    }

    /// Pixel layout name ("L", "RGB", "RGBA", ...).
    pub fn mode_name(&self) -> &'static str {
        mode_name(self.image.color())
    }

    /// Reduce to 8-bit luma, ignoring alpha.
    pub fn to_grayscale(&self) -> GrayImage {
        self.image.to_luma8()
    }
}

fn decode_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
    limits.max_image_height = Some(MAX_IMAGE_DIMENSION);
    limits
}

/// Decode raw upload bytes, sniffing the format from content rather than the filename.
pub fn decode_image(data: &[u8]) -> Result<DecodedImage, AnalysisError> {
    let mut reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    reader.limits(decode_limits());
    let format = reader.format();
    let image = reader.decode()?;
    Ok(DecodedImage { image, format })
}

fn mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F",
        ColorType::Rgba32F => "RGBA;F",
        _ => "unknown",
    }
}
