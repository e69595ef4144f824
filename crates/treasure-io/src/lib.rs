//! treasure-io - Image I/O for the treasure workspace
//!
//! Reads and writes 8-bit RGB images in PNG, JPEG and BMP through the
//! `image` crate. Decoded images are converted to RGB regardless of their
//! stored color type, so grayscale and RGBA files load as well.
//!
//! # Examples
//!
//! ```
//! use treasure_core::{Color, RgbGrid};
//! use treasure_io::{ImageFormat, decode_rgb, encode_rgb};
//!
//! let mut image = RgbGrid::new(3, 2).unwrap();
//! image.set_pixel(2, 1, Color::YELLOW).unwrap();
//!
//! let bytes = encode_rgb(&image, ImageFormat::Png).unwrap();
//! let decoded = decode_rgb(&bytes).unwrap();
//! assert_eq!(decoded, image);
//! ```

mod error;
pub mod format;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use std::io::Cursor;
use std::path::Path;
use treasure_core::RgbGrid;

/// Decode an in-memory image, detecting its format from the header
pub fn decode_rgb(data: &[u8]) -> IoResult<RgbGrid> {
    let format = detect_format_from_bytes(data)?;
    let decoded = image::load_from_memory_with_format(data, format.to_image_format())
        .map_err(|e| IoError::DecodeError(e.to_string()))?
        .to_rgb8();

    let (width, height) = decoded.dimensions();
    let grid = RgbGrid::from_interleaved(width, height, decoded.as_raw())?;
    log::debug!("decoded {width}x{height} {format:?} image");
    Ok(grid)
}

/// Read an image file as RGB
pub fn read_rgb<P: AsRef<Path>>(path: P) -> IoResult<RgbGrid> {
    let data = std::fs::read(path.as_ref())?;
    decode_rgb(&data)
}

/// Encode an RGB grid in the given format
pub fn encode_rgb(image: &RgbGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let buffer = image::RgbImage::from_raw(image.width(), image.height(), image.to_interleaved())
        .ok_or_else(|| IoError::InvalidData("sample buffer does not fit dimensions".to_string()))?;

    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(buffer)
        .write_to(&mut out, format.to_image_format())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(out.into_inner())
}

/// Write an RGB grid to a file; the format follows the file extension
pub fn write_rgb<P: AsRef<Path>>(image: &RgbGrid, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let bytes = encode_rgb(image, format)?;
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} ({format:?})", path.display());
    Ok(())
}
