//! Loading photos: decode, orientation fix-up, and size bounding.

use std::fmt;
use std::io::{BufRead, Cursor, Seek};
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use tracing::debug;

use crate::error::{KolamError, Result};

/// Where an image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    /// Encoded image bytes (PNG, JPEG, ...) with a name for error messages.
    Bytes { name: String, data: Vec<u8> },
}

impl ImageSource {
    pub fn path<P: AsRef<Path>>(path: P) -> Self {
        ImageSource::Path(path.as_ref().to_path_buf())
    }

    pub fn bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        ImageSource::Bytes { name: name.into(), data }
    }

    /// Identifier used in logs and errors.
    pub fn name(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes { name, .. } => name.clone(),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A decoded image plus the EXIF rotation code it declared, if any.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub image: DynamicImage,
    /// 3, 6 or 8 when the file asks for a rotation.
    pub orientation: Option<u8>,
}

/// Decode an image, refusing anything larger than `max_pixels`.
///
/// The pixel check uses the header dimensions, so oversized images fail
/// before their pixel data is decoded.
pub fn decode(source: &ImageSource, max_pixels: u64) -> Result<Decoded> {
    match source {
        ImageSource::Path(path) => {
            let reader = ImageReader::open(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => KolamError::ImageNotFound { path: path.clone() },
                _ => KolamError::Io(e),
            })?;
            decode_reader(reader, &source.name(), max_pixels)
        }
        ImageSource::Bytes { name, data } => decode_reader(ImageReader::new(Cursor::new(data.as_slice())), name, max_pixels),
    }
}

fn decode_reader<R: BufRead + Seek>(reader: ImageReader<R>, name: &str, max_pixels: u64) -> Result<Decoded> {
    let decode_error = |source| KolamError::ImageDecode { name: name.to_string(), source };

    let reader = reader.with_guessed_format()?;
    let mut decoder = reader.into_decoder().map_err(decode_error)?;

    let (width, height) = decoder.dimensions();
    let pixels = width as u64 * height as u64;
    if pixels > max_pixels {
        return Err(KolamError::ResourceLimitExceeded { what: "image pixel count", value: pixels, limit: max_pixels });
    }

    // Unreadable metadata just means no rotation.
    let orientation = decoder.orientation().ok().and_then(rotation_code);
    let image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
    debug!(source = name, width, height, ?orientation, "decoded image");

    Ok(Decoded { image, orientation })
}

/// The EXIF codes that call for a pure rotation.
fn rotation_code(orientation: Orientation) -> Option<u8> {
    match orientation {
        Orientation::Rotate180 | Orientation::Rotate90 | Orientation::Rotate270 => Some(orientation.to_exif()),
        _ => None,
    }
}

/// Undo the camera rotation recorded in EXIF.
///
/// 3 turns the image half way, 6 turns it a quarter clockwise and 8 a
/// quarter counter-clockwise. Any other code leaves it untouched.
pub fn correct_orientation(image: DynamicImage, code: Option<u8>) -> DynamicImage {
    match code {
        Some(3) => image.rotate180(),
        Some(6) => image.rotate90(),
        Some(8) => image.rotate270(),
        _ => image,
    }
}

/// Target size so the longer side is exactly `max_dim`; None if it already fits.
pub fn bounded_size(width: u32, height: u32, max_dim: u32) -> Option<(u32, u32)> {
    let longest = width.max(height);
    if longest <= max_dim || max_dim == 0 {
        return None;
    }
    let shrink = |side: u32| ((side as u64 * max_dim as u64 / longest as u64) as u32).max(1);
    if width >= height {
        Some((max_dim, shrink(height)))
    } else {
        Some((shrink(width), max_dim))
    }
}

/// Downscale so neither side exceeds `max_dim`, keeping the aspect ratio.
pub fn bound_size(image: DynamicImage, max_dim: u32) -> DynamicImage {
    match bounded_size(image.width(), image.height(), max_dim) {
        Some((width, height)) => {
            debug!(from_w = image.width(), from_h = image.height(), width, height, "downscaling");
            image.resize_exact(width, height, FilterType::Triangle)
        }
        None => image,
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, Luma};

    fn marked_image() -> DynamicImage {
        // 3 wide, 2 tall, one white pixel in the top-left corner
        let mut img = GrayImage::new(3, 2);
        img.put_pixel(0, 0, Luma([255]));
        DynamicImage::ImageLuma8(img)
    }

    fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut data = Vec::new();
        image.write_to(&mut Cursor::new(&mut data), ImageFormat::Png).unwrap();
        data
    }

    /// A JPEG of `width` x `height` whose EXIF block declares `code`.
    pub(crate) fn jpeg_with_orientation(width: u32, height: u32, code: u16) -> Vec<u8> {
        let mut jpeg = Vec::new();
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([128])))
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .unwrap();

        // Big-endian TIFF header, one IFD entry: Orientation (0x0112), SHORT, 1 value
        let mut payload = b"Exif\0\0MM\0\x2a\0\0\0\x08".to_vec();
        payload.extend_from_slice(&[0x00, 0x01]);
        payload.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        payload.extend_from_slice(&code.to_be_bytes());
        payload.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

        let mut segment = vec![0xFF, 0xE1];
        segment.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
        segment.extend_from_slice(&payload);

        // APP1 goes straight after the SOI marker
        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&segment);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn jpeg_exif_orientation_is_read() {
        let data = jpeg_with_orientation(40, 20, 6);
        let decoded = decode(&ImageSource::bytes("phone.jpg", data), 1_000_000).unwrap();
        assert_eq!(decoded.orientation, Some(6));
        assert_eq!((decoded.image.width(), decoded.image.height()), (40, 20));

        let mirrored = decode(&ImageSource::bytes("mirror.jpg", jpeg_with_orientation(40, 20, 2)), 1_000_000).unwrap();
        assert_eq!(mirrored.orientation, None);
    }

    #[test]
    fn orientation_codes() {
        let rotated = correct_orientation(marked_image(), Some(3)).to_luma8();
        assert_eq!(rotated.dimensions(), (3, 2));
        assert_eq!(rotated.get_pixel(2, 1).0, [255]);

        // quarter turn clockwise: top-left goes to top-right
        let rotated = correct_orientation(marked_image(), Some(6)).to_luma8();
        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(rotated.get_pixel(1, 0).0, [255]);

        // quarter turn counter-clockwise: top-left goes to bottom-left
        let rotated = correct_orientation(marked_image(), Some(8)).to_luma8();
        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(rotated.get_pixel(0, 2).0, [255]);

        let untouched = correct_orientation(marked_image(), None).to_luma8();
        assert_eq!(untouched.get_pixel(0, 0).0, [255]);
        let untouched = correct_orientation(marked_image(), Some(1)).to_luma8();
        assert_eq!(untouched.get_pixel(0, 0).0, [255]);
    }

    #[test]
    fn resize_bounds_longest_side() {
        assert_eq!(bounded_size(4000, 3000, 1024), Some((1024, 768)));
        assert_eq!(bounded_size(1000, 3001, 1024), Some((341, 1024)));
        assert_eq!(bounded_size(5000, 2, 1024), Some((1024, 1)));
        assert_eq!(bounded_size(800, 600, 1024), None);
        assert_eq!(bounded_size(1024, 10, 1024), None);
    }

    #[test]
    fn resize_keeps_aspect() {
        let image = DynamicImage::ImageLuma8(GrayImage::new(300, 200));
        let resized = bound_size(image, 150);
        assert_eq!((resized.width(), resized.height()), (150, 100));
    }

    #[test]
    fn decodes_bytes_without_orientation() {
        let data = png_bytes(&marked_image());
        let decoded = decode(&ImageSource::bytes("marked.png", data), 1_000).unwrap();
        assert_eq!(decoded.orientation, None);
        assert_eq!(decoded.image.width(), 3);
    }

    #[test]
    fn pixel_limit_is_checked() {
        let data = png_bytes(&marked_image());
        let err = decode(&ImageSource::bytes("marked.png", data), 5).unwrap_err();
        assert!(matches!(err, KolamError::ResourceLimitExceeded { value: 6, limit: 5, .. }));
    }

    #[test]
    fn missing_file_and_garbage() {
        let err = decode(&ImageSource::path("/definitely/not/here.jpg"), 1_000).unwrap_err();
        assert!(matches!(err, KolamError::ImageNotFound { .. }));

        let err = decode(&ImageSource::bytes("junk", b"not an image".to_vec()), 1_000).unwrap_err();
        assert!(matches!(err, KolamError::ImageDecode { ref name, .. } if name == "junk"));
    }
}
