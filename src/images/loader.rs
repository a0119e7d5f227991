use std::path::Path;

use super::{ImageError, ImageResult};

/// RGBA8 pixels, row-major, no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: i32,
    pub height: i32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub const fn stride(&self) -> i32 {
        self.width * 4
    }
}

pub fn load_image(path: &Path) -> ImageResult<DecodedImage> {
    let decoded = image::ImageReader::open(path)
        .map_err(|err| ImageError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(err),
        })?
        .with_guessed_format()
        .map_err(|err| ImageError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(err),
        })?
        .decode()
        .map_err(|source| ImageError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (width, height) = decoded.dimensions();
    let too_large = || ImageError::TooLarge { width, height };
    let width_px = i32::try_from(width).map_err(|_| too_large())?;
    let height_px = i32::try_from(height).map_err(|_| too_large())?;
    width_px.checked_mul(4).ok_or_else(too_large)?;

    tracing::debug!(path = %path.display(), width, height, "decoded image");
    Ok(DecodedImage {
        width: width_px,
        height: height_px,
        pixels: decoded.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixture_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        path.push(format!("boxmark-loader-{}-{nanos}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    #[test]
    fn load_image_decodes_png_into_rgba_rows() {
        let dir = fixture_dir();
        let path = dir.join("tiny.png");
        let mut source = image::RgbImage::new(3, 2);
        source.put_pixel(2, 1, image::Rgb([10, 20, 30]));
        source.save(&path).unwrap();

        let decoded = load_image(&path).expect("png should decode");
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.stride(), 12);
        assert_eq!(decoded.pixels.len(), 24);
        assert_eq!(&decoded.pixels[20..24], &[10, 20, 30, 255]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_image_reports_path_for_undecodable_file() {
        let dir = fixture_dir();
        let path = dir.join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_image(&path).expect_err("garbage should not decode");
        assert!(matches!(err, ImageError::Decode { path: ref p, .. } if p == &path));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_image_reports_missing_file() {
        let err = load_image(Path::new("/nonexistent/boxmark/missing.png"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ImageError::Decode { .. }));
    }
}
