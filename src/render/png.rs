//! PNG input and output for render surfaces.
//!
//! Writes surfaces with optional integer upscaling, and loads PNGs back as
//! surfaces so they can be sampled.

use std::path::Path;

use image::{imageops, RgbaImage};

use crate::error::{PickerError, Result};

use super::RenderSurface;

/// Write a surface to a PNG file.
///
/// # Arguments
///
/// * `surface` - The surface to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
///
/// Returns the dimensions of the written image.
pub fn write_png(surface: &RenderSurface, path: &Path, scale: u32) -> Result<(u32, u32)> {
    let img = scale_image(surface.image(), scale)?;

    img.save(path).map_err(|e| PickerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(img.dimensions())
}

/// Load a PNG (or any format `image` understands) as a surface.
pub fn read_png(path: &Path) -> Result<RenderSurface> {
    let img = image::open(path)
        .map_err(|e| PickerError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    RenderSurface::from_image(img)
}

/// Nearest-neighbour upscale by an integer factor. A scale of 0 is treated as 1.
pub fn scale_image(img: &RgbaImage, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    if scale == 1 {
        return Ok(img.clone());
    }
    let (width, height) = scaled_size(img.width(), img.height(), scale)?;
    Ok(imageops::resize(img, width, height, imageops::FilterType::Nearest))
}

/// Size of a `width` x `height` image after upscaling by `scale`.
pub fn scaled_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32)> {
    let scale = scale.max(1);
    match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(PickerError::Config {
            message: format!("scale {} overflows a {}x{} surface", scale, width, height),
            help: Some("Use a smaller scale factor".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{fill_solid, render_hue_continuum};
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_round_trip() {
        let mut surface = RenderSurface::new(3, 20).unwrap();
        render_hue_continuum(&mut surface);

        let dir = tempdir().unwrap();
        let path = dir.path().join("slider.png");

        write_png(&surface, &path, 1).unwrap();
        assert!(path.exists());

        let loaded = read_png(&path).unwrap();
        assert_eq!(loaded, surface);
    }

    #[test]
    fn test_write_png_scaled() {
        let mut surface = RenderSurface::new(2, 1).unwrap();
        fill_solid(&mut surface, Colour::GREEN);

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        assert_eq!(write_png(&surface, &path, 3).unwrap(), (6, 3));

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (6, 3));
        assert_eq!(img.get_pixel(5, 2).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_scale_zero_treated_as_one() {
        let img = RgbaImage::new(2, 2);
        assert_eq!(scale_image(&img, 0).unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn test_scale_overflow_is_an_error() {
        let img = RgbaImage::new(2, 2);
        let err = scale_image(&img, u32::MAX).unwrap_err();
        assert!(matches!(err, PickerError::Config { .. }));

        let surface = RenderSurface::new(30, 150).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("slider.png");
        assert!(write_png(&surface, &path, u32::MAX).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_read_png_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_png(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, PickerError::Io { .. }));
    }
}
