// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Still export: off-screen rendering and lossless PNG encoding.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::color::Color;
use crate::config::StudioConfig;
use crate::error::Result;
use crate::render::{Canvas, render};
use crate::skeleton::Skeleton;

/// Fixed snapshot filename.
pub const SNAPSHOT_FILENAME: &str = "stick.png";

/// Render the current pose onto a fresh off-screen surface of the configured
/// size. Reads model state only; the skeleton is never mutated.
#[must_use]
pub fn render_pose(skeleton: &Skeleton, stroke: Color, config: &StudioConfig) -> RgbImage {
    let mut canvas = Canvas::new(config.surface_width, config.surface_height);
    render(&mut canvas, skeleton, stroke, config);
    canvas.snapshot()
}

/// Encode an image as lossless PNG bytes.
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(Cursor::new(&mut bytes)).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}

/// Render the current pose and write it to `stick.png` under `dir`.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_snapshot(
    skeleton: &Skeleton,
    stroke: Color,
    config: &StudioConfig,
    dir: &Path,
) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let image = render_pose(skeleton, stroke, config);
    let path = dir.join(SNAPSHOT_FILENAME);
    fs::write(&path, encode_png(&image)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::StrokeColor;
    use crate::skeleton::JointName;

    #[test]
    fn test_encode_png_magic_bytes() {
        let skeleton = Skeleton::new();
        let config = StudioConfig::default();
        let image = render_pose(&skeleton, Color::BLACK, &config);

        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_render_pose_red_scenario() {
        // Default pose, color "red": red bones/head and the fixed marker color
        // at each of the 12 default joint positions
        let skeleton = Skeleton::new();
        let config = StudioConfig::default();
        let red = StrokeColor::Red.color();
        let image = render_pose(&skeleton, red, &config);

        assert_eq!(image.dimensions(), (300, 420));
        // Torso bone midpoint
        assert_eq!(*image.get_pixel(150, 210), red.to_rgb());
        // Head disc
        assert_eq!(*image.get_pixel(150, 10), red.to_rgb());
        for (_, (x, y)) in skeleton.joints() {
            assert_eq!(*image.get_pixel(x as u32, y as u32), Color::MARKER.to_rgb());
        }
    }

    #[test]
    fn test_render_pose_does_not_mutate_skeleton() {
        let skeleton = Skeleton::new();
        let config = StudioConfig::default();
        let before = skeleton.clone();
        let _ = render_pose(&skeleton, Color::BLACK, &config);
        assert_eq!(skeleton, before);
    }

    #[test]
    fn test_save_snapshot_writes_fixed_filename() {
        let dir = std::env::temp_dir().join(format!("stick-studio-export-{}", std::process::id()));
        let mut skeleton = Skeleton::new();
        skeleton.set_position(JointName::LeftElbow, 50.0, 150.0);
        let config = StudioConfig::default();

        let path = save_snapshot(&skeleton, Color::BLACK, &config, &dir).unwrap();
        assert_eq!(path.file_name().unwrap(), SNAPSHOT_FILENAME);
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
