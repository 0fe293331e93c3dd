// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Rasterizer for the stick figure.
//!
//! Bones are drawn as thick butt-capped strokes, the head as a large filled
//! disc in the stroke color, and every joint gets a small fixed-color marker
//! dot on top.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;

use crate::color::Color;
use crate::config::StudioConfig;
use crate::skeleton::{JointName, Skeleton};

/// Raster drawing surface backed by an RGB pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a surface of the given size, filled with the background color.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Color::WHITE.to_rgb()),
        }
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill the whole surface with the background color, discarding all prior strokes.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Color::WHITE.to_rgb();
        }
    }

    /// The current pixels.
    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Defensive copy of the current pixels.
    #[must_use]
    pub fn snapshot(&self) -> RgbImage {
        self.image.clone()
    }
}

/// Draw the full figure onto `canvas`.
///
/// The surface is fully cleared first, so repeated calls with identical
/// skeleton and color state produce byte-identical pixels.
pub fn render(canvas: &mut Canvas, skeleton: &Skeleton, stroke: Color, config: &StudioConfig) {
    canvas.clear();

    for (from, to) in skeleton.bones() {
        draw_thick_line(&mut canvas.image, from, to, config.bone_width, stroke.to_rgb());
    }

    let (hx, hy) = skeleton.position(JointName::Head);
    draw_filled_circle_mut(
        &mut canvas.image,
        (hx.round() as i32, hy.round() as i32),
        config.head_radius,
        stroke.to_rgb(),
    );

    for (_, (x, y)) in skeleton.joints() {
        draw_filled_circle_mut(
            &mut canvas.image,
            (x.round() as i32, y.round() as i32),
            config.marker_radius,
            Color::MARKER.to_rgb(),
        );
    }
}

/// Draw a line segment as a filled quad of the given stroke width.
fn draw_thick_line(
    image: &mut RgbImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgb<u8>,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if length < f32::EPSILON {
        // Butt-capped stroke: a zero-length bone draws nothing
        return;
    }

    // Perpendicular half-width offset
    let nx = -dy / length * width / 2.0;
    let ny = dx / length * width / 2.0;

    let quad = [
        Point::new((from.0 + nx).round() as i32, (from.1 + ny).round() as i32),
        Point::new((to.0 + nx).round() as i32, (to.1 + ny).round() as i32),
        Point::new((to.0 - nx).round() as i32, (to.1 - ny).round() as i32),
        Point::new((from.0 - nx).round() as i32, (from.1 - ny).round() as i32),
    ];
    // draw_polygon_mut rejects a closed point list
    if quad[0] == quad[3] {
        return;
    }
    draw_polygon_mut(image, &quad, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(canvas: &Canvas, x: f32, y: f32) -> Rgb<u8> {
        *canvas.image().get_pixel(x as u32, y as u32)
    }

    #[test]
    fn test_render_is_idempotent() {
        let skeleton = Skeleton::new();
        let config = StudioConfig::default();
        let mut canvas = Canvas::new(config.surface_width, config.surface_height);
        let stroke = Color(0, 128, 0);

        render(&mut canvas, &skeleton, stroke, &config);
        let first = canvas.snapshot();
        render(&mut canvas, &skeleton, stroke, &config);

        assert_eq!(first.as_raw(), canvas.image().as_raw());
    }

    #[test]
    fn test_render_clears_previous_strokes() {
        let mut skeleton = Skeleton::new();
        let config = StudioConfig::default();
        let mut canvas = Canvas::new(config.surface_width, config.surface_height);

        render(&mut canvas, &skeleton, Color::BLACK, &config);
        // The default waist sits on the torso stroke
        assert_eq!(pixel(&canvas, 150.0, 200.0), Color::BLACK.to_rgb());

        // Fold the whole lower body out of the torso column and re-render;
        // the old torso pixels must be gone
        for name in [
            JointName::Neck,
            JointName::Chest,
            JointName::Waist,
            JointName::LeftKnee,
            JointName::RightKnee,
            JointName::LeftFoot,
            JointName::RightFoot,
        ] {
            skeleton.set_position(name, 40.0, 40.0);
        }
        render(&mut canvas, &skeleton, Color::BLACK, &config);
        assert_eq!(pixel(&canvas, 150.0, 200.0), Color::WHITE.to_rgb());
    }

    #[test]
    fn test_render_draws_bones_head_and_markers() {
        let skeleton = Skeleton::new();
        let config = StudioConfig::default();
        let mut canvas = Canvas::new(config.surface_width, config.surface_height);
        let stroke = Color(0, 0, 255);

        render(&mut canvas, &skeleton, stroke, &config);

        // Bone midpoint between chest (150,180) and waist (150,240)
        assert_eq!(pixel(&canvas, 150.0, 210.0), stroke.to_rgb());
        // Head disc extends well past the bone width
        assert_eq!(pixel(&canvas, 150.0 + 30.0, 40.0), stroke.to_rgb());
        // Marker dot on every joint center, in the fixed marker color
        for (_, (x, y)) in skeleton.joints() {
            assert_eq!(pixel(&canvas, x, y), Color::MARKER.to_rgb());
        }
        // Background stays untouched in the corners
        assert_eq!(pixel(&canvas, 1.0, 418.0), Color::WHITE.to_rgb());
    }

    #[test]
    fn test_zero_length_bone_is_skipped() {
        let mut skeleton = Skeleton::new();
        // Collapse the left forearm onto the shoulder
        let (x, y) = skeleton.position(JointName::LeftShoulder);
        skeleton.set_position(JointName::LeftElbow, x, y);

        let config = StudioConfig::default();
        let mut canvas = Canvas::new(config.surface_width, config.surface_height);
        // Must not panic
        render(&mut canvas, &skeleton, Color::BLACK, &config);
    }

    #[test]
    fn test_off_surface_joint_does_not_panic() {
        let mut skeleton = Skeleton::new();
        skeleton.set_position(JointName::RightElbow, -120.0, 900.0);

        let config = StudioConfig::default();
        let mut canvas = Canvas::new(config.surface_width, config.surface_height);
        render(&mut canvas, &skeleton, Color::BLACK, &config);
    }
}
