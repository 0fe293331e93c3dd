// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Studio configuration.
//!
//! This module defines the [`StudioConfig`] struct, which controls the drawing
//! surface dimensions, stroke geometry, pointer hit-testing, and the animation
//! capture cadence and encoder settings.

use std::time::Duration;

/// Configuration for the stick-figure studio.
///
/// It uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use stick_studio::StudioConfig;
///
/// let config = StudioConfig::new()
///     .with_frame_interval_ms(100)
///     .with_gif_quality(10)
///     .with_encode_workers(2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Drawing surface width in pixels.
    pub surface_width: u32,
    /// Drawing surface height in pixels.
    pub surface_height: u32,
    /// Stroke width of a bone in pixels.
    pub bone_width: f32,
    /// Radius of the filled head disc in pixels.
    pub head_radius: i32,
    /// Radius of the per-joint marker dot in pixels.
    pub marker_radius: i32,
    /// Pointer hit-test radius around a joint center in pixels.
    pub hit_radius: f32,
    /// Animation sampling interval in milliseconds; also the per-frame display
    /// duration of the exported GIF.
    pub frame_interval_ms: u64,
    /// GIF quantization quality on the NeuQuant speed scale (1 = best, 30 = fastest).
    pub gif_quality: i32,
    /// Number of parallel palette-quantization workers for GIF encoding.
    pub encode_workers: usize,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            surface_width: 300,
            surface_height: 420,
            bone_width: 16.0,
            head_radius: 40,
            marker_radius: 4,
            hit_radius: 10.0,
            frame_interval_ms: 100,
            gif_quality: 10,
            encode_workers: 2,
        }
    }
}

impl StudioConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the drawing surface size in pixels.
    #[must_use]
    pub const fn with_surface_size(mut self, width: u32, height: u32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    /// Set the bone stroke width in pixels.
    #[must_use]
    pub const fn with_bone_width(mut self, width: f32) -> Self {
        self.bone_width = width;
        self
    }

    /// Set the pointer hit-test radius in pixels.
    #[must_use]
    pub const fn with_hit_radius(mut self, radius: f32) -> Self {
        self.hit_radius = radius;
        self
    }

    /// Set the animation sampling interval in milliseconds.
    ///
    /// This is both the capture cadence and the per-frame display duration of
    /// the exported animation.
    #[must_use]
    pub const fn with_frame_interval_ms(mut self, millis: u64) -> Self {
        self.frame_interval_ms = millis;
        self
    }

    /// Set the GIF quantization quality (1 = best, 30 = fastest).
    #[must_use]
    pub const fn with_gif_quality(mut self, quality: i32) -> Self {
        self.gif_quality = quality;
        self
    }

    /// Set the number of parallel GIF quantization workers.
    #[must_use]
    pub const fn with_encode_workers(mut self, workers: usize) -> Self {
        self.encode_workers = workers;
        self
    }

    /// Sampling interval as a [`Duration`].
    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StudioConfig::default();
        assert_eq!(config.surface_width, 300);
        assert_eq!(config.surface_height, 420);
        assert!((config.bone_width - 16.0).abs() < f32::EPSILON);
        assert_eq!(config.head_radius, 40);
        assert_eq!(config.marker_radius, 4);
        assert!((config.hit_radius - 10.0).abs() < f32::EPSILON);
        assert_eq!(config.frame_interval(), Duration::from_millis(100));
        assert_eq!(config.gif_quality, 10);
        assert_eq!(config.encode_workers, 2);
    }

    #[test]
    fn test_config_builder() {
        let config = StudioConfig::new()
            .with_surface_size(640, 480)
            .with_bone_width(8.0)
            .with_hit_radius(15.0)
            .with_frame_interval_ms(50)
            .with_gif_quality(1)
            .with_encode_workers(4);

        assert_eq!(config.surface_width, 640);
        assert_eq!(config.surface_height, 480);
        assert!((config.bone_width - 8.0).abs() < f32::EPSILON);
        assert!((config.hit_radius - 15.0).abs() < f32::EPSILON);
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
        assert_eq!(config.gif_quality, 1);
        assert_eq!(config.encode_workers, 4);
    }
}
