// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Application state.
//!
//! [`App`] is the single owner of everything the editor mutates: the skeleton,
//! the active stroke color, the drag session, the recorder, and the drawing
//! surface. The window host feeds it surface-local pointer events and
//! commands; all state changes flow through here, one at a time.

use std::path::PathBuf;
use std::time::Instant;

use crate::color::StrokeColor;
use crate::config::StudioConfig;
use crate::error::Result;
use crate::export::save_snapshot;
use crate::pointer::{DragController, PointerEvent};
use crate::record::{EncodeOutcome, Recorder};
use crate::render::{Canvas, render};
use crate::skeleton::Skeleton;

/// The studio application: model, interaction state, and drawing surface.
pub struct App {
    config: StudioConfig,
    skeleton: Skeleton,
    stroke: StrokeColor,
    drag: DragController,
    recorder: Recorder,
    canvas: Canvas,
    out_dir: PathBuf,
}

impl App {
    /// Create an app with the default pose rendered onto a fresh surface.
    ///
    /// `out_dir` is where `stick.png` and `stick.gif` are written.
    #[must_use]
    pub fn new(config: StudioConfig, out_dir: PathBuf) -> Self {
        let canvas = Canvas::new(config.surface_width, config.surface_height);
        let recorder = Recorder::new(&config);
        let mut app = Self {
            config,
            skeleton: Skeleton::new(),
            stroke: StrokeColor::default(),
            drag: DragController::new(),
            recorder,
            canvas,
            out_dir,
        };
        app.redraw();
        app
    }

    /// The studio configuration.
    #[must_use]
    pub const fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// The current skeleton pose.
    #[must_use]
    pub const fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// The active stroke color.
    #[must_use]
    pub const fn stroke(&self) -> StrokeColor {
        self.stroke
    }

    /// The rendered surface.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Whether an animation capture is active.
    #[must_use]
    pub const fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    /// Number of animation frames captured so far.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.recorder.frame_count()
    }

    fn redraw(&mut self) {
        render(
            &mut self.canvas,
            &self.skeleton,
            self.stroke.color(),
            &self.config,
        );
    }

    /// Feed one pointer event in surface-local coordinates.
    ///
    /// The surface is re-rendered only when the drag actually moved a joint.
    pub fn pointer(&mut self, event: PointerEvent) {
        if self
            .drag
            .handle(event, &mut self.skeleton, self.config.hit_radius)
        {
            self.redraw();
        }
    }

    /// Select the active stroke color and repaint.
    pub fn set_color(&mut self, stroke: StrokeColor) {
        self.stroke = stroke;
        self.redraw();
    }

    /// Write the current pose to `stick.png` in the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails; the model is untouched
    /// either way.
    pub fn snapshot(&self) -> Result<PathBuf> {
        save_snapshot(&self.skeleton, self.stroke.color(), &self.config, &self.out_dir)
    }

    /// Start an animation capture. No-op while already recording.
    pub fn start_recording(&mut self, now: Instant) {
        self.recorder.start(now);
    }

    /// Stop the animation capture and encode `stick.gif` in the background.
    /// No-op while idle.
    pub fn stop_recording(&mut self) {
        self.recorder.stop(&self.out_dir);
    }

    /// Drive the recorder: capture due frames off the current surface and
    /// report a finished background encode, if any.
    pub fn tick(&mut self, now: Instant) -> Option<EncodeOutcome> {
        self.recorder.poll(now, &self.canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::skeleton::JointName;
    use std::time::Duration;

    fn test_app() -> App {
        App::new(StudioConfig::default(), std::env::temp_dir())
    }

    fn pixel(app: &App, x: u32, y: u32) -> image::Rgb<u8> {
        *app.canvas().image().get_pixel(x, y)
    }

    #[test]
    fn test_initial_render_uses_black_stroke() {
        let app = test_app();
        assert_eq!(app.stroke(), StrokeColor::Black);
        // Torso bone midpoint
        assert_eq!(pixel(&app, 150, 210), Color::BLACK.to_rgb());
    }

    #[test]
    fn test_set_color_repaints() {
        let mut app = test_app();
        app.set_color(StrokeColor::Red);
        assert_eq!(app.stroke(), StrokeColor::Red);
        assert_eq!(pixel(&app, 150, 210), StrokeColor::Red.color().to_rgb());
    }

    #[test]
    fn test_drag_updates_model_and_surface() {
        let mut app = test_app();

        app.pointer(PointerEvent::Down { x: 80.0, y: 180.0 });
        app.pointer(PointerEvent::Move { x: 50.0, y: 150.0 });
        app.pointer(PointerEvent::Up);

        assert_eq!(app.skeleton().position(JointName::LeftElbow), (50.0, 150.0));
        assert_eq!(app.skeleton().position(JointName::RightElbow), (210.0, 180.0));
        // The marker follows the joint to its new position
        assert_eq!(pixel(&app, 50, 150), Color::MARKER.to_rgb());
    }

    #[test]
    fn test_recording_samples_current_surface() {
        let mut app = test_app();
        let t0 = Instant::now();

        app.start_recording(t0);
        assert!(app.is_recording());
        app.tick(t0 + Duration::from_millis(250));
        assert_eq!(app.frame_count(), 2);

        app.stop_recording();
        assert!(!app.is_recording());
    }

    #[test]
    fn test_snapshot_reports_fixed_filename() {
        let dir = std::env::temp_dir().join(format!("stick-studio-app-{}", std::process::id()));
        let app = App::new(StudioConfig::default(), dir.clone());

        let path = app.snapshot().unwrap();
        assert_eq!(path.file_name().unwrap(), "stick.png");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
