// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Stick Studio
//!
//! An editable 2D stick-figure poser written in Rust. A fixed 12-joint figure
//! is rendered onto a raster surface; joints are dragged with the mouse to
//! pose it, and the result can be exported as a PNG still (`stick.png`) or
//! captured at a fixed cadence into an animated GIF (`stick.gif`).
//!
//! ## Quick Start (Library)
//!
//! ```rust
//! use stick_studio::{JointName, Skeleton, StrokeColor, StudioConfig};
//! use stick_studio::export::render_pose;
//!
//! let mut skeleton = Skeleton::new();
//! skeleton.set_position(JointName::LeftElbow, 50.0, 150.0);
//!
//! let config = StudioConfig::new();
//! let image = render_pose(&skeleton, StrokeColor::Red.color(), &config);
//! assert_eq!(image.dimensions(), (300, 420));
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Open the interactive editor
//! stick-studio edit
//!
//! # Write exports somewhere else and slow the capture cadence
//! stick-studio edit --output renders --interval 200
//!
//! # Render the default pose to stick.png without a window
//! stick-studio snapshot --color red
//! ```
//!
//! In the editor window, keys `1`-`7` select the stroke color (or click the
//! toolbar swatches), `S` saves a snapshot, `R` starts and `E` stops an
//! animation capture, and `Esc` quits.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`skeleton`] | Joint names, bone topology, and the mutable [`Skeleton`] pose |
//! | [`render`] | [`Canvas`](render::Canvas) surface and the stick-figure rasterizer |
//! | [`pointer`] | Pointer events, coordinate translation, and the drag state machine |
//! | [`export`] | Off-screen rendering and PNG snapshot export |
//! | [`record`] | Fixed-cadence frame capture and background GIF encoding |
//! | [`app`] | Application state owning model, color, drag, and recorder |
//! | [`config`] | [`StudioConfig`] for surface, stroke, and encoder settings |
//! | [`error`] | Error types ([`StudioError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Interactive editor window (default) |

// Modules
pub mod app;
pub mod cli;
pub mod color;
pub mod config;
#[cfg(feature = "visualize")]
pub mod editor;
pub mod error;
pub mod export;
pub mod pointer;
pub mod record;
pub mod render;
pub mod skeleton;

// Re-export main types for convenience
pub use app::App;
pub use color::{Color, StrokeColor};
pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use pointer::{DragController, PointerEvent};
pub use record::{EncodeOutcome, Recorder};
pub use render::Canvas;
pub use skeleton::{BONES, JointName, Skeleton};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // Version should be semver format like "0.1.0"
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "stick-studio");
    }
}
