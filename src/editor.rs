// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Editor window: hosts the drawing surface, the color toolbar, and the
//! snapshot/record commands.
//!
//! All interaction runs on this single loop: mouse state is polled and turned
//! into pointer-down/move/up edges, key presses trigger commands, and the
//! recorder is driven once per iteration. Window coordinates are translated
//! into surface-local coordinates by subtracting the toolbar offset.

use std::time::{Duration, Instant};

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::app::App;
use crate::color::{Color, StrokeColor};
use crate::error::{Result, StudioError};
use crate::pointer::{PointerEvent, surface_local};
use crate::record::EncodeOutcome;
use crate::{error, info, success};

/// Toolbar height in pixels; the drawing surface starts below it.
const TOOLBAR_HEIGHT: usize = 40;
/// Color swatch layout.
const SWATCH_WIDTH: usize = 32;
const SWATCH_HEIGHT: usize = 28;
const SWATCH_GAP: usize = 8;
const SWATCH_ORIGIN: (usize, usize) = (8, 6);
/// Toolbar background.
const TOOLBAR_COLOR: Color = Color(220, 220, 220);

/// Open the editor window and run the interactive loop until it closes.
///
/// # Errors
///
/// Returns an error if the window cannot be created or updated. Export and
/// encode failures are logged and do not stop the loop.
pub fn run(mut app: App) -> Result<()> {
    let width = app.config().surface_width as usize;
    let height = app.config().surface_height as usize + TOOLBAR_HEIGHT;

    let mut window = Window::new("Stick Studio", width, height, WindowOptions::default())
        .map_err(|e| StudioError::VisualizerError(format!("Failed to create window: {e}")))?;

    // Limit update rate
    window.limit_update_rate(Some(Duration::from_micros(16600)));

    let mut buffer = vec![0u32; width * height];
    let mut mouse_was_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();

        handle_mouse(&mut app, &window, &mut mouse_was_down);
        handle_keys(&mut app, &window, now);

        if let Some(outcome) = app.tick(now) {
            match outcome {
                EncodeOutcome::Finished(path) => {
                    success!("Animation saved to {}", path.display());
                }
                EncodeOutcome::Failed(e) => {
                    error!("Animation encoding failed: {e}");
                }
            }
        }

        compose(&mut buffer, &app, width);
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| StudioError::VisualizerError(format!("Failed to update window: {e}")))?;
    }

    Ok(())
}

/// Turn polled mouse state into pointer edges for the app.
fn handle_mouse(app: &mut App, window: &Window, mouse_was_down: &mut bool) {
    let mouse_down = window.get_mouse_down(MouseButton::Left);
    let origin = (0.0, TOOLBAR_HEIGHT as f32);

    if mouse_down && !*mouse_was_down {
        if let Some((wx, wy)) = window.get_mouse_pos(MouseMode::Discard) {
            if wy < TOOLBAR_HEIGHT as f32 {
                if let Some(stroke) = swatch_at(wx, wy) {
                    app.set_color(stroke);
                }
            } else {
                let (x, y) = surface_local(wx, wy, origin);
                app.pointer(PointerEvent::Down { x, y });
            }
        }
    } else if mouse_down {
        // Keep dragging even when the pointer leaves the surface
        if let Some((wx, wy)) = window.get_mouse_pos(MouseMode::Pass) {
            let (x, y) = surface_local(wx, wy, origin);
            app.pointer(PointerEvent::Move { x, y });
        }
    } else if *mouse_was_down {
        // Release anywhere ends the drag
        app.pointer(PointerEvent::Up);
    }

    *mouse_was_down = mouse_down;
}

/// Key commands: 1-7 select colors, S snapshots, R starts and E stops recording.
fn handle_keys(app: &mut App, window: &Window, now: Instant) {
    const COLOR_KEYS: [(Key, StrokeColor); 7] = [
        (Key::Key1, StrokeColor::Black),
        (Key::Key2, StrokeColor::Grey),
        (Key::Key3, StrokeColor::Orange),
        (Key::Key4, StrokeColor::Green),
        (Key::Key5, StrokeColor::Red),
        (Key::Key6, StrokeColor::Blue),
        (Key::Key7, StrokeColor::Purple),
    ];

    for (key, stroke) in COLOR_KEYS {
        if window.is_key_pressed(key, KeyRepeat::No) {
            app.set_color(stroke);
        }
    }

    if window.is_key_pressed(Key::S, KeyRepeat::No) {
        match app.snapshot() {
            Ok(path) => {
                success!("Snapshot saved to {}", path.display());
            }
            Err(e) => {
                error!("Snapshot failed: {e}");
            }
        }
    }

    if window.is_key_pressed(Key::R, KeyRepeat::No) && !app.is_recording() {
        app.start_recording(now);
        info!("Recording started");
    }

    if window.is_key_pressed(Key::E, KeyRepeat::No) && app.is_recording() {
        let frames = app.frame_count();
        app.stop_recording();
        info!("Recording stopped after {frames} frames, encoding...");
    }
}

/// The palette entry under a toolbar click, if any.
fn swatch_at(x: f32, y: f32) -> Option<StrokeColor> {
    let (x0, y0) = SWATCH_ORIGIN;
    if y < y0 as f32 || y >= (y0 + SWATCH_HEIGHT) as f32 {
        return None;
    }
    for (i, stroke) in StrokeColor::ALL.into_iter().enumerate() {
        let left = (x0 + i * (SWATCH_WIDTH + SWATCH_GAP)) as f32;
        if x >= left && x < left + SWATCH_WIDTH as f32 {
            return Some(stroke);
        }
    }
    None
}

/// Pack the toolbar and the rendered surface into the 0RGB window buffer.
fn compose(buffer: &mut [u32], app: &App, width: usize) {
    let toolbar = pack(TOOLBAR_COLOR);
    for pixel in buffer[..width * TOOLBAR_HEIGHT].iter_mut() {
        *pixel = toolbar;
    }

    let (x0, y0) = SWATCH_ORIGIN;
    for (i, stroke) in StrokeColor::ALL.into_iter().enumerate() {
        let left = x0 + i * (SWATCH_WIDTH + SWATCH_GAP);
        let selected = stroke == app.stroke();
        fill_rect(
            buffer,
            width,
            left,
            y0,
            SWATCH_WIDTH,
            SWATCH_HEIGHT,
            pack(stroke.color()),
        );
        if selected {
            outline_rect(
                buffer,
                width,
                left - 2,
                y0 - 2,
                SWATCH_WIDTH + 4,
                SWATCH_HEIGHT + 4,
                pack(Color::WHITE),
            );
        }
    }

    // Recording indicator dot at the right edge of the toolbar
    if app.is_recording() {
        let cx = width - 14;
        let cy = TOOLBAR_HEIGHT / 2;
        for dy in 0..12usize {
            for dx in 0..12usize {
                let (rx, ry) = (dx as i32 - 6, dy as i32 - 6);
                if rx * rx + ry * ry <= 36 {
                    buffer[(cy + dy - 6) * width + cx + dx - 6] = pack(Color::MARKER);
                }
            }
        }
    }

    // Surface pixels below the toolbar, packed as 0x00RRGGBB
    for (i, pixel) in app.canvas().image().pixels().enumerate() {
        let r = u32::from(pixel[0]);
        let g = u32::from(pixel[1]);
        let b = u32::from(pixel[2]);
        buffer[width * TOOLBAR_HEIGHT + i] = (r << 16) | (g << 8) | b;
    }
}

const fn pack(color: Color) -> u32 {
    ((color.0 as u32) << 16) | ((color.1 as u32) << 8) | (color.2 as u32)
}

fn fill_rect(buffer: &mut [u32], width: usize, x: usize, y: usize, w: usize, h: usize, value: u32) {
    for row in y..y + h {
        for col in x..x + w {
            buffer[row * width + col] = value;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn outline_rect(
    buffer: &mut [u32],
    width: usize,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    value: u32,
) {
    for col in x..x + w {
        buffer[y * width + col] = value;
        buffer[(y + h - 1) * width + col] = value;
    }
    for row in y..y + h {
        buffer[row * width + x] = value;
        buffer[row * width + x + w - 1] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_hit_geometry() {
        // First swatch spans x in [8, 40) at toolbar height
        assert_eq!(swatch_at(10.0, 10.0), Some(StrokeColor::Black));
        assert_eq!(swatch_at(39.0, 10.0), Some(StrokeColor::Black));
        // Gap between swatches misses
        assert_eq!(swatch_at(42.0, 10.0), None);
        // Second swatch
        assert_eq!(swatch_at(50.0, 10.0), Some(StrokeColor::Grey));
        // Last swatch
        let left = (SWATCH_ORIGIN.0 + 6 * (SWATCH_WIDTH + SWATCH_GAP)) as f32;
        assert_eq!(swatch_at(left + 1.0, 10.0), Some(StrokeColor::Purple));
        // Outside the swatch row vertically
        assert_eq!(swatch_at(10.0, 2.0), None);
    }

    #[test]
    fn test_pack_is_0rgb() {
        assert_eq!(pack(Color(0xAB, 0xCD, 0xEF)), 0x00AB_CDEF);
        assert_eq!(pack(Color::WHITE), 0x00FF_FFFF);
    }
}
