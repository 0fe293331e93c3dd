// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Animation capture: fixed-cadence frame sampling and background GIF encoding.
//!
//! The [`Recorder`] is a two-state machine (idle or recording) driven
//! cooperatively by the host event loop: [`Recorder::poll`] captures a
//! defensive copy of the surface for every elapsed sampling interval. Nothing
//! runs on a timer thread, so a stopped recorder can never capture a late
//! frame. The only background work is the GIF encode spawned by
//! [`Recorder::stop`], which is cancellable through a shared flag so that
//! restarting a capture never races a stale encode for the output file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use image::RgbImage;

use crate::config::StudioConfig;
use crate::error::{Result, StudioError};
use crate::render::Canvas;

/// Fixed animation filename.
pub const ANIMATION_FILENAME: &str = "stick.gif";

/// Outcome of a finished background encode, surfaced through [`Recorder::poll`].
#[derive(Debug)]
pub enum EncodeOutcome {
    /// The animation was written to the given path.
    Finished(PathBuf),
    /// Encoding failed; the model and editor stay fully usable.
    Failed(StudioError),
}

/// Handle to an in-flight background encode.
struct EncodeJob {
    done: Receiver<EncodeOutcome>,
    cancel: Arc<AtomicBool>,
}

/// Two-state animation recorder: idle, or sampling the surface at a fixed cadence.
pub struct Recorder {
    recording: bool,
    frames: Vec<RgbImage>,
    interval: Duration,
    next_tick: Option<Instant>,
    job: Option<EncodeJob>,
    quality: i32,
    workers: usize,
}

impl Recorder {
    /// Create an idle recorder with the configured cadence and encoder settings.
    #[must_use]
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            recording: false,
            frames: Vec::new(),
            interval: config.frame_interval(),
            next_tick: None,
            job: None,
            quality: config.gif_quality,
            workers: config.encode_workers,
        }
    }

    /// Whether a capture is active.
    #[must_use]
    pub const fn is_recording(&self) -> bool {
        self.recording
    }

    /// Number of frames captured so far.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Start a new capture. No-op while already recording.
    ///
    /// Any encode still in flight is aborted before the frame buffer is
    /// cleared, so a restart never competes with a stale encode for the
    /// output file.
    pub fn start(&mut self, now: Instant) {
        if self.recording {
            return;
        }
        if let Some(job) = self.job.take() {
            job.cancel.store(true, Ordering::Relaxed);
        }
        self.frames.clear();
        self.recording = true;
        self.next_tick = Some(now + self.interval);
    }

    /// Stop capturing and hand the frames to a background encode. No-op while idle.
    ///
    /// With no captured frames the capture is discarded and no file is written.
    pub fn stop(&mut self, out_dir: &Path) {
        if !self.recording {
            return;
        }
        self.recording = false;
        self.next_tick = None;
        let frames = std::mem::take(&mut self.frames);
        if frames.is_empty() {
            return;
        }
        self.job = Some(spawn_encode(
            frames,
            out_dir.join(ANIMATION_FILENAME),
            self.interval,
            self.quality,
            self.workers,
        ));
    }

    /// Drive the sampler.
    ///
    /// Captures a defensive copy of the surface for every sampling interval
    /// elapsed since the last tick, and reports the outcome of a background
    /// encode once it completes. The recording flag is checked before each
    /// tick is armed, so no capture happens after [`Recorder::stop`].
    pub fn poll(&mut self, now: Instant, canvas: &Canvas) -> Option<EncodeOutcome> {
        while self.recording {
            match self.next_tick {
                Some(due) if now >= due => {
                    self.frames.push(canvas.snapshot());
                    self.next_tick = Some(due + self.interval);
                }
                _ => break,
            }
        }
        self.poll_job()
    }

    fn poll_job(&mut self) -> Option<EncodeOutcome> {
        let job = self.job.as_ref()?;
        match job.done.try_recv() {
            Ok(outcome) => {
                self.job = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.job = None;
                Some(EncodeOutcome::Failed(StudioError::EncodeError(
                    "encode worker exited unexpectedly".to_string(),
                )))
            }
        }
    }
}

/// Spawn the background encode for a finished capture.
fn spawn_encode(
    frames: Vec<RgbImage>,
    path: PathBuf,
    frame_delay: Duration,
    quality: i32,
    workers: usize,
) -> EncodeJob {
    let cancel = Arc::new(AtomicBool::new(false));
    let token = Arc::clone(&cancel);
    let (done_tx, done_rx) = mpsc::channel();

    thread::spawn(move || {
        let outcome = match encode_gif(&frames, frame_delay, quality, workers, &token) {
            Ok(Some(bytes)) => write_animation(&path, &bytes)
                .map_or_else(EncodeOutcome::Failed, |()| EncodeOutcome::Finished(path)),
            // Aborted: a newer capture owns the output file now
            Ok(None) => return,
            Err(e) => EncodeOutcome::Failed(e),
        };
        // The receiver may be gone if the recorder was dropped
        let _ = done_tx.send(outcome);
    });

    EncodeJob {
        done: done_rx,
        cancel,
    }
}

fn write_animation(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Encode captured frames as an animated GIF.
///
/// Palette quantization dominates encode time, so frames are fanned out to
/// `workers` quantizer threads over a channel and reassembled in capture order
/// by the writer. The cancellation flag is checked between frames on both
/// sides; a cancelled encode returns `Ok(None)` and produces no output.
///
/// # Errors
///
/// Returns an error if there are no frames or the GIF stream cannot be written.
pub fn encode_gif(
    frames: &[RgbImage],
    frame_delay: Duration,
    quality: i32,
    workers: usize,
    cancel: &AtomicBool,
) -> Result<Option<Vec<u8>>> {
    if frames.is_empty() {
        return Err(StudioError::EncodeError("no frames to encode".to_string()));
    }

    let (width, height) = frames[0].dimensions();
    let width = width as u16;
    let height = height as u16;
    // GIF frame delays are in centiseconds
    let delay = (frame_delay.as_millis() / 10) as u16;
    let speed = quality.clamp(1, 30);

    let (frame_tx, frame_rx) = mpsc::channel::<(usize, &RgbImage)>();
    let frame_rx = Arc::new(Mutex::new(frame_rx));
    let (quant_tx, quant_rx) = mpsc::channel::<(usize, gif::Frame<'static>)>();

    let mut quantized: Vec<(usize, gif::Frame<'static>)> = thread::scope(|s| {
        for _ in 0..workers.max(1) {
            let rx = Arc::clone(&frame_rx);
            let tx = quant_tx.clone();
            s.spawn(move || {
                loop {
                    if cancel.load(Ordering::Relaxed) {
                        return;
                    }
                    let message = match rx.lock() {
                        Ok(guard) => guard.recv(),
                        Err(_) => return,
                    };
                    let Ok((index, image)) = message else { return };
                    let mut frame = gif::Frame::from_rgb_speed(width, height, image.as_raw(), speed);
                    frame.delay = delay;
                    if tx.send((index, frame)).is_err() {
                        return;
                    }
                }
            });
        }
        drop(quant_tx);

        for (index, image) in frames.iter().enumerate() {
            if frame_tx.send((index, image)).is_err() {
                break;
            }
        }
        drop(frame_tx);

        quant_rx.iter().collect()
    });

    if cancel.load(Ordering::Relaxed) {
        return Ok(None);
    }
    if quantized.len() != frames.len() {
        return Err(StudioError::EncodeError(
            "quantizer worker failed".to_string(),
        ));
    }
    quantized.sort_by_key(|&(index, _)| index);

    let mut bytes = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut bytes, width, height, &[])?;
        encoder.set_repeat(gif::Repeat::Infinite)?;
        for (_, frame) in &quantized {
            if cancel.load(Ordering::Relaxed) {
                return Ok(None);
            }
            encoder.write_frame(frame)?;
        }
    }
    Ok(Some(bytes))
}
