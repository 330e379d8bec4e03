//! Scan worker service
//!
//! Runs the camera stream and frame decoding on a blocking worker and reports
//! back over an mpsc channel, like the other background services.
//!
//! Camera lifecycle rules:
//! - A [`ScannerHandle`] owns one camera session. Dropping it cancels the
//!   worker, and the worker always stops the stream before it exits.
//! - On a successful decode the worker stops the stream first and only then
//!   emits [`CameraEvent::Decoded`].
//! - Stop failures are logged, never propagated.

use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::camera::{CameraBackend, CameraStream};
use crate::config::Config;
use crate::logic;
use crate::model::CameraDevice;
use crate::qr;

/// Consecutive frame errors tolerated before the session gives up
const MAX_FRAME_ERRORS: u32 = 30;

/// Scan rate and detection area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    pub fps: u32,
    /// Edge of the centred square searched in each frame
    pub box_edge: u32,
    /// Forward frames for a live preview
    pub preview: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            fps: 10,
            box_edge: 250,
            preview: false,
        }
    }
}

impl From<&Config> for ScanSettings {
    fn from(config: &Config) -> Self {
        Self {
            fps: config.scan_fps,
            box_edge: config.scan_box,
            preview: config.camera_preview,
        }
    }
}

/// Commands sent to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCommand {
    SetTorch(bool),
}

/// Events from a camera session
#[derive(Debug, Clone)]
pub enum CameraEvent {
    /// Stream is open and frames are being decoded
    Started,
    /// Preview frame (only when preview is enabled)
    Frame(DynamicImage),
    /// A code was read; the stream is already stopped
    Decoded(String),
    TorchChanged(bool),
    TorchFailed(String),
    /// Session ended with an error; the stream is released
    Failed(String),
    /// Session cancelled; the stream is released
    Stopped,
}

/// Messages delivered to the UI loop
#[derive(Debug, Clone)]
pub enum ScanEvent {
    Camera { session: u64, event: CameraEvent },
    /// One-shot file decode; `request` matches the id from `decode_file`
    ImageFile {
        request: u64,
        path: PathBuf,
        result: Result<String, String>,
    },
}

/// Scoped ownership of a running camera session
pub struct ScannerHandle {
    session: u64,
    camera: CameraDevice,
    cancel: Arc<AtomicBool>,
    commands: mpsc::UnboundedSender<ScanCommand>,
    worker: Option<JoinHandle<()>>,
}

impl ScannerHandle {
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn camera(&self) -> &CameraDevice {
        &self.camera
    }

    pub fn set_torch(&self, on: bool) {
        let _ = self.commands.send(ScanCommand::SetTorch(on));
    }

    /// Cancel and wait until the worker has released the camera
    pub async fn stop(mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            if let Err(e) = worker.await {
                tracing::warn!("Scan worker for session {} panicked: {}", self.session, e);
            }
        }
    }
}

impl Drop for ScannerHandle {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Start a camera session on a blocking worker
pub fn spawn_scanner(
    backend: Arc<dyn CameraBackend>,
    camera: CameraDevice,
    settings: ScanSettings,
    session: u64,
    events: mpsc::UnboundedSender<ScanEvent>,
) -> ScannerHandle {
    let cancel = Arc::new(AtomicBool::new(false));
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let worker_cancel = cancel.clone();
    let worker_camera = camera.clone();
    let worker = tokio::task::spawn_blocking(move || {
        run_session(
            backend.as_ref(),
            &worker_camera,
            settings,
            session,
            &worker_cancel,
            command_rx,
            &events,
        );
    });

    ScannerHandle {
        session,
        camera,
        cancel,
        commands: command_tx,
        worker: Some(worker),
    }
}

fn run_session(
    backend: &dyn CameraBackend,
    camera: &CameraDevice,
    settings: ScanSettings,
    session: u64,
    cancel: &AtomicBool,
    mut commands: mpsc::UnboundedReceiver<ScanCommand>,
    events: &mpsc::UnboundedSender<ScanEvent>,
) {
    let emit = |event: CameraEvent| {
        let _ = events.send(ScanEvent::Camera { session, event });
    };

    let mut stream = match backend.open(camera) {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!("Scanner error: failed to open '{}': {:#}", camera.label, e);
            emit(CameraEvent::Failed(logic::errors::format_error_message(&e)));
            return;
        }
    };

    tracing::debug!("Session {} scanning on '{}'", session, camera.label);
    emit(CameraEvent::Started);

    let interval = Duration::from_millis(logic::ui::frame_interval_ms(settings.fps));
    let mut frame_errors = 0u32;

    while !cancel.load(Ordering::Relaxed) {
        let frame_start = Instant::now();

        while let Ok(command) = commands.try_recv() {
            match command {
                ScanCommand::SetTorch(on) => match stream.set_torch(on) {
                    Ok(()) => emit(CameraEvent::TorchChanged(on)),
                    Err(e) => {
                        tracing::warn!("Flash toggle error: {:#}", e);
                        emit(CameraEvent::TorchFailed(e.to_string()));
                    }
                },
            }
        }

        match stream.next_frame() {
            Ok(frame) => {
                frame_errors = 0;
                if let Some(text) = qr::decode_in_region(&frame, settings.box_edge) {
                    release(&mut *stream, session);
                    emit(CameraEvent::Decoded(text));
                    return;
                }
                if settings.preview {
                    emit(CameraEvent::Frame(frame));
                }
            }
            Err(e) => {
                frame_errors += 1;
                tracing::debug!("Frame error {} in session {}: {:#}", frame_errors, session, e);
                if frame_errors >= MAX_FRAME_ERRORS {
                    release(&mut *stream, session);
                    emit(CameraEvent::Failed(logic::errors::format_error_message(&e)));
                    return;
                }
            }
        }

        if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    release(&mut *stream, session);
    emit(CameraEvent::Stopped);
}

/// Best-effort stop: failures are logged and swallowed
fn release(stream: &mut dyn CameraStream, session: u64) {
    match stream.stop() {
        Ok(()) => tracing::debug!("Session {} released camera", session),
        Err(e) => tracing::warn!("Stop error in session {}: {:#}", session, e),
    }
}

/// Result of asking for a camera session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started(CameraDevice),
    NoCamera,
}

/// Owns the backend and at most one camera session at a time
pub struct ScanController {
    backend: Arc<dyn CameraBackend>,
    settings: ScanSettings,
    events: mpsc::UnboundedSender<ScanEvent>,
    active: Option<ScannerHandle>,
    next_session: u64,
    /// File decode whose result is still wanted
    pending_file: Option<u64>,
    next_request: u64,
}

impl ScanController {
    pub fn new(
        backend: Arc<dyn CameraBackend>,
        settings: ScanSettings,
    ) -> (Self, mpsc::UnboundedReceiver<ScanEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        (
            Self {
                backend,
                settings,
                events: events_tx,
                active: None,
                next_session: 1,
                pending_file: None,
                next_request: 1,
            },
            events_rx,
        )
    }

    /// Enumerate cameras, pick the preferred one and start decoding on it.
    ///
    /// Any running session is stopped and its camera released first, so an
    /// exclusive device is free again before it is reopened.
    pub async fn start(&mut self) -> Result<StartOutcome> {
        self.shutdown().await;

        let backend = self.backend.clone();
        let devices = tokio::task::spawn_blocking(move || backend.list_devices())
            .await
            .context("Camera enumeration task failed")??;

        let Some(camera) = logic::camera::select_preferred_camera(&devices).cloned() else {
            return Ok(StartOutcome::NoCamera);
        };

        let session = self.next_session;
        self.next_session += 1;
        tracing::debug!(
            "Starting session {} on '{}' ({} device(s) found)",
            session,
            camera.label,
            devices.len()
        );

        self.active = Some(spawn_scanner(
            self.backend.clone(),
            camera.clone(),
            self.settings,
            session,
            self.events.clone(),
        ));
        Ok(StartOutcome::Started(camera))
    }

    /// Cancel the running session and wait for the camera to be released
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.active.take() {
            tracing::debug!("Stopping session {}", handle.session());
            handle.stop().await;
        }
    }

    /// A session ended on its own (decoded or failed); forget its handle
    pub fn finish(&mut self, session: u64) {
        if self.is_current(session) {
            self.active = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether an event belongs to the running session (not a stale one)
    pub fn is_current(&self, session: u64) -> bool {
        self.active
            .as_ref()
            .is_some_and(|handle| handle.session() == session)
    }

    pub fn active_camera(&self) -> Option<&CameraDevice> {
        self.active.as_ref().map(ScannerHandle::camera)
    }

    /// Ask the running session to switch the torch. Returns false without a session.
    pub fn set_torch(&self, on: bool) -> bool {
        match &self.active {
            Some(handle) => {
                handle.set_torch(on);
                true
            }
            None => false,
        }
    }

    /// Decode an image file on a blocking worker; the result arrives as
    /// [`ScanEvent::ImageFile`] tagged with the returned request id.
    ///
    /// A newer request supersedes any decode still in flight.
    pub fn decode_file(&mut self, path: PathBuf) -> u64 {
        let request = self.next_request;
        self.next_request += 1;
        self.pending_file = Some(request);

        let events = self.events.clone();
        tokio::task::spawn_blocking(move || {
            let result = qr::decode_file(&path).map_err(|e| {
                tracing::debug!("Image decode failed for {}: {:#}", path.display(), e);
                logic::errors::format_error_message(&e)
            });
            let _ = events.send(ScanEvent::ImageFile {
                request,
                path,
                result,
            });
        });
        request
    }

    /// Claim a finished file decode. Returns false for superseded or
    /// cancelled requests.
    pub fn take_file_result(&mut self, request: u64) -> bool {
        if self.pending_file == Some(request) {
            self.pending_file = None;
            true
        } else {
            false
        }
    }

    /// Forget the pending file decode; its result will be ignored
    pub fn cancel_file_decode(&mut self) {
        if let Some(request) = self.pending_file.take() {
            tracing::debug!("Cancelled image decode {}", request);
        }
    }
}
