//! Scanner Model
//!
//! Invariant: `result.is_some()` exactly when `phase == ScanPhase::Result`.
//! The camera runs only while no result is shown.

use super::types::{CameraDevice, ScanPhase, ScannerAction};

#[derive(Clone, Debug, Default)]
pub struct ScannerModel {
    pub phase: ScanPhase,

    /// Decoded payload on screen
    pub result: Option<String>,

    /// Device the active stream was opened on
    pub camera: Option<CameraDevice>,

    /// Torch state as last confirmed by the camera
    pub flash_on: bool,

    pub selected_action: ScannerAction,
}

impl ScannerModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a camera stream should be running right now
    pub fn wants_camera(&self) -> bool {
        self.result.is_none()
    }

    /// An image can be picked only while no result is on screen
    pub fn can_upload(&self) -> bool {
        self.result.is_none()
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    /// Camera stream started on `camera`
    pub fn begin_scanning(&mut self, camera: CameraDevice) {
        self.phase = ScanPhase::Scanning;
        self.camera = Some(camera);
        self.flash_on = false;
    }

    /// Camera stream stopped without a result (no device, failure, teardown)
    pub fn camera_stopped(&mut self) {
        if self.phase == ScanPhase::Scanning {
            self.phase = ScanPhase::Idle;
        }
        self.camera = None;
        self.flash_on = false;
    }

    /// Show a decoded payload; the camera must already be released
    pub fn show_result(&mut self, payload: String) {
        self.camera = None;
        self.flash_on = false;
        self.result = Some(payload);
        self.phase = ScanPhase::Result;
        self.selected_action = ScannerAction::default();
    }

    /// Drop the result ahead of a rescan
    pub fn clear_result(&mut self) {
        self.result = None;
        self.phase = ScanPhase::Idle;
        self.selected_action = ScannerAction::default();
    }

    /// Forget everything (navigation away)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cam() -> CameraDevice {
        CameraDevice {
            id: "0".to_string(),
            label: "Back Camera".to_string(),
        }
    }

    #[test]
    fn test_result_stops_camera_state() {
        let mut model = ScannerModel::new();
        model.begin_scanning(cam());
        model.flash_on = true;
        model.show_result("hello".to_string());

        assert_eq!(model.phase, ScanPhase::Result);
        assert!(model.camera.is_none());
        assert!(!model.flash_on);
        assert!(!model.wants_camera());
        assert!(!model.can_upload());
    }

    #[test]
    fn test_clear_result_wants_camera_again() {
        let mut model = ScannerModel::new();
        model.show_result("hello".to_string());
        model.clear_result();

        assert!(model.result.is_none());
        assert_eq!(model.phase, ScanPhase::Idle);
        assert!(model.wants_camera());
        assert!(model.can_upload());
    }

    #[test]
    fn test_camera_stopped_keeps_result() {
        let mut model = ScannerModel::new();
        model.show_result("hello".to_string());
        model.camera_stopped();
        assert_eq!(model.phase, ScanPhase::Result);
        assert_eq!(model.result.as_deref(), Some("hello"));
    }
}
