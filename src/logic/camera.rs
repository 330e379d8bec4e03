//! Camera selection heuristics

use crate::model::CameraDevice;

/// Whether a device label looks like a rear-facing camera
pub fn is_rear_facing(label: &str) -> bool {
    let label = label.to_lowercase();
    label.contains("back") || label.contains("rear")
}

/// Prefer a rear-facing camera, otherwise the first device reported
pub fn select_preferred_camera(devices: &[CameraDevice]) -> Option<&CameraDevice> {
    devices
        .iter()
        .find(|device| is_rear_facing(&device.label))
        .or_else(|| devices.first())
}
