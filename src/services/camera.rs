//! Camera capture backends
//!
//! The scanner only needs three things from a camera: enumerate devices,
//! open a stream, and pull frames. Backends implement [`CameraBackend`];
//! the stream they return is used from a single worker thread and does not
//! need to be `Send`.

use anyhow::Result;
use image::DynamicImage;
use std::sync::Arc;

use crate::model::CameraDevice;

/// An open video stream
pub trait CameraStream {
    /// Block until the next frame is available
    fn next_frame(&mut self) -> Result<DynamicImage>;

    /// Switch the torch; errors when the device has none
    fn set_torch(&mut self, on: bool) -> Result<()>;

    /// Stop capturing and release the device
    fn stop(&mut self) -> Result<()>;
}

/// Source of camera devices
pub trait CameraBackend: Send + Sync {
    fn list_devices(&self) -> Result<Vec<CameraDevice>>;

    /// Open a stream on `device`. Called from the scan worker thread.
    fn open(&self, device: &CameraDevice) -> Result<Box<dyn CameraStream>>;
}

/// Backend used when the binary is built without camera support
pub struct NoCameraBackend;

impl CameraBackend for NoCameraBackend {
    fn list_devices(&self) -> Result<Vec<CameraDevice>> {
        tracing::debug!("Built without the `camera` feature, no devices to report");
        Ok(Vec::new())
    }

    fn open(&self, device: &CameraDevice) -> Result<Box<dyn CameraStream>> {
        anyhow::bail!("Camera support not compiled in (device {})", device.id)
    }
}

/// The platform's camera backend
pub fn default_backend() -> Arc<dyn CameraBackend> {
    #[cfg(feature = "camera")]
    {
        Arc::new(native::NativeCameraBackend)
    }

    #[cfg(not(feature = "camera"))]
    {
        Arc::new(NoCameraBackend)
    }
}

#[cfg(feature = "camera")]
pub use native::NativeCameraBackend;

#[cfg(feature = "camera")]
mod native {
    use super::{CameraBackend, CameraStream};
    use crate::model::CameraDevice;
    use anyhow::{bail, Context, Result};
    use image::{DynamicImage, RgbImage};
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
    use nokhwa::Camera;

    /// Camera access through nokhwa (V4L2, AVFoundation, Media Foundation)
    pub struct NativeCameraBackend;

    impl CameraBackend for NativeCameraBackend {
        fn list_devices(&self) -> Result<Vec<CameraDevice>> {
            let cameras = nokhwa::query(ApiBackend::Auto).context("Failed to enumerate cameras")?;
            Ok(cameras
                .into_iter()
                .map(|info| CameraDevice {
                    id: info.index().to_string(),
                    label: info.human_name(),
                })
                .collect())
        }

        fn open(&self, device: &CameraDevice) -> Result<Box<dyn CameraStream>> {
            let index = match device.id.parse::<u32>() {
                Ok(idx) => CameraIndex::Index(idx),
                Err(_) => CameraIndex::String(device.id.clone()),
            };
            let format =
                RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

            let mut camera = Camera::new(index, format)
                .with_context(|| format!("Failed to open camera '{}'", device.label))?;
            camera
                .open_stream()
                .with_context(|| format!("Failed to start stream on '{}'", device.label))?;

            Ok(Box::new(NativeStream { camera }))
        }
    }

    struct NativeStream {
        camera: Camera,
    }

    impl CameraStream for NativeStream {
        fn next_frame(&mut self) -> Result<DynamicImage> {
            let buffer = self.camera.frame().context("Failed to capture frame")?;
            let decoded = buffer
                .decode_image::<RgbFormat>()
                .context("Failed to decode frame")?;
            let (width, height) = (decoded.width(), decoded.height());
            // Rebuild with our own image types so nokhwa's image version does not leak
            let rgb = RgbImage::from_raw(width, height, decoded.into_raw())
                .context("Camera frame has unexpected size")?;
            Ok(DynamicImage::ImageRgb8(rgb))
        }

        fn set_torch(&mut self, _on: bool) -> Result<()> {
            bail!("Torch control is not available through the native camera API")
        }

        fn stop(&mut self) -> Result<()> {
            self.camera
                .stop_stream()
                .context("Failed to stop camera stream")
        }
    }
}
