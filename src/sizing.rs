//! Scaling calculations for fitting frames into a viewport.

/// Logical display bounds that frames are fitted into.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Available width in pixels
    pub width: f64,
    /// Available height in pixels
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given bounds.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Calculate the scale that fits a frame inside this viewport.
    ///
    /// The result never exceeds 1.0: small frames are shown at native size
    /// rather than upscaled.
    ///
    /// ## Arguments
    ///
    /// * `frame_width` - Native frame width in pixels (non-zero)
    /// * `frame_height` - Native frame height in pixels (non-zero)
    ///
    /// ## Example
    ///
    /// ```rust
    /// use gif_stepper_core::Viewport;
    ///
    /// let viewport = Viewport::new(400.0, 300.0);
    /// assert_eq!(viewport.fit_factor(800, 600), 0.5);
    /// assert_eq!(viewport.fit_factor(100, 100), 1.0);
    /// ```
    pub fn fit_factor(&self, frame_width: u32, frame_height: u32) -> f64 {
        let width_ratio = self.width / frame_width as f64;
        let height_ratio = self.height / frame_height as f64;
        width_ratio.min(height_ratio).min(1.0)
    }
}

/// Calculate the on-screen dimensions of a frame at the given scale.
///
/// Each dimension is rounded to the nearest pixel and is at least 1, so
/// extreme zoom-out never yields an empty bitmap.
///
/// ## Returns
///
/// A tuple of (width, height) in pixels.
pub fn target_dimensions(frame_width: u32, frame_height: u32, scale: f64) -> (u32, u32) {
    (scale_dimension(frame_width, scale), scale_dimension(frame_height, scale))
}

#[inline]
fn scale_dimension(native: u32, scale: f64) -> u32 {
    let scaled = (native as f64 * scale).round();
    if scaled < 1.0 {
        1
    } else if scaled >= u32::MAX as f64 {
        u32::MAX
    } else {
        scaled as u32
    }
}
