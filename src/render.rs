//! Render instructions and the display sink they are delivered to.

use crate::Frame;

/// What to draw for the current frame.
///
/// This is a platform-agnostic description: the display backend is
/// responsible for resampling `frame` to `width` x `height` and painting it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSpec<'a> {
    /// Frame to draw, at native resolution
    pub frame: &'a Frame,
    /// Target width in pixels (at least 1)
    pub width: u32,
    /// Target height in pixels (at least 1)
    pub height: u32,
    /// Fit-to-viewport factor, capped at 1.0
    pub fit_factor: f64,
    /// `fit_factor * zoom_factor`
    pub scale: f64,
}

impl RenderSpec<'_> {
    /// Target size as (width, height).
    #[inline]
    pub fn target_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Receiver of display updates from a [`FrameViewer`](crate::FrameViewer).
///
/// Every method is a pure observation of viewer state: nothing a sink does
/// feeds back into navigation except an explicit call to
/// [`FrameViewer::scrub_to`](crate::FrameViewer::scrub_to).
///
/// The bitmap produced from a render spec belongs to the sink for as long
/// as it is on screen.
pub trait DisplaySink {
    /// Draw the given frame at the given size.
    fn render(&mut self, spec: &RenderSpec<'_>);

    /// Move the scrub control to `index`.
    ///
    /// Not called when the index change originated from the scrub control.
    fn scrub_position(&mut self, index: usize);

    /// A new image was loaded; the scrub control should now span
    /// `0..=frame_count - 1`.
    fn loaded(&mut self, summary: &str, frame_count: usize) {
        let _ = (summary, frame_count);
    }

    /// Position label changed, e.g. `"3 / 12"`.
    fn position_label(&mut self, label: &str) {
        let _ = label;
    }

    /// Zoom label changed, e.g. `"125%"`.
    fn zoom_label(&mut self, label: &str) {
        let _ = label;
    }
}
