//! Navigation and scale controller for manual frame stepping.

use log::{debug, warn};

use crate::sizing::target_dimensions;
use crate::{ConfigError, Frame, FrameError, FrameStore, RenderSpec, ViewerConfig};

/// Platform-agnostic controller for stepping through frames and zooming.
///
/// The controller owns the loaded [`FrameStore`] together with the current
/// frame index and zoom factor, so the index can never refer to a stale
/// store. Without a store every navigation and zoom operation is a no-op.
///
/// ## Example
///
/// ```rust
/// use gif_stepper_core::{FrameStore, NavigationController, RawFrame, ViewerConfig};
///
/// let frames = (0..5).map(|_| RawFrame::new(800, 600, Vec::new())).collect();
/// let store = FrameStore::build(frames).unwrap();
///
/// let config = ViewerConfig::default().with_viewport(400.0, 300.0);
/// let mut controller = NavigationController::new(config).unwrap();
/// controller.load(store);
///
/// controller.step_previous();
/// assert_eq!(controller.current_index(), Some(4));
///
/// let spec = controller.current_render_spec().unwrap();
/// assert_eq!(spec.target_size(), (400, 300));
///
/// controller.zoom_in();
/// assert_eq!(controller.zoom_factor(), 1.25);
/// ```
#[derive(Clone, Debug)]
pub struct NavigationController {
    config: ViewerConfig,
    /// Loaded frames, absent until the first load
    store: Option<FrameStore>,
    /// Current frame index, always `< store.len()`
    current_index: usize,
    /// User zoom applied on top of the fit factor
    zoom_factor: f64,
}

impl NavigationController {
    /// Create a controller with no frames loaded.
    pub fn new(config: ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store: None,
            current_index: 0,
            zoom_factor: 1.0,
        })
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replace the loaded frames and reset to frame 0 at 100% zoom.
    pub fn load(&mut self, store: FrameStore) {
        debug!("loading store with {} frames", store.len());
        self.store = Some(store);
        self.current_index = 0;
        self.zoom_factor = 1.0;
    }

    /// Drop the loaded frames, returning to the initial state.
    pub fn unload(&mut self) -> Option<FrameStore> {
        self.current_index = 0;
        self.zoom_factor = 1.0;
        self.store.take()
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    #[inline]
    pub fn store(&self) -> Option<&FrameStore> {
        self.store.as_ref()
    }

    /// Number of loaded frames, 0 before the first load.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.store.as_ref().map_or(0, FrameStore::len)
    }

    /// Current frame index, or `None` when nothing is loaded.
    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.store.as_ref().map(|_| self.current_index)
    }

    #[inline]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// The frame at the current index.
    pub fn current_frame(&self) -> Option<&Frame> {
        let store = self.store.as_ref()?;
        store.get(self.current_index).ok()
    }

    /// Advance one frame, wrapping from the last frame to the first.
    ///
    /// Returns false if nothing is loaded.
    pub fn step_next(&mut self) -> bool {
        let count = self.frame_count();
        if count == 0 {
            return false;
        }
        self.current_index = (self.current_index + 1) % count;
        debug!("step next -> frame {}", self.current_index);
        true
    }

    /// Go back one frame, wrapping from the first frame to the last.
    ///
    /// Returns false if nothing is loaded.
    pub fn step_previous(&mut self) -> bool {
        let count = self.frame_count();
        if count == 0 {
            return false;
        }
        self.current_index = (self.current_index + count - 1) % count;
        debug!("step previous -> frame {}", self.current_index);
        true
    }

    /// Jump directly to `index`.
    ///
    /// Returns `Ok(false)` if nothing is loaded. An index outside
    /// `0..frame_count` is rejected and the current index is kept.
    pub fn jump_to(&mut self, index: usize) -> Result<bool, FrameError> {
        let count = self.frame_count();
        if count == 0 {
            return Ok(false);
        }
        if index >= count {
            warn!("rejected jump to frame {} of {}", index, count);
            return Err(FrameError::IndexOutOfRange { index, len: count });
        }
        self.current_index = index;
        debug!("jump -> frame {}", index);
        Ok(true)
    }

    /// Move to the frame selected on the scrub control.
    ///
    /// Same effect as [`jump_to`](Self::jump_to); kept separate so callers
    /// can tell scrub-driven changes apart.
    #[inline]
    pub fn scrub_to(&mut self, position: usize) -> Result<bool, FrameError> {
        self.jump_to(position)
    }

    /// Multiply the zoom by the zoom step unless that would exceed `max_zoom`.
    ///
    /// Returns true if the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        let candidate = self.zoom_factor * self.config.zoom_step;
        self.apply_zoom(candidate, candidate <= self.config.max_zoom)
    }

    /// Divide the zoom by the zoom step unless that would go below `min_zoom`.
    ///
    /// Returns true if the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        let candidate = self.zoom_factor / self.config.zoom_step;
        self.apply_zoom(candidate, candidate >= self.config.min_zoom)
    }

    /// Restore 100% zoom. Returns false if nothing is loaded.
    pub fn reset_zoom(&mut self) -> bool {
        self.apply_zoom(1.0, true)
    }

    fn apply_zoom(&mut self, candidate: f64, within_limits: bool) -> bool {
        if !self.is_loaded() || !within_limits {
            return false;
        }
        self.zoom_factor = candidate;
        debug!("zoom -> {:.3}", self.zoom_factor);
        true
    }

    /// Compute how the current frame should be drawn.
    ///
    /// The frame is first fitted into the viewport (never upscaled past its
    /// native size), then the zoom factor is applied on top.
    pub fn current_render_spec(&self) -> Option<RenderSpec<'_>> {
        let frame = self.current_frame()?;
        let (fw, fh) = frame.dimensions();
        let fit_factor = self.config.viewport().fit_factor(fw, fh);
        let scale = fit_factor * self.zoom_factor;
        let (width, height) = target_dimensions(fw, fh, scale);

        Some(RenderSpec {
            frame,
            width,
            height,
            fit_factor,
            scale,
        })
    }
}
