//! Viewer session: decoder, controller and display sink wired together.
//!
//! The controller only mutates state; the viewer decides which display
//! updates follow each operation. Index changes coming from the scrub
//! control are not echoed back to it, all other index changes are.

use std::path::Path;

use log::debug;

use crate::labels::{load_summary, position_label, zoom_label};
use crate::loader::{load_store, FrameDecoder, LoadResult};
use crate::{ConfigError, DisplaySink, FrameError, NavigationController, ViewerConfig};

/// A frame-stepping session driving a [`DisplaySink`].
///
/// ## Example
///
/// ```rust
/// use gif_stepper_core::{DisplaySink, FrameViewer, LoadResult, RawFrame, RenderSpec, ViewerConfig};
///
/// #[derive(Default)]
/// struct Screen {
///     size: (u32, u32),
///     scrub: usize,
/// }
///
/// impl DisplaySink for Screen {
///     fn render(&mut self, spec: &RenderSpec<'_>) {
///         self.size = spec.target_size();
///     }
///     fn scrub_position(&mut self, index: usize) {
///         self.scrub = index;
///     }
/// }
///
/// let decoder = |_: &[u8]| -> LoadResult<Vec<RawFrame>> {
///     Ok(vec![RawFrame::new(1200, 800, Vec::new()); 3])
/// };
/// let mut viewer = FrameViewer::new(ViewerConfig::default(), decoder, Screen::default()).unwrap();
///
/// viewer.load_bytes(b"...", Some("clip.gif")).unwrap();
/// viewer.step_previous();
/// assert_eq!(viewer.sink().scrub, 2);
/// assert_eq!(viewer.sink().size, (600, 400));
/// ```
pub struct FrameViewer<D, S> {
    controller: NavigationController,
    decoder: D,
    sink: S,
}

impl<D: FrameDecoder, S: DisplaySink> FrameViewer<D, S> {
    pub fn new(config: ViewerConfig, decoder: D, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: NavigationController::new(config)?,
            decoder,
            sink,
        })
    }

    #[inline]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (NavigationController, D, S) {
        (self.controller, self.decoder, self.sink)
    }

    /// Decode `bytes` and show the first frame.
    ///
    /// On failure the previously loaded image stays on screen and no
    /// display update is sent.
    pub fn load_bytes(&mut self, bytes: &[u8], source_name: Option<&str>) -> LoadResult<()> {
        let store = load_store(&self.decoder, bytes, source_name)?;
        let summary = load_summary(store.source_name(), store.len());
        let count = store.len();

        self.controller.load(store);
        self.sink.loaded(&summary, count);
        self.refresh_frame(true);
        self.refresh_zoom();
        Ok(())
    }

    /// Read a file and load it, naming the store after the file.
    ///
    /// A file that cannot be read is reported as [`FrameError::Decode`].
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> LoadResult<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| FrameError::Decode(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.load_bytes(&bytes, Some(&name))
    }

    pub fn step_next(&mut self) {
        if self.controller.step_next() {
            self.refresh_frame(true);
        }
    }

    pub fn step_previous(&mut self) {
        if self.controller.step_previous() {
            self.refresh_frame(true);
        }
    }

    /// Jump to `index` and move the scrub control there.
    pub fn jump_to(&mut self, index: usize) -> Result<(), FrameError> {
        if self.controller.jump_to(index)? {
            self.refresh_frame(true);
        }
        Ok(())
    }

    /// Entry point for the scrub control being dragged.
    ///
    /// The scrub control already shows `position`, so it is not notified.
    pub fn scrub_to(&mut self, position: usize) -> Result<(), FrameError> {
        if self.controller.current_index() == Some(position) {
            return Ok(());
        }
        if self.controller.scrub_to(position)? {
            debug!("scrubbed to frame {}", position);
            self.refresh_frame(false);
        }
        Ok(())
    }

    pub fn zoom_in(&mut self) {
        if self.controller.zoom_in() {
            self.refresh_zoom();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.controller.zoom_out() {
            self.refresh_zoom();
        }
    }

    pub fn reset_zoom(&mut self) {
        if self.controller.reset_zoom() {
            self.refresh_zoom();
        }
    }

    fn refresh_frame(&mut self, notify_scrub: bool) {
        let Some(index) = self.controller.current_index() else {
            return;
        };
        if let Some(spec) = self.controller.current_render_spec() {
            self.sink.render(&spec);
        }
        let label = position_label(Some(index), self.controller.frame_count());
        self.sink.position_label(&label);
        if notify_scrub {
            self.sink.scrub_position(index);
        }
    }

    fn refresh_zoom(&mut self) {
        if let Some(spec) = self.controller.current_render_spec() {
            self.sink.render(&spec);
        }
        self.sink.zoom_label(&zoom_label(self.controller.zoom_factor()));
    }
}
