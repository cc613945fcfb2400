//! # gif-stepper-core
//!
//! Core frame navigation and display scaling library for manual GIF frame
//! steppers.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Decoding a multi-frame image into an immutable frame store
//! - Stepping, jumping and scrubbing between frames with wrap-around
//! - Fitting frames into a viewport and applying a clamped user zoom
//! - Driving a display sink with render instructions, labels and the
//!   scrub position
//!
//! Frames are never animated: the frame delays stored in the file are
//! ignored and the user moves between frames explicitly.
//!
//! ## Features
//!
//! - `gif` (default) - Built-in GIF decoder backed by the `image` crate
//! - `serde` - Enable serialization/deserialization for configuration
//! - `toml` - Load [`ViewerConfig`] from TOML
//!
//! ## Example
//!
//! ```rust,ignore
//! use gif_stepper_core::{FrameViewer, GifDecoder, ViewerConfig};
//!
//! let mut viewer = FrameViewer::new(ViewerConfig::default(), GifDecoder, my_sink)?;
//! viewer.load_path("dancing.gif")?;
//!
//! // Wire these to buttons, keys and the mouse wheel
//! viewer.step_next();
//! viewer.zoom_in();
//!
//! // Called when the user drags the scrub control
//! viewer.scrub_to(position)?;
//! ```

mod config;
mod data;
mod error;
pub mod labels;
mod loader;
mod navigation;
mod render;
pub mod sizing;
mod viewer;

pub use config::ViewerConfig;
pub use data::{Frame, FrameStore, RawFrame};
pub use error::{ConfigError, FrameError};
pub use loader::{load_store, FrameDecoder, LoadResult};
pub use navigation::NavigationController;
pub use render::{DisplaySink, RenderSpec};
pub use sizing::Viewport;
pub use viewer::FrameViewer;

#[cfg(feature = "gif")]
pub use loader::GifDecoder;
