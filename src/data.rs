//! Core data structures for decoded frames.

use crate::FrameError;

/// A frame as produced by a decoder, before it joins a [`FrameStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel data, RGBA8 for the built-in decoder.
    /// Layout: [r0, g0, b0, a0, r1, g1, b1, a1, ...]
    pub pixels: Vec<u8>,
}

impl RawFrame {
    /// Create a new RawFrame with the given dimensions and data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// An immutable decoded frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    index: usize,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Position of this frame in its store (0-based).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Native frame dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw pixel buffer, untouched since decoding.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Ordered, non-empty sequence of frames for one loaded image.
///
/// A store is read-only once built. Loading another image replaces the
/// store as a whole.
///
/// ## Example
///
/// ```rust
/// use gif_stepper_core::{FrameStore, RawFrame};
///
/// let store = FrameStore::build(vec![
///     RawFrame::new(2, 1, vec![0; 8]),
///     RawFrame::new(2, 1, vec![255; 8]),
/// ])
/// .unwrap();
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.get(1).unwrap().index(), 1);
/// assert!(store.get(2).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct FrameStore {
    frames: Vec<Frame>,
    source_name: Option<String>,
}

impl FrameStore {
    /// Build a store from decoder output.
    ///
    /// Fails with [`FrameError::EmptySequence`] when `decoded` is empty and
    /// with [`FrameError::InvalidFrame`] when a frame has a zero dimension.
    pub fn build(decoded: Vec<RawFrame>) -> Result<Self, FrameError> {
        if decoded.is_empty() {
            return Err(FrameError::EmptySequence);
        }

        let mut frames = Vec::with_capacity(decoded.len());
        for (index, raw) in decoded.into_iter().enumerate() {
            if raw.width == 0 || raw.height == 0 {
                return Err(FrameError::InvalidFrame {
                    index,
                    width: raw.width,
                    height: raw.height,
                });
            }
            frames.push(Frame {
                index,
                width: raw.width,
                height: raw.height,
                pixels: raw.pixels,
            });
        }

        Ok(Self {
            frames,
            source_name: None,
        })
    }

    /// Attach the name of the source (usually a file name).
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Name of the source this store was loaded from, if known.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Get the frame at `index`.
    pub fn get(&self, index: usize) -> Result<&Frame, FrameError> {
        self.frames.get(index).ok_or(FrameError::IndexOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    /// Number of frames; at least 1.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a FrameStore {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(width: u32, height: u32) -> RawFrame {
        RawFrame::new(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn test_build_keeps_order_and_length() {
        for n in 1..=6 {
            let frames: Vec<_> = (1..=n).map(|w| raw(w, 2)).collect();
            let store = FrameStore::build(frames).unwrap();
            assert_eq!(store.len(), n as usize);
            for (i, frame) in store.iter().enumerate() {
                assert_eq!(frame.index(), i);
                assert_eq!(frame.width(), i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_build_empty() {
        assert_eq!(
            FrameStore::build(Vec::new()).unwrap_err(),
            FrameError::EmptySequence
        );
    }

    #[test]
    fn test_build_zero_dimension() {
        let err = FrameStore::build(vec![raw(4, 4), raw(0, 4)]).unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidFrame {
                index: 1,
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let store = FrameStore::build(vec![raw(1, 1), raw(1, 1)]).unwrap();
        assert!(store.get(1).is_ok());
        assert_eq!(
            store.get(2).unwrap_err(),
            FrameError::IndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_pixels_preserved() {
        let store = FrameStore::build(vec![RawFrame::new(1, 1, vec![1, 2, 3, 4])]).unwrap();
        let frame = store.get(0).unwrap();
        assert_eq!(frame.pixels(), &[1, 2, 3, 4]);
        assert_eq!(frame.dimensions(), (1, 1));
    }

    #[test]
    fn test_source_name() {
        let store = FrameStore::build(vec![raw(1, 1)]).unwrap();
        assert_eq!(store.source_name(), None);
        let store = store.with_source_name("cat.gif");
        assert_eq!(store.source_name(), Some("cat.gif"));
    }
}
