//! Frame decoding and store construction.
//!
//! Decoding is the only slow step of a load and runs as a single blocking
//! call. The store is built only after decoding finishes, so a failure at
//! any point leaves whatever was loaded before untouched.

use log::{info, warn};

use crate::{FrameError, FrameStore, RawFrame};

/// Result type for frame loading operations
pub type LoadResult<T> = Result<T, FrameError>;

/// Source of decoded frames.
///
/// Implement this trait to plug in a specific decoder. Closures of the form
/// `Fn(&[u8]) -> LoadResult<Vec<RawFrame>>` implement it too.
pub trait FrameDecoder {
    /// Decode every frame in `bytes`, in display order.
    ///
    /// Malformed input fails with [`FrameError::Decode`]. An empty result is
    /// allowed here and rejected later by [`FrameStore::build`].
    fn decode(&self, bytes: &[u8]) -> LoadResult<Vec<RawFrame>>;
}

impl<F> FrameDecoder for F
where
    F: Fn(&[u8]) -> LoadResult<Vec<RawFrame>>,
{
    fn decode(&self, bytes: &[u8]) -> LoadResult<Vec<RawFrame>> {
        self(bytes)
    }
}

/// Decode `bytes` and build a store from the result.
pub fn load_store<D>(decoder: &D, bytes: &[u8], source_name: Option<&str>) -> LoadResult<FrameStore>
where
    D: FrameDecoder + ?Sized,
{
    let label = source_name.unwrap_or("<memory>");
    let store = decoder
        .decode(bytes)
        .and_then(FrameStore::build)
        .map_err(|e| {
            warn!("failed to load {}: {}", label, e);
            e
        })?;

    info!("loaded {} ({} frames)", label, store.len());
    Ok(match source_name {
        Some(name) => store.with_source_name(name),
        None => store,
    })
}

/// GIF decoder backed by the `image` crate.
///
/// Every frame is composited onto the full logical screen and converted to
/// RGBA8, so all frames of one image share its canvas size. Frame delays
/// are discarded.
#[cfg(feature = "gif")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GifDecoder;

#[cfg(feature = "gif")]
impl FrameDecoder for GifDecoder {
    fn decode(&self, bytes: &[u8]) -> LoadResult<Vec<RawFrame>> {
        use image::AnimationDecoder;

        let decoder = image::codecs::gif::GifDecoder::new(std::io::Cursor::new(bytes))
            .map_err(|e| FrameError::Decode(e.to_string()))?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .map_err(|e| FrameError::Decode(e.to_string()))?;

        Ok(frames
            .into_iter()
            .map(|frame| {
                let buffer = frame.into_buffer();
                RawFrame::new(buffer.width(), buffer.height(), buffer.into_raw())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(count: usize) -> impl Fn(&[u8]) -> LoadResult<Vec<RawFrame>> {
        move |_| Ok((0..count).map(|_| RawFrame::new(2, 2, vec![0; 16])).collect())
    }

    #[test]
    fn test_load_store() {
        let store = load_store(&fixed(3), b"", Some("three.gif")).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.source_name(), Some("three.gif"));
    }

    #[test]
    fn test_load_store_empty() {
        let err = load_store(&fixed(0), b"", None).unwrap_err();
        assert_eq!(err, FrameError::EmptySequence);
    }

    #[test]
    fn test_load_store_decode_error() {
        let failing = |_: &[u8]| -> LoadResult<Vec<RawFrame>> {
            Err(FrameError::Decode("bad header".into()))
        };
        let err = load_store(&failing, b"junk", None).unwrap_err();
        assert_eq!(err, FrameError::Decode("bad header".into()));
    }

    #[cfg(feature = "gif")]
    mod gif {
        use super::super::*;
        use image::codecs::gif::GifEncoder;
        use image::{Frame, Rgba, RgbaImage};

        fn encode(colors: &[[u8; 4]], width: u32, height: u32) -> Vec<u8> {
            let mut bytes = Vec::new();
            {
                let mut encoder = GifEncoder::new(&mut bytes);
                let frames = colors
                    .iter()
                    .map(|c| Frame::new(RgbaImage::from_pixel(width, height, Rgba(*c))));
                encoder.encode_frames(frames).unwrap();
            }
            bytes
        }

        #[test]
        fn test_decode_frames() {
            let bytes = encode(
                &[[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]],
                4,
                3,
            );
            let frames = GifDecoder.decode(&bytes).unwrap();
            assert_eq!(frames.len(), 3);
            for frame in &frames {
                assert_eq!((frame.width, frame.height), (4, 3));
                assert_eq!(frame.pixels.len(), 4 * 3 * 4);
            }
        }

        #[test]
        fn test_decode_garbage() {
            let err = GifDecoder.decode(b"definitely not a gif").unwrap_err();
            assert!(matches!(err, FrameError::Decode(_)));
        }

        #[test]
        fn test_decode_truncated() {
            let bytes = encode(&[[255, 0, 0, 255], [0, 255, 0, 255]], 8, 8);
            // cut inside the logical screen descriptor
            let truncated = &bytes[..10];
            assert!(load_store(&GifDecoder, truncated, None).is_err());
        }
    }
}
