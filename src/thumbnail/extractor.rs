//! FrameExtractor trait and related error types.

/// An independently seekable decoder that renders preview frames.
///
/// Each cache owns exactly one extractor and drives it from its worker
/// thread, one request at a time.
pub trait FrameExtractor: Send {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Seek to `time` seconds and capture one encoded (JPEG) frame.
    fn extract(&mut self, time: f64) -> Result<Vec<u8>, ExtractionError>;
}

impl<T: FrameExtractor + ?Sized> FrameExtractor for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn extract(&mut self, time: f64) -> Result<Vec<u8>, ExtractionError> {
        (**self).extract(time)
    }
}

/// Why a frame could not be extracted.
///
/// These never reach cache callers; a failed extraction resolves to
/// [`ThumbnailLookup::Unavailable`](super::ThumbnailLookup::Unavailable).
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Decoder not ready: {0}")]
    NotReady(String),

    #[error("Seek to {time}s is out of range")]
    OutOfRange { time: f64 },

    #[error("Extractor '{tool}' failed: {message}")]
    Failed { tool: &'static str, message: String },

    #[error("Failed to run extractor: {0}")]
    Io(#[from] std::io::Error),
}
