use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The byte slice handed to a [`PixelBuffer`](crate::buffer::PixelBuffer)
    /// doesn't hold exactly `width * height` RGBA pixels.
    #[error("buffer of {len} bytes doesn't match {width}x{height}x4 = {expected}")]
    BufferShape {
        len: usize,
        width: u32,
        height: u32,
        expected: usize,
    },

    #[error("{width}x{height} image is too large to address")]
    TooLarge { width: u32, height: u32 },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// An [`AnalysisResult`](crate::analysis::AnalysisResult) broke one of its invariants.
    #[error("invalid analysis result: {0}")]
    Invariant(String),

    #[error("failed to encode palette image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
