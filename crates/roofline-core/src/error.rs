use thiserror::Error;

#[derive(Error, Debug)]
pub enum RooflineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image has no pickable roof color")]
    EmptyImage,

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RooflineError>;
