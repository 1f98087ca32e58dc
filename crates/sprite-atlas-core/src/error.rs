use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("atlas overflow: {} source(s) did not fit after exhausting bin growth", .unplaced.len())]
    Overflow { unplaced: Vec<String> },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
