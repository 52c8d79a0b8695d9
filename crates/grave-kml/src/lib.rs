// KML document model, builder and serializer
mod builder;
mod types;
mod write;

pub use builder::DocumentBuilder;
pub use types::*;
pub use write::{COORDINATE_DECIMALS, KML_NAMESPACE, to_string, write_document};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KmlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Linear ring needs at least 3 points before closing, got {0}")]
    TooFewPoints(usize),

    #[error("Serialized document is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, KmlError>;
