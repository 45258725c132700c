use crate::customer::CustomerParsingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error(transparent)]
    Parse(#[from] CustomerParsingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
