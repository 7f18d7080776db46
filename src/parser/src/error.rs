use thiserror::Error;
use crate::FileEntity;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("{0} {1} does not exist")]
    MissingFileEntity(FileEntity, String),

    #[error("{1} is not a {0}")]
    InvalidFileEntity(FileEntity, String),

    #[error("Failed to parse '{0}' into a floating point number")]
    ParseThreshold(String),

    #[error("Invalid threshold value '{value}'. The provided value must lie between {min} and {max}")]
    InvalidThreshold{value: String, min: f64, max: f64},

    #[error("A family file is required to resolve trios. Please provide one using --fam")]
    MissingFam,

    #[error("Failed to serialize command line arguments. got [{0}]")]
    Serialize(String),
}
