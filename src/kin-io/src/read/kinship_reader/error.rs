use std::{num::ParseFloatError, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KinshipReaderError {
    #[error("Failed to open kinship file '{}'", .0.display())]
    Open(PathBuf, #[source] std::io::Error),

    #[error("Failed to read line {0} of the kinship file")]
    ReadLine(usize, #[source] std::io::Error),

    #[error("Kinship file header is missing the required '{0}' column")]
    MissingColumn(&'static str),

    #[error("Line {line} of the kinship file is missing its '{column}' field")]
    MissingField{line: usize, column: &'static str},

    #[error("Line {line} of the kinship file: failed to parse '{value}' (column '{column}') into a floating point number")]
    ParseFloat{line: usize, column: &'static str, value: String, #[source] err: ParseFloatError},
}
