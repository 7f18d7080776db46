use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FamReaderError {
    #[error("Failed to open family file '{}'", .0.display())]
    Open(PathBuf, #[source] std::io::Error),

    #[error("Failed to read line {0} of the family file")]
    ReadLine(usize, #[source] std::io::Error),

    #[error("Line {line} of the family file contains {found} field(s). Expected exactly {expected}: FID IID PAT MAT SEX PHENOTYPE")]
    InvalidFieldNumber{line: usize, found: usize, expected: usize},
}
