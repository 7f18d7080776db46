use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Individual '{0}' is referenced within the kinship table, but could not be found within the family file")]
    MissingMetadata(String),

    #[error("Invalid pedigree index {0}: the family file only contains {1} individuals")]
    InvalidIndex(usize, usize),
}
