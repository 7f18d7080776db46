use pedigree::PedigreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("None of the {records} pairwise record(s) display a kinship coefficient greater than {min_kinship}")]
    EmptyInput{records: usize, min_kinship: f64},

    #[error(transparent)]
    MissingMetadata(#[from] PedigreeError),
}
