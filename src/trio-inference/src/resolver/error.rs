use pedigree::PedigreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Failed to retrieve the metadata of a candidate trio member")]
    MissingMetadata(#[from] PedigreeError),
}
