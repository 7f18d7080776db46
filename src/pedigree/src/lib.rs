pub mod sex;
pub use sex::Sex;

mod individual;
pub use individual::Individual;

mod record;
pub use record::PairwiseRecord;

mod pedigree;
pub use crate::pedigree::{Pedigree, PedigreeError};
