mod kinship_reader;
pub use kinship_reader::{KinshipReader, KinshipReaderError};

mod fam_reader;
pub use fam_reader::{FamReader, FamReaderError};
