use std::{fs::File, io::{BufRead, BufReader, Read}, path::Path};

use anyhow::Result;
use log::debug;

use located_error::LocatedError;
use pedigree::{Individual, Pedigree};

mod error;
pub use error::FamReaderError;

/// Number of fields of a PLINK `.fam` line.
const FAM_FIELDS: usize = 6;

/// PLINK `.fam` family file reader.
/// ### File characteristics:
/// - Whitespace-separated fields, no header.
/// - Columns: `<FID> <IID> <PAT> <MAT> <SEX> <PHENOTYPE>`
pub struct FamReader<'a> {
    source: Box<dyn BufRead + 'a>,
}

impl<'a> FamReader<'a> {
    /// # Errors
    /// - `FamReaderError::Open` if `path` cannot be opened.
    pub fn new(path: &Path) -> Result<FamReader<'a>> {
        let file = File::open(path)
            .map_err(|e| FamReaderError::Open(path.to_path_buf(), e))
            .loc("While attempting to create a new FamReader")?;
        debug!("Opening family file {}", path.display());
        Ok(Self::from_reader(file))
    }

    pub fn from_reader<R: Read + 'a>(reader: R) -> Self {
        Self { source: Box::new(BufReader::new(reader)) }
    }

    /// Load every individual of the family file. Blank lines are skipped. If an IID is defined more than once,
    /// its last definition is kept, at the position of its first one.
    ///
    /// # Errors
    /// - `InvalidFieldNumber` if a line does not contain exactly six fields.
    /// - `ReadLine` if the source cannot be read.
    pub fn read_pedigree(self) -> Result<Pedigree> {
        use FamReaderError::{ReadLine, InvalidFieldNumber};
        let loc_msg = "While parsing the contents of the family file";

        let mut pedigree = Pedigree::new();
        for (i, line) in self.source.lines().enumerate() {
            let line = line.map_err(|e| ReadLine(i + 1, e)).loc(loc_msg)?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields[..] {
                [] => continue,
                [fid, iid, pat, mat, sex, phe] => pedigree.insert(Individual::new(fid, iid, pat, mat, sex, phe)),
                _ => return Err(InvalidFieldNumber{line: i + 1, found: fields.len(), expected: FAM_FIELDS}).loc(loc_msg),
            }
        }

        debug!("Loaded the metadata of {} individuals", pedigree.len());
        Ok(pedigree)
    }
}
