use std::{fs::File, io::{BufRead, BufReader, Read}, path::Path};

use anyhow::Result;
use flate2::read::MultiGzDecoder;
use indicatif::ProgressBar;
use log::{debug, trace};

use located_error::LocatedError;
use pedigree::PairwiseRecord;

mod error;
pub use error::KinshipReaderError;

/// Header names of the required columns. Any other column is ignored.
const ID1_COL    : &str = "ID1";
const ID2_COL    : &str = "ID2";
const KINSHIP_COL: &str = "Kinship";
const IBS0_COL   : &str = "IBS0";

/// Tokens interpreted as a missing value.
const MISSING_VALUES: [&str; 3] = ["NA", "NaN", "nan"];

/// 0-based indices of the required columns within a kinship table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    id1    : usize,
    id2    : usize,
    kinship: usize,
    ibs0   : usize,
}

impl Columns {
    /// Locate the required columns from the header line, by name.
    fn from_header(header: &str) -> Result<Self, KinshipReaderError> {
        let fields: Vec<&str> = header.split_whitespace().map(|field| field.trim_start_matches('#')).collect();
        let find = |name: &'static str| {
            fields.iter().position(|field| *field == name).ok_or(KinshipReaderError::MissingColumn(name))
        };
        Ok(Self { id1: find(ID1_COL)?, id2: find(ID2_COL)?, kinship: find(KINSHIP_COL)?, ibs0: find(IBS0_COL)? })
    }
}

/// Reader for whitespace-delimited tables of pairwise relatedness estimates (e.g. KING `.kin0` files).
///
/// The first non-blank line is expected to be a header, naming at least the `ID1`, `ID2`, `Kinship` and `IBS0`
/// columns, in any order. Input may be plain text, gzip or BGZF compressed.
pub struct KinshipReader<'a> {
    source: Box<dyn BufRead + 'a>,
}

impl<'a> KinshipReader<'a> {
    /// Open a kinship file. Decompression is applied if `compressed` is set, or if the file name ends with `.gz`
    ///
    /// # Errors
    /// - `KinshipReaderError::Open` if `path` cannot be opened.
    pub fn new(path: &Path, compressed: bool) -> Result<KinshipReader<'a>> {
        let file = File::open(path)
            .map_err(|e| KinshipReaderError::Open(path.to_path_buf(), e))
            .loc("While attempting to create a new KinshipReader")?;

        let gzipped = compressed || path.extension().is_some_and(|ext| ext == "gz");
        debug!("Opening kinship file {} (decompress: {gzipped})", path.display());
        Ok(Self::from_reader(file, gzipped))
    }

    /// Wrap any readable source.
    pub fn from_reader<R: Read + 'a>(reader: R, gzipped: bool) -> Self {
        let source: Box<dyn Read + 'a> = match gzipped {
            true  => Box::new(MultiGzDecoder::new(reader)),
            false => Box::new(reader),
        };
        Self { source: Box::new(BufReader::new(source)) }
    }

    /// Parse every row of the table.
    ///
    /// Returns an empty vector if the source is empty, or only contains a header line. `progress` is incremented
    /// once per parsed record.
    ///
    /// # Errors
    /// - `MissingColumn` if the header does not name one of the required columns.
    /// - `MissingField` if a row is shorter than the header.
    /// - `ParseFloat` if a `Kinship` or `IBS0` field is neither a number nor a missing value.
    /// - `ReadLine` if the source cannot be read (e.g. corrupted gzip stream).
    pub fn read_records(self, progress: &ProgressBar) -> Result<Vec<PairwiseRecord>> {
        use KinshipReaderError::ReadLine;
        let loc_msg = "While parsing the contents of the kinship file";

        let mut columns = None;
        let mut records = Vec::new();
        for (i, line) in self.source.lines().enumerate() {
            let lineno = i + 1;
            let line = line.map_err(|e| ReadLine(lineno, e)).loc(loc_msg)?;
            if line.trim().is_empty() {
                continue
            }

            let Some(cols) = columns else {
                let cols = Columns::from_header(&line).loc(loc_msg)?;
                trace!("Kinship file columns: {cols:?}");
                columns = Some(cols);
                continue
            };

            records.push(Self::parse_line(&line, lineno, cols).loc(loc_msg)?);
            progress.inc(1);
        }

        debug!("Read {} pairwise records", records.len());
        Ok(records)
    }

    fn parse_line(line: &str, lineno: usize, cols: Columns) -> Result<PairwiseRecord, KinshipReaderError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let field = |idx: usize, column: &'static str| {
            fields.get(idx).copied().ok_or(KinshipReaderError::MissingField{line: lineno, column})
        };
        let value = |idx: usize, column: &'static str| {
            let raw = field(idx, column)?;
            parse_value(raw).map_err(|err| KinshipReaderError::ParseFloat{line: lineno, column, value: raw.to_string(), err})
        };

        Ok(PairwiseRecord::new(
            field(cols.id1, ID1_COL)?,
            field(cols.id2, ID2_COL)?,
            value(cols.kinship, KINSHIP_COL)?,
            value(cols.ibs0, IBS0_COL)?,
        ))
    }
}

/// Parse a numeric field, mapping missing-value tokens to NaN.
fn parse_value(field: &str) -> Result<f64, std::num::ParseFloatError> {
    match MISSING_VALUES.contains(&field) {
        true  => Ok(f64::NAN),
        false => field.parse(),
    }
}
