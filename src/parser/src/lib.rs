use std::{
    ffi::OsStr,
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
};

use located_error::*;

use clap::Parser;
use serde::{Serialize, Deserialize};
use log::debug;
use anyhow::Result;

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="kin2ped", author, version, about, long_about = None)]
/// kin2ped: Infer parent-offspring trios from pairwise kinship estimates, and write them as a pedigree file.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,

    /// Input table of pairwise kinship estimates.
    ///
    /// Whitespace-separated file, with a header line containing at least the 'ID1', 'ID2', 'Kinship' and 'IBS0'
    /// columns (e.g. the '.kin0' output of KING). Files ending with '.gz' are decompressed on the fly.
    #[clap(short='k', long, parse(try_from_os_str=valid_input_file))]
    pub kin: PathBuf,

    /// Decompress --kin as gzip, regardless of its file extension.
    #[clap(short='z', long)]
    pub zip: bool,

    /// PLINK family file providing the family id, sex and phenotype of every individual.
    ///
    /// Whitespace-separated file, without header: FID IID PAT MAT SEX PHENOTYPE. Sex must be coded as
    /// 1 (male) or 2 (female). Individuals of unknown sex are never retained as parents.
    #[clap(short='f', long, parse(try_from_os_str=valid_input_file))]
    pub fam: Option<PathBuf>,

    /// Output trio file.
    ///
    /// Tab-separated, without header: FID IID PAT MAT SEX PHENOTYPE. The file is not created when no trio is found.
    #[clap(short='o', long)]
    pub out: PathBuf,

    /// Write a diagnostic IBS0 vs. Kinship scatter plot at the given path, in SVG format.
    ///
    /// The plot is always rendered as SVG, whatever the extension of the provided path. PDF output is not supported.
    #[clap(short='p', long)]
    pub plot: Option<PathBuf>,

    /// Duplicate sample threshold.
    ///
    /// Pairs of individuals with a kinship coefficient greater or equal to this value are considered as duplicates
    /// (or monozygotic twins), and can never be considered as parent-offspring. Value must lie within [0, 1].
    #[clap(short='D', long, default_value("0.35"), allow_hyphen_values(true), parse(try_from_str=parse_threshold))]
    pub min_dup: f64,

    /// Maximum IBS0 rate of parent-offspring duos.
    ///
    /// Pairs of individuals with an IBS0 rate greater or equal to this value can never be considered as
    /// parent-offspring. Value must lie within [0, 1].
    #[clap(short='P', long, default_value("0.01"), allow_hyphen_values(true), parse(try_from_str=parse_threshold))]
    pub max_par: f64,

    /// Minimum kinship coefficient.
    ///
    /// Pairs of individuals with a kinship coefficient lower or equal to this value are considered unrelated.
    /// Value must lie within [0, 1].
    #[clap(short='K', long, default_value("0.09"), allow_hyphen_values(true), parse(try_from_str=parse_threshold))]
    pub min_kin: f64,
}

impl Cli {
    /// Serialize command line arguments into yaml, and print them to the console at debug level.
    ///
    /// # Errors
    /// - `ParserError::Serialize` if `serde_yaml` fails to parse `Self` to a string.
    pub fn serialize(&self) -> Result<String> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(|err| ParserError::Serialize(err.to_string()))
            .loc("While serializing command line arguments")?;
        debug!("\n---- Command line args ----\n{}\n---", serialized);
        Ok(serialized)
    }

    /// Family file, required as soon as at least one pair of individuals is found related.
    ///
    /// # Errors
    /// - `ParserError::MissingFam` if `--fam` was not provided.
    pub fn fam_file(&self) -> Result<&Path> {
        self.fam.as_deref()
            .ok_or(ParserError::MissingFam)
            .loc("While fetching the family file")
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FileEntity {File, Directory}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File      => write!(f, "File"),
            Self::Directory => write!(f, "Directory"),
        }
    }
}

impl FileEntity {
    fn validate(self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File      => path.is_file(),
            Self::Directory => path.is_dir()
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(self, path.display().to_string()))
        }
    }
}

fn assert_filesystem_entity_is_valid(s: &OsStr, entity: FileEntity) -> Result<()> {
    use ParserError::MissingFileEntity;
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFileEntity(entity, path.display().to_string()))
            .loc("While parsing arguments.")
    }

    entity.validate(path).loc("While parsing arguments.")
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_filesystem_entity_is_valid(s, FileEntity::File)
        .loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}

/// Parse a kinship or IBS0 threshold. Value must be a finite number within [0, 1].
fn parse_threshold(s: &str) -> Result<f64> {
    use ParserError::{ParseThreshold, InvalidThreshold};
    const MIN_THRESHOLD: f64 = 0.0;
    const MAX_THRESHOLD: f64 = 1.0;

    let value = s.parse::<f64>()
        .map_err(|_| ParseThreshold(s.to_string()))
        .with_loc(|| format!("While parsing {s}"))?;

    match (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
        true  => Ok(value),
        false => Err(InvalidThreshold{value: s.to_string(), min: MIN_THRESHOLD, max: MAX_THRESHOLD})
            .with_loc(|| format!("While parsing {s}"))
    }
}
