extern crate parser;
extern crate logger;

use parser::Cli;
use logger::Logger;

use kin_io::{
    parse::create_parent_directory,
    read::{FamReader, KinshipReader},
    write::GenericWriter,
};
use located_error::LocatedError;
use trio_inference::{ClassifierError, Relationships, Thresholds, TrioResolver};

#[macro_use]
extern crate log;

use anyhow::Result;

/// Infer parent-offspring trios from the kinship table and family file provided through `cli`, and write them.
///
/// Empty inputs, either raw or once unrelated pairs have been filtered out, are not errors: a warning is emitted
/// and no output file is created.
///
/// # Errors
/// - if `--fam` is required but was not provided.
/// - if any of the input files is malformed.
/// - if a related individual is missing from the family file.
/// - if the trio file or the plot cannot be written.
pub fn run(cli: Cli) -> Result<()> {
    // ----------------------------- Read pairwise kinship estimates.
    let spinner = Logger::spinner("Reading kinship estimates");
    let records = KinshipReader::new(&cli.kin, cli.zip)?.read_records(&spinner)?;
    spinner.finish_and_clear();
    info!("Found {} pairwise kinship estimates in {}", records.len(), cli.kin.display());

    if records.is_empty() {
        warn!("{} does not contain any pairwise kinship estimate. No trio file will be written.", cli.kin.display());
        return Ok(())
    }

    // ----------------------------- Load the metadata of every individual.
    let pedigree = FamReader::new(cli.fam_file()?)?.read_pedigree()?;

    // ----------------------------- Classify relationships.
    let thresholds = Thresholds::new(cli.min_kin, cli.max_par, cli.min_dup);
    debug!("Thresholds: {thresholds}");
    let relationships = match Relationships::classify(&records, &pedigree, &thresholds) {
        Ok(relationships) => relationships,
        Err(e @ ClassifierError::EmptyInput{..}) => {
            warn!("{e}. No trio file will be written.");
            return Ok(())
        },
        Err(e) => return Err(e).loc("While classifying pairwise relationships"),
    };
    info!("Retained {} out of {} estimates: {} related pair(s), including {} parent-offspring candidate(s)",
        relationships.num_retained(), records.len(), relationships.num_related_pairs(), relationships.num_parent_pairs()
    );

    // ----------------------------- Search for trios.
    let trios = TrioResolver::new(&relationships).resolve().loc("While searching for trios")?;
    info!("Found {} trio(s)", trios.len());

    // ----------------------------- Write results.
    if trios.is_empty() {
        warn!("No trio could be inferred. No trio file will be written.");
    } else {
        create_parent_directory(&cli.out)?;
        GenericWriter::new(&cli.out)?.write_iter(&trios)?;
        info!("Trios written to {}", cli.out.display());
    }

    // ----------------------------- Optional diagnostic plot.
    if let Some(plot) = &cli.plot {
        create_parent_directory(plot)?;
        kin_plot::scatter_plot(&records, &thresholds, plot)?;
    }
    Ok(())
}
