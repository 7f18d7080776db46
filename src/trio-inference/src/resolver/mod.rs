use itertools::iproduct;
use log::{debug, info, trace};

use crate::{Relationships, Trio};

mod error;
pub use error::ResolverError;

/// Running count of rejected (father, mother) candidate pairs, per exclusion rule.
#[derive(Debug, Default)]
struct Exclusions {
    same_individual: usize,
    related_parents: usize,
    sex_mismatch   : usize,
}

/// Enumerates (father, mother, proband) trios out of a set of classified relationships.
pub struct TrioResolver<'rel, 'ped> {
    relationships: &'rel Relationships<'ped>,
}

impl<'rel, 'ped> TrioResolver<'rel, 'ped> {
    pub fn new(relationships: &'rel Relationships<'ped>) -> Self {
        Self { relationships }
    }

    /// Search for every valid trio.
    ///
    /// For each proband carrying at least one parent-offspring candidate, the full ordered cross product of its
    /// candidates is scanned. A `(father, mother)` pair is kept if:
    /// 1. father and mother are two distinct individuals.
    /// 2. mother is not a relative of the father.
    /// 3. father is a male, and mother is a female. Individuals of unknown sex are never retained.
    ///
    /// Probands with multiple valid pairs yield multiple trios. Output order follows the family file order of the
    /// probands, then the order of the cross product.
    ///
    /// # Errors
    /// - `ResolverError::MissingMetadata` if a candidate cannot be found within the pedigree.
    pub fn resolve(&self) -> Result<Vec<Trio>, ResolverError> {
        let pedigree = self.relationships.pedigree();
        let mut trios = Vec::new();
        let mut exclusions = Exclusions::default();
        let mut ambiguous_probands = 0;

        for (proband_idx, candidates) in self.relationships.iter_probands() {
            let proband = pedigree.get_index(proband_idx)?;
            let found_before = trios.len();

            for (&pat_idx, &mat_idx) in iproduct!(candidates, candidates) {
                // ---- Same individual in both roles.
                if pat_idx == mat_idx {
                    exclusions.same_individual += 1;
                    continue
                }

                // ---- Candidate parents are themselves related (e.g. siblings).
                if self.relationships.relative_indices(pat_idx).contains(&mat_idx) {
                    exclusions.related_parents += 1;
                    continue
                }

                let father = pedigree.get_index(pat_idx)?;
                let mother = pedigree.get_index(mat_idx)?;
                if !(father.is_male() && mother.is_female()) {
                    trace!("Rejected parents of {}: {} ({}) and {} ({})", proband.id, father.id, father.sex, mother.id, mother.sex);
                    exclusions.sex_mismatch += 1;
                    continue
                }

                let trio = Trio::new(proband, father, mother);
                trace!("Found trio: {trio}");
                trios.push(trio);
            }

            if trios.len() - found_before > 1 {
                debug!("Proband {} has {} candidate parent pairs", proband.id, trios.len() - found_before);
                ambiguous_probands += 1;
            }
        }

        debug!("Excluded candidate parent pairs - same individual: {}, related parents: {}, sex mismatch or unknown: {}",
            exclusions.same_individual, exclusions.related_parents, exclusions.sex_mismatch
        );
        if ambiguous_probands > 0 {
            info!("{ambiguous_probands} proband(s) have more than one candidate parent pair. All of them are reported.");
        }
        Ok(trios)
    }
}
