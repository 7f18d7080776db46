use ahash::AHashSet;
use log::{debug, trace, warn};

use pedigree::{Pedigree, PedigreeError, PairwiseRecord};

use crate::Thresholds;

mod error;
pub use error::ClassifierError;

/// Per-individual adjacency lists of a set of pairwise kinship estimates.
///
/// Both lists are indexed by the position of each individual within the `Pedigree`, cover every member of the
/// pedigree, and are filled symmetrically: if `B` is listed under `A`, then `A` is listed under `B`.
/// # Fields:
/// - `pedigree`         : metadata of all individuals. Defines the indexing of both adjacency lists.
/// - `parent_candidates`: pairs that passed the parent-offspring test.
/// - `any_relation`     : every pair that passed the minimum kinship threshold.
/// - `retained`         : number of input records kept after kinship filtration.
#[derive(Debug)]
pub struct Relationships<'ped> {
    pedigree         : &'ped Pedigree,
    parent_candidates: Vec<Vec<usize>>,
    any_relation     : Vec<Vec<usize>>,
    retained         : usize,
}

impl<'ped> Relationships<'ped> {
    /// Filter and classify a set of pairwise records.
    ///
    /// Records whose kinship is lower or equal to `thresholds.min_kinship` are discarded. Every remaining record is
    /// added to `any_relation`, and to `parent_candidates` if it additionally passes the parent-offspring test.
    /// Repeated records are not merged: each one adds a new entry to the adjacency lists.
    ///
    /// # Errors
    /// - `ClassifierError::EmptyInput` if no record survives the kinship filter.
    /// - `ClassifierError::MissingMetadata` if a retained record names an individual missing from `pedigree`.
    pub fn classify(records: &[PairwiseRecord], pedigree: &'ped Pedigree, thresholds: &Thresholds) -> Result<Self, ClassifierError> {
        let mut parent_candidates = vec![Vec::new(); pedigree.len()];
        let mut any_relation      = vec![Vec::new(); pedigree.len()];

        let mut retained = 0;
        let mut seen_pairs = AHashSet::new();
        let mut duplicates = 0;
        for record in records.iter().filter(|record| thresholds.is_related(record)) {
            let i = pedigree.index_of(&record.id1)?;
            let j = pedigree.index_of(&record.id2)?;

            if record.is_self_pair() {
                warn!("Found a kinship estimate between {} and itself: {record}", record.id1);
            }

            if !seen_pairs.insert((i.min(j), i.max(j))) {
                duplicates += 1;
            }

            if thresholds.is_parent_offspring(record) {
                trace!("Parent-offspring candidate: {record}");
                parent_candidates[i].push(j);
                parent_candidates[j].push(i);
            }
            any_relation[i].push(j);
            any_relation[j].push(i);
            retained += 1;
        }

        if retained == 0 {
            return Err(ClassifierError::EmptyInput{records: records.len(), min_kinship: thresholds.min_kinship})
        }

        if duplicates > 0 {
            warn!("Found {duplicates} repeated kinship estimate(s) for an already seen pair of individuals. \
                Repeated estimates are not merged and may produce duplicated trios."
            );
        }

        let relationships = Self { pedigree, parent_candidates, any_relation, retained };
        debug!("Retained {retained} out of {} records: {} parent-offspring candidate pair(s), {} related pair(s)",
            records.len(), relationships.num_parent_pairs(), relationships.num_related_pairs()
        );
        Ok(relationships)
    }

    /// Metadata of the individuals covered by these relationships.
    #[inline]
    pub fn pedigree(&self) -> &'ped Pedigree {
        self.pedigree
    }

    /// Parent-offspring candidates of a given individual, in input order.
    pub fn parent_candidates(&self, id: &str) -> Result<Vec<&'ped str>, PedigreeError> {
        self.resolve_ids(&self.parent_candidates[self.pedigree.index_of(id)?])
    }

    /// Every individual related to `id`, in input order.
    pub fn relatives(&self, id: &str) -> Result<Vec<&'ped str>, PedigreeError> {
        self.resolve_ids(&self.any_relation[self.pedigree.index_of(id)?])
    }

    /// Whether `b` was found related to `a`.
    pub fn are_related(&self, a: &str, b: &str) -> Result<bool, PedigreeError> {
        let (a, b) = (self.pedigree.index_of(a)?, self.pedigree.index_of(b)?);
        Ok(self.relative_indices(a).contains(&b))
    }

    #[inline]
    pub(crate) fn relative_indices(&self, index: usize) -> &[usize] {
        &self.any_relation[index]
    }

    /// Iterate over the pedigree index of every individual carrying at least one parent-offspring candidate,
    /// in family file order.
    pub(crate) fn iter_probands(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.parent_candidates.iter()
            .enumerate()
            .filter(|(_, candidates)| !candidates.is_empty())
            .map(|(index, candidates)| (index, candidates.as_slice()))
    }

    /// Number of records that passed the minimum kinship filter.
    #[inline]
    pub fn num_retained(&self) -> usize {
        self.retained
    }

    /// Number of (possibly repeated) parent-offspring candidate pairs.
    pub fn num_parent_pairs(&self) -> usize {
        self.parent_candidates.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Number of (possibly repeated) related pairs.
    pub fn num_related_pairs(&self) -> usize {
        self.any_relation.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn resolve_ids(&self, indices: &[usize]) -> Result<Vec<&'ped str>, PedigreeError> {
        let pedigree: &'ped Pedigree = self.pedigree;
        indices.iter()
            .map(|&index| pedigree.get_index(index).map(|ind| ind.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{mock_pedigree, record};

    #[test]
    fn unrelated_records_are_discarded() -> Result<(), ClassifierError> {
        let pedigree = mock_pedigree(&[("A", "1"), ("B", "1"), ("C", "2"), ("D", "2")]);
        let records = [
            record("A", "B", 0.25, 0.001),
            record("A", "C", 0.09, 0.001), // kinship <= min_kinship
            record("C", "D", 0.01, 0.200),
        ];
        let relationships = Relationships::classify(&records, &pedigree, &Thresholds::default())?;

        assert_eq!(relationships.num_retained(), 1);
        assert_eq!(relationships.relatives("A")?, ["B"]);
        assert!(relationships.relatives("C")?.is_empty());
        assert!(relationships.parent_candidates("C")?.is_empty());
        assert!(relationships.relatives("D")?.is_empty());
        Ok(())
    }

    #[test]
    fn adjacency_is_symmetric() -> Result<(), ClassifierError> {
        let pedigree = mock_pedigree(&[("A", "1"), ("B", "2"), ("C", "1"), ("D", "2")]);
        let records = [
            record("A", "B", 0.25, 0.001),
            record("C", "A", 0.12, 0.030),
            record("D", "B", 0.49, 0.000),
        ];
        let relationships = Relationships::classify(&records, &pedigree, &Thresholds::default())?;
        for a in ["A", "B", "C", "D"] {
            for b in relationships.relatives(a)? {
                assert!(relationships.relatives(b)?.contains(&a));
            }
            for b in relationships.parent_candidates(a)? {
                assert!(relationships.parent_candidates(b)?.contains(&a));
            }
        }
        assert_eq!(relationships.num_parent_pairs(), 1);
        assert_eq!(relationships.num_related_pairs(), 3);
        Ok(())
    }

    #[test]
    fn duplicate_sample_is_related_only() -> Result<(), ClassifierError> {
        let pedigree = mock_pedigree(&[("A", "1"), ("B", "2")]);
        let records = [record("A", "B", 0.45, 0.001)];
        let relationships = Relationships::classify(&records, &pedigree, &Thresholds::default())?;
        assert!(relationships.parent_candidates("A")?.is_empty());
        assert!(relationships.parent_candidates("B")?.is_empty());
        assert!(relationships.are_related("A", "B")?);
        assert!(relationships.are_related("B", "A")?);
        assert_eq!(relationships.iter_probands().count(), 0);
        Ok(())
    }

    #[test]
    fn repeated_records_are_kept() -> Result<(), ClassifierError> {
        let pedigree = mock_pedigree(&[("A", "1"), ("B", "2")]);
        let records = [record("A", "B", 0.25, 0.001), record("B", "A", 0.25, 0.001)];
        let relationships = Relationships::classify(&records, &pedigree, &Thresholds::default())?;
        assert_eq!(relationships.parent_candidates("A")?, ["B", "B"]);
        assert_eq!(relationships.relatives("B")?, ["A", "A"]);
        Ok(())
    }

    #[test]
    fn self_pair_is_kept() -> Result<(), ClassifierError> {
        let pedigree = mock_pedigree(&[("A", "1"), ("P", "2"), ("M", "2")]);
        let records = [
            record("A", "A", 0.4, 0.0),
            record("P", "A", 0.2, 0.001),
            record("P", "M", 0.2, 0.001),
        ];
        let relationships = Relationships::classify(&records, &pedigree, &Thresholds::default())?;
        assert_eq!(relationships.num_retained(), 3);
        assert_eq!(relationships.parent_candidates("A")?, ["A", "A", "P"]);
        assert_eq!(relationships.num_parent_pairs(), 3);

        let trios = crate::TrioResolver::new(&relationships).resolve().map_err(|crate::ResolverError::MissingMetadata(e)| e)?;
        assert!(trios.iter().all(|trio| trio.father_id() != trio.mother_id()));
        assert!(trios.iter().all(|trio| trio.proband_id() != "A"));
        Ok(())
    }

    #[test]
    fn empty_after_filtration() {
        let pedigree = mock_pedigree(&[("A", "1"), ("B", "2")]);
        let records = [record("A", "B", 0.01, 0.2)];
        let got = Relationships::classify(&records, &pedigree, &Thresholds::default());
        assert!(matches!(got, Err(ClassifierError::EmptyInput{records: 1, ..})));

        let got = Relationships::classify(&[], &pedigree, &Thresholds::default());
        assert!(matches!(got, Err(ClassifierError::EmptyInput{records: 0, ..})));
    }

    #[test]
    fn missing_metadata_is_fatal() {
        let pedigree = mock_pedigree(&[("A", "1")]);
        let records = [record("A", "Z", 0.25, 0.001)];
        let got = Relationships::classify(&records, &pedigree, &Thresholds::default());
        assert!(matches!(got, Err(ClassifierError::MissingMetadata(PedigreeError::MissingMetadata(id))) if id == "Z"));
    }

    #[test]
    fn filtered_records_do_not_need_metadata() -> Result<(), ClassifierError> {
        let pedigree = mock_pedigree(&[("A", "1"), ("B", "2")]);
        let records = [record("A", "B", 0.25, 0.001), record("A", "Z", 0.01, 0.3)];
        let relationships = Relationships::classify(&records, &pedigree, &Thresholds::default())?;
        assert_eq!(relationships.num_retained(), 1);
        Ok(())
    }
}
