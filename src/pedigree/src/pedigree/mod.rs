use ahash::RandomState;
use indexmap::IndexMap;
use log::warn;

use crate::Individual;

mod error;
pub use error::PedigreeError;

/// Per-individual metadata, as loaded from a family file.
///
/// Individuals are keyed by their IID and keep the order in which they first appeared within
/// the family file. Re-inserting an existing IID overwrites its metadata in place.
#[derive(Debug, Clone, Default)]
pub struct Pedigree {
    individuals: IndexMap<String, Individual, RandomState>,
}

impl Pedigree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { individuals: IndexMap::with_capacity_and_hasher(capacity, RandomState::new()) }
    }

    /// Insert an individual. If its IID is already known, the previous entry is replaced but its position is kept.
    pub fn insert(&mut self, individual: Individual) {
        if let Some(previous) = self.individuals.insert(individual.id.clone(), individual) {
            warn!("Individual '{}' is defined multiple times within the family file. Using its last definition.", previous.id);
        }
    }

    /// Fetch the metadata of an individual.
    /// # Errors
    /// - `PedigreeError::MissingMetadata` if `id` is not part of the pedigree.
    pub fn get(&self, id: &str) -> Result<&Individual, PedigreeError> {
        self.individuals.get(id).ok_or_else(|| PedigreeError::MissingMetadata(id.to_string()))
    }

    /// Position of an individual within the pedigree.
    /// # Errors
    /// - `PedigreeError::MissingMetadata` if `id` is not part of the pedigree.
    pub fn index_of(&self, id: &str) -> Result<usize, PedigreeError> {
        self.individuals.get_index_of(id).ok_or_else(|| PedigreeError::MissingMetadata(id.to_string()))
    }

    /// Fetch an individual from its position within the pedigree.
    /// # Errors
    /// - `PedigreeError::InvalidIndex` if `index` is out of bounds.
    pub fn get_index(&self, index: usize) -> Result<&Individual, PedigreeError> {
        self.individuals.get_index(index)
            .map(|(_, ind)| ind)
            .ok_or(PedigreeError::InvalidIndex(index, self.len()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterate over individuals, in family file order.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }
}

impl FromIterator<Individual> for Pedigree {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        let mut pedigree = Self::new();
        iter.into_iter().for_each(|ind| pedigree.insert(ind));
        pedigree
    }
}
