use pedigree::{Individual, Pedigree, PairwiseRecord};

/// Build a single-family pedigree out of `(id, sex_code)` tuples. Phenotypes are all missing (`-9`).
pub fn mock_pedigree(individuals: &[(&str, &str)]) -> Pedigree {
    individuals.iter()
        .map(|(id, sex)| Individual::new("FAM", id, "0", "0", sex, "-9"))
        .collect()
}

pub fn record(id1: &str, id2: &str, kinship: f64, ibs0: f64) -> PairwiseRecord {
    PairwiseRecord::new(id1, id2, kinship, ibs0)
}
