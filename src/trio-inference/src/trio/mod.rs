use std::fmt::{self, Display, Formatter};

use pedigree::Individual;

/// A resolved (father, mother, proband) relationship, carrying the proband's metadata.
///
/// Displays as a tab-separated line: `FID  IID  PAT  MAT  SEX  PHENOTYPE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trio {
    family_id : String,
    proband_id: String,
    father_id : String,
    mother_id : String,
    sex       : String,
    phenotype : String,
}

impl Trio {
    /// The family identifier, sex code and phenotype are inherited from the proband, exactly as they were found in
    /// the family file.
    pub fn new(proband: &Individual, father: &Individual, mother: &Individual) -> Self {
        Self {
            family_id : proband.family_id.clone(),
            proband_id: proband.id.clone(),
            father_id : father.id.clone(),
            mother_id : mother.id.clone(),
            sex       : proband.sex_code.clone(),
            phenotype : proband.phenotype.clone(),
        }
    }

    pub fn family_id(&self) -> &str {
        &self.family_id
    }

    pub fn proband_id(&self) -> &str {
        &self.proband_id
    }

    pub fn father_id(&self) -> &str {
        &self.father_id
    }

    pub fn mother_id(&self) -> &str {
        &self.mother_id
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    pub fn phenotype(&self) -> &str {
        &self.phenotype
    }
}

impl Display for Trio {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}\t{}\t{}",
            self.family_id, self.proband_id, self.father_id, self.mother_id, self.sex, self.phenotype
        )
    }
}
