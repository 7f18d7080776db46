use std::fmt::{self, Display, Formatter};

use crate::Sex;

/// One row of a PLINK `.fam` family file.
/// # Fields:
/// - `family_id`  : family (FID) grouping identifier.
/// - `id`         : within-family individual identifier (IID). Used as the lookup key.
/// - `paternal_id`: father IID, as declared in the family file (`0` if unknown). Pass-through only.
/// - `maternal_id`: mother IID, as declared in the family file (`0` if unknown). Pass-through only.
/// - `sex`        : parsed sex code.
/// - `sex_code`   : sex code, exactly as it was found within the family file.
/// - `phenotype`  : opaque phenotype value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub family_id  : String,
    pub id         : String,
    pub paternal_id: String,
    pub maternal_id: String,
    pub sex        : Sex,
    pub sex_code   : String,
    pub phenotype  : String,
}

impl Individual {
    pub fn new(family_id: &str, id: &str, paternal_id: &str, maternal_id: &str, sex_code: &str, phenotype: &str) -> Self {
        Self {
            family_id  : family_id.to_string(),
            id         : id.to_string(),
            paternal_id: paternal_id.to_string(),
            maternal_id: maternal_id.to_string(),
            sex        : sex_code.parse().unwrap_or_default(),
            sex_code   : sex_code.to_string(),
            phenotype  : phenotype.to_string(),
        }
    }

    #[must_use]
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    #[must_use]
    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {} {}",
            self.family_id, self.id, self.paternal_id, self.maternal_id, self.sex_code, self.phenotype
        )
    }
}
