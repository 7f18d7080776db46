use std::fmt::{self, Display, Formatter};

use log::warn;
use pedigree::PairwiseRecord;

/// Kinship and IBS0 cutoffs used to classify pairwise relationships.
/// # Fields:
/// - `min_kinship`          : pairs with a kinship coefficient lower or equal to this value are considered unrelated.
///                            The default of 0.09 lies around the expected kinship of half-siblings.
/// - `max_parent_ibs0`      : parent-offspring duos must display an IBS0 rate strictly lower than this value.
/// - `min_duplicate_kinship`: parent-offspring duos must display a kinship strictly lower than this value. Anything
///                            above is treated as a duplicate sample or monozygotic twin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub min_kinship          : f64,
    pub max_parent_ibs0      : f64,
    pub min_duplicate_kinship: f64,
}

impl Thresholds {
    pub const DEFAULT_MIN_KINSHIP          : f64 = 0.09;
    pub const DEFAULT_MAX_PARENT_IBS0      : f64 = 0.01;
    pub const DEFAULT_MIN_DUPLICATE_KINSHIP: f64 = 0.35;

    pub fn new(min_kinship: f64, max_parent_ibs0: f64, min_duplicate_kinship: f64) -> Self {
        let thresholds = Self { min_kinship, max_parent_ibs0, min_duplicate_kinship };
        if min_kinship >= min_duplicate_kinship {
            warn!("Minimum kinship ({min_kinship}) is greater or equal to the duplicate kinship threshold ({min_duplicate_kinship}). No parent-offspring duo can be detected with these values.");
        }
        thresholds
    }

    /// `true` if the pair should be considered related at all. NaN kinship values never pass.
    #[inline]
    pub fn is_related(&self, record: &PairwiseRecord) -> bool {
        record.kinship > self.min_kinship
    }

    /// `true` if the pair qualifies as a parent-offspring candidate duo.
    #[inline]
    pub fn is_parent_offspring(&self, record: &PairwiseRecord) -> bool {
        record.ibs0 < self.max_parent_ibs0 && record.kinship < self.min_duplicate_kinship
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_kinship          : Self::DEFAULT_MIN_KINSHIP,
            max_parent_ibs0      : Self::DEFAULT_MAX_PARENT_IBS0,
            min_duplicate_kinship: Self::DEFAULT_MIN_DUPLICATE_KINSHIP,
        }
    }
}

impl Display for Thresholds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "kinship > {} | parent-offspring: IBS0 < {} and kinship < {}",
            self.min_kinship, self.max_parent_ibs0, self.min_duplicate_kinship
        )
    }
}
