use std::fmt::{self, Display, Formatter};

/// A single pairwise relatedness estimate, as found in one row of a kinship table.
///
/// The pair is unordered: `id1` and `id2` only reflect the order of the input columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseRecord {
    pub id1    : String,
    pub id2    : String,
    pub kinship: f64,
    pub ibs0   : f64,
}

impl PairwiseRecord {
    pub fn new(id1: &str, id2: &str, kinship: f64, ibs0: f64) -> Self {
        Self { id1: id1.to_string(), id2: id2.to_string(), kinship, ibs0 }
    }

    /// Whether both columns name the same individual.
    #[inline]
    pub fn is_self_pair(&self) -> bool {
        self.id1 == self.id2
    }
}

impl Display for PairwiseRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} (kinship: {:.5}, IBS0: {:.5})", self.id1, self.id2, self.kinship, self.ibs0)
    }
}
