//! Parent-offspring trio inference from pairwise kinship estimates.
//!
//! Inference runs in two steps:
//! 1. [`Relationships::classify`] filters out unrelated pairs and sorts the remaining ones into
//!    "candidate parent-offspring" and "any relationship" adjacency lists.
//! 2. [`TrioResolver::resolve`] enumerates every (father, mother) pair among the parent candidates
//!    of each proband, and keeps those that are distinct, of the proper sex, and unrelated to each other.

mod thresholds;
pub use thresholds::Thresholds;

mod relationships;
pub use relationships::{Relationships, ClassifierError};

mod trio;
pub use trio::Trio;

mod resolver;
pub use resolver::{TrioResolver, ResolverError};

#[cfg(test)]
pub(crate) mod tests;
