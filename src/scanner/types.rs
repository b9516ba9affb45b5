//! Common types for the scanner

use indexmap::{IndexMap, IndexSet};

/// Outcome of scanning a text body for tracked packages
///
/// Both collections preserve the order in which packages were first
/// recorded. A package never sits in both at once: recording a valid
/// version removes the name from `missing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Package name -> version number mentioned in the text.
    /// When a package is mentioned with valid versions on several lines,
    /// the last one wins.
    pub found: IndexMap<String, String>,
    /// Required packages not proven present, plus any package mentioned
    /// without a usable version number next to it
    pub missing: IndexSet<String>,
}
