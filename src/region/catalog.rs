// src/region/catalog.rs
use std::collections::HashSet;

/// The canonical list of real region names. Anything else is a pseudo-region.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    names: HashSet<String>,
}

impl RegionCatalog {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
