use serde::{Deserialize, Serialize};

use crate::domain::{Person, SpeciesRef};

/// Paginated collection envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

pub type PeoplePage = Page<Person>;
pub type SpeciesPage = Page<SpeciesRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    pub url: SpeciesRef,
}

/// Number of pages needed to hold `count` records. An empty collection still
/// occupies page 1.
pub fn total_pages(count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}
