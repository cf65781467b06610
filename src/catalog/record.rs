use serde::{Deserialize, Serialize};

use super::taxonomy::{parse_taxonomy, Taxonomy};

/// One catalog entry, derived from one directory under the catalog root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Base name of the entry directory; addresses the stream endpoint
    pub filename: String,
    /// Trimmed raw classification text
    pub classification: String,
    /// Always derived from `classification`
    pub taxonomy: Taxonomy,
}

impl VideoRecord {
    /// Build a record, deriving the taxonomy from `classification`
    pub fn new(
        filename: String,
        title: String,
        author: String,
        description: String,
        classification: String,
    ) -> Self {
        let taxonomy = parse_taxonomy(&classification);
        Self {
            title,
            author,
            description,
            filename,
            classification,
            taxonomy,
        }
    }

    /// Record for an entry with no metadata at all
    #[cfg(test)]
    pub fn bare(filename: impl Into<String>) -> Self {
        Self::new(
            filename.into(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        )
    }
}
