//! Taxonomy parsing and rank filtering
//!
//! A classification string such as `Mammalia/Carnivora/Felidae/Pantherini/Panthera`
//! is decomposed positionally into the five fixed ranks. Segments past the
//! fifth are dropped; missing trailing ranks stay empty.

use serde::{Deserialize, Serialize};

use super::record::VideoRecord;

/// Number of levels in a taxonomy
pub const TAXONOMY_DEPTH: usize = 5;

/// Separator between levels in a classification string
pub const LEVEL_SEPARATOR: char = '/';

/// Five-level taxonomic decomposition of a classification string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub class: String,
    pub order: String,
    pub family: String,
    pub tribe: String,
    pub genus: String,
}

/// A taxonomy level name, usable as a filter key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Class,
    Order,
    Family,
    Tribe,
    Genus,
}

impl Rank {
    /// All ranks, outermost first
    pub const ALL: [Rank; TAXONOMY_DEPTH] = [
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Tribe,
        Rank::Genus,
    ];

    /// Parse a rank name, ignoring ASCII case. Unknown names give `None`.
    pub fn parse(name: &str) -> Option<Rank> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Class => "class",
            Rank::Order => "order",
            Rank::Family => "family",
            Rank::Tribe => "tribe",
            Rank::Genus => "genus",
        }
    }
}

impl Taxonomy {
    /// Value stored at `rank`
    pub fn level(&self, rank: Rank) -> &str {
        match rank {
            Rank::Class => &self.class,
            Rank::Order => &self.order,
            Rank::Family => &self.family,
            Rank::Tribe => &self.tribe,
            Rank::Genus => &self.genus,
        }
    }

    fn level_mut(&mut self, rank: Rank) -> &mut String {
        match rank {
            Rank::Class => &mut self.class,
            Rank::Order => &mut self.order,
            Rank::Family => &mut self.family,
            Rank::Tribe => &mut self.tribe,
            Rank::Genus => &mut self.genus,
        }
    }
}

/// Parse a `/`-delimited classification string into a [`Taxonomy`].
///
/// Segments are assigned by position, so `"A//C"` leaves `order` empty and
/// sets `family` to `C`. Segments are not trimmed.
pub fn parse_taxonomy(classification: &str) -> Taxonomy {
    let mut taxonomy = Taxonomy::default();
    for (rank, part) in Rank::ALL
        .into_iter()
        .zip(classification.split(LEVEL_SEPARATOR))
    {
        *taxonomy.level_mut(rank) = part.to_string();
    }
    taxonomy
}

/// Per-character fold through upper case: `ſ`/`s`/`S` and `ς`/`σ`/`Σ`
/// each end up as one lower-case form. No word-final sigma rule.
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

/// Case-insensitive equality that does not depend on the process locale
fn eq_fold(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || fold(a).eq(fold(b))
}

/// Keep the records whose taxonomy value at `rank` equals `value`, ignoring case.
///
/// `rank` must name one of the five ranks (case-insensitively); any other
/// rank yields an empty result rather than an error. Input order is kept.
pub fn filter_by_taxonomy(records: &[VideoRecord], rank: &str, value: &str) -> Vec<VideoRecord> {
    let Some(rank) = Rank::parse(rank) else {
        tracing::debug!("Unrecognized taxonomy rank {:?}", rank);
        return Vec::new();
    };

    records
        .iter()
        .filter(|record| eq_fold(record.taxonomy.level(rank), value))
        .cloned()
        .collect()
}
