//! Orderings offered on the course list.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{course::Course, error::DiscoveryError};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending by course id. Ids stand in for creation order; no creation
    /// timestamp reaches the catalog.
    #[default]
    Newest,
    Oldest,
    Az,
    Za,
    /// No popularity metric exists, so this sorts exactly like `Az`.
    Popular,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::Az,
        SortOrder::Za,
        SortOrder::Popular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Az => "az",
            SortOrder::Za => "za",
            SortOrder::Popular => "popular",
        }
    }

    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortOrder::Newest => b.id.cmp(&a.id),
            SortOrder::Oldest => a.id.cmp(&b.id),
            SortOrder::Az | SortOrder::Popular => compare_titles(&a.title, &b.title),
            SortOrder::Za => compare_titles(&b.title, &a.title),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s.trim())
            .ok_or_else(|| DiscoveryError::InvalidSortOrder(s.to_string()))
    }
}

/// Primary collation key: compatibility decomposition with accents dropped,
/// then lowercased. "Ética" files next to "etica", not after "z".
pub fn title_collation_key(title: &str) -> String {
    title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Folded key first, then the NFC form so composed and decomposed spellings
/// of one title stay adjacent, then the raw text to keep the order total.
fn compare_titles(a: &str, b: &str) -> Ordering {
    title_collation_key(a)
        .cmp(&title_collation_key(b))
        .then_with(|| a.nfc().cmp(b.nfc()))
        .then_with(|| a.cmp(b))
}

/// Stable sort into a new vector; the input slice is left untouched.
pub fn sort_courses<'a>(courses: &[&'a Course], order: SortOrder) -> Vec<&'a Course> {
    let mut sorted = courses.to_vec();
    sorted.sort_by(|a, b| order.compare(a, b));
    sorted
}
