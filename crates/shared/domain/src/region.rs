use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata for one region, keyed by its code in the catalog file.
///
/// Absent fields fall back to the same values the rest of the tooling assumes
/// (`en`, `$`, `USD`); unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionRecord {
    pub language: String,
    pub currency_symbol: String,
    pub currency_iso: String,
    pub status: String,
}

impl RegionRecord {
    /// Regions marked `active` in the catalog are fully provisioned vaults.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

impl Default for RegionRecord {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            currency_symbol: "$".to_owned(),
            currency_iso: "USD".to_owned(),
            status: String::new(),
        }
    }
}

/// Region code → metadata, always iterated in code order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCatalog(BTreeMap<String, RegionRecord>);

impl RegionCatalog {
    #[must_use]
    pub const fn new(regions: BTreeMap<String, RegionRecord>) -> Self {
        Self(regions)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionRecord)> {
        self.0.iter().map(|(code, record)| (code.as_str(), record))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&RegionRecord> {
        self.0.get(code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, RegionRecord)> for RegionCatalog {
    fn from_iter<I: IntoIterator<Item = (String, RegionRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
