//! Ordered catalog snapshot and its lookup primitives.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::types::MemeRecord;

/// Ordering used when listing trending memes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendOrder {
    /// `trendRank` ascending.
    #[default]
    Rank,
    /// `popularity` descending.
    Popularity,
}

impl TrendOrder {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Rank => "rank",
            Self::Popularity => "popularity",
        }
    }
}

impl std::str::FromStr for TrendOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rank" | "trend_rank" | "trendrank" => Ok(Self::Rank),
            "popularity" => Ok(Self::Popularity),
            other => Err(format!("unknown trend order: {other}")),
        }
    }
}

/// An immutable, ordered snapshot of meme records.
///
/// Records are held behind `Arc` so that a snapshot can be cloned cheaply and a
/// single record can be replaced without touching the others.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Arc<MemeRecord>>,
}

impl Catalog {
    /// Build a catalog, enforcing the per-record invariants and id uniqueness.
    pub fn from_records(records: Vec<MemeRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if let Err(e) = record.validate() {
                warn!("Rejected catalog record: {e}");
                return Err(e);
            }
            if !seen.insert(record.id.clone()) {
                warn!("Rejected duplicate catalog id: {}", record.id);
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records: records.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<MemeRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub(crate) const fn from_shared(records: Vec<Arc<MemeRecord>>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<MemeRecord>] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<MemeRecord>> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Exact, case-insensitive name lookup.
    #[must_use]
    pub fn find_by_name(&self, keyword: &str) -> Option<&Arc<MemeRecord>> {
        let keyword = keyword.trim().to_lowercase();
        self.records.iter().find(|r| r.name_equals(&keyword))
    }

    /// Staged keyword lookup.
    ///
    /// Stages, first success wins: exact name, exact alias, then (for keywords
    /// of two or more characters) name containment and alias containment. Each
    /// stage returns the earliest record in catalog order.
    #[must_use]
    pub fn find_by_keyword(&self, keyword: &str) -> Option<&Arc<MemeRecord>> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return None;
        }

        if let Some(found) = self.records.iter().find(|r| r.name_equals(&keyword)) {
            debug!("Keyword {keyword:?} matched name of {}", found.id);
            return Some(found);
        }

        if let Some(found) = self.records.iter().find(|r| r.alias_equals(&keyword)) {
            debug!("Keyword {keyword:?} matched alias of {}", found.id);
            return Some(found);
        }

        if keyword.chars().count() < 2 {
            return None;
        }

        let found = self
            .records
            .iter()
            .find(|r| r.name_contains(&keyword))
            .or_else(|| self.records.iter().find(|r| r.alias_contains(&keyword)));

        if let Some(record) = found {
            debug!("Keyword {keyword:?} partially matched {}", record.id);
        }
        found
    }

    /// Records ordered for a trending listing. `limit == 0` returns all.
    ///
    /// The sort is stable, so catalog order breaks ties.
    #[must_use]
    pub fn trending(&self, limit: usize, order: TrendOrder) -> Vec<Arc<MemeRecord>> {
        let mut sorted = self.records.clone();
        match order {
            TrendOrder::Rank => sorted.sort_by_key(|r| r.trend_rank),
            TrendOrder::Popularity => sorted.sort_by_key(|r| std::cmp::Reverse(r.popularity)),
        }
        if limit > 0 {
            sorted.truncate(limit);
        }
        sorted
    }

    /// Pick one record from a caller-supplied random seed.
    #[must_use]
    pub fn pick(&self, seed: u64) -> Option<&Arc<MemeRecord>> {
        if self.records.is_empty() {
            return None;
        }
        let len = self.records.len() as u64;
        let index = usize::try_from(seed % len).ok()?;
        self.records.get(index)
    }
}
