use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemeRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub meaning: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Situational keywords such as "퇴근" or "시험".
    #[serde(default)]
    pub contexts: Vec<String>,
    /// Emotional keywords such as "신남".
    #[serde(default)]
    pub moods: Vec<String>,
    /// Legacy ordering, lower is more prominent.
    pub trend_rank: u32,
    /// Primary ranking signal, 0..=100.
    pub popularity: u32,
    #[serde(default)]
    pub updated_at: String,
}

impl MemeRecord {
    /// Check the per-record invariants enforced at ingestion.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                id: self.id.clone(),
                field: "id",
            });
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                id: self.id.clone(),
                field: "name",
            });
        }
        if self.meaning.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                id: self.id.clone(),
                field: "meaning",
            });
        }
        if self.popularity > 100 {
            return Err(CatalogError::PopularityOutOfRange {
                id: self.id.clone(),
                value: self.popularity,
            });
        }
        if self.trend_rank == 0 {
            return Err(CatalogError::InvalidTrendRank {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Case-insensitive exact match against the name.
    #[must_use]
    pub fn name_equals(&self, keyword_lower: &str) -> bool {
        self.name.to_lowercase() == keyword_lower
    }

    /// Case-insensitive exact match against any alias.
    #[must_use]
    pub fn alias_equals(&self, keyword_lower: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.to_lowercase() == keyword_lower)
    }

    #[must_use]
    pub fn name_contains(&self, keyword_lower: &str) -> bool {
        self.name.to_lowercase().contains(keyword_lower)
    }

    #[must_use]
    pub fn alias_contains(&self, keyword_lower: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(keyword_lower))
    }
}
