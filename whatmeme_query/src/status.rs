//! Trend status of a keyword.
//!
//! A catalog entry is trending by definition. Anything else is judged from the
//! post dates of recent search hits supplied by an external search client:
//! the share of posts from the last month decides hot, steady or faded.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use whatmeme_core::{Catalog, MemeRecord};

use crate::normalizer::normalize_query;

/// Percent cut-offs for [`TrendStatus::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThresholds {
    #[serde(default = "default_hot_percent")]
    pub hot_percent: u32,
    #[serde(default = "default_steady_percent")]
    pub steady_percent: u32,
}

const fn default_hot_percent() -> u32 {
    80
}
const fn default_steady_percent() -> u32 {
    40
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            hot_percent: default_hot_percent(),
            steady_percent: default_steady_percent(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStatus {
    Hot,
    Steady,
    Faded,
}

impl TrendStatus {
    #[must_use]
    pub const fn classify(recent_percent: u32, thresholds: StatusThresholds) -> Self {
        if recent_percent >= thresholds.hot_percent {
            Self::Hot
        } else if recent_percent >= thresholds.steady_percent {
            Self::Steady
        } else {
            Self::Faded
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Hot => "hot",
            Self::Steady => "steady",
            Self::Faded => "faded",
        }
    }
}

impl std::fmt::Display for TrendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a status check.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum StatusVerdict {
    /// The keyword names a catalog entry.
    Catalog { meme: Arc<MemeRecord> },
    /// Judged from dated search hits.
    Evidence {
        keyword: String,
        recent_percent: u32,
        total: usize,
        status: TrendStatus,
    },
}

/// Parse a `YYYYMMDD` post date.
#[must_use]
pub fn parse_post_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y%m%d").ok()
}

/// Whether `date` falls after the same day one calendar month before `today`.
#[must_use]
pub fn is_within_one_month(date: NaiveDate, today: NaiveDate) -> bool {
    today
        .checked_sub_months(Months::new(1))
        .is_some_and(|month_ago| date > month_ago)
}

/// Rounded percentage of `postdates` within one month of `today`.
///
/// Unparseable dates count toward the total but never as recent.
#[must_use]
pub fn recent_percentage(postdates: &[String], today: NaiveDate) -> u32 {
    if postdates.is_empty() {
        return 0;
    }
    let recent = postdates
        .iter()
        .filter_map(|raw| parse_post_date(raw))
        .filter(|date| is_within_one_month(*date, today))
        .count();

    let percent = (recent as f64 / postdates.len() as f64 * 100.0).round();
    percent as u32
}

/// Check whether `keyword` is still trending.
#[must_use]
pub fn check_status(
    catalog: &Catalog,
    keyword: &str,
    postdates: &[String],
    today: NaiveDate,
    thresholds: StatusThresholds,
) -> StatusVerdict {
    let normalized = normalize_query(keyword);
    let lookup = if normalized.is_empty() {
        keyword.trim()
    } else {
        normalized.as_str()
    };

    if let Some(meme) = catalog.find_by_name(lookup) {
        debug!("Status of {keyword:?} answered from catalog entry {}", meme.id);
        return StatusVerdict::Catalog {
            meme: Arc::clone(meme),
        };
    }

    let recent_percent = recent_percentage(postdates, today);
    let status = TrendStatus::classify(recent_percent, thresholds);
    debug!(
        "Status of {keyword:?} from {} posts: {recent_percent}% recent -> {status}",
        postdates.len()
    );

    StatusVerdict::Evidence {
        keyword: lookup.to_string(),
        recent_percent,
        total: postdates.len(),
        status,
    }
}
