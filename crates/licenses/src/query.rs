//! Record search and pagination.
//!
//! The caller owns the full record collection and feeds it in on every view
//! along with the search term, the page number, and the reference date. The
//! result is the visible page plus aggregates over the whole filtered set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::{ExpiryLevel, ExpiryStatus, classify};
use crate::record::Record;

/// Fixed number of records per page.
pub const PAGE_SIZE: usize = 10;

/// Normalized search request.
///
/// Deserialized input goes through [`SearchQuery::new`] as well, so the term
/// is always trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSearchQuery")]
pub struct SearchQuery {
    term: String,
    page: usize,
}

#[derive(Deserialize)]
struct RawSearchQuery {
    #[serde(default)]
    term: String,
    #[serde(default = "first_page")]
    page: usize,
}

fn first_page() -> usize {
    1
}

impl From<RawSearchQuery> for SearchQuery {
    fn from(raw: RawSearchQuery) -> Self {
        Self::new(&raw.term, raw.page)
    }
}

impl SearchQuery {
    /// `page` is 1-based. The term is trimmed and lower-cased.
    pub fn new(term: &str, page: usize) -> Self {
        Self {
            term: term.trim().to_lowercase(),
            page,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Index range of this page within a filtered set of `len` records.
    ///
    /// Page 0 and pages past the end produce an empty range.
    fn window(&self, len: usize) -> core::ops::Range<usize> {
        let Some(start) = self.page.checked_sub(1).map(|p| p.saturating_mul(PAGE_SIZE)) else {
            return 0..0;
        };
        let start = start.min(len);
        let end = start.saturating_add(PAGE_SIZE).min(len);
        start..end
    }
}

/// Occurrences per expiry level. All five levels are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub expired: usize,
    pub soon: usize,
    pub warn: usize,
    pub ok: usize,
    pub nofecha: usize,
}

impl LevelCounts {
    pub fn get(&self, level: ExpiryLevel) -> usize {
        match level {
            ExpiryLevel::Expired => self.expired,
            ExpiryLevel::Soon => self.soon,
            ExpiryLevel::Warn => self.warn,
            ExpiryLevel::Ok => self.ok,
            ExpiryLevel::NoDate => self.nofecha,
        }
    }

    pub fn record(&mut self, level: ExpiryLevel) {
        let slot = match level {
            ExpiryLevel::Expired => &mut self.expired,
            ExpiryLevel::Soon => &mut self.soon,
            ExpiryLevel::Warn => &mut self.warn,
            ExpiryLevel::Ok => &mut self.ok,
            ExpiryLevel::NoDate => &mut self.nofecha,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        ExpiryLevel::ALL.iter().map(|level| self.get(*level)).sum()
    }
}

/// A visible row: the record and its status against the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRow<'a> {
    pub record: &'a Record,
    pub status: ExpiryStatus,
}

/// Filtered, paginated view of a record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult<'a> {
    pub rows: Vec<PageRow<'a>>,
    pub page: usize,
    pub total_matching: usize,
    pub total_pages: usize,
    pub counts: LevelCounts,
}

impl<'a> QueryResult<'a> {
    /// Records on this page, in filtered-set order.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().map(|row| row.record)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Number of pages needed for `matching` records; never less than one.
pub fn total_pages(matching: usize) -> usize {
    matching.div_ceil(PAGE_SIZE).max(1)
}

/// Tally the expiry level of every record.
pub fn count_levels<'a>(records: impl IntoIterator<Item = &'a Record>, today: NaiveDate) -> LevelCounts {
    records
        .into_iter()
        .fold(LevelCounts::default(), |mut counts, record| {
            counts.record(classify(record, today).level);
            counts
        })
}

/// Filter `records` by `search_term`, cut out page `page`, and aggregate
/// expiry levels over the whole filtered set.
///
/// Input order is preserved. Out-of-range pages yield an empty page.
pub fn query<'a>(records: &'a [Record], search_term: &str, page: usize, today: NaiveDate) -> QueryResult<'a> {
    run(records, &SearchQuery::new(search_term, page), today)
}

/// [`query`] for an already-normalized [`SearchQuery`].
pub fn run<'a>(records: &'a [Record], search: &SearchQuery, today: NaiveDate) -> QueryResult<'a> {
    let filtered: Vec<&'a Record> = records.iter().filter(|r| r.matches(search)).collect();

    let counts = count_levels(filtered.iter().copied(), today);
    let rows = filtered[search.window(filtered.len())]
        .iter()
        .map(|&record| PageRow {
            record,
            status: classify(record, today),
        })
        .collect();

    QueryResult {
        rows,
        page: search.page(),
        total_matching: filtered.len(),
        total_pages: total_pages(filtered.len()),
        counts,
    }
}
