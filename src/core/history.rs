//! Browsing saved entries: filter by date, newest first, paginated.

use crate::core::logic::Core;
use crate::models::{DaySummary, Entry};

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub entry: Entry,
    pub summary: DaySummary,
}

#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub rows: Vec<HistoryRow>,
    /// 1-based, already clamped into `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    pub total_entries: usize,
}

impl HistoryPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub struct HistoryLogic;

impl HistoryLogic {
    /// Entries whose date contains `filter` (all when `None` or empty),
    /// newest date first.
    pub fn filter_sorted(entries: &[Entry], filter: Option<&str>) -> Vec<Entry> {
        let mut out: Vec<Entry> = match filter.map(str::trim) {
            Some(f) if !f.is_empty() => entries
                .iter()
                .filter(|e| e.date.contains(f))
                .cloned()
                .collect(),
            _ => entries.to_vec(),
        };

        // YYYY-MM-DD sorts lexicographically
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    pub fn page(
        entries: &[Entry],
        filter: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> HistoryPage {
        let page_size = page_size.max(1);
        let sorted = Self::filter_sorted(entries, filter);

        let total_entries = sorted.len();
        let total_pages = total_entries.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        let rows = sorted
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .map(|entry| {
                let summary = Core::build_daily_summary(&entry);
                HistoryRow { entry, summary }
            })
            .collect();

        HistoryPage {
            rows,
            page,
            total_pages,
            total_entries,
        }
    }
}
