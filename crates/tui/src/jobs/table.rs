//! Filter, sort, and paging state for the jobs table.
//!
//! Responsibilities:
//! - Hold the global text filter, type/status filters, sort, and page index.
//! - Project a snapshot into the visible page of row indices.
//!
//! Does NOT handle:
//! - Matching and ordering rules (see `jobwatch_client::query`).
//! - Row selection (owned by the app's `TableState`).
//!
//! Invariants:
//! - The snapshot slice is never mutated; views are index lists into it.
//! - Any filter change resets the page to 0.
//! - `view` clamps the page index when the filtered set shrinks.

use chrono::{DateTime, Utc};
use jobwatch_client::query;
use jobwatch_client::{Job, JobQuery, JobStatus, JobType, SortColumn, SortSpec};
use jobwatch_config::constants::DEFAULT_PAGE_SIZE;

/// Filter, sort, and pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsTableState {
    pub global_filter: String,
    pub type_filter: Option<JobType>,
    pub status_filter: Option<JobStatus>,
    pub sort: Option<SortSpec>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for JobsTableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One computed page of the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    /// Snapshot indices for the rows on this page, in display order.
    pub indices: Vec<usize>,
    pub page_index: usize,
    /// Always at least 1, even when nothing matches.
    pub page_count: usize,
    pub filtered_len: usize,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Step an optional filter through `None → all[0] → … → all[n-1] → None`.
fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => all
            .iter()
            .position(|v| *v == value)
            .and_then(|pos| all.get(pos + 1))
            .copied(),
    }
}

impl JobsTableState {
    /// State with the given page size and newest-first ordering.
    pub fn new(page_size: usize) -> Self {
        Self {
            global_filter: String::new(),
            type_filter: None,
            status_filter: None,
            sort: Some(SortSpec::default()),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> JobQuery {
        JobQuery {
            text: self.global_filter.clone(),
            job_type: self.type_filter,
            status: self.status_filter,
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.query().is_empty()
    }

    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.global_filter = text.into();
        self.page_index = 0;
    }

    pub fn set_type_filter(&mut self, job_type: Option<JobType>) {
        self.type_filter = job_type;
        self.page_index = 0;
    }

    pub fn set_status_filter(&mut self, status: Option<JobStatus>) {
        self.status_filter = status;
        self.page_index = 0;
    }

    pub fn cycle_type_filter(&mut self) {
        self.set_type_filter(cycle(self.type_filter, &JobType::ALL));
    }

    pub fn cycle_status_filter(&mut self) {
        self.set_status_filter(cycle(self.status_filter, &JobStatus::ALL));
    }

    pub fn clear_filters(&mut self) {
        self.global_filter.clear();
        self.type_filter = None;
        self.status_filter = None;
        self.page_index = 0;
    }

    /// Sort by `column`, flipping direction when it is already the sort column.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(spec) => spec.toggled(column),
            None => SortSpec::for_column(column),
        });
    }

    pub fn next_page(&mut self) {
        self.page_index = self.page_index.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Filter, sort, and slice `jobs` into the current page.
    ///
    /// Clamps and stores the page index so paging past the end stays on the
    /// last page.
    pub fn view(&mut self, jobs: &[Job], now: DateTime<Utc>) -> TableView {
        let ordered = query::apply(jobs, &self.query(), self.sort, now);
        let filtered_len = ordered.len();
        let page_count = filtered_len.div_ceil(self.page_size).max(1);
        self.page_index = self.page_index.min(page_count - 1);

        let indices = ordered
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect();

        TableView {
            indices,
            page_index: self.page_index,
            page_count,
            filtered_len,
        }
    }
}
