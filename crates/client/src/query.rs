//! Job filtering and sorting rules.
//!
//! Responsibilities:
//! - Decide whether a job matches a free-text search plus optional
//!   type and status filters.
//! - Order jobs by a column and direction.
//!
//! Does NOT handle:
//! - Pagination or selection (the dashboard's table state owns those).
//!
//! Invariants:
//! - Filters AND-compose.
//! - Sorting is stable and never mutates the input slice.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{Job, JobStatus, JobType};

/// Combined search and filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Case-insensitive substring matched against id, type, status, site and error.
    pub text: String,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
}

impl JobQuery {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.job_type.is_none() && self.status.is_none()
    }

    pub fn matches(&self, job: &Job) -> bool {
        if self.job_type.is_some_and(|t| t != job.job_type) {
            return false;
        }
        if self.status.is_some_and(|s| s != job.status) {
            return false;
        }
        text_matches(self.text.trim(), job)
    }

    /// Indices of matching jobs, in input order.
    pub fn filter_indices(&self, jobs: &[Job]) -> Vec<usize> {
        jobs.iter()
            .enumerate()
            .filter(|(_, job)| self.matches(job))
            .map(|(idx, _)| idx)
            .collect()
    }
}

fn text_matches(needle: &str, job: &Job) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&job.id)
        || contains(job.job_type.as_str())
        || contains(job.status.as_str())
        || job.site_domain.as_deref().is_some_and(contains)
        || job.site_id.as_deref().is_some_and(contains)
        || job.error.as_deref().is_some_and(contains)
}

/// Sortable job columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    Type,
    Status,
    Site,
    Progress,
    Attempts,
    CreatedAt,
    Duration,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Id,
        SortColumn::Type,
        SortColumn::Status,
        SortColumn::Site,
        SortColumn::Progress,
        SortColumn::Attempts,
        SortColumn::CreatedAt,
        SortColumn::Duration,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Type => "type",
            SortColumn::Status => "status",
            SortColumn::Site => "site",
            SortColumn::Progress => "progress",
            SortColumn::Attempts => "attempts",
            SortColumn::CreatedAt => "created",
            SortColumn::Duration => "duration",
        }
    }

    /// Time-like columns start newest/longest first.
    pub const fn default_direction(&self) -> SortDirection {
        match self {
            SortColumn::CreatedAt | SortColumn::Duration => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    /// Ascending comparison of two jobs on this column.
    ///
    /// Jobs without a site or without a duration sort before those with one.
    pub fn compare(&self, a: &Job, b: &Job, now: DateTime<Utc>) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Type => a.job_type.as_str().cmp(b.job_type.as_str()),
            SortColumn::Status => a.status.cmp(&b.status),
            SortColumn::Site => a.site_label().cmp(&b.site_label()),
            SortColumn::Progress => a.progress.percent().cmp(&b.progress.percent()),
            SortColumn::Attempts => a.attempts.cmp(&b.attempts),
            SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            SortColumn::Duration => a.elapsed_at(now).cmp(&b.elapsed_at(now)),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "id" => Ok(SortColumn::Id),
            "type" => Ok(SortColumn::Type),
            "status" => Ok(SortColumn::Status),
            "site" => Ok(SortColumn::Site),
            "progress" => Ok(SortColumn::Progress),
            "attempts" => Ok(SortColumn::Attempts),
            "created" | "created_at" | "createdat" => Ok(SortColumn::CreatedAt),
            "duration" => Ok(SortColumn::Duration),
            other => Err(format!(
                "unknown sort column '{other}' (expected one of: id, type, status, site, progress, attempts, created, duration)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub const fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

/// A column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Newest first.
    fn default() -> Self {
        Self::new(SortColumn::CreatedAt, SortDirection::Desc)
    }
}

impl SortSpec {
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Sort starting in the column's default direction.
    pub const fn for_column(column: SortColumn) -> Self {
        Self::new(column, column.default_direction())
    }

    /// Same column flips direction; a different column starts at its default.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, self.direction.flipped())
        } else {
            Self::for_column(column)
        }
    }

    pub fn compare(&self, a: &Job, b: &Job, now: DateTime<Utc>) -> Ordering {
        let ordering = self.column.compare(a, b, now);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort of indices into `jobs`.
    pub fn sort_indices(&self, jobs: &[Job], indices: &mut [usize], now: DateTime<Utc>) {
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b], now));
    }
}

/// Filter then sort, returning indices into `jobs`.
pub fn apply(
    jobs: &[Job],
    query: &JobQuery,
    sort: Option<SortSpec>,
    now: DateTime<Utc>,
) -> Vec<usize> {
    let mut indices = query.filter_indices(jobs);
    if let Some(sort) = sort {
        sort.sort_indices(jobs, &mut indices, now);
    }
    indices
}
