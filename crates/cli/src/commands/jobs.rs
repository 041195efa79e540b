//! `jobs` subcommands: list, show, retry, cancel.
//!
//! Responsibilities:
//! - Fetch the job list and apply the same filter/sort engine as the dashboard.
//! - Fetch one job for `show`.
//! - Send retry/cancel and turn non-completed outcomes into `ActionError`.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Subcommand;
use jobwatch_client::query::{self, JobQuery, SortColumn, SortDirection, SortSpec};
use jobwatch_client::{JobAction, JobStatus, JobType, JobsClient};
use tracing::info;

use crate::error::ActionError;
use crate::formatters::{ActionReport, Formatter};

#[derive(Subcommand)]
pub enum JobsCommand {
    /// List jobs, newest first by default
    List {
        /// Only jobs with this status (pending, processing, completed, failed)
        #[arg(long)]
        status: Option<JobStatus>,

        /// Only jobs of this type (e.g. crawl_site)
        #[arg(long = "type", value_name = "TYPE")]
        job_type: Option<JobType>,

        /// Case-insensitive text search over id, type, status, site, and error
        #[arg(short, long)]
        filter: Option<String>,

        /// Sort column (id, type, status, site, progress, attempts, created, duration)
        #[arg(long)]
        sort: Option<SortColumn>,

        /// Sort direction (asc or desc); defaults to the column's natural direction
        #[arg(long, value_name = "DIR")]
        direction: Option<SortDirection>,

        /// Show at most N jobs after filtering and sorting
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show every field of one job
    Show {
        /// Job id
        id: String,
    },

    /// Re-enqueue a failed job
    Retry {
        /// Job id
        id: String,
    },

    /// Cancel a pending or processing job
    Cancel {
        /// Job id
        id: String,
    },
}

/// Without `--sort` the column is `created`; without `--direction` the
/// column's default direction applies.
fn sort_spec(sort: Option<SortColumn>, direction: Option<SortDirection>) -> SortSpec {
    let base = sort.map_or_else(SortSpec::default, SortSpec::for_column);
    match direction {
        Some(direction) => SortSpec::new(base.column, direction),
        None => base,
    }
}

pub async fn run(
    client: &JobsClient,
    command: JobsCommand,
    formatter: &dyn Formatter,
) -> Result<String> {
    match command {
        JobsCommand::List {
            status,
            job_type,
            filter,
            sort,
            direction,
            limit,
        } => {
            info!("Listing jobs");
            let snapshot = client.list_jobs().await.context("Failed to list jobs")?;

            let query = JobQuery {
                text: filter.unwrap_or_default(),
                job_type,
                status,
            };
            let now = Utc::now();
            let mut indices =
                query::apply(&snapshot.jobs, &query, Some(sort_spec(sort, direction)), now);
            if let Some(limit) = limit {
                indices.truncate(limit);
            }

            let jobs: Vec<_> = indices.into_iter().map(|idx| &snapshot.jobs[idx]).collect();
            formatter.format_jobs(&jobs, now)
        }
        JobsCommand::Show { id } => {
            info!(job_id = %id, "Fetching job");
            let job = client
                .get_job(&id)
                .await
                .with_context(|| format!("Failed to fetch job '{id}'"))?;
            formatter.format_job_details(&job, Utc::now())
        }
        JobsCommand::Retry { id } => run_action(client, &id, JobAction::Retry, formatter).await,
        JobsCommand::Cancel { id } => run_action(client, &id, JobAction::Cancel, formatter).await,
    }
}

async fn run_action(
    client: &JobsClient,
    id: &str,
    action: JobAction,
    formatter: &dyn Formatter,
) -> Result<String> {
    info!(job_id = %id, action = %action, "Sending job action");
    let outcome = client.job_action(id, action).await;
    if let Some(err) = ActionError::from_outcome(id, action, outcome) {
        return Err(err.into());
    }
    formatter.format_action(&ActionReport::completed(id, action))
}
