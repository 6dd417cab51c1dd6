// src/enrichment/error.rs
use thiserror::Error;

use super::job_runner::RunStatus;

/// Ways an enrichment attempt can end early. None of them is fatal to the
/// webhook request: the candidate record already exists at this point.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("scrape job submission returned no run id")]
    Submission,

    #[error("scrape job ended with status {0}")]
    JobFailed(RunStatus),

    #[error("scrape job not finished after {attempts} status checks")]
    Timeout { attempts: u32 },

    #[error("scrape job returned no profile data")]
    NoData,

    #[error("{0:#}")]
    Upstream(#[from] anyhow::Error),
}
