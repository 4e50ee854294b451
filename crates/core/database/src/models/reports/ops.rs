use wardlens_models::v0::ReportStats;
use wardlens_result::Result;

use crate::{Report, ReportQuery};

mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report by its id
    async fn fetch_report(&self, report_id: &str) -> Result<Report>;

    /// Fetch all reports matching the given query, newest first
    async fn fetch_reports(&self, query: &ReportQuery) -> Result<Vec<Report>>;

    /// Count reports overall and per workflow stage
    async fn generate_report_stats(&self) -> Result<ReportStats>;

    /// Move a report to another workflow stage
    ///
    /// The raw status string is validated here: values outside the known
    /// set fail with `InvalidStatus` and leave the report untouched. Any
    /// known stage may follow any other, including itself.
    async fn update_report_status(&self, report_id: &str, status: &str) -> Result<Report>;
}
