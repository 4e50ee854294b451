use std::collections::HashMap;

use iso8601_timestamp::Timestamp;
use wardlens_models::v0::{ReportStats, ReportStatus};
use wardlens_result::Result;

use crate::ReferenceDb;
use crate::{Report, ReportQuery};

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "reports"))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, report_id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(report_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all reports matching the given query, newest first
    async fn fetch_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports
            .values()
            .filter(|report| report.matches(query))
            .cloned()
            .collect();

        // Ids are ULIDs, so descending id order is newest first.
        reports.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(reports)
    }

    /// Count reports overall and per workflow stage
    async fn generate_report_stats(&self) -> Result<ReportStats> {
        let reports = self.reports.lock().await;

        let mut by_status: HashMap<ReportStatus, usize> = ReportStatus::ALL
            .into_iter()
            .map(|status| (status, 0))
            .collect();

        for report in reports.values() {
            *by_status.entry(report.status.clone()).or_default() += 1;
        }

        Ok(ReportStats {
            total: reports.len(),
            by_status,
        })
    }

    /// Move a report to another workflow stage
    async fn update_report_status(&self, report_id: &str, status: &str) -> Result<Report> {
        let status: ReportStatus = status.parse().map_err(|_| {
            create_error!(InvalidStatus {
                status: status.to_string()
            })
        })?;

        let mut reports = self.reports.lock().await;
        if let Some(report) = reports.get_mut(report_id) {
            report.status = status;
            report.updated_at = Timestamp::now_utc();
            Ok(report.clone())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
