use iso8601_timestamp::Timestamp;
use ulid::Ulid;
use wardlens_models::v0::{self, ReportStatus, Urgency, Ward};
use wardlens_result::Result;

use crate::Database;

auto_derived!(
    /// Citizen-submitted issue report
    pub struct Report {
        /// Unique Id
        pub id: String,
        /// Id of the submitting user
        pub user_id: String,
        /// What was observed at the location
        pub description: String,
        /// Photo evidence, either an http(s) URL or a data: URI
        pub image_url: String,
        /// Latitude of the reported location
        pub latitude: f64,
        /// Longitude of the reported location
        pub longitude: f64,
        /// Human-readable location
        pub address: String,
        /// Municipal ward the location falls into
        pub ward: Option<Ward>,
        /// Submitter-assigned priority hint
        pub urgency: Urgency,
        /// Current workflow stage
        pub status: ReportStatus,
        /// When the report was recorded
        pub created_at: Timestamp,
        /// When the report last changed
        pub updated_at: Timestamp,
        /// Capture time as reported by the submitting client
        pub timestamp: Option<String>,
    }

    /// Predicates for listing reports, absent fields match everything
    #[derive(Default)]
    pub struct ReportQuery {
        /// Keep reports in exactly this workflow stage
        ///
        /// Values outside the known set are ignored rather than rejected,
        /// matching how the public listing has always behaved.
        pub status: Option<String>,
        /// Keep reports containing this text (case-insensitive) in their
        /// description, ward, address or id
        pub q: Option<String>,
    }
);

impl Report {
    /// Create a new report from submitted data
    ///
    /// The repository owns identity and timestamps: the caller never
    /// picks the id, the status or the clock values.
    pub async fn create(db: &Database, data: v0::DataCreateReport) -> Result<Report> {
        let now = Timestamp::now_utc();
        let report = Report {
            id: Ulid::new().to_string(),
            user_id: data.user_id,
            description: data.description,
            image_url: data.image_url,
            latitude: data.latitude,
            longitude: data.longitude,
            address: data.address,
            ward: data.ward,
            urgency: data.urgency,
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
            timestamp: data.timestamp,
        };

        db.insert_report(&report).await?;
        Ok(report)
    }

    /// Whether this report matches the given query
    pub fn matches(&self, query: &ReportQuery) -> bool {
        if let Some(status) = query.status.as_deref() {
            if let Ok(status) = status.parse::<ReportStatus>() {
                if self.status != status {
                    return false;
                }
            }
        }

        if let Some(q) = query.q.as_deref() {
            let q = q.to_lowercase();
            let ward = self
                .ward
                .as_ref()
                .map(|ward| ward.to_string())
                .unwrap_or_default();

            return [
                self.description.as_str(),
                ward.as_str(),
                self.address.as_str(),
                self.id.as_str(),
            ]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&q));
        }

        true
    }
}
