use iso8601_timestamp::Timestamp;
use std::collections::HashMap;

auto_derived!(
    /// Citizen-submitted photo report of a municipal issue
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct Report {
        /// Unique Id
        pub id: String,

        /// Id of the user who submitted this report
        pub user_id: String,

        /// What was observed; may be empty
        #[cfg_attr(feature = "serde", serde(default))]
        pub description: String,

        /// Photo evidence; an http(s) URL or a `data:` URI
        pub image_url: String,

        /// Latitude of the reported location
        pub latitude: f64,

        /// Longitude of the reported location
        pub longitude: f64,

        /// Human-readable location; may be empty
        #[cfg_attr(feature = "serde", serde(default))]
        pub address: String,

        /// Ward the location falls into
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub ward: Option<Ward>,

        /// Submitter-assigned priority hint
        #[cfg_attr(feature = "serde", serde(default))]
        pub urgency: Urgency,

        /// Stage of the triage workflow this report is in
        pub status: ReportStatus,

        /// When the report was recorded
        pub created_at: Timestamp,

        /// When the status last changed
        pub updated_at: Timestamp,

        /// Client-reported capture time; informational only
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub timestamp: Option<String>,
    }

    /// Stage of the triage workflow
    #[derive(Eq, Hash)]
    pub enum ReportStatus {
        /// Waiting for an administrator to pick it up
        Pending,

        /// An administrator is working on it
        #[cfg_attr(feature = "serde", serde(rename = "In Progress"))]
        InProgress,

        /// The underlying issue was actioned
        Resolved,
    }

    /// Submitter-assigned priority hint; not enforced anywhere
    #[derive(Eq, Hash)]
    pub enum Urgency {
        Low,
        Medium,
        High,
    }

    /// Ward identifier; municipalities use either names or numbers
    #[cfg_attr(feature = "serde", serde(untagged))]
    #[derive(Eq, Hash)]
    pub enum Ward {
        Text(String),
        Number(i64),
    }

    /// New report information
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    #[cfg_attr(feature = "validator", derive(validator::Validate))]
    pub struct DataCreateReport {
        /// Id of the submitting user
        #[cfg_attr(feature = "validator", validate(length(min = 1)))]
        pub user_id: String,

        /// What was observed
        #[cfg_attr(feature = "serde", serde(default))]
        pub description: String,

        /// Photo evidence; `data:` URIs are accepted alongside http(s)
        #[cfg_attr(feature = "validator", validate(url))]
        pub image_url: String,

        /// Latitude of the reported location
        #[cfg_attr(feature = "validator", validate(range(min = -90.0, max = 90.0)))]
        pub latitude: f64,

        /// Longitude of the reported location
        #[cfg_attr(feature = "validator", validate(range(min = -180.0, max = 180.0)))]
        pub longitude: f64,

        /// Human-readable location
        #[cfg_attr(feature = "serde", serde(default))]
        pub address: String,

        /// Ward the location falls into
        pub ward: Option<Ward>,

        /// Submitter-assigned priority hint
        #[cfg_attr(feature = "serde", serde(default))]
        pub urgency: Urgency,

        /// Client-reported capture time; stored verbatim, never authoritative
        pub timestamp: Option<String>,
    }

    /// Requested status change for a report
    ///
    /// The status travels as a plain string so that unknown values reach the
    /// repository and come back as a structured `InvalidStatus` error instead
    /// of dying in deserialization.
    pub struct DataUpdateReportStatus {
        /// New workflow stage
        pub status: String,
    }

    /// Live aggregate counts over the report collection
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct ReportStats {
        /// Number of reports, all statuses included
        pub total: usize,

        /// Reports per workflow stage; zero counts are included
        pub by_status: HashMap<ReportStatus, usize>,
    }
);

impl ReportStatus {
    /// All workflow stages, in display order
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
    ];
}

impl std::str::FromStr for ReportStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<ReportStatus, Self::Err> {
        match value {
            "Pending" => Ok(ReportStatus::Pending),
            "In Progress" => Ok(ReportStatus::InProgress),
            "Resolved" => Ok(ReportStatus::Resolved),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
        })
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Low
    }
}

impl std::fmt::Display for Ward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ward::Text(name) => write!(f, "{name}"),
            Ward::Number(number) => write!(f, "{number}"),
        }
    }
}
