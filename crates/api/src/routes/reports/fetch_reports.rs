use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;

use wardlens_database::{Database, ReportQuery};
use wardlens_models::v0;
use wardlens_result::Result;

/// # Query Parameters
#[derive(Deserialize, JsonSchema, FromForm)]
pub struct OptionsFetchReports {
    /// Keep reports in exactly this workflow stage, unknown
    /// values are ignored
    status: Option<String>,

    /// Keep reports containing this text in their description,
    /// ward, address or id
    q: Option<String>,
}

/// # List Reports
///
/// List reports, newest first, optionally narrowed down by
/// workflow stage or free text.
#[openapi(tag = "Reports")]
#[get("/?<options..>")]
pub async fn fetch_reports(
    db: &State<Database>,
    options: OptionsFetchReports,
) -> Result<Json<Vec<v0::Report>>> {
    let reports = db
        .fetch_reports(&ReportQuery {
            status: options.status,
            q: options.q,
        })
        .await?;

    Ok(Json(reports.into_iter().map(Into::into).collect()))
}
