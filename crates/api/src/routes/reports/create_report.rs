use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

use wardlens_database::{Database, Report};
use wardlens_models::v0;
use wardlens_result::{create_error, Result};

/// # Submit Report
///
/// Submit a new geotagged issue report with photo evidence.
///
/// Reports always start out Pending, the server assigns the id
/// and both timestamps.
#[openapi(tag = "Reports")]
#[post("/", data = "<data>")]
pub async fn create_report(
    db: &State<Database>,
    data: Json<v0::DataCreateReport>,
) -> Result<Created<Json<v0::Report>>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let report = Report::create(db, data).await?;
    let location = format!("/api/reports/{}", report.id);
    Ok(Created::new(location).body(Json(report.into())))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Status};
    use wardlens_models::v0;

    #[rocket::async_test]
    async fn success_create_report() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/api/reports")
            .header(ContentType::JSON)
            .body(
                json!({
                    "userId": "citizen-1",
                    "description": "Deep pothole near the bus stop",
                    "imageUrl": "https://img.example.com/pothole.jpg",
                    "latitude": 12.9716,
                    "longitude": 77.5946,
                    "address": "MG Road",
                    "ward": 12,
                    "urgency": "High"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Created);

        let report: v0::Report = response.into_json().await.expect("`Report`");
        assert!(!report.id.is_empty());
        assert_eq!(report.status, v0::ReportStatus::Pending);
        assert_eq!(report.created_at, report.updated_at);
        assert_eq!(report.ward, Some(v0::Ward::Number(12)));
        assert_eq!(report.urgency, v0::Urgency::High);
    }

    #[rocket::async_test]
    async fn fail_create_report_out_of_range() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/api/reports")
            .header(ContentType::JSON)
            .body(
                json!({
                    "userId": "citizen-1",
                    "imageUrl": "https://img.example.com/pothole.jpg",
                    "latitude": 91.0,
                    "longitude": 77.5946
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);

        let error: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert_eq!(error["type"], "FailedValidation");
    }

    #[rocket::async_test]
    async fn fail_create_report_missing_image() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/api/reports")
            .header(ContentType::JSON)
            .body(
                json!({
                    "userId": "citizen-1",
                    "latitude": 12.9716,
                    "longitude": 77.5946
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::UnprocessableEntity);
    }
}
