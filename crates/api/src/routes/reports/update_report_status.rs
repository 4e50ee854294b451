use rocket::serde::json::Json;
use rocket::State;

use crate::guards::Admin;
use wardlens_database::{util::reference::Reference, Database};
use wardlens_models::v0;
use wardlens_result::Result;

/// # Update Report Status
///
/// Move a report to another workflow stage. Any stage may follow
/// any other, including the one it is already in.
#[openapi(tag = "Reports")]
#[patch("/<target>/status", data = "<data>")]
pub async fn update_report_status(
    db: &State<Database>,
    _admin: Admin,
    target: Reference,
    data: Json<v0::DataUpdateReportStatus>,
) -> Result<Json<v0::Report>> {
    let data = data.into_inner();
    let report = db.update_report_status(&target.id, &data.status).await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Header, Status};
    use wardlens_database::Report;
    use wardlens_models::v0;

    fn submission() -> v0::DataCreateReport {
        v0::DataCreateReport {
            user_id: "citizen-1".to_string(),
            description: "Deep pothole".to_string(),
            image_url: "https://img.example.com/pothole.jpg".to_string(),
            latitude: 12.9716,
            longitude: 77.5946,
            address: "MG Road".to_string(),
            ward: None,
            urgency: v0::Urgency::default(),
            timestamp: None,
        }
    }

    #[rocket::async_test]
    async fn success_update_report_status() {
        let harness = TestHarness::with_admin_key("open-sesame").await;
        let report = Report::create(&harness.db, submission())
            .await
            .expect("`Report`");

        let response = harness
            .client
            .patch(format!("/api/reports/{}/status", report.id))
            .header(ContentType::JSON)
            .header(Header::new("x-admin-api-key", "open-sesame"))
            .body(json!({ "status": "In Progress" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let updated: v0::Report = response.into_json().await.expect("`Report`");
        assert_eq!(updated.status, v0::ReportStatus::InProgress);
        assert!(updated.updated_at >= report.updated_at);
    }

    #[rocket::async_test]
    async fn fail_update_report_status_invalid_value() {
        let harness = TestHarness::with_admin_key("open-sesame").await;
        let report = Report::create(&harness.db, submission())
            .await
            .expect("`Report`");

        let response = harness
            .client
            .patch(format!("/api/reports/{}/status", report.id))
            .header(ContentType::JSON)
            .header(Header::new("x-admin-api-key", "open-sesame"))
            .body(json!({ "status": "Closed" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);

        let error: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert_eq!(error["type"], "InvalidStatus");
        assert_eq!(error["status"], "Closed");

        // The report is left untouched.
        let untouched = harness.db.fetch_report(&report.id).await.expect("`Report`");
        assert_eq!(untouched.status, v0::ReportStatus::Pending);
    }

    #[rocket::async_test]
    async fn fail_update_unknown_report() {
        let harness = TestHarness::with_admin_key("open-sesame").await;

        let response = harness
            .client
            .patch("/api/reports/01JA00000000000000000GHOST/status")
            .header(ContentType::JSON)
            .header(Header::new("x-admin-api-key", "open-sesame"))
            .body(json!({ "status": "Resolved" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }

    #[rocket::async_test]
    async fn fail_update_report_status_wrong_key() {
        let harness = TestHarness::with_admin_key("open-sesame").await;
        let report = Report::create(&harness.db, submission())
            .await
            .expect("`Report`");

        let response = harness
            .client
            .patch(format!("/api/reports/{}/status", report.id))
            .header(ContentType::JSON)
            .header(Header::new("x-admin-api-key", "let-me-in"))
            .body(json!({ "status": "Resolved" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Unauthorized);

        let error: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert_eq!(error["type"], "NotAuthenticated");
    }

    #[rocket::async_test]
    async fn fail_update_report_status_not_configured() {
        let harness = TestHarness::new().await;
        let report = Report::create(&harness.db, submission())
            .await
            .expect("`Report`");

        let response = harness
            .client
            .patch(format!("/api/reports/{}/status", report.id))
            .header(ContentType::JSON)
            .header(Header::new("x-admin-api-key", "open-sesame"))
            .body(json!({ "status": "Resolved" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotImplemented);

        let error: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert_eq!(error["type"], "AdminKeyNotConfigured");
    }
}
