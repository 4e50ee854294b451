use rocket::serde::json::Json;
use rocket::State;

use wardlens_database::Database;
use wardlens_models::v0;
use wardlens_result::Result;

/// # Report Stats
///
/// Count reports overall and per workflow stage. Stages without
/// any reports still appear with a count of zero.
#[openapi(tag = "Reports")]
#[get("/stats")]
pub async fn report_stats(db: &State<Database>) -> Result<Json<v0::ReportStats>> {
    Ok(Json(db.generate_report_stats().await?))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;
    use wardlens_database::Report;
    use wardlens_models::v0;

    #[rocket::async_test]
    async fn success_report_stats() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/api/reports/stats").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let stats: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert_eq!(stats["total"], 0);
        assert_eq!(stats["byStatus"]["Pending"], 0);
        assert_eq!(stats["byStatus"]["In Progress"], 0);
        assert_eq!(stats["byStatus"]["Resolved"], 0);

        let report = Report::create(
            &harness.db,
            v0::DataCreateReport {
                user_id: "citizen-1".to_string(),
                description: "Fallen tree".to_string(),
                image_url: "https://img.example.com/tree.jpg".to_string(),
                latitude: 12.9716,
                longitude: 77.5946,
                address: "MG Road".to_string(),
                ward: None,
                urgency: v0::Urgency::default(),
                timestamp: None,
            },
        )
        .await
        .expect("`Report`");

        harness
            .db
            .update_report_status(&report.id, "In Progress")
            .await
            .expect("`Report`");

        let response = harness.client.get("/api/reports/stats").dispatch().await;
        let stats: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert_eq!(stats["total"], 1);
        assert_eq!(stats["byStatus"]["Pending"], 0);
        assert_eq!(stats["byStatus"]["In Progress"], 1);
    }
}
