use rocket::serde::json::Json;
use rocket::State;

use wardlens_database::{util::reference::Reference, Database};
use wardlens_models::v0;
use wardlens_result::Result;

/// # Fetch Report
///
/// Fetch a report by its id.
#[openapi(tag = "Reports")]
#[get("/<target>")]
pub async fn fetch_report(db: &State<Database>, target: Reference) -> Result<Json<v0::Report>> {
    let report = target.as_report(db).await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;
    use wardlens_database::Report;
    use wardlens_models::v0;

    #[rocket::async_test]
    async fn success_fetch_report() {
        let harness = TestHarness::new().await;

        let report = Report::create(
            &harness.db,
            v0::DataCreateReport {
                user_id: "citizen-1".to_string(),
                description: "Overflowing bin".to_string(),
                image_url: "https://img.example.com/bin.jpg".to_string(),
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

        let response = harness
            .client
            .get(format!("/api/reports/{}", report.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let fetched: v0::Report = response.into_json().await.expect("`Report`");
        assert_eq!(fetched.id, report.id);
        assert_eq!(fetched.description, "Overflowing bin");
    }

    #[rocket::async_test]
    async fn fail_fetch_unknown_report() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .get("/api/reports/01JA00000000000000000GHOST")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);

        let error: serde_json::Value = response.into_json().await.expect("valid JSON");
        assert_eq!(error["type"], "NotFound");
    }
}
