use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod create_report;
mod fetch_report;
mod fetch_reports;
mod report_stats;
mod update_report_status;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        create_report::create_report,
        fetch_reports::fetch_reports,
        report_stats::report_stats,
        fetch_report::fetch_report,
        update_report_status::update_report_status,
    ]
}
