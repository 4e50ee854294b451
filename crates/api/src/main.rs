#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate schemars;

pub mod guards;
pub mod routes;
pub mod util;

use log::info;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;
use std::str::FromStr;
use wardlens_config::Settings;
use wardlens_database::{Database, DatabaseInfo};

/// Build the Rocket instance serving the API
pub async fn web(db: Database, settings: Settings) -> Rocket<Build> {
    let cors = rocket_cors::CorsOptions {
        allowed_origins: match settings.api.cors.allowed_origin.as_str() {
            "*" => AllowedOrigins::All,
            origin => AllowedOrigins::some_exact(&[origin]),
        },
        allowed_methods: ["Get", "Put", "Post", "Delete", "Options", "Head", "Patch"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Reports carry photo evidence inline as data: URIs, so the
    // JSON limit sits well above Rocket's default.
    let figment = rocket::Config::figment().merge((
        "limits",
        Limits::default().limit("json", settings.api.limits.json_payload_mib.mebibytes()),
    ));

    let rocket = rocket::custom(figment);
    routes::mount(rocket)
        .mount("/", rocket_cors::catch_all_options_routes())
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../api/openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .register("/", util::catchers::all_catchers())
        .manage(db)
        .manage(settings)
        .manage(cors.clone())
        .attach(cors)
}

#[launch]
async fn rocket() -> _ {
    setup_logging();

    info!(
        "Starting Wardlens API [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    let settings = wardlens_config::config().await;

    // Setup database
    let db = DatabaseInfo::Auto.connect().await.unwrap();

    web(db, settings).await
}

/// Configure logging and common Rust variables
fn setup_logging() {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    if std::env::var("ROCKET_ADDRESS").is_err() {
        std::env::set_var("ROCKET_ADDRESS", "0.0.0.0");
    }

    pretty_env_logger::init();
}
