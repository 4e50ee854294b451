use rocket::{Build, Rocket};
use rocket_okapi::{okapi::openapi3::OpenApi, settings::OpenApiSettings};

mod auth;
mod reports;
mod root;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/api".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root, root::health],
        "/reports" => reports::routes(),
        "/auth" => auth::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Wardlens API".to_owned(),
            description: Some(
                "Report, track and resolve municipal issues from photo evidence.".to_owned(),
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        servers: vec![
            Server {
                url: "http://localhost:8000/api".to_owned(),
                description: Some("Local Wardlens Environment".to_owned()),
                ..Default::default()
            },
        ],
        tags: vec![
            Tag {
                name: "Core".to_owned(),
                description: Some("Determine information about this Wardlens node".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Reports".to_owned(),
                description: Some("Submit and track issue reports".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Admin".to_owned(),
                description: Some("Authenticate for administrative routes".to_owned()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
