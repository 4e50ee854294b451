use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::{SecurityScheme, SecuritySchemeData};
use rocket_okapi::request::{OpenApiFromRequest, RequestHeaderInput};

use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome, Request};

use wardlens_config::Settings;
use wardlens_result::{create_error, Error};

/// Principal permitted to use administrative routes
///
/// Requests qualify by presenting the configured key in the
/// x-admin-api-key header. While no key is configured, guarded
/// routes answer 501 rather than 401.
pub struct Admin;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let settings = request.rocket().state::<Settings>().expect("`Settings`");

        if settings.admin.api_key.is_empty() {
            let error = create_error!(AdminKeyNotConfigured);
            request.local_cache(|| Some(error.clone()));
            return Outcome::Error((Status::NotImplemented, error));
        }

        let header_admin_key = request
            .headers()
            .get("x-admin-api-key")
            .next()
            .map(|x| x.to_string());

        match header_admin_key {
            Some(key) if key == settings.admin.api_key => Outcome::Success(Admin),
            _ => {
                let error = create_error!(NotAuthenticated);
                request.local_cache(|| Some(error.clone()));
                Outcome::Error((Status::Unauthorized, error))
            }
        }
    }
}

impl<'r> OpenApiFromRequest<'r> for Admin {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        let mut requirements = schemars::Map::new();
        requirements.insert("Admin Key".to_owned(), vec![]);

        Ok(RequestHeaderInput::Security(
            "Admin Key".to_owned(),
            SecurityScheme {
                data: SecuritySchemeData::ApiKey {
                    name: "x-admin-api-key".to_owned(),
                    location: "header".to_owned(),
                },
                description: Some("Used to authenticate as an administrator.".to_owned()),
                extensions: schemars::Map::new(),
            },
            requirements,
        ))
    }
}
