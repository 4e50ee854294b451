use rocket::serde::json::Json;
use rocket::State;
use serde::{Deserialize, Serialize};

use wardlens_config::Settings;
use wardlens_result::{create_error, Result};

/// # Login Data
#[derive(Deserialize, JsonSchema)]
pub struct DataLogin {
    /// Administrator email
    email: String,
    /// Administrator password
    password: String,
}

/// # Login Response
#[derive(Serialize, JsonSchema)]
pub struct ResponseLogin {
    /// Key to present in the x-admin-api-key header
    token: String,
}

/// # Login
///
/// Exchange administrator credentials for the admin API key.
#[openapi(tag = "Admin")]
#[post("/login", data = "<data>")]
pub async fn login(
    settings: &State<Settings>,
    data: Json<DataLogin>,
) -> Result<Json<ResponseLogin>> {
    let data = data.into_inner();
    let email = data.email.trim();
    let password = data.password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(create_error!(FailedValidation {
            error: "email and password required".to_string()
        }));
    }

    if email != settings.admin.email || password != settings.admin.password {
        return Err(create_error!(InvalidCredentials));
    }

    // Credentials are fine but there is no key to hand out.
    if settings.admin.api_key.is_empty() {
        return Err(create_error!(AdminKeyNotConfigured));
    }

    Ok(Json(ResponseLogin {
        token: settings.admin.api_key.clone(),
    }))
}
