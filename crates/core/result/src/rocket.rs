use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::InvalidStatus { .. } => Status::BadRequest,

            ErrorType::NotAuthenticated => Status::Unauthorized,
            ErrorType::InvalidCredentials => Status::Unauthorized,
            ErrorType::AdminKeyNotConfigured => Status::NotImplemented,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
            ErrorType::UnprocessableEntity => Status::UnprocessableEntity,
        };

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).unwrap();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
