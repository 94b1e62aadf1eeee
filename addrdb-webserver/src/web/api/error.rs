use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use addrdb_application::error::{AppError, BError};
pub use addrdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use super::json_error_response;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        let err = match err {
            JsonError::Io(err) => anyhow!(err),
            JsonError::Parse(_body, err) => anyhow!(err),
        };
        Self::OtherWithStatus(err, Status::UnprocessableEntity)
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            // Rejected parameters and missing records are reported
            // to the client, everything else stays internal.
            Error::App(AppError::Business(BError::Parameter(ref err))) => {
                json_error_response(req, err, Status::BadRequest)
            }
            Error::App(AppError::Business(ref err @ BError::Repo(RepoError::NotFound))) => {
                json_error_response(req, err, Status::NotFound)
            }
            Error::App(err) => {
                error!("Request failed: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => json_error_response(req, &err, Status::ImATeapot),
        }
    }
}

impl From<addrdb_core::usecases::Error> for Error {
    fn from(err: addrdb_core::usecases::Error) -> Self {
        Self::App(err.into())
    }
}
