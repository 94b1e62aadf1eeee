use std::{fmt::Display, result};

use addrdb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json},
    core::{prelude::*, usecases},
    web::sqlite,
};
use addrdb_application::prelude as flows;
use addrdb_core::usecases::Error as ParameterError;

mod addresses;
mod count;
mod error;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   addresses   --- //
        addresses::post_address,
        addresses::get_address,
        addresses::put_address,
        addresses::delete_address,
        addresses::get_addresses_within_distance,
        // ---   count   --- //
        count::get_count_addresses,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let body = JsonErrorResponse {
        http_status: status.code,
        message: err.to_string(),
    };
    Json(body).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
