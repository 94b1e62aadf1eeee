use diesel::{
    self,
    prelude::*,
    result::Error as DieselError,
    sql_types::BigInt,
};

use addrdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod address;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

diesel::define_sql_function! {
    // The rowid of the most recent successful INSERT
    // on the current connection.
    fn last_insert_rowid() -> BigInt;
}
