use std::ops::Deref;

use anyhow::Result as Fallible;
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use addrdb_db_sqlite::{Connections as ConnectionPool, DbReadOnly, DbReadWrite};

/// Newtype around the connection pool, required to attach the
/// `FromRequest` implementation.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

impl Connections {
    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        self.0.exclusive()
    }
}

impl Deref for Connections {
    type Target = ConnectionPool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Connections>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => Outcome::Error((Status::InternalServerError, ())),
        }
    }
}
