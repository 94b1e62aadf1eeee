mod addresses;

pub mod prelude {
    pub use addrdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            // A single pooled connection keeps all accesses on the
            // same in-memory database.
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            addrdb_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            );
            Self { db_connections }
        }
    }

    pub fn new_address(street: &str, city: &str, lat: f64, lng: f64) -> usecases::NewAddress {
        usecases::NewAddress {
            street: street.into(),
            city: city.into(),
            state: Default::default(),
            country: Default::default(),
            lat,
            lng,
        }
    }
}
