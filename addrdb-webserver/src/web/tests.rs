use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::sqlite;

pub mod prelude {

    pub const DUMMY_VERSION: &str = "0.0.0-test";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };
}

fn rocket_test_instance(
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    // A single pooled connection keeps all accesses on the same
    // in-memory database.
    let connections = addrdb_db_sqlite::Connections::init(":memory:", 1).unwrap();
    addrdb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone());
    (rocket, db)
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, db) = rocket_test_instance(mounts, rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
