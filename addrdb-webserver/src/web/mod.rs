use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    let instance = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };
    let mut instance = instance.manage(db).manage(guards::Version(version));
    for (base, routes) in mounts {
        instance = instance.mount(base, routes);
    }
    instance
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, version: &'static str) {
    let options = InstanceOptions {
        mounts: vec![("/api", api::routes())],
        rocket_cfg: None,
        version,
    };

    let mut instance = rocket_instance(options, db);
    if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance = instance.attach(cors);
    }
    if let Err(err) = instance.launch().await {
        error!("Running the web server failed: {err}");
    }
}
