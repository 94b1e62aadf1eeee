#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;

use addrdb_db_sqlite::Connections;

mod cli;
mod config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    if let Err(err) = run(args).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> Result<()> {
    let cli::Args {
        config,
        db_url,
        pool_size,
        enable_cors,
    } = args;
    let mut config = config::Config::try_load_from_file_or_default(config.as_deref())?;

    // Command line arguments take precedence over the
    // configuration file and the environment.
    if let Some(db_url) = db_url {
        config.db.url = db_url;
    }
    if let Some(pool_size) = pool_size {
        config.db.pool_size = pool_size;
    }
    if enable_cors {
        config.webserver.enable_cors = true;
    }

    let connections = Connections::init(&config.db.url, config.db.pool_size.into())?;
    addrdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let version = env!("CARGO_PKG_VERSION");
    info!("Starting addrdb v{version}");
    addrdb_webserver::run(connections, config.webserver.enable_cors, version).await;

    Ok(())
}
