use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "addrdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

pub struct Db {
    /// SQLite connection URL, a plain file path in the common case
    pub url: String,
    pub pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match &file_path {
            Some(path) => load_raw_config(path.as_ref())?,
            None => {
                log::info!("No configuration file specified, trying {DEFAULT_CONFIG_FILE_NAME}");
                load_raw_config(Path::new(DEFAULT_CONFIG_FILE_NAME))?
            }
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.url = db_url;
        }
        Ok(cfg)
    }
}

// A missing file is not an error, the embedded defaults apply instead.
fn load_raw_config(path: &Path) -> Result<raw::Config> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!(
                "{} not found, using the default configuration",
                path.display()
            );
            Ok(raw::Config::default())
        }
        Err(err) => Err(err.into()),
    }
}

impl From<raw::Config> for Config {
    fn from(raw: raw::Config) -> Self {
        let raw::Config { db, webserver } = raw;
        let raw::Db { url, pool_size } = db.unwrap_or_default();
        let raw::WebServer { cors } = webserver.unwrap_or_default();
        Self {
            db: Db { url, pool_size },
            webserver: WebServer { enable_cors: cors },
        }
    }
}
