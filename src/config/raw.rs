use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("addrdb.default.toml");

// Missing sections fall back to the embedded default file,
// section by section.
fn built_in() -> Config {
    toml::from_str(DEFAULT_CONFIG_FILE).expect("Embedded default configuration")
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

impl Default for Config {
    fn default() -> Self {
        built_in()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub url: String,
    pub pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        built_in().db.expect("db section")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        built_in().webserver.expect("webserver section")
    }
}
