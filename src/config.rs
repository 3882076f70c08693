//! Process configuration, read once from the environment at startup.
//!
//! Values come from plain environment variables (`DBHOST`, `DBUSER`, ...)
//! merged over built-in defaults, so the binary runs with no configuration
//! at all against a local database. The loaded `Config` is immutable and is
//! handed to the handlers through the router state.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

const ENV_KEYS: &[&str] = &[
    "DBHOST",
    "DBUSER",
    "DBPWD",
    "DATABASE",
    "DBPORT",
    "BACKGROUND_IMAGE_URL",
    "MY_NAME",
    "LOGLEVEL",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub dbhost: String,
    pub dbuser: String,
    pub dbpwd: String,
    pub database: String,
    pub dbport: u16,
    /// Object URL of the decorative background image. Empty disables the
    /// fetch entirely.
    pub background_image_url: String,
    /// Display name injected into every rendered page.
    pub my_name: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dbhost: "localhost".to_string(),
            dbuser: "root".to_string(),
            dbpwd: "password".to_string(),
            database: "employees".to_string(),
            dbport: 3306,
            background_image_url: String::new(),
            my_name: "Employee Directory".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::raw().only(ENV_KEYS))
    }

    /// Connect options for the employee database. Each request opens its
    /// own connection from these.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.dbhost)
            .port(self.dbport)
            .username(&self.dbuser)
            .password(&self.dbpwd)
            .database(&self.database)
    }
}
