use std::env::var;

use dotenvy::dotenv;

use crate::domain::Severity;

#[derive(Debug)]
pub struct Config {
    pub log_level: String,
    pub validation_severity: Severity,
    pub player_id: i64,
    pub player_name: String,
    pub renamed_name: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Self::from_lookup(|key| var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, &'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            validation_severity: match lookup("VALIDATION_SEVERITY") {
                Some(value) => value
                    .parse::<Severity>()
                    .map_err(|_| "An error occured while parsing VALIDATION_SEVERITY env param")?,
                None => Severity::default(),
            },
            player_id: match lookup("PLAYER_ID") {
                Some(value) => value
                    .parse::<i64>()
                    .map_err(|_| "An error occured while parsing PLAYER_ID env param")?,
                None => 1,
            },
            player_name: lookup("PLAYER_NAME").unwrap_or_else(|| "name".to_string()),
            renamed_name: lookup("RENAMED_NAME").unwrap_or_else(|| "renamed name".to_string()),
        })
    }
}
