use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_conn: u32,
    pub port: u16,
    pub otel_endpoint: Option<String>,
    pub is_dev: bool,
    pub is_enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/data.sqlite".to_string());

        let port = match std::env::var("PORT") {
            Ok(port_str) => port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            Err(_) => 3001,
        };

        let db_max_conn = match std::env::var("DB_MAX_CONN") {
            Ok(max_str) => max_str
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            Err(_) => 5,
        };

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .ok()
            .filter(|endpoint| !endpoint.is_empty());

        let is_dev = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let is_enable_file_log = std::env::var("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            db_max_conn,
            port,
            otel_endpoint,
            is_dev,
            is_enable_file_log,
        })
    }
}
