use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format '{}', expected 'pretty' or 'json'", other)),
        }
    }
}

/// Server settings read from `MIETORU_*` environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    /// `["*"]` allows any origin
    pub cors_allow_origins: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    /// Seed values for the initial in-memory profile
    pub seed_current_assets: Option<f64>,
    pub seed_fiscal_year_start_month: Option<u32>,
    pub seed_employee_count: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8088)),
            cors_allow_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Pretty,
            seed_current_assets: None,
            seed_fiscal_year_start_month: None,
            seed_employee_count: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("MIETORU_LISTEN_ADDR") {
            config.listen_addr = addr
                .parse()
                .with_context(|| format!("MIETORU_LISTEN_ADDR '{}' is not a socket address", addr))?;
        }
        if let Some(origins) = lookup("MIETORU_CORS_ALLOW_ORIGINS") {
            config.cors_allow_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(secs) = lookup("MIETORU_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = parse_var("MIETORU_REQUEST_TIMEOUT_SECS", &secs)?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(format) = lookup("MIETORU_LOG_FORMAT") {
            config.log_format = format.parse::<LogFormat>().context("MIETORU_LOG_FORMAT")?;
        }
        if let Some(assets) = lookup("MIETORU_CURRENT_ASSETS") {
            config.seed_current_assets = Some(parse_var("MIETORU_CURRENT_ASSETS", &assets)?);
        }
        if let Some(month) = lookup("MIETORU_FISCAL_YEAR_START_MONTH") {
            config.seed_fiscal_year_start_month =
                Some(parse_var("MIETORU_FISCAL_YEAR_START_MONTH", &month)?);
        }
        if let Some(count) = lookup("MIETORU_EMPLOYEE_COUNT") {
            config.seed_employee_count = Some(parse_var("MIETORU_EMPLOYEE_COUNT", &count)?);
        }

        Ok(config)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.is_empty() || self.cors_allow_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| anyhow!("{} has invalid value '{}': {}", key, raw, e))
}
