use crate::app_config::{AppConfig, Environment, NaverCredentials, SearchAdCredentials};
use crate::ConfigError;

pub(crate) const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub(crate) const DEFAULT_BEST100_URL: &str = "https://shopping.naver.com/best100v2/main.naver";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or a credential set is only
/// partially configured.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or a credential set is only
/// partially configured.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Credentials are all-or-nothing per API: setting
/// one half of a pair without the other is rejected so a typo never silently
/// routes every request to fallback data.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let naver_pair = |id_var: &str, secret_var: &str| -> Result<Option<NaverCredentials>, ConfigError> {
        match (optional(id_var), optional(secret_var)) {
            (Some(client_id), Some(client_secret)) => Ok(Some(NaverCredentials {
                client_id,
                client_secret,
            })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::MissingEnvVar(secret_var.to_string())),
            (None, Some(_)) => Err(ConfigError::MissingEnvVar(id_var.to_string())),
        }
    };

    let database_url = optional("DATABASE_URL");
    let env = parse_environment(&or_default("TRENDLENS_ENV", "development"))?;
    let bind_addr = parse_addr("TRENDLENS_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("TRENDLENS_LOG_LEVEL", "info");
    let cors_origins = parse_list(&or_default("TRENDLENS_CORS_ORIGINS", "http://localhost:3000"));

    let naver_search = naver_pair("NAVER_CLIENT_ID", "NAVER_CLIENT_SECRET")?;
    let naver_datalab = naver_pair("NAVER_DATALAB_CLIENT_ID", "NAVER_DATALAB_CLIENT_SECRET")?
        .or_else(|| naver_search.clone());

    let searchad = match (
        optional("NAVER_SEARCHAD_API_KEY"),
        optional("NAVER_SEARCHAD_SECRET_KEY"),
        optional("NAVER_SEARCHAD_CUSTOMER_ID"),
    ) {
        (None, None, None) => None,
        (Some(api_key), Some(secret_key), Some(customer_id)) => Some(SearchAdCredentials {
            api_key,
            secret_key,
            customer_id,
        }),
        (api_key, secret_key, _) => {
            let missing = if api_key.is_none() {
                "NAVER_SEARCHAD_API_KEY"
            } else if secret_key.is_none() {
                "NAVER_SEARCHAD_SECRET_KEY"
            } else {
                "NAVER_SEARCHAD_CUSTOMER_ID"
            };
            return Err(ConfigError::MissingEnvVar(missing.to_string()));
        }
    };

    let db_max_connections = parse_u32("TRENDLENS_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("TRENDLENS_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("TRENDLENS_DB_ACQUIRE_TIMEOUT_SECS", "5")?;

    let http_timeout_secs = parse_u64("TRENDLENS_HTTP_TIMEOUT_SECS", "10")?;
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRENDLENS_HTTP_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least one second".to_string(),
        });
    }
    let user_agent = or_default("TRENDLENS_USER_AGENT", DEFAULT_USER_AGENT);
    let best100_url = or_default("TRENDLENS_BEST100_URL", DEFAULT_BEST100_URL);
    let crawl_schedule = or_default("TRENDLENS_CRAWL_SCHEDULE", "0 0 3 * * *");

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        cors_origins,
        naver_search,
        naver_datalab,
        searchad,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        http_timeout_secs,
        user_agent,
        best100_url,
        crawl_schedule,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRENDLENS_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

/// Splits a comma-separated list, dropping blank entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
