use std::env;
use std::path::Path;
use std::time::Duration;

use crate::cloudprovider::WaitConfig;

// Default configuration constants
pub const DEFAULT_MANAGEMENT_URL: &str = "https://management.azure.com";
pub const DEFAULT_ACCESS_TOKEN: &str = "";
pub const DEFAULT_SUBSCRIPTION_ID: &str = "";
pub const DEFAULT_REGION: &str = "";
pub const DEFAULT_ZONE_ID: &str = "";
pub const DEFAULT_API_VERSION: &str = "2016-04-01";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 300;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_management_url() -> String {
    sanitize_base_url(&env::var("AZURE_MANAGEMENT_URL").unwrap_or_else(|_| DEFAULT_MANAGEMENT_URL.to_string()))
}

pub fn get_access_token() -> String {
    env::var("AZURE_ACCESS_TOKEN").unwrap_or_else(|_| DEFAULT_ACCESS_TOKEN.to_string())
}

pub fn get_subscription_id() -> String {
    env::var("AZURE_SUBSCRIPTION_ID").unwrap_or_else(|_| DEFAULT_SUBSCRIPTION_ID.to_string())
}

/// Region name used for price keys and to filter listings
pub fn get_region() -> String {
    env::var("AZURE_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string())
}

pub fn get_zone_id() -> String {
    env::var("AZURE_ZONE_ID").unwrap_or_else(|_| DEFAULT_ZONE_ID.to_string())
}

pub fn get_api_version() -> String {
    env::var("CLASSIC_API_VERSION")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
}

fn get_secs(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

pub fn get_wait_config() -> WaitConfig {
    WaitConfig {
        interval: Duration::from_secs(get_secs("POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)),
        timeout: Duration::from_secs(get_secs("WAIT_TIMEOUT_SECS", DEFAULT_WAIT_TIMEOUT_SECS)),
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_MANAGEMENT_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
