use std::env;

/// Runtime configuration, read from `FIELD_OPS_*` environment variables with
/// sensible defaults for local development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Lifetime of signed URLs returned for private evidence uploads.
    pub signed_url_ttl_minutes: u32,
    /// Request-scoped timeout around every media gateway call.
    pub upload_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            signed_url_ttl_minutes: 15,
            upload_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("FIELD_OPS_HOST").unwrap_or(defaults.host),
            port: parse_or("FIELD_OPS_PORT", defaults.port),
            signed_url_ttl_minutes: parse_or(
                "FIELD_OPS_SIGNED_URL_TTL_MINUTES",
                defaults.signed_url_ttl_minutes,
            ),
            upload_timeout_secs: parse_or(
                "FIELD_OPS_UPLOAD_TIMEOUT_SECS",
                defaults.upload_timeout_secs,
            ),
        }
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_fall_back_to_defaults_for_unset_variables() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.signed_url_ttl_minutes, 15);
        assert_eq!(config.upload_timeout_secs, 10);
    }
}
