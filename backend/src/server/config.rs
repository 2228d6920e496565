//! Settings loaded once at startup via OrthoConfig.
//!
//! Every value is optional. Credentials left unset select the development
//! adapters; endpoints and tuning fall back to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use zeroize::Zeroizing;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_EVENTBRITE_API_URL: &str = "https://www.eventbriteapi.com/v3";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DATABASE_POOL_SIZE: u32 = 8;

/// Errors raised when a configured value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{setting} is not a valid socket address: {value}")]
    InvalidAddress {
        setting: &'static str,
        value: String,
    },
    #[error("{setting} is not a valid URL: {message}")]
    InvalidUrl {
        setting: &'static str,
        message: String,
    },
}

/// Process configuration read from `BRUNCH_*` environment variables,
/// configuration files and the command line.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BRUNCH")]
pub struct AppSettings {
    /// Listen address, e.g. `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Unset keeps registrations in memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub database_pool_size: Option<u32>,
    /// Private token for the ticketing API.
    pub eventbrite_api_key: Option<String>,
    pub eventbrite_api_url: Option<String>,
    /// Base URL of the identity service.
    pub supabase_url: Option<String>,
    /// Service key sent as `apikey` to the identity service.
    pub supabase_service_role_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_api_url: Option<String>,
    pub openai_model: Option<String>,
    /// Per-request timeout in seconds for every outbound HTTP call.
    #[ortho_config(default = 30)]
    pub outbound_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            bind_addr: None,
            database_url: None,
            database_pool_size: None,
            eventbrite_api_key: None,
            eventbrite_api_url: None,
            supabase_url: None,
            supabase_service_role_key: None,
            openai_api_key: None,
            openai_api_url: None,
            openai_model: None,
            outbound_timeout_secs: DEFAULT_OUTBOUND_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn presence(value: &Option<String>) -> &'static str {
            if value.is_some() { "<set>" } else { "<unset>" }
        }
        f.debug_struct("AppSettings")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &presence(&self.database_url))
            .field("database_pool_size", &self.database_pool_size)
            .field("eventbrite_api_key", &presence(&self.eventbrite_api_key))
            .field("eventbrite_api_url", &self.eventbrite_api_url)
            .field("supabase_url", &self.supabase_url)
            .field(
                "supabase_service_role_key",
                &presence(&self.supabase_service_role_key),
            )
            .field("openai_api_key", &presence(&self.openai_api_key))
            .field("openai_api_url", &self.openai_api_url)
            .field("openai_model", &self.openai_model)
            .field("outbound_timeout_secs", &self.outbound_timeout_secs)
            .finish()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn secret(value: &Option<String>) -> Option<Zeroizing<String>> {
    non_blank(value).map(|v| Zeroizing::new(v.to_owned()))
}

fn parse_url(setting: &'static str, raw: &str) -> Result<Url, SettingsError> {
    Url::parse(raw).map_err(|err| SettingsError::InvalidUrl {
        setting,
        message: err.to_string(),
    })
}

impl AppSettings {
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidAddress`] for an unparseable address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = non_blank(&self.bind_addr).unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| SettingsError::InvalidAddress {
            setting: "bind_addr",
            value: raw.to_owned(),
        })
    }

    pub fn database_url(&self) -> Option<Zeroizing<String>> {
        secret(&self.database_url)
    }

    pub fn database_pool_size(&self) -> u32 {
        self.database_pool_size
            .unwrap_or(DEFAULT_DATABASE_POOL_SIZE)
            .max(1)
    }

    pub fn eventbrite_api_key(&self) -> Option<Zeroizing<String>> {
        secret(&self.eventbrite_api_key)
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override is malformed.
    pub fn eventbrite_api_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "eventbrite_api_url",
            non_blank(&self.eventbrite_api_url).unwrap_or(DEFAULT_EVENTBRITE_API_URL),
        )
    }

    /// Identity service base URL and service key, when both are set.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the URL is malformed.
    pub fn supabase(&self) -> Result<Option<(Url, Zeroizing<String>)>, SettingsError> {
        match (
            non_blank(&self.supabase_url),
            secret(&self.supabase_service_role_key),
        ) {
            (Some(url), Some(key)) => Ok(Some((parse_url("supabase_url", url)?, key))),
            _ => Ok(None),
        }
    }

    pub fn openai_api_key(&self) -> Option<Zeroizing<String>> {
        secret(&self.openai_api_key)
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override is malformed.
    pub fn openai_api_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "openai_api_url",
            non_blank(&self.openai_api_url).unwrap_or(DEFAULT_OPENAI_API_URL),
        )
    }

    pub fn openai_model(&self) -> &str {
        non_blank(&self.openai_model).unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    /// At least one second.
    pub fn outbound_timeout(&self) -> Duration {
        Duration::from_secs(self.outbound_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    //! Settings parsing and defaults.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 11] = [
        "BRUNCH_BIND_ADDR",
        "BRUNCH_DATABASE_URL",
        "BRUNCH_DATABASE_POOL_SIZE",
        "BRUNCH_EVENTBRITE_API_KEY",
        "BRUNCH_EVENTBRITE_API_URL",
        "BRUNCH_SUPABASE_URL",
        "BRUNCH_SUPABASE_SERVICE_ROLE_KEY",
        "BRUNCH_OPENAI_API_KEY",
        "BRUNCH_OPENAI_API_URL",
        "BRUNCH_OPENAI_MODEL",
        "BRUNCH_OUTBOUND_TIMEOUT_SECS",
    ];

    fn load_with(overrides: &[(&str, &str)]) -> AppSettings {
        let vars: Vec<(&str, Option<String>)> = VARS
            .iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect();
        let _guard = lock_env(vars);
        AppSettings::load_from_iter([OsString::from("brunch-backend")])
            .expect("settings should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let settings = load_with(&[]);

        assert_eq!(
            settings.bind_addr().expect("default address"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.database_pool_size(), DEFAULT_DATABASE_POOL_SIZE);
        assert!(settings.eventbrite_api_key().is_none());
        assert_eq!(
            settings.eventbrite_api_url().expect("default url").as_str(),
            DEFAULT_EVENTBRITE_API_URL
        );
        assert_eq!(settings.supabase(), Ok(None));
        assert_eq!(settings.openai_model(), DEFAULT_OPENAI_MODEL);
        assert_eq!(
            settings.outbound_timeout(),
            Duration::from_secs(DEFAULT_OUTBOUND_TIMEOUT_SECS)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load_with(&[
            ("BRUNCH_BIND_ADDR", "127.0.0.1:9000"),
            ("BRUNCH_DATABASE_URL", "postgres://localhost/brunch"),
            ("BRUNCH_EVENTBRITE_API_KEY", "eb-key"),
            ("BRUNCH_SUPABASE_URL", "https://id.example.test"),
            ("BRUNCH_SUPABASE_SERVICE_ROLE_KEY", "service-key"),
            ("BRUNCH_OPENAI_MODEL", "gpt-4o"),
            ("BRUNCH_OUTBOUND_TIMEOUT_SECS", "5"),
        ]);

        assert_eq!(
            settings.bind_addr().expect("address").to_string(),
            "127.0.0.1:9000"
        );
        assert_eq!(
            settings.database_url().as_deref().map(String::as_str),
            Some("postgres://localhost/brunch")
        );
        assert_eq!(
            settings.eventbrite_api_key().as_deref().map(String::as_str),
            Some("eb-key")
        );
        let (url, key) = settings
            .supabase()
            .expect("valid url")
            .expect("both values set");
        assert_eq!(url.as_str(), "https://id.example.test/");
        assert_eq!(key.as_str(), "service-key");
        assert_eq!(settings.openai_model(), "gpt-4o");
        assert_eq!(settings.outbound_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    #[case(Some("  "), None)]
    #[case(None, None)]
    #[case(Some("key"), Some("key"))]
    fn blank_secrets_count_as_unset(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let settings = AppSettings {
            openai_api_key: raw.map(str::to_owned),
            ..AppSettings::default()
        };
        assert_eq!(
            settings.openai_api_key().as_deref().map(String::as_str),
            expected
        );
    }

    #[rstest]
    fn default_matches_an_empty_environment() {
        let loaded = load_with(&[]);
        let built = AppSettings::default();

        assert_eq!(loaded.outbound_timeout_secs, built.outbound_timeout_secs);
        assert_eq!(loaded.outbound_timeout(), built.outbound_timeout());
        assert!(loaded.openai_api_key().is_none());
        assert_eq!(loaded.supabase(), Ok(None));
    }

    #[rstest]
    #[case(0, Duration::from_secs(1))]
    #[case(12, Duration::from_secs(12))]
    fn timeout_is_at_least_one_second(#[case] secs: u64, #[case] expected: Duration) {
        let settings = AppSettings {
            outbound_timeout_secs: secs,
            ..AppSettings::default()
        };
        assert_eq!(settings.outbound_timeout(), expected);
    }

    #[rstest]
    fn supabase_needs_both_values() {
        let settings = AppSettings {
            supabase_url: Some("https://id.example.test".into()),
            ..AppSettings::default()
        };
        assert_eq!(settings.supabase(), Ok(None));
    }

    #[rstest]
    fn malformed_values_are_reported() {
        let settings = AppSettings {
            bind_addr: Some("nowhere".into()),
            openai_api_url: Some("not a url".into()),
            ..AppSettings::default()
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidAddress { .. })
        ));
        assert!(matches!(
            settings.openai_api_url(),
            Err(SettingsError::InvalidUrl { .. })
        ));
    }

    #[rstest]
    fn debug_output_hides_secrets() {
        let settings = AppSettings {
            openai_api_key: Some("sk-live-secret".into()),
            ..AppSettings::default()
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("sk-live-secret"));
        assert!(rendered.contains("<set>"));
    }
}
