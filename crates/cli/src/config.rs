use heroes_client::config::{ClientConfig, ConfigError};
use heroes_core::pagination::DEFAULT_PAGE_SIZE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub client: ClientConfig,
    /// Initial page size of the list view.
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default            |
    /// |-------------------------------|--------------------|
    /// | `HEROES_API_BASE_URL`         | public catalog API |
    /// | `HEROES_REQUEST_TIMEOUT_SECS` | `30`               |
    /// | `HEROES_PAGE_SIZE`            | `10`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let client = ClientConfig::from_lookup(&lookup)?;

        let page_size = match lookup("HEROES_PAGE_SIZE") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::Invalid {
                    var: "HEROES_PAGE_SIZE",
                    expected: "a positive integer",
                    value,
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self { client, page_size })
    }
}
