use serde::Deserialize;

/// Process-wide settings, fixed at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub buffer: BufferConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base path of the analytics API; the snapshot lives at `{base_url}/dashboard`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional per-request timeout. Absent means the request may hang for as long as the server does.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".into()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    5000
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BufferConfig {
    /// Points kept by the realtime trend window.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    crate::timeseries::DEFAULT_CAPACITY
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    #[default]
    Tui,
    Headless,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub mode: UiMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_file() -> String {
    "logs/footfall.log".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Reads the file named by `CONFIG_FILE` (default `footfall.toml`).
    /// A missing file means built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "footfall.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
            Err(e) => Err(anyhow::anyhow!("reading {}: {}", path, e)),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let mut config: AppConfig = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Snapshot endpoint, `{base_url}/dashboard`.
    pub fn dashboard_url(&self) -> String {
        format!("{}/dashboard", self.api.base_url)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.api.base_url.is_empty(),
            "api.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"),
            "api.base_url must start with http:// or https://, got {}",
            self.api.base_url
        );
        if let Some(timeout) = self.api.request_timeout_ms {
            anyhow::ensure!(
                timeout > 0,
                "api.request_timeout_ms must be > 0 when set, got {}",
                timeout
            );
        }
        anyhow::ensure!(
            self.refresh.interval_ms > 0,
            "refresh.interval_ms must be > 0, got {}",
            self.refresh.interval_ms
        );
        anyhow::ensure!(
            self.buffer.capacity > 0,
            "buffer.capacity must be > 0, got {}",
            self.buffer.capacity
        );
        anyhow::ensure!(!self.log.file.is_empty(), "log.file must be non-empty");
        Ok(())
    }
}
