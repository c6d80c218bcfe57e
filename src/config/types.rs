use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main configuration structure for the scraper
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub urls: UrlsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// PEP index abbreviation -> statuses a detail page may report
    #[serde(rename = "expected-status", default = "default_expected_status")]
    pub expected_status: BTreeMap<String, Vec<String>>,
}

/// Source pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UrlsConfig {
    /// Root of the Python documentation
    #[serde(rename = "main-doc-url")]
    pub main_doc_url: String,

    /// Root of the PEP index
    #[serde(rename = "main-pep-url")]
    pub main_pep_url: String,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            main_doc_url: "https://docs.python.org/3/".to_string(),
            main_pep_url: "https://peps.python.org/".to_string(),
        }
    }
}

/// HTTP client and cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache database file, relative to the output base directory
    #[serde(rename = "cache-path", default = "default_cache_path")]
    pub cache_path: String,

    /// Cached responses older than this are refetched; unset means never
    #[serde(rename = "cache-expire-after-secs", default)]
    pub cache_expire_after_secs: Option<i64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            cache_path: default_cache_path(),
            cache_expire_after_secs: None,
        }
    }
}

/// Where results, downloads and logs go
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "base-dir", default = "default_base_dir")]
    pub base_dir: String,

    /// chrono format string used in result file names
    #[serde(rename = "datetime-format", default = "default_datetime_format")]
    pub datetime_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: UrlsConfig::default(),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
            expected_status: default_expected_status(),
        }
    }
}

impl Config {
    pub fn base_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.base_dir)
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.base_dir().join("downloads")
    }

    pub fn results_dir(&self) -> PathBuf {
        self.base_dir().join("results")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir().join("logs")
    }

    pub fn cache_path(&self) -> PathBuf {
        self.base_dir().join(&self.http.cache_path)
    }
}

fn default_user_agent() -> String {
    format!("pydoc-scraper/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_cache_path() -> String {
    "http_cache.sqlite".to_string()
}

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_datetime_format() -> String {
    "%Y-%m-%d_%H-%M-%S".to_string()
}

/// The status letters used in the "Status" column of the PEP numerical index
pub fn default_expected_status() -> BTreeMap<String, Vec<String>> {
    [
        ("A", &["Active", "Accepted"][..]),
        ("D", &["Deferred"]),
        ("F", &["Final"]),
        ("P", &["Provisional"]),
        ("R", &["Rejected"]),
        ("S", &["Superseded"]),
        ("W", &["Withdrawn"]),
        ("", &["Draft", "Active"]),
    ]
    .into_iter()
    .map(|(abbr, statuses)| {
        (
            abbr.to_string(),
            statuses.iter().map(|s| s.to_string()).collect(),
        )
    })
    .collect()
}
