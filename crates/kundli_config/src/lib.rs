//! Configuration for the kundli chart service.
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file, then
//! `KUNDLI_*` environment variables.
//!
//! ```toml
//! [geocoder]
//! base_url = "https://nominatim.openstreetmap.org"
//! timeout_secs = 10
//! user_agent = "my-app/1.0 (ops@example.com)"
//!
//! [log]
//! level = "info"
//!
//! [chart]
//! default_gender = "Not specified"
//! ```

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "kundli.toml";

pub const ENV_GEOCODER_URL: &str = "KUNDLI_GEOCODER_URL";
pub const ENV_GEOCODER_TIMEOUT_SECS: &str = "KUNDLI_GEOCODER_TIMEOUT_SECS";
pub const ENV_GEOCODER_USER_AGENT: &str = "KUNDLI_GEOCODER_USER_AGENT";

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = concat!("kundli/", env!("CARGO_PKG_VERSION"));
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_GENDER: &str = "Not specified";

#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KundliConfig {
    pub geocoder: GeocoderSettings,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Echoed as `gender` when the request omits it.
    pub default_gender: String,
}

impl Default for KundliConfig {
    fn default() -> Self {
        Self {
            geocoder: GeocoderSettings {
                base_url: DEFAULT_GEOCODER_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            default_gender: DEFAULT_GENDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    geocoder: Option<GeocoderToml>,
    #[serde(default)]
    log: Option<LogToml>,
    #[serde(default)]
    chart: Option<ChartToml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeocoderToml {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    user_agent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogToml {
    #[serde(default)]
    level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    default_gender: Option<String>,
}

impl KundliConfig {
    /// Load configuration.
    ///
    /// With `path`, the file must exist. Without it, [`DEFAULT_CONFIG_FILE`]
    /// is used if present, else defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut cfg = match path {
            Some(p) => {
                let text = fs::read_to_string(p).map_err(|e| {
                    anyhow::anyhow!("Could not read config file {}: {e}", p.display())
                })?;
                Self::from_toml_str(&text)?
            }
            None => match read_optional(Path::new(DEFAULT_CONFIG_FILE))? {
                Some(text) => Self::from_toml_str(&text)?,
                None => Self::default(),
            },
        };
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let root: RootConfigToml =
            toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse config: {e}"))?;
        let mut cfg = Self::default();
        if let Some(g) = root.geocoder {
            if let Some(url) = g.base_url {
                cfg.geocoder.base_url = url;
            }
            if let Some(secs) = g.timeout_secs {
                cfg.geocoder.timeout = Duration::from_secs(secs);
            }
            if let Some(ua) = g.user_agent {
                cfg.geocoder.user_agent = ua;
            }
        }
        if let Some(level) = root.log.and_then(|l| l.level) {
            cfg.log_level = level;
        }
        if let Some(gender) = root.chart.and_then(|c| c.default_gender) {
            cfg.default_gender = gender;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `KUNDLI_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_GEOCODER_URL) {
            self.geocoder.base_url = url;
        }
        if let Some(raw) = lookup(ENV_GEOCODER_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("{ENV_GEOCODER_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'")
            })?;
            self.geocoder.timeout = Duration::from_secs(secs);
        }
        if let Some(ua) = lookup(ENV_GEOCODER_USER_AGENT) {
            self.geocoder.user_agent = ua;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.geocoder.base_url.trim().is_empty() {
            anyhow::bail!("geocoder.base_url must not be empty");
        }
        if !self.geocoder.base_url.starts_with("http://")
            && !self.geocoder.base_url.starts_with("https://")
        {
            anyhow::bail!(
                "geocoder.base_url must be an http(s) URL, got '{}'",
                self.geocoder.base_url
            );
        }
        if self.geocoder.timeout.is_zero() {
            anyhow::bail!("geocoder.timeout_secs must be greater than zero");
        }
        if self.geocoder.user_agent.trim().is_empty() {
            anyhow::bail!("geocoder.user_agent must not be empty");
        }
        Ok(())
    }
}

/// Contents of `path`, or `None` if it does not exist. Any other read
/// failure is an error.
fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow::anyhow!(
            "Could not read config file {}: {e}",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let cfg = KundliConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.geocoder.timeout, Duration::from_secs(10));
        assert!(cfg.geocoder.user_agent.starts_with("kundli/"));
        assert_eq!(cfg.default_gender, "Not specified");
    }

    #[test]
    fn toml_overrides_defaults() {
        let cfg = KundliConfig::from_toml_str(
            r#"
            [geocoder]
            base_url = "http://localhost:7070"
            timeout_secs = 3

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.geocoder.base_url, "http://localhost:7070");
        assert_eq!(cfg.geocoder.timeout, Duration::from_secs(3));
        assert_eq!(cfg.log_level, "debug");
        // untouched keys keep their defaults
        assert!(cfg.geocoder.user_agent.starts_with("kundli/"));
    }

    #[test]
    fn empty_document_is_defaults() {
        assert_eq!(KundliConfig::from_toml_str("").unwrap(), KundliConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(KundliConfig::from_toml_str("[geocoder]\nretries = 3\n").is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = KundliConfig::from_toml_str("[geocoder]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_GEOCODER_URL, "https://geo.internal"),
            (ENV_GEOCODER_TIMEOUT_SECS, " 4 "),
        ]
        .into_iter()
        .collect();
        let mut cfg = KundliConfig::default();
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.geocoder.base_url, "https://geo.internal");
        assert_eq!(cfg.geocoder.timeout, Duration::from_secs(4));
    }

    #[test]
    fn env_bad_timeout() {
        let mut cfg = KundliConfig::default();
        let err = cfg
            .apply_env(|k| (k == ENV_GEOCODER_TIMEOUT_SECS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_GEOCODER_TIMEOUT_SECS));
    }

    #[test]
    fn load_explicit_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[chart]\ndefault_gender = \"Unspecified\"").unwrap();
        let cfg = KundliConfig::load(Some(f.path())).unwrap();
        assert_eq!(cfg.default_gender, "Unspecified");
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let err = KundliConfig::load(Some(Path::new("/nonexistent/kundli.toml"))).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }

    #[test]
    fn absent_default_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_optional(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap().is_none());
    }

    #[test]
    fn unreadable_default_file_is_error() {
        // a directory where the file should be
        let dir = tempfile::tempdir().unwrap();
        let err = read_optional(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }

    #[test]
    fn non_utf8_default_file_is_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        assert!(read_optional(f.path()).is_err());
    }
}
