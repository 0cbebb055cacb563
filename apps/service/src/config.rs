use std::{env, fmt, fs, path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{validate_interval, validate_timeout};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read config: {0}")]
    ReadFailed(#[source] std::io::Error),
    #[error("Failed to write config: {0}")]
    WriteFailed(#[source] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("No config directory available (set XDG_CONFIG_HOME or HOME)")]
    ConfigPathUnavailable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub monitoring: Monitoring,
    pub storage: Storage,
    pub notifications: Notifications,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitoring {
    /// Seconds between reconciliation passes
    pub interval_seconds: u64,
    /// Per-probe timeout; 0 leaves probes bounded only by the platform.
    /// Unset means the default, shortened to the interval when needed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub database_path: path::PathBuf,
    /// Log file used while the dashboard owns the terminal
    pub log_path: path::PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    /// Permission to raise system-level alerts for outages
    pub system_alerts: bool,
    pub toast_seconds: u64,
}

/// Probe timeout used when the config does not set one
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

impl Monitoring {
    pub fn probe_timeout(&self) -> Option<u64> {
        match self.timeout_seconds {
            Some(0) => None,
            Some(secs) => Some(secs),
            None => Some(DEFAULT_TIMEOUT_SECONDS.min(self.interval_seconds)),
        }
    }
}

impl Default for Monitoring {
    fn default() -> Self {
        Self { interval_seconds: 60, timeout_seconds: None }
    }
}

impl Default for Storage {
    fn default() -> Self {
        let dir = default_data_dir();
        Self { database_path: dir.join("sites.db"), log_path: dir.join("pingnotify.log") }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self { system_alerts: true, toast_seconds: 3 }
    }
}

/// Used to ensure we are actually reading a toml file
fn normalize_toml_path(path: &path::Path) -> path::PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().map(|ext| ext != "toml").unwrap_or(true) {
        path.set_extension("toml");
    }
    path
}

/// Get default config path ($XDG_CONFIG_HOME/pingnotify/config.toml or
/// $HOME/.config/...)
fn default_config_path() -> Result<path::PathBuf, Error> {
    let path = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        path::PathBuf::from(config_home)
    } else if let Some(home_dir) = env::home_dir() {
        home_dir.join(".config")
    } else {
        return Err(Error::ConfigPathUnavailable);
    };

    Ok(path.join("pingnotify/config.toml"))
}

/// $XDG_DATA_HOME/pingnotify or $HOME/.local/share/pingnotify, falling back
/// to the working directory
fn default_data_dir() -> path::PathBuf {
    if let Ok(data_home) = env::var("XDG_DATA_HOME") {
        path::PathBuf::from(data_home).join("pingnotify")
    } else if let Some(home_dir) = env::home_dir() {
        home_dir.join(".local/share/pingnotify")
    } else {
        path::PathBuf::from(".pingnotify")
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str, value: &dyn fmt::Display| {
                writeln!(f, "  {:indent$}{}: {}", "", label, value, indent = level * 2)
            }
        };
        let write_title_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str| {
                writeln!(f, "{:indent$}{}", "", label, indent = level * 2)
            }
        };

        let write_title_1 = write_title_indented(1);
        let write_1 = write_indented(1);

        let timeout = match self.monitoring.probe_timeout() {
            Some(secs) => format!("{secs}s"),
            None => "none".to_string(),
        };

        writeln!(f, "Current Internal Configuration State:")?;
        write_title_1(f, "Monitoring")?;
        write_1(f, "Interval", &format!("{}s", self.monitoring.interval_seconds))?;
        write_1(f, "Probe Timeout", &timeout)?;
        write_title_1(f, "Storage")?;
        write_1(f, "Database", &self.storage.database_path.display())?;
        write_1(f, "Log File", &self.storage.log_path.display())?;
        write_title_1(f, "Notifications")?;
        write_1(f, "System Alerts", &self.notifications.system_alerts)?;
        write_1(f, "Toast Duration", &format!("{}s", self.notifications.toast_seconds))?;

        Ok(())
    }
}

/// Where a loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file
    Existing(path::PathBuf),
    /// No file was present; defaults were written here
    Created(path::PathBuf),
}

impl Config {
    /// Generate Config structure from file
    ///
    /// Creates a default config in ~/.config/pingnotify/config.toml
    ///  or the specified path, with the name config.toml if one does not exist
    ///
    /// ```ignore
    /// let (cfg, source) = config::Config::from_config(None::<&path::Path>)?;
    /// println!("{}", cfg);
    /// ```
    pub fn from_config(
        optional_path: Option<impl AsRef<path::Path>>,
    ) -> Result<(Self, ConfigSource), Error> {
        let config_path: path::PathBuf = if let Some(path) = optional_path {
            normalize_toml_path(path.as_ref())
        } else {
            default_config_path()?
        };

        let (config, source) = if config_path.exists() {
            let raw_string = fs::read_to_string(&config_path).map_err(Error::ReadFailed)?;
            (toml::from_str::<Self>(raw_string.as_str())?, ConfigSource::Existing(config_path))
        } else {
            let config = Self::default();
            config.write_config(&config_path)?;
            (config, ConfigSource::Created(config_path))
        };

        config.validate()?;
        Ok((config, source))
    }

    /// Serialize and write a config to a file
    pub fn write_config(&self, path: &std::path::Path) -> Result<(), Error> {
        let config_str: String = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::WriteFailed)?;
        }

        std::fs::write(path, config_str).map_err(Error::WriteFailed)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let interval = self.monitoring.interval_seconds;
        validate_interval(interval).to_result().map_err(|e| Error::Invalid(e.to_string()))?;

        // Only a timeout set in the file is checked against the interval
        if let Some(timeout) = self.monitoring.timeout_seconds.filter(|secs| *secs > 0) {
            validate_timeout(timeout, interval)
                .to_result()
                .map_err(|e| Error::Invalid(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.monitoring.interval_seconds, 60);
        assert_eq!(cfg.monitoring.probe_timeout(), Some(30));
        assert_eq!(cfg.notifications.toast_seconds, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_missing_file_writes_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config");
        let written = dir.path().join("nested/config.toml");

        let (cfg, source) = Config::from_config(Some(&path)).unwrap();
        assert_eq!(cfg.monitoring.interval_seconds, 60);
        assert_eq!(source, ConfigSource::Created(written.clone()));
        assert!(written.exists());

        let (_, source) = Config::from_config(Some(&path)).unwrap();
        assert_eq!(source, ConfigSource::Existing(written));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[monitoring]\ninterval_seconds = 45\n").unwrap();

        let cfg = Config::from_config(Some(&path)).unwrap().0;
        assert_eq!(cfg.monitoring.interval_seconds, 45);
        assert_eq!(cfg.monitoring.timeout_seconds, None);
        assert_eq!(cfg.monitoring.probe_timeout(), Some(DEFAULT_TIMEOUT_SECONDS));
        assert!(cfg.notifications.system_alerts);
    }

    #[test]
    fn test_short_interval_shortens_default_timeout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[monitoring]\ninterval_seconds = 10\n").unwrap();

        let cfg = Config::from_config(Some(&path)).unwrap().0;
        assert_eq!(cfg.monitoring.interval_seconds, 10);
        assert_eq!(cfg.monitoring.probe_timeout(), Some(10));
    }

    #[test]
    fn test_default_file_reloads_with_short_interval() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::default().write_config(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("timeout_seconds"));
        fs::write(&path, written.replace("interval_seconds = 60", "interval_seconds = 5")).unwrap();

        let cfg = Config::from_config(Some(&path)).unwrap().0;
        assert_eq!(cfg.monitoring.probe_timeout(), Some(5));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[monitoring]\ninterval_seconds = 5\ntimeout_seconds = 0\n").unwrap();

        let cfg = Config::from_config(Some(&path)).unwrap().0;
        assert_eq!(cfg.monitoring.probe_timeout(), None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[monitoring]\ninterval_seconds = 0\n").unwrap();
        assert!(matches!(Config::from_config(Some(&path)), Err(Error::Invalid(_))));

        fs::write(&path, "[monitoring]\ninterval_seconds = 10\ntimeout_seconds = 20\n").unwrap();
        assert!(matches!(Config::from_config(Some(&path)), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "monitoring = [").unwrap();
        assert!(matches!(Config::from_config(Some(&path)), Err(Error::ParseFailed(_))));
    }

    #[test]
    fn test_display_lists_sections() {
        let rendered = Config::default().to_string();
        assert!(rendered.contains("Monitoring"));
        assert!(rendered.contains("Probe Timeout: 30s"));
        assert!(rendered.contains("System Alerts: true"));
    }
}
