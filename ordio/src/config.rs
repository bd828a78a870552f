use crate::error::AppError;
use ordiolib::error_log::DEFAULT_ERROR_LOG;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from an optional TOML file; CLI flags win over it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Where failures are appended.
    pub error_log: PathBuf,
    /// File loaded before the menu is shown.
    pub data_file: Option<PathBuf>,
    /// tracing level for this crate and ordiolib when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
            data_file: None,
            log_level: "warn".into(),
        }
    }
}

impl Settings {
    /// No path means built-in defaults; a path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn with_overrides(mut self, data_file: Option<PathBuf>, error_log: Option<PathBuf>) -> Self {
        if data_file.is_some() {
            self.data_file = data_file;
        }
        if let Some(log) = error_log {
            self.error_log = log;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let s = Settings::from_toml(r#"data_file = "orders.csv""#).unwrap();
        assert_eq!(s.data_file, Some(PathBuf::from("orders.csv")));
        assert_eq!(s.error_log, PathBuf::from("error_log.txt"));
        assert_eq!(s.log_level, "warn");
    }

    #[test]
    fn cli_flags_override_file() {
        let s = Settings::from_toml("error_log = \"a.log\"\ndata_file = \"a.json\"\nlog_level = \"debug\"")
            .unwrap()
            .with_overrides(Some("b.xml".into()), None);
        assert_eq!(s.data_file, Some(PathBuf::from("b.xml")));
        assert_eq!(s.error_log, PathBuf::from("a.log"));
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(Settings::from_toml("error_log = 3"), Err(AppError::Config(_))));
    }

    #[test]
    fn load_reads_file_or_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "log_level = \"info\"").unwrap();
        assert_eq!(Settings::load(Some(f.path())).unwrap().log_level, "info");
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
        assert!(matches!(
            Settings::load(Some(Path::new("/definitely/missing/ordio.toml"))),
            Err(AppError::Config(_))
        ));
    }
}
