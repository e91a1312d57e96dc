use std::fs::File;
use std::path::Path;

use log::LevelFilter;

use crate::{FailResult, Tolerances, YamlRead};
use crate::{DEFAULT_SYMMETRY_TOL, DEFAULT_TILDE_TOL};

/// Application-level settings, read from YAML.
///
/// ```yaml
/// tilde-tol: 1e-6
/// symmetry-rel-tol: 1e-13
/// symmetry-abs-tol: 1e-13
/// log-level: info
/// ```
///
/// Every key is optional.  Unrecognized keys are logged as warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub tilde_tol: f64,
    pub symmetry_rel_tol: f64,
    pub symmetry_abs_tol: f64,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tilde_tol: DEFAULT_TILDE_TOL,
            symmetry_rel_tol: DEFAULT_SYMMETRY_TOL,
            symmetry_abs_tol: DEFAULT_SYMMETRY_TOL,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> FailResult<Settings> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| format_err!("{}: {}", path.display(), e))?;
        let settings = Settings::from_reader(file)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_yaml(s: &str) -> FailResult<Settings> {
        let settings = Settings::from_yaml_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> FailResult<()> {
        for &(name, tol) in &[
            ("tilde-tol", self.tilde_tol),
            ("symmetry-rel-tol", self.symmetry_rel_tol),
            ("symmetry-abs-tol", self.symmetry_abs_tol),
        ] {
            if !(tol >= 0.0) {
                bail!("{} must be a nonnegative number, got {}", name, tol);
            }
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> FailResult<LevelFilter> {
        self.log_level.parse()
            .map_err(|_| format_err!("unknown log level {:?}", self.log_level))
    }

    pub fn to_tolerances(&self) -> Tolerances {
        Tolerances {
            tilde: self.tilde_tol,
            symmetry_rel: self.symmetry_rel_tol,
            symmetry_abs: self.symmetry_abs_tol,
        }
    }

    /// [`init_global_logger`](crate::logging::init_global_logger) at the configured level.
    pub fn init_logging(&self) -> FailResult<()> {
        crate::logging::init_global_logger(self.level_filter()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::from_yaml("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.to_tolerances(), Tolerances::default());
        assert_eq!(s.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn partial() {
        let s = Settings::from_yaml("tilde-tol: 0.5\nlog-level: trace\n").unwrap();
        assert_eq!(s.tilde_tol, 0.5);
        assert_eq!(s.symmetry_abs_tol, DEFAULT_SYMMETRY_TOL);
        assert_eq!(s.level_filter().unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn rejected() {
        assert!(Settings::from_yaml("tilde-tol: -1.0\n").is_err());
        assert!(Settings::from_yaml("log-level: loud\n").is_err());
        assert!(Settings::from_yaml("tilde-tol: [1]\n").is_err());
    }
}
