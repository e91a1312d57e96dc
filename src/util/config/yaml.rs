use std::io::Read;

use failure::Error;
use serde::de::DeserializeOwned;

/// Read settings from YAML, tolerating keys the settings type does not know.
///
/// Unknown keys are most often typos, so [`from_yaml_str`](YamlRead::from_yaml_str) logs
/// each one at `warn!` instead of failing.
pub trait YamlRead: DeserializeOwned {
    fn from_reader(mut r: impl Read) -> Result<Self, Error> {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        Self::from_yaml_str(&s)
    }

    fn from_yaml_str(s: &str) -> Result<Self, Error> {
        let (out, unused) = Self::from_yaml_str_with_unused(s)?;
        for path in unused {
            warn!("Unused setting (possible typo?): {}", path);
        }
        Ok(out)
    }

    /// Also return the dotted path of each key that was not used.
    fn from_yaml_str_with_unused(s: &str) -> Result<(Self, Vec<String>), Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(s)?;

        let mut unused = vec![];
        let result: Result<Self, _> = serde_ignored::deserialize(value, |path| unused.push(path.to_string()));
        match result {
            Ok(out) => Ok((out, unused)),
            // errors through a Value carry no position; parse the text again for a better one
            Err(e) => match serde_yaml::from_str::<Self>(s) {
                Err(positioned) => Err(positioned.into()),
                Ok(_) => Err(e.into()),
            },
        }
    }
}

impl<T: DeserializeOwned> YamlRead for T {}

#[cfg(test)]
mod tests {
    use serde_derive::Deserialize;
    use crate::YamlRead;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    struct Tols {
        abs_tol: f64,
        #[serde(default)]
        rel_tol: Option<f64>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Outer {
        tols: Tols,
    }

    #[test]
    fn unused_keys_are_reported() {
        let (t, unused) = Tols::from_yaml_str_with_unused("abs-tol: 0.001\nrell-tol: 2\n").unwrap();
        assert_eq!(t, Tols { abs_tol: 0.001, rel_tol: None });
        assert_eq!(unused, vec!["rell-tol".to_string()]);

        let (_, unused) = Outer::from_yaml_str_with_unused("tols:\n  abs-tol: 1\n  typo: 3\n").unwrap();
        assert_eq!(unused, vec!["tols.typo".to_string()]);
    }

    #[test]
    fn reader() {
        let t = Tols::from_reader(&b"abs-tol: 2.0\nrel-tol: 1e-8\n"[..]).unwrap();
        assert_eq!(t.rel_tol, Some(1e-8));
    }

    #[test]
    fn bad_values() {
        assert!(Tols::from_yaml_str("abs-tol: [1, 2]\n").is_err());
        assert!(Tols::from_yaml_str("rel-tol: 1\n").is_err());
        assert!(Tols::from_yaml_str("abs-tol: [1\n").is_err());
    }
}
