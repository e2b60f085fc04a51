use crate::{Error, Result};
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8082;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_EVENTS_FILE: &str = "uk_festivals.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Conf {
    pub port: u16,
    pub data_dir: PathBuf,
    pub default_events_file: String,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            port: DEFAULT_PORT,
            data_dir: DEFAULT_DATA_DIR.into(),
            default_events_file: DEFAULT_EVENTS_FILE.into(),
        }
    }
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let mut conf = Conf::default();
        if let Some(port) = var("PORT").filter(|it| !it.is_empty()) {
            conf.port = port
                .parse()
                .map_err(|_| Error::InvalidInput(format!("Invalid PORT: {port}")))?;
        }
        if let Some(data_dir) = var("DATA_DIR").filter(|it| !it.is_empty()) {
            conf.data_dir = data_dir.into();
        }
        if let Some(file) = var("DEFAULT_EVENTS_FILE").filter(|it| !it.is_empty()) {
            conf.default_events_file = file;
        }
        Ok(conf)
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use crate::{Error, Result};
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() -> Result<()> {
        let conf = Conf::from_vars(vars(&[]))?;
        assert_eq!(conf, Conf::default());
        assert_eq!(conf.port, 8082);
        assert_eq!(conf.data_dir.to_str(), Some("data"));
        assert_eq!(conf.default_events_file, "uk_festivals.csv");
        Ok(())
    }

    #[test]
    fn port_override() -> Result<()> {
        let conf = Conf::from_vars(vars(&[("PORT", "9000"), ("DATA_DIR", "/srv/maps")]))?;
        assert_eq!(conf.port, 9000);
        assert_eq!(conf.data_dir.to_str(), Some("/srv/maps"));
        Ok(())
    }

    #[test]
    fn empty_port_uses_default() -> Result<()> {
        let conf = Conf::from_vars(vars(&[("PORT", "")]))?;
        assert_eq!(conf.port, 8082);
        Ok(())
    }

    #[test]
    fn invalid_port() {
        let res = Conf::from_vars(vars(&[("PORT", "http")]));
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }
}
