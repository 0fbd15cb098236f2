use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Connection settings for a TheHive instance.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub apikey: String,
    pub insecure: bool,
    pub organisation: Option<String>,
}

impl Config {
    /// Create a new Config for the given instance URL and API key
    pub fn new(url: impl Into<String>, apikey: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            apikey: apikey.into(),
            insecure: false,
            organisation: None,
        }
    }

    /// Scope every request to the given organisation
    pub fn with_organisation(mut self, organisation: impl Into<String>) -> Self {
        self.organisation = Some(organisation.into());
        self
    }

    /// Skip TLS certificate verification
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Load configuration from a file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        tracing::info!("Loading config from file");

        let config = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        serde_norway::from_str(&config).map_err(|e| Error::Config(e.to_string()))
    }

    /// Resolve the API key from an environment variable if it was not given inline
    fn resolve(
        url: String,
        apikey: Option<String>,
        apikey_from: Option<String>,
        insecure: bool,
        organisation: Option<String>,
    ) -> Result<Self> {
        let apikey = match (apikey, apikey_from) {
            (Some(apikey), _) => apikey,
            (None, Some(var)) => std::env::var(&var)
                .map_err(|_| Error::Config(format!("environment variable '{var}' is not set")))?,
            (None, None) => {
                return Err(Error::Config(
                    "one of 'apikey' or 'apikeyFrom' must be set".to_string(),
                ));
            }
        };

        Ok(Self {
            url,
            apikey,
            insecure,
            organisation,
        })
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigRaw {
            url: String,
            apikey: Option<String>,
            #[serde(rename = "apikeyFrom")]
            apikey_from: Option<String>,
            #[serde(default)]
            insecure: Option<bool>,
            organisation: Option<String>,
        }

        let raw = ConfigRaw::deserialize(deserializer)?;
        Config::resolve(
            raw.url,
            raw.apikey,
            raw.apikey_from,
            raw.insecure.unwrap_or(false),
            raw.organisation,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_yaml_with_inline_apikey() {
        let config: Config = serde_norway::from_str(
            "url: https://hive.example.org\napikey: secret\norganisation: soc\n",
        )
        .unwrap();

        assert_eq!(config.url, "https://hive.example.org");
        assert_eq!(config.apikey, "secret");
        assert!(!config.insecure);
        assert_eq!(config.organisation.as_deref(), Some("soc"));
    }

    #[test]
    fn from_yaml_without_any_apikey_fails() {
        let result: std::result::Result<Config, _> =
            serde_norway::from_str("url: https://hive.example.org\n");

        assert!(result.is_err());
    }

    #[test]
    fn from_yaml_resolves_apikey_from_env() {
        // PATH is always set, so the test needs no env mutation
        let config: Config =
            serde_norway::from_str("url: https://hive.example.org\napikeyFrom: PATH\n").unwrap();

        assert_eq!(config.apikey, std::env::var("PATH").unwrap());
    }

    #[test]
    fn from_yaml_with_unset_env_var_fails() {
        let result: std::result::Result<Config, _> = serde_norway::from_str(
            "url: https://hive.example.org\napikeyFrom: THEHIVE_TEST_UNSET_VARIABLE\n",
        );

        assert!(result.is_err());
    }
}
