//! Client configuration: API key plus region, resolved once at startup.
//!
//! # Design
//! Environment variables are read only inside [`Config::resolve`]. Everything
//! downstream receives an already-resolved `Config` and never looks at the
//! process environment again. `resolve_with` takes the variable lookup as a
//! closure so tests can supply values without touching global state.

use std::fmt;

use crate::error::{ApiError, Result};
use crate::region::Region;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ALMA_API_KEY";

/// Environment variable holding the region code.
pub const REGION_VAR: &str = "ALMA_API_REGION";

/// Immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    region: Region,
}

impl Config {
    /// Build a configuration from explicit values. A blank key is rejected;
    /// any other key is kept exactly as given.
    pub fn new(api_key: &str, region: Region) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(Self {
            api_key: api_key.to_string(),
            region,
        })
    }

    /// Resolve configuration, falling back to `ALMA_API_KEY` and
    /// `ALMA_API_REGION` for any argument that is `None`.
    pub fn resolve(api_key: Option<&str>, region: Option<&str>) -> Result<Self> {
        Self::resolve_with(api_key, region, |name| std::env::var(name).ok())
    }

    /// Like [`Config::resolve`] but reads variables through `lookup`.
    ///
    /// An explicit argument always wins over the environment, so an explicit
    /// but invalid region fails even when `ALMA_API_REGION` is set. Empty
    /// environment values count as unset.
    pub fn resolve_with<F>(api_key: Option<&str>, region: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = match api_key {
            Some(key) => key.to_string(),
            None => from_env(API_KEY_VAR).ok_or(ApiError::MissingApiKey)?,
        };
        let region = match region {
            Some(code) => code.to_string(),
            None => from_env(REGION_VAR).ok_or(ApiError::MissingRegion)?,
        };

        Self::new(&api_key, region.parse()?)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

// The key is a credential; keep it out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn explicit_values_are_used() {
        let config = Config::resolve_with(Some("unreal"), Some("EU"), env(&[])).unwrap();
        assert_eq!(config.api_key(), "unreal");
        assert_eq!(config.region(), Region::Eu);
    }

    #[test]
    fn environment_fills_missing_arguments() {
        let lookup = env(&[(API_KEY_VAR, "my fake key"), (REGION_VAR, "APAC")]);
        let config = Config::resolve_with(None, None, lookup).unwrap();
        assert_eq!(config.api_key(), "my fake key");
        assert_eq!(config.region(), Region::Apac);
    }

    #[test]
    fn explicit_arguments_override_environment() {
        let lookup = env(&[(API_KEY_VAR, "env key"), (REGION_VAR, "APAC")]);
        let config = Config::resolve_with(Some("arg key"), Some("US"), lookup).unwrap();
        assert_eq!(config.api_key(), "arg key");
        assert_eq!(config.region(), Region::Us);
    }

    #[test]
    fn missing_key_fails() {
        let err = Config::resolve_with(None, Some("EU"), env(&[])).unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey));
    }

    #[test]
    fn empty_key_fails() {
        let lookup = env(&[(API_KEY_VAR, "my fake key")]);
        let err = Config::resolve_with(Some(""), Some("EU"), lookup).unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey));
    }

    #[test]
    fn key_is_kept_verbatim() {
        let config = Config::new(" key ", Region::Eu).unwrap();
        assert_eq!(config.api_key(), " key ");
        let headers = crate::headers::build_headers(config.api_key(), Default::default());
        assert_eq!(headers[1].1, "apikey  key ");
    }

    #[test]
    fn blank_key_fails() {
        assert!(matches!(
            Config::new("   ", Region::Eu),
            Err(ApiError::MissingApiKey)
        ));
    }

    #[test]
    fn missing_region_fails() {
        let lookup = env(&[(API_KEY_VAR, "k"), (REGION_VAR, "  ")]);
        let err = Config::resolve_with(None, None, lookup).unwrap_err();
        assert!(matches!(err, ApiError::MissingRegion));
    }

    #[test]
    fn unknown_region_fails_even_with_env_fallback() {
        let lookup = env(&[(API_KEY_VAR, "k"), (REGION_VAR, "APAC")]);
        let err = Config::resolve_with(None, Some("XX"), lookup).unwrap_err();
        assert!(matches!(err, ApiError::UnknownRegion(_)));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = Config::new("secret", Region::Eu).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("Eu"));
    }
}
