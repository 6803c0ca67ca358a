//! Connection parameters for the hosted notes table.

use crate::{NotesError, Result};

/// Environment variables read by [`StoreConfig::from_env`].
pub const ENV_STORE_URL: &str = "MINNOTES_STORE_URL";
pub const ENV_STORE_KEY: &str = "MINNOTES_STORE_KEY";
pub const ENV_STORE_TABLE: &str = "MINNOTES_STORE_TABLE";

/// Connection parameters for a PostgREST-compatible hosted store.
///
/// Resolved once at startup; the gateway built from it is reused for every
/// call for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://myproject.supabase.co`.
    pub url: String,
    /// API key, sent as both the `apikey` header and a bearer token.
    pub api_key: String,
    /// Table holding the notes.
    pub table: String,
}

impl StoreConfig {
    pub const DEFAULT_TABLE: &'static str = "notes";

    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: Self::DEFAULT_TABLE.to_string(),
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Config`] naming the missing variable when the
    /// URL or key is unset or blank.
    pub fn from_env() -> Result<Self> {
        let url = env_var_trimmed(ENV_STORE_URL)
            .ok_or_else(|| NotesError::Config(format!("{ENV_STORE_URL} is not set")))?;
        let api_key = env_var_trimmed(ENV_STORE_KEY)
            .ok_or_else(|| NotesError::Config(format!("{ENV_STORE_KEY} is not set")))?;
        let table =
            env_var_trimmed(ENV_STORE_TABLE).unwrap_or_else(|| Self::DEFAULT_TABLE.to_string());
        Ok(Self {
            url,
            api_key,
            table,
        })
    }

    /// Returns the REST endpoint for the notes table.
    pub(crate) fn table_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

/// Reads an environment variable, treating blank-after-trim values as unset.
fn env_var_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_endpoint_strips_trailing_slash() {
        let config = StoreConfig::new("https://example.supabase.co/", "key");
        assert_eq!(
            config.table_endpoint(),
            "https://example.supabase.co/rest/v1/notes"
        );
    }

    #[test]
    fn test_new_defaults_table_name() {
        let config = StoreConfig::new("https://example.supabase.co", "key");
        assert_eq!(config.table, "notes");
    }

    #[test]
    fn test_from_env_requires_url_and_key() {
        // Single test for the env path so parallel tests never race on vars.
        std::env::remove_var(ENV_STORE_URL);
        std::env::remove_var(ENV_STORE_KEY);
        std::env::remove_var(ENV_STORE_TABLE);
        assert!(StoreConfig::from_env().is_err());

        std::env::set_var(ENV_STORE_URL, "  https://example.supabase.co  ");
        std::env::set_var(ENV_STORE_KEY, "anon-key");
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.url, "https://example.supabase.co");
        assert_eq!(config.api_key, "anon-key");
        assert_eq!(config.table, "notes");

        std::env::set_var(ENV_STORE_KEY, "   ");
        assert!(StoreConfig::from_env().is_err(), "blank key counts as unset");

        std::env::remove_var(ENV_STORE_URL);
        std::env::remove_var(ENV_STORE_KEY);
    }
}
