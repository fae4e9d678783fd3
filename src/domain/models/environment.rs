//! Raw, unvalidated environment values.

use std::collections::BTreeMap;

/// Raw, unvalidated view of the process environment
///
/// A key is either absent or holds a string, which may be empty. The
/// distinction matters: optional fields keep `""` as a value while absent
/// keys become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnvironment {
    vars: BTreeMap<String, String>,
}

impl RawEnvironment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Look up a variable; `None` means the key is absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove a variable, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Fill in variables that are not already present
    ///
    /// Existing keys win, so process variables take precedence over entries
    /// read from a `.env` file.
    pub fn merge_missing<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.vars.entry(key.into()).or_insert_with(|| value.into());
        }
    }

    /// Number of variables present
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are present
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawEnvironment {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let env = RawEnvironment::new().with("LOG_FILE_PATH", "");
        assert_eq!(env.get("LOG_FILE_PATH"), Some(""));
        assert_eq!(env.get("ADMIN_API_TOKEN"), None);
    }

    #[test]
    fn test_merge_missing_keeps_existing_values() {
        let mut env = RawEnvironment::from_iter([("DISCORD_TOKEN", "from-process")]);
        env.merge_missing([("DISCORD_TOKEN", "from-dotenv"), ("CLIENT_ID", "42")]);

        assert_eq!(env.get("DISCORD_TOKEN"), Some("from-process"));
        assert_eq!(env.get("CLIENT_ID"), Some("42"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut env = RawEnvironment::new().with("CLIENT_ID", "42");
        assert_eq!(env.remove("CLIENT_ID").as_deref(), Some("42"));
        assert!(env.is_empty());
    }

    #[test]
    fn test_from_process_sees_set_variable() {
        temp_env::with_var("GUILDWARDEN_ENV_PROBE", Some("  spaced  "), || {
            let env = RawEnvironment::from_process();
            assert_eq!(env.get("GUILDWARDEN_ENV_PROBE"), Some("  spaced  "));
        });
    }
}
