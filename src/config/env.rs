//! Environment snapshot.
//!
//! The loader never reads process state directly; it reads an [`Env`]
//! built by the caller. Startup builds one from the process (optionally
//! layered over a `.env` file), tests build one from literal pairs.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::loader::ConfigError;

/// Read-only map of variable name to value.
#[derive(Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment. Non-UTF-8 entries are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Read a `.env`-style file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let to_err = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(to_err)? {
            let (key, value) = item.map_err(to_err)?;
            vars.insert(key, value);
        }
        Ok(Self { vars })
    }

    /// Fill in variables missing from `self` with those from `defaults`.
    /// Existing entries win.
    pub fn or_else(mut self, defaults: Env) -> Self {
        for (key, value) in defaults.vars {
            self.vars.entry(key).or_insert(value);
        }
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    /// Raw lookup; does not treat empty values as missing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of a required variable.
    ///
    /// Absent and empty are both missing. Every miss is logged with the
    /// variable name before the error is returned.
    pub fn require(&self, name: &'static str) -> Result<String, ConfigError> {
        match self.vars.get(name) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => {
                tracing::error!(variable = name, "ENV variable {} is required", name);
                Err(ConfigError::MissingVariable(name))
            }
        }
    }

    /// Required variable holding a JSON document.
    pub fn require_json<T: DeserializeOwned>(&self, name: &'static str) -> Result<T, ConfigError> {
        let raw = self.require(name)?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::MalformedJson { name, source })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// Values are credentials; only names are shown.
impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Env").field("names", &names).finish()
    }
}
