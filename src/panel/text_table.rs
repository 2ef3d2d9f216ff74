//! # Text Table
//!
//! Localized display strings keyed by name. Server codes are looked up as
//! `error_code{code}` / `msg_code{code}`. The built-in table is compiled in;
//! an override file can replace any subset of it.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_TEXTS: &str = include_str!("../../assets/texts.json");

/// Read-only key -> display text mapping
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    entries: HashMap<String, String>,
}

impl TextTable {
    /// Table parsed from a JSON object of strings
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).context("text table must be a JSON object of strings")?;
        Ok(Self { entries })
    }

    /// The table compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TEXTS)
    }

    /// Built-in table, overridden by the entries of `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut table = Self::builtin()?;
        if let Some(path) = path {
            tracing::debug!("Loading text overrides from '{}'", path.display());
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read text table '{}'", path.display()))?;
            let overrides = Self::from_json(&json)?;
            tracing::info!(
                "Loaded {} text overrides from '{}'",
                overrides.len(),
                path.display()
            );
            table.merge(overrides);
        }
        Ok(table)
    }

    /// Insert every entry of `other`, replacing existing keys
    pub fn merge(&mut self, other: TextTable) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Display text for `key`. Unknown keys render as the key itself.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(text) => text,
            None => {
                tracing::warn!("No text for key '{}'", key);
                key
            }
        }
    }

    /// Display text for a server code, e.g. `code_text("error_code", "07")`
    pub fn code_text(&self, prefix: &str, code: &str) -> String {
        let key = format!("{prefix}{code}");
        self.get(&key).to_string()
    }
}
