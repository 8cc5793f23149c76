//! Dex lookup table — `dex.json` maps id (optionally with a form suffix,
//! e.g. "1012-A") to the official display name.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

/// The compact-code shape the extractor emits: `p<digits>[-FORM]`.
static CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^p\s*0*([0-9]{1,4}(?:-[A-Za-z0-9]+)?)$").unwrap());

/// Id → display-name lookup. Resolution failures are never fatal: a miss
/// falls back to the synthetic `p<code>` placeholder.
#[derive(Debug, Default)]
pub struct Dex {
    names: HashMap<String, String>,
}

impl Dex {
    /// Load `dex.json`. A missing or unreadable file yields an empty dex.
    pub fn load(path: &Path) -> Self {
        let names = match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Malformed dex file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        info!("Loaded {} dex entries", names.len());
        Self { names }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            names: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a bare id ("721", "1012-A") to its display name, or the
    /// `p<id>` placeholder on miss.
    pub fn resolve(&self, id: &str) -> String {
        self.names
            .get(id)
            .cloned()
            .unwrap_or_else(|| format!("p{}", id))
    }

    /// Resolve an extracted name: compact `p<code>` shapes are mapped,
    /// anything else (a labeled name, `"?"`) passes through unchanged.
    pub fn resolve_extracted(&self, name: &str) -> String {
        match CODE.captures(name.trim()) {
            Some(cap) => self.resolve(&cap[1]),
            None => name.to_string(),
        }
    }
}
