//! Career registry: slug -> `CareerID` and reference stats
//!
//! Loaded from TOML. A built-in registry covering every playable career is
//! compiled into the crate; a user file replaces it entirely.

use std::path::Path;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::types::BaseStats;

/// Built-in registry TOML
const DEFAULT_REGISTRY_TOML: &str = include_str!("../../data/careers.toml");

/// One registered career
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEntry {
    /// Display name
    pub name: String,
    /// Game `CareerID`
    #[serde(rename = "id")]
    pub career_id: u16,
    pub stats: BaseStats,
}

/// A registered career together with its slug
#[derive(Debug, Clone, Copy)]
pub struct CareerRef<'a> {
    pub slug: &'a str,
    pub entry: &'a CareerEntry,
}

/// Careers keyed by slug, in reconcile order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRegistry {
    careers: IndexMap<String, CareerEntry>,
}

impl CareerRegistry {
    /// Parse a registry from TOML text
    ///
    /// # Errors
    /// Returns [`Error::RegistryParse`] if the text is not a valid registry.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a registry file
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        let registry = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded career registry {} ({} careers)",
            path.display(),
            registry.len()
        );
        Ok(registry)
    }

    /// The built-in registry (parsed once)
    ///
    /// # Panics
    /// Panics if the embedded registry is malformed, which would indicate a
    /// build-time error.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static REGISTRY: OnceLock<CareerRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Self::from_toml_str(DEFAULT_REGISTRY_TOML)
                .expect("Embedded career registry should be valid")
        })
    }

    /// Look up a career by slug
    ///
    /// # Errors
    /// Returns [`Error::UnknownCareer`] if the slug is not registered.
    pub fn get(&self, slug: &str) -> Result<CareerRef<'_>> {
        self.careers
            .get_key_value(slug)
            .map(|(slug, entry)| CareerRef { slug, entry })
            .ok_or_else(|| Error::UnknownCareer(slug.to_string()))
    }

    /// Resolve a list of slugs, or every career when the list is empty
    ///
    /// # Errors
    /// Returns [`Error::UnknownCareer`] for the first unregistered slug.
    pub fn select<S: AsRef<str>>(&self, slugs: &[S]) -> Result<Vec<CareerRef<'_>>> {
        if slugs.is_empty() {
            return Ok(self.iter().collect());
        }
        slugs.iter().map(|slug| self.get(slug.as_ref())).collect()
    }

    /// Careers in declaration order
    pub fn iter(&self) -> impl Iterator<Item = CareerRef<'_>> {
        self.careers
            .iter()
            .map(|(slug, entry)| CareerRef { slug, entry })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.careers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}
