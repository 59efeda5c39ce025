//! Storage ports for dump input and career files
//!
//! The pipeline never touches the filesystem directly: dumps are read through
//! a [`DumpSource`] and career files through a [`CareerStore`]. Directory
//! implementations back the CLI, [`MemoryStore`] backs tests and scripted runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::career::Career;
use crate::error::{Error, Result};
use crate::formats::{TextEncoding, read_text_file};

/// The extracted dumps the canonical dataset is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpKind {
    Abilities,
    Components,
    Names,
    Descriptions,
    Results,
}

impl DumpKind {
    /// Default file name inside a dump directory
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Abilities => "abilities.tsv",
            Self::Components => "components.tsv",
            Self::Names => "abilitynames.txt",
            Self::Descriptions => "abilitydesc.txt",
            Self::Results => "abilityresults.txt",
        }
    }

    #[must_use]
    pub fn encoding(self) -> TextEncoding {
        match self {
            Self::Abilities | Self::Components => TextEncoding::Utf8,
            Self::Names | Self::Descriptions => TextEncoding::Utf16Be,
            Self::Results => TextEncoding::Utf16Le,
        }
    }
}

/// Source of decoded dump text
pub trait DumpSource {
    /// Read one dump as text
    ///
    /// # Errors
    /// Returns an error if the dump is missing or cannot be decoded.
    fn read_dump(&self, kind: DumpKind) -> Result<String>;
}

/// Persistent store of curated career files
pub trait CareerStore {
    /// Load the career file for `slug`
    ///
    /// # Errors
    /// Returns [`Error::CareerNotFound`] if no file exists for the slug.
    fn load_career(&self, slug: &str) -> Result<Career>;

    /// Replace the career file for `slug`
    ///
    /// # Errors
    /// Returns [`Error::Write`] if the file cannot be replaced.
    fn save_career(&mut self, slug: &str, career: &Career) -> Result<()>;
}

// -----------------------------------------------------------------------------
// Directory-backed stores
// -----------------------------------------------------------------------------

/// Dumps stored under their default file names in one directory
#[derive(Debug, Clone)]
pub struct DumpDirectory {
    root: PathBuf,
}

impl DumpDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path_of(&self, kind: DumpKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

impl DumpSource for DumpDirectory {
    fn read_dump(&self, kind: DumpKind) -> Result<String> {
        let path = self.path_of(kind);
        tracing::debug!("Reading {} ({})", path.display(), kind.encoding());
        read_text_file(path, kind.encoding())
    }
}

/// Career files stored as `<slug>.json` in one directory
#[derive(Debug, Clone)]
pub struct CareerDirectory {
    root: PathBuf,
}

impl CareerDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path_of(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{slug}.json"))
    }
}

impl CareerStore for CareerDirectory {
    fn load_career(&self, slug: &str) -> Result<Career> {
        let path = self.path_of(slug);
        let json = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::CareerNotFound(slug.to_string())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save_career(&mut self, slug: &str, career: &Career) -> Result<()> {
        let path = self.path_of(slug);
        let updated = serde_json::to_value(career)?;
        let value = match read_json(&path) {
            Some(original) => keep_key_order(original, updated),
            None => updated,
        };
        let json = serde_json::to_string_pretty(&value)?;

        // Write beside the target and rename so a failed write never truncates it
        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, json)
            .and_then(|()| std::fs::rename(&staging, &path))
            .map_err(|source| {
                let _ = std::fs::remove_file(&staging);
                Error::Write {
                    path: path.clone(),
                    source,
                }
            })?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}

fn read_json(path: &Path) -> Option<Value> {
    let json = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&json).ok()
}

/// Lay `updated` out in `original`'s key order
///
/// Keys present in both stay where they were in `original`, new keys follow
/// in `updated` order and keys missing from `updated` are dropped. Arrays of
/// equal length are merged element by element.
fn keep_key_order(original: Value, updated: Value) -> Value {
    match (original, updated) {
        (Value::Object(original), Value::Object(mut updated)) => {
            let mut merged = Map::with_capacity(updated.len());
            for (key, old) in original {
                if let Some(new) = updated.get_mut(&key) {
                    let new = std::mem::take(new);
                    merged.insert(key, keep_key_order(old, new));
                }
            }
            for (key, new) in updated {
                if !merged.contains_key(&key) {
                    merged.insert(key, new);
                }
            }
            Value::Object(merged)
        }
        (Value::Array(original), Value::Array(updated)) if original.len() == updated.len() => {
            Value::Array(
                original
                    .into_iter()
                    .zip(updated)
                    .map(|(old, new)| keep_key_order(old, new))
                    .collect(),
            )
        }
        (_, updated) => updated,
    }
}

// -----------------------------------------------------------------------------
// In-memory store
// -----------------------------------------------------------------------------

/// In-memory dumps and careers
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    dumps: HashMap<DumpKind, String>,
    careers: IndexMap<String, Career>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dump(mut self, kind: DumpKind, content: impl Into<String>) -> Self {
        self.dumps.insert(kind, content.into());
        self
    }

    #[must_use]
    pub fn with_career(mut self, slug: impl Into<String>, career: Career) -> Self {
        self.careers.insert(slug.into(), career);
        self
    }

    #[must_use]
    pub fn career(&self, slug: &str) -> Option<&Career> {
        self.careers.get(slug)
    }
}

impl DumpSource for MemoryStore {
    fn read_dump(&self, kind: DumpKind) -> Result<String> {
        self.dumps
            .get(&kind)
            .cloned()
            .ok_or_else(|| Error::FileNotFound {
                path: PathBuf::from(kind.file_name()),
            })
    }
}

impl CareerStore for MemoryStore {
    fn load_career(&self, slug: &str) -> Result<Career> {
        self.careers
            .get(slug)
            .cloned()
            .ok_or_else(|| Error::CareerNotFound(slug.to_string()))
    }

    fn save_career(&mut self, slug: &str, career: &Career) -> Result<()> {
        self.careers.insert(slug.to_string(), career.clone());
        Ok(())
    }
}
