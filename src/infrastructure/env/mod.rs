//! Input sources.
//!
//! The process environment always wins over a project `.env` file. Neither
//! source mutates the process environment.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::InputSource;
use crate::error::{ForkwiseError, ForkwiseResult};

/// Name of the optional dotenv file in the project root
pub const DOTENV_FILE_NAME: &str = ".env";

/// Reads `std::env`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl InputSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory inputs, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl InputSource for MapSource {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Variables parsed from a dotenv file
#[derive(Debug, Clone, Default)]
pub struct DotenvSource {
    path: Option<PathBuf>,
    vars: MapSource,
}

impl DotenvSource {
    /// Parse `path` with the `dotenv` grammar.
    pub fn from_path(path: &Path) -> ForkwiseResult<Self> {
        let iter = dotenv::from_path_iter(path).map_err(|e| ForkwiseError::EnvFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut vars = MapSource::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ForkwiseError::EnvFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            vars.set(key, value);
        }

        tracing::debug!(path = %path.display(), count = vars.vars.len(), "loaded dotenv file");
        Ok(Self {
            path: Some(path.to_path_buf()),
            vars,
        })
    }

    /// `<root>/.env` if present, otherwise an empty source
    pub fn for_project(root: &Path) -> ForkwiseResult<Self> {
        let path = root.join(DOTENV_FILE_NAME);
        if path.is_file() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl InputSource for DotenvSource {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.var(name)
    }
}

/// Two sources; `primary` shadows `fallback`.
#[derive(Debug, Clone, Default)]
pub struct LayeredSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P: InputSource, F: InputSource> LayeredSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: InputSource, F: InputSource> InputSource for LayeredSource<P, F> {
    fn var(&self, name: &str) -> Option<String> {
        self.primary.var(name).or_else(|| self.fallback.var(name))
    }
}

/// Standard source for a project: process environment over `<root>/.env`.
pub fn project_source(root: &Path) -> ForkwiseResult<LayeredSource<ProcessEnv, DotenvSource>> {
    Ok(LayeredSource::new(ProcessEnv, DotenvSource::for_project(root)?))
}
