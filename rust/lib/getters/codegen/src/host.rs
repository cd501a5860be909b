//! Host channels: where diagnostics and generated sources go.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use getters_ir::Diagnostic;
use tracing::debug;

use crate::error::Result;

/// Accepts diagnostics without halting the pass.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Accepts generated sources. Registering a name again replaces its content.
pub trait SourceSink {
    fn add_source(&mut self, name: &str, text: &str) -> Result<()>;
}

/// In-memory registry, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRegistry {
    sources: BTreeMap<String, String>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sources.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl SourceSink for SourceRegistry {
    fn add_source(&mut self, name: &str, text: &str) -> Result<()> {
        self.sources.insert(name.to_string(), text.to_string());
        Ok(())
    }
}

/// Writes each source to `<dir>/<name>`, overwriting existing files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SourceSink for DirectorySink {
    fn add_source(&mut self, name: &str, text: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, text)?;
        debug!(path = %path.display(), "wrote generated source");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_replaces_on_reregistration() {
        let mut registry = SourceRegistry::new();
        registry.add_source("A.g.cs", "one").unwrap();
        registry.add_source("A.g.cs", "two").unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("A.g.cs"), Some("two"));
    }

    #[test]
    fn directory_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("generated"));
        sink.add_source("A.g.cs", "one").unwrap();
        sink.add_source("A.g.cs", "two").unwrap();
        let content = std::fs::read_to_string(sink.dir().join("A.g.cs")).unwrap();
        assert_eq!(content, "two");
    }
}
