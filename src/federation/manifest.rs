//! On-disk federation documents.
//!
//! The manifest maps remote names to the location of their remote entry:
//!
//! ```json
//! { "tea-tracker": "./tea-tracker/remoteEntry.json" }
//! ```
//!
//! A remote entry lists the modules a remote exposes and which component each
//! one resolves to:
//!
//! ```json
//! { "name": "tea-tracker",
//!   "exposes": [ { "key": "./App", "component": "tea-tracker/App" } ] }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntryDocument {
    pub name: String,
    #[serde(default)]
    pub exposes: Vec<ExposedModule>,
}

impl RemoteEntryDocument {
    pub fn exposed(&self, key: &str) -> Option<&ExposedModule> {
        self.exposes.iter().find(|e| e.key == key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExposedModule {
    pub key: String,
    pub component: String,
}

/// Remote name → remote entry location, with relative locations already
/// resolved against the manifest's directory.
#[derive(Debug, Clone, Default)]
pub struct FederationManifest {
    remotes: BTreeMap<String, PathBuf>,
}

impl FederationManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read federation manifest {}", path.display()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&contents, base_dir)
            .with_context(|| format!("Failed to parse federation manifest {}", path.display()))
    }

    pub fn parse(contents: &str, base_dir: &Path) -> serde_json::Result<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(contents)?;
        let remotes = raw
            .into_iter()
            .map(|(name, location)| {
                let location = location.strip_prefix("file://").unwrap_or(&location);
                let path = Path::new(location);
                let resolved = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    base_dir.join(path)
                };
                (name, resolved)
            })
            .collect();
        Ok(Self { remotes })
    }

    pub fn location(&self, remote: &str) -> Option<&Path> {
        self.remotes.get(remote).map(PathBuf::as_path)
    }

    pub fn remotes(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.remotes.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolves_relative_locations() {
        let manifest = FederationManifest::parse(
            r#"{
                "tea-tracker": "./tea/remoteEntry.json",
                "sticky-notes": "file:///opt/notes/remoteEntry.json"
            }"#,
            Path::new("/srv/mfe"),
        )
        .unwrap();
        assert_eq!(
            manifest.location("tea-tracker"),
            Some(Path::new("/srv/mfe/./tea/remoteEntry.json"))
        );
        assert_eq!(
            manifest.location("sticky-notes"),
            Some(Path::new("/opt/notes/remoteEntry.json"))
        );
        assert!(manifest.location("other").is_none());
        assert_eq!(manifest.remotes().count(), 2);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(FederationManifest::parse("[1, 2]", Path::new(".")).is_err());
    }

    #[test]
    fn test_entry_document_ignores_unknown_fields() {
        let entry: RemoteEntryDocument = serde_json::from_str(
            r#"{
                "name": "tea-tracker",
                "shared": [],
                "exposes": [{ "key": "./App", "component": "tea-tracker/App", "outFileName": "App.js" }]
            }"#,
        )
        .unwrap();
        assert_eq!(entry.exposed("./App").unwrap().component, "tea-tracker/App");
        assert!(entry.exposed("./Other").is_none());
    }

    #[test]
    fn test_load_missing_manifest_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = FederationManifest::load(&dir.path().join("federation.manifest.json"))
            .unwrap_err();
        assert!(err.to_string().contains("federation.manifest.json"));
    }
}
