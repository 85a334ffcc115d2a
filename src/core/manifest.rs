//! elm-package.json manifest parsing and schema.
//!
//! The manifest is the central configuration file for an Elm package. It is
//! loaded exactly once during layout resolution and never written back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

use crate::util::fs;

/// Manifest fields required for path resolution but missing or empty.
///
/// These are fatal: a build cannot proceed without knowing where the
/// sources live and which module is the package's entry point.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest at {path} has no source-directories entry")]
    NoSourceDirectories { path: PathBuf },

    #[error("manifest at {path} exposes no modules")]
    NoExposedModules { path: PathBuf },
}

/// The parsed elm-package.json manifest.
///
/// Only `source-directories` and `exposed-modules` drive path resolution;
/// the remaining fields are carried so callers can report on the package
/// without re-reading the file. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElmManifest {
    /// Package version (semver)
    #[serde(default)]
    pub version: Option<String>,

    /// One-line package summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Repository URL
    #[serde(default)]
    pub repository: Option<String>,

    /// License identifier
    #[serde(default)]
    pub license: Option<String>,

    /// Source directories, relative to the project root
    #[serde(default, rename = "source-directories")]
    pub source_directories: Vec<String>,

    /// Exposed module paths, dot-free or dot-separated
    #[serde(default, rename = "exposed-modules")]
    pub exposed_modules: Vec<String>,

    /// Dependencies: package name to version-range string
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Supported Elm compiler version range
    #[serde(default, rename = "elm-version")]
    pub elm_version: Option<String>,

    /// The path this manifest was loaded from
    #[serde(skip)]
    pub manifest_path: PathBuf,
}

impl ElmManifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut manifest: ElmManifest = serde_json::from_str(content)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))?;
        manifest.manifest_path = path.to_path_buf();

        Ok(manifest)
    }

    /// Parse the version string as semver.
    pub fn version(&self) -> Result<Version> {
        let raw = self
            .version
            .as_deref()
            .context("manifest has no version field")?;
        raw.parse()
            .with_context(|| format!("invalid version: {}", raw))
    }

    /// The first source directory, which anchors all source paths.
    ///
    /// Entries past the first are ignored; multi-directory projects are a
    /// documented limitation of the resolver.
    pub fn first_source_directory(&self) -> Result<&str, ManifestError> {
        self.source_directories
            .first()
            .map(String::as_str)
            .ok_or_else(|| ManifestError::NoSourceDirectories {
                path: self.manifest_path.clone(),
            })
    }

    /// The first exposed module, treated as the package's root module.
    ///
    /// Entries past the first are ignored, same as source directories.
    pub fn first_exposed_module(&self) -> Result<&str, ManifestError> {
        self.exposed_modules
            .first()
            .map(String::as_str)
            .ok_or_else(|| ManifestError::NoExposedModules {
                path: self.manifest_path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("elm-package.json");
        std::fs::write(
            &path,
            r#"{"source-directories": ["src"], "exposed-modules": ["App"]}"#,
        )
        .unwrap();

        let manifest = ElmManifest::load(&path).unwrap();
        assert_eq!(manifest.first_source_directory().unwrap(), "src");
        assert_eq!(manifest.manifest_path, path);
    }

    #[test]
    fn test_load_missing_manifest_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let err = ElmManifest::load(&tmp.path().join("elm-package.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("elm-package.json"));
    }

    #[test]
    fn test_parse_full_manifest() {
        let content = r#"
        {
            "version": "1.0.0",
            "summary": "front-end for the dashboard",
            "repository": "https://github.com/example/dashboard.git",
            "license": "BSD3",
            "source-directories": ["src"],
            "exposed-modules": ["Dashboard"],
            "dependencies": {
                "elm-lang/core": "4.0.1 <= v < 5.0.0",
                "elm-lang/html": "1.1.0 <= v < 2.0.0"
            },
            "elm-version": "0.17.0 <= v < 0.18.0"
        }
        "#;

        let manifest = ElmManifest::parse(content, Path::new("/proj/elm-package.json")).unwrap();
        assert_eq!(manifest.first_source_directory().unwrap(), "src");
        assert_eq!(manifest.first_exposed_module().unwrap(), "Dashboard");
        assert_eq!(manifest.version().unwrap(), Version::new(1, 0, 0));
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(manifest.manifest_path, Path::new("/proj/elm-package.json"));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let content = r#"
        {
            "source-directories": ["src"],
            "exposed-modules": ["App"],
            "native-modules": true
        }
        "#;

        let manifest = ElmManifest::parse(content, Path::new("elm-package.json")).unwrap();
        assert_eq!(manifest.first_source_directory().unwrap(), "src");
    }

    #[test]
    fn test_parse_invalid_json_names_the_manifest() {
        let err = ElmManifest::parse("{ not json", Path::new("/proj/elm-package.json"))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("/proj/elm-package.json"));
    }

    #[test]
    fn test_missing_source_directories_is_an_error() {
        let manifest =
            ElmManifest::parse(r#"{"exposed-modules": ["App"]}"#, Path::new("elm-package.json"))
                .unwrap();
        let err = manifest.first_source_directory().unwrap_err();
        assert!(matches!(err, ManifestError::NoSourceDirectories { .. }));
    }

    #[test]
    fn test_empty_exposed_modules_is_an_error() {
        let manifest = ElmManifest::parse(
            r#"{"source-directories": ["src"], "exposed-modules": []}"#,
            Path::new("elm-package.json"),
        )
        .unwrap();
        let err = manifest.first_exposed_module().unwrap_err();
        assert!(matches!(err, ManifestError::NoExposedModules { .. }));
    }

    #[test]
    fn test_invalid_version_is_an_error() {
        let manifest = ElmManifest::parse(
            r#"{"version": "one", "source-directories": ["src"], "exposed-modules": ["App"]}"#,
            Path::new("elm-package.json"),
        )
        .unwrap();
        assert!(manifest.version().is_err());
    }
}
