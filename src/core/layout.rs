//! Project layout - the resolved build path set.
//!
//! A ProjectLayout anchors an Elm project on disk: it derives the project
//! root, reads the manifest next to it, and computes every source and
//! target path the build pipeline consumes. It is built once at startup
//! and handed to consumers by reference; nothing here is reassigned after
//! construction.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::ElmManifest;
use crate::util::fs::normalize;

/// Manifest filename expected in the project root.
pub const MANIFEST_FILE_NAME: &str = "elm-package.json";

/// Build output directory name under the project root.
pub const TARGET_DIR_NAME: &str = "target";

/// Subdirectory of the target directory holding the main bundle.
pub const TARGET_MAIN_DIR_NAME: &str = "main";

/// Filename of the root module's entry source.
pub const MAIN_SOURCE_NAME: &str = "Main.elm";

/// Filename of the compiled output page.
pub const MAIN_OUTPUT_NAME: &str = "index.html";

/// Errors from anchoring the layout, before the manifest is consulted.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("entry script {path} has no parent directory to anchor the project root")]
    NoProjectRoot { path: PathBuf },
}

/// The resolved path set for one Elm project.
///
/// Every path is a pure function of the anchor path and the manifest
/// contents: resolving twice with identical inputs yields byte-identical
/// paths. Only the first entry of `source-directories` and of
/// `exposed-modules` is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    /// Project root directory
    root: PathBuf,

    /// The elm-package.json the layout was resolved from
    manifest_path: PathBuf,

    /// First configured source directory
    source_dir: PathBuf,

    /// Directory of the first exposed module
    root_module_dir: PathBuf,

    /// Build output directory
    target_dir: PathBuf,

    /// Main bundle output directory
    target_main_dir: PathBuf,

    /// The root module's Main.elm
    main_source: PathBuf,

    /// The compiled index.html
    main_output: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout from the invoking entry script's path.
    ///
    /// The project root is the parent of the script's directory. The
    /// script itself need not exist; only its location matters.
    pub fn from_entry_script(entry: &Path) -> Result<Self> {
        let script_dir = entry.parent().ok_or_else(|| LayoutError::NoProjectRoot {
            path: entry.to_path_buf(),
        })?;

        Self::from_root(script_dir.join(".."))
    }

    /// Resolve the layout from an explicit project root directory.
    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = normalize(&root.into());
        let manifest_path = root.join(MANIFEST_FILE_NAME);

        debug!("loading manifest from {}", manifest_path.display());
        let manifest = ElmManifest::load(&manifest_path)?;

        Self::from_manifest(root, manifest_path, &manifest)
    }

    /// Derive the path set from an already-loaded manifest.
    pub fn from_manifest(
        root: PathBuf,
        manifest_path: PathBuf,
        manifest: &ElmManifest,
    ) -> Result<Self> {
        // Entries past the first of either list never influence the layout.
        let source_dir = normalize(&root.join(manifest.first_source_directory()?));
        let root_module_dir = normalize(&source_dir.join(manifest.first_exposed_module()?));

        let target_dir = root.join(TARGET_DIR_NAME);
        let target_main_dir = target_dir.join(TARGET_MAIN_DIR_NAME);

        let main_source = root_module_dir.join(MAIN_SOURCE_NAME);
        let main_output = target_main_dir.join(MAIN_OUTPUT_NAME);

        debug!(
            "resolved layout: root={} source={}",
            root.display(),
            source_dir.display()
        );

        Ok(ProjectLayout {
            root,
            manifest_path,
            source_dir,
            root_module_dir,
            target_dir,
            target_main_dir,
            main_source,
            main_output,
        })
    }

    /// Get the project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the manifest path.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Get the first configured source directory.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Get the root module directory.
    pub fn root_module_dir(&self) -> &Path {
        &self.root_module_dir
    }

    /// Get the build output directory.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Get the main bundle output directory.
    pub fn target_main_dir(&self) -> &Path {
        &self.target_main_dir
    }

    /// Get the root module's Main.elm source file.
    pub fn main_source(&self) -> &Path {
        &self.main_source
    }

    /// Get the compiled index.html output file.
    pub fn main_output(&self) -> &Path {
        &self.main_output
    }

    /// All resolved paths with their layout names, in derivation order.
    pub fn entries(&self) -> [(&'static str, &Path); 8] {
        [
            ("root", self.root()),
            ("manifest", self.manifest_path()),
            ("source", self.source_dir()),
            ("root module", self.root_module_dir()),
            ("target", self.target_dir()),
            ("target main", self.target_main_dir()),
            ("main source", self.main_source()),
            ("main output", self.main_output()),
        ]
    }
}
