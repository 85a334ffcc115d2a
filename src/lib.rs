//! elm-layout - build path resolution for Elm front-end projects
//!
//! This crate provides the core library functionality for elm-layout:
//! locating a project's `elm-package.json` manifest and deriving the
//! fixed set of source and target paths the build pipeline consumes.

pub mod core;
pub mod util;

pub use crate::core::{layout::ProjectLayout, manifest::ElmManifest};
