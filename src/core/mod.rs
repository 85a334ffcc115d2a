//! Core types: the manifest schema and the resolved project layout.

pub mod layout;
pub mod manifest;

pub use layout::ProjectLayout;
pub use manifest::ElmManifest;
