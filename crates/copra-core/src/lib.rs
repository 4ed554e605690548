#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for copra design hierarchies.
//!
//! Two layers:
//! - **Flat layer**: every discovered [`Node`] in discovery order
//! - **Tree layer**: [`TreeEntry`] nesting keyed by path segment
//!
//! Node type tags are classified once into a [`NodeKind`] so that stub
//! generation never has to re-inspect raw tag text.

use std::path::PathBuf;

mod hierarchy;
mod kind;
pub mod sanitize;
pub mod utils;

#[cfg(test)]
mod hierarchy_tests;
#[cfg(test)]
mod sanitize_tests;

pub use hierarchy::{Children, Hierarchy, Node, TreeEntry};
pub use kind::{NodeKind, TypeMarkers};
pub use sanitize::{IdentifierSanitizer, NameSanitizer};

/// Errors that can occur while loading a hierarchy dump.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read hierarchy from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed hierarchy: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for hierarchy operations.
pub type Result<T> = std::result::Result<T, Error>;
