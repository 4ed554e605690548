//! copra: static type stubs for discovered design hierarchies.
//!
//! # Example
//!
//! ```
//! use copra_lib::{Hierarchy, Node, StubConfig, StubGenerator};
//!
//! let hierarchy = Hierarchy::from_nodes([
//!     Node::scope("dut", "cocotb.handle.HierarchyObject"),
//!     Node::leaf("dut.clk", "cocotb.handle.LogicObject"),
//! ]);
//!
//! let config = StubConfig::default();
//! let stub = StubGenerator::new(&config).render(&hierarchy);
//! assert!(stub.contains("    clk: cocotb.handle.LogicObject"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod config;
pub mod stubgen;
pub mod writer;

#[cfg(test)]
mod writer_tests;

pub use config::{BaseRole, OutputConfig, StubConfig, TypesConfig};
pub use copra_core::{Hierarchy, IdentifierSanitizer, NameSanitizer, Node, NodeKind};
pub use stubgen::{StubGenerator, generate_stub};
pub use writer::write_stub;

/// Errors surfaced by stub generation.
///
/// Generation itself never fails; only configuration loading and the
/// filesystem boundary do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Hierarchy(#[from] copra_core::Error),
}

/// Result type for stub operations.
pub type Result<T> = std::result::Result<T, Error>;
