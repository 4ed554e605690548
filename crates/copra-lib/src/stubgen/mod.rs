//! Stub generation from a design hierarchy.
//!
//! The output is a Python stub (`.pyi`) with:
//! - one `NewType` alias per distinct vector width
//! - one class per distinct scope name, rooted at the design root
//! - typed attributes plus `__getitem__` overloads for each static child
//!
//! Children whose names are indexed (`sig[3]`) are reachable only through
//! the catch-all `__getitem__(self, name: str)` overload.

mod aliases;
mod classes;
mod emitter;
mod resolve;


use std::path::{Path, PathBuf};

use copra_core::{Hierarchy, IdentifierSanitizer, NameSanitizer};

use crate::{Result, StubConfig, writer};
use emitter::Emitter;

/// Stub generator bound to a configuration and a name sanitizer.
///
/// Holds no per-run state: every call builds its own emitter, so one
/// generator can be shared across threads when `S: Sync`.
pub struct StubGenerator<'a, S = IdentifierSanitizer> {
    config: &'a StubConfig,
    sanitizer: S,
}

impl<'a> StubGenerator<'a> {
    pub fn new(config: &'a StubConfig) -> Self {
        Self {
            config,
            sanitizer: IdentifierSanitizer,
        }
    }
}

impl<'a, S: NameSanitizer> StubGenerator<'a, S> {
    /// Replace the name sanitizer.
    pub fn with_sanitizer<T: NameSanitizer>(self, sanitizer: T) -> StubGenerator<'a, T> {
        StubGenerator {
            config: self.config,
            sanitizer,
        }
    }

    /// Render the stub as individual lines.
    pub fn render_lines(&self, hierarchy: &Hierarchy) -> Vec<String> {
        Emitter::new(self.config, &self.sanitizer).emit(hierarchy)
    }

    /// Render the stub text.
    pub fn render(&self, hierarchy: &Hierarchy) -> String {
        self.render_lines(hierarchy).join("\n")
    }

    /// Render the stub and write it to `out_dir/<stub_filename>`.
    pub fn generate(&self, hierarchy: &Hierarchy, out_dir: &Path) -> Result<PathBuf> {
        let contents = self.render(hierarchy);
        writer::write_stub(out_dir, self.config.filename(), &contents)
    }
}

/// Generate a stub with the default sanitizer.
pub fn generate_stub(
    hierarchy: &Hierarchy,
    config: &StubConfig,
    out_dir: &Path,
) -> Result<PathBuf> {
    StubGenerator::new(config).generate(hierarchy, out_dir)
}
