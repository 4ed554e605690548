//! Core emitter struct and main emit logic.

use copra_core::{Hierarchy, NameSanitizer};
use tracing::{debug, warn};

use super::aliases::{alias_declaration, collect_widths};
use super::resolve::Resolver;
use crate::StubConfig;

pub(super) const INDENT: &str = "    ";

/// Single-use emitter: owns the output buffer of one generation run.
pub(super) struct Emitter<'a> {
    pub(super) config: &'a StubConfig,
    pub(super) resolver: Resolver<'a>,
    /// Output buffer, one entry per line
    pub(super) lines: Vec<String>,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a StubConfig, sanitizer: &'a dyn NameSanitizer) -> Self {
        Self {
            config,
            resolver: Resolver::new(config, sanitizer),
            lines: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Emit the complete stub for `hierarchy`.
    pub fn emit(mut self, hierarchy: &Hierarchy) -> Vec<String> {
        self.emit_preamble(hierarchy);

        match hierarchy.root() {
            None => {
                debug!("Empty hierarchy, emitting placeholder root class");
                self.emit_placeholder_root();
            }
            Some((root_name, root)) => {
                if hierarchy.roots().len() > 1 {
                    warn!(
                        root = %root_name,
                        ignored = hierarchy.roots().len() - 1,
                        "Hierarchy has several top-level entries, using the first"
                    );
                }
                let root_class = self.emit_root_class(root_name, root);
                self.emit_nested_classes(root.children(), &root_class);
            }
        }

        debug!(lines = self.lines.len(), "Stub rendered");
        self.lines
    }

    /// Imports, width aliases, and header comments.
    fn emit_preamble(&mut self, hierarchy: &Hierarchy) {
        let types = &self.config.types;
        let mut lines: Vec<String> = types.import_statements.clone();
        lines.push("from typing import NewType".to_string());
        lines.push(String::new());

        let widths = collect_widths(hierarchy.nodes(), self.resolver.markers());
        debug!(count = widths.len(), "Collected vector widths");
        lines.extend(
            widths
                .into_iter()
                .map(|w| alias_declaration(&types.vector_alias_prefix, w, &types.vector_type)),
        );
        lines.push(String::new());

        lines.extend(
            self.config
                .output
                .header_lines
                .iter()
                .map(|line| format!("# {line}")),
        );
        lines.push(String::new());

        self.lines.extend(lines);
    }

    fn emit_placeholder_root(&mut self) {
        let base = self.resolver.base_class(None);
        let header = format!("class {}({base}):", self.config.output.root_class_name);
        self.push(header);
        self.push(format!("{INDENT}pass"));
        self.push("");
    }
}
