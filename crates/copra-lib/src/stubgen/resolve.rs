//! Type annotation resolution for scope children.

use copra_core::utils::{is_identifier, is_indexed_name, is_keyword, py_repr};
use copra_core::{Children, NameSanitizer, Node, NodeKind, TypeMarkers};
use tracing::trace;

use super::aliases::alias_name;
use crate::{BaseRole, StubConfig};

/// A child that takes part in static attribute and overload emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct StaticChild<'t> {
    pub name: &'t str,
    pub annotation: String,
    pub is_scope: bool,
}

impl StaticChild<'_> {
    /// Whether the child can be declared as a class attribute.
    ///
    /// Leaves with a leading underscore stay private; scopes never do.
    pub fn is_attribute(&self) -> bool {
        is_identifier(self.name)
            && !is_keyword(self.name)
            && (self.is_scope || !self.name.starts_with('_'))
    }

    pub fn attribute_line(&self) -> String {
        format!("{}: {}", self.name, self.annotation)
    }

    pub fn overload_signature(&self) -> String {
        format!(
            "def __getitem__(self, name: Literal[{}]) -> {}: ...",
            py_repr(self.name),
            self.annotation
        )
    }
}

/// Resolves class names, base types, and child annotations.
pub(super) struct Resolver<'a> {
    config: &'a StubConfig,
    sanitizer: &'a dyn NameSanitizer,
    markers: TypeMarkers,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a StubConfig, sanitizer: &'a dyn NameSanitizer) -> Self {
        Self {
            config,
            sanitizer,
            markers: config.markers(),
        }
    }

    pub fn class_name(&self, raw: &str) -> String {
        self.sanitizer.sanitize(raw)
    }

    pub fn kind(&self, node: &Node) -> Option<NodeKind> {
        node.classify(&self.markers)
    }

    pub fn markers(&self) -> &TypeMarkers {
        &self.markers
    }

    /// Base type for a class generated from a node of `kind`.
    pub fn base_class(&self, kind: Option<NodeKind>) -> &'a str {
        let role = match kind {
            Some(NodeKind::ScopeArray { .. }) => BaseRole::HierarchyArray,
            _ => BaseRole::Hierarchy,
        };
        self.config.base_type(role)
    }

    /// Static annotation for a child named `name` whose type tag is `tag`.
    ///
    /// A parameterized scope array already names its element type, so its
    /// tag is used as is.
    pub fn annotation(&self, name: &str, tag: &str, kind: NodeKind) -> String {
        match kind {
            NodeKind::Scope => self.class_name(name),
            NodeKind::ScopeArray {
                parameterized: false,
            } => format!(
                "{}[{}]",
                self.config.base_type(BaseRole::HierarchyArray),
                self.class_name(name)
            ),
            NodeKind::ScopeArray {
                parameterized: true,
            } => tag.to_string(),
            NodeKind::Vector(width) => alias_name(&self.config.types.vector_alias_prefix, width),
            NodeKind::Scalar => tag.to_string(),
        }
    }

    /// Children that get static declarations, in insertion order.
    ///
    /// Indexed children and children without a usable node are dropped.
    pub fn static_children<'t>(&self, children: &'t Children) -> Vec<StaticChild<'t>> {
        let mut out = Vec::with_capacity(children.len());
        for (name, entry) in children {
            if is_indexed_name(name) {
                trace!(child = %name, "Skipping indexed child");
                continue;
            }
            let Some(node) = entry.node() else {
                trace!(child = %name, "Skipping child without node");
                continue;
            };
            let (Some(tag), Some(kind)) = (node.type_tag(), self.kind(node)) else {
                trace!(child = %name, path = %node.path, "Skipping child without type tag");
                continue;
            };
            out.push(StaticChild {
                name,
                annotation: self.annotation(name, tag, kind),
                is_scope: node.is_scope,
            });
        }
        out
    }
}
