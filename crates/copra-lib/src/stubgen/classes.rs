//! Class declarations: the root class, nested scope classes, and bodies.

use std::collections::HashSet;

use copra_core::{Children, NodeKind, TreeEntry};
use tracing::{debug, trace};

use super::emitter::{Emitter, INDENT};

impl Emitter<'_> {
    /// Emit the class for the design root. Returns its class name.
    pub(super) fn emit_root_class(&mut self, name: &str, root: &TreeEntry) -> String {
        let class_name = self.resolver.class_name(name);
        let kind = root.node().and_then(|node| self.resolver.kind(node));
        debug!(class = %class_name, "Emitting root class");
        self.emit_class(&class_name, kind, root.children());
        class_name
    }

    /// Emit one class per distinct scope name below the root.
    ///
    /// Pre-order walk, siblings in name order. The first scope to claim a
    /// class name defines it; later scopes with the same name are skipped
    /// even when their children differ. The walk always descends, so
    /// scopes below skipped or childless ancestors are still found.
    pub(super) fn emit_nested_classes(&mut self, children: &Children, root_class: &str) {
        let mut emitted = HashSet::new();
        self.walk_scopes(children, root_class, &mut emitted);
    }

    fn walk_scopes(
        &mut self,
        children: &Children,
        root_class: &str,
        emitted: &mut HashSet<String>,
    ) {
        let mut sorted: Vec<_> = children.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        for (name, entry) in sorted {
            self.visit_scope(name, entry, root_class, emitted);
            self.walk_scopes(entry.children(), root_class, emitted);
        }
    }

    fn visit_scope(
        &mut self,
        name: &str,
        entry: &TreeEntry,
        root_class: &str,
        emitted: &mut HashSet<String>,
    ) {
        let Some(node) = entry.node() else {
            return;
        };
        if !node.is_scope || entry.children().is_empty() {
            return;
        }

        let class_name = self.resolver.class_name(name);
        if class_name == root_class {
            trace!(path = %node.path, class = %class_name, "Scope shares the root class name");
            return;
        }
        if !emitted.insert(class_name.clone()) {
            debug!(path = %node.path, class = %class_name, "Class already emitted, skipping");
            return;
        }

        debug!(path = %node.path, class = %class_name, "Emitting class");
        let kind = self.resolver.kind(node);
        self.emit_class(&class_name, kind, entry.children());
    }

    fn emit_class(&mut self, class_name: &str, kind: Option<NodeKind>, children: &Children) {
        let base = self.resolver.base_class(kind);
        self.push(format!("class {class_name}({base}):"));
        self.emit_class_body(children);
        self.push("");
    }

    /// Attributes in name order, then overloads in insertion order, then
    /// the catch-all overload. A class without static children gets `pass`.
    fn emit_class_body(&mut self, children: &Children) {
        let statics = self.resolver.static_children(children);
        if statics.is_empty() {
            self.push(format!("{INDENT}pass"));
            return;
        }

        let mut attributes: Vec<_> = statics.iter().filter(|c| c.is_attribute()).collect();
        attributes.sort_by(|a, b| a.name.cmp(b.name));
        for child in attributes {
            self.push(format!("{INDENT}{}", child.attribute_line()));
        }

        self.push("");
        for child in &statics {
            self.push(format!("{INDENT}@overload"));
            self.push(format!("{INDENT}{}", child.overload_signature()));
            self.push("");
        }
        self.push(format!("{INDENT}@overload"));
        self.push(format!(
            "{INDENT}def __getitem__(self, name: str) -> {}: ...",
            self.config.types.fallback_type
        ));
        self.push("");
    }
}
