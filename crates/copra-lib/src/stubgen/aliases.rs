//! Width aliases for fixed-width vector leaves.

use std::collections::BTreeSet;

use copra_core::{Node, NodeKind, TypeMarkers};

/// Distinct vector widths across the flat node set, ascending.
pub(super) fn collect_widths<'n>(
    nodes: impl IntoIterator<Item = &'n Node>,
    markers: &TypeMarkers,
) -> BTreeSet<u32> {
    nodes
        .into_iter()
        .filter_map(|node| match node.classify(markers) {
            Some(NodeKind::Vector(width)) => Some(width),
            _ => None,
        })
        .collect()
}

pub(super) fn alias_name(prefix: &str, width: u32) -> String {
    format!("{prefix}{width}")
}

/// `LogicArray8 = NewType("LogicArray8", cocotb.handle.LogicArrayObject)`
pub(super) fn alias_declaration(prefix: &str, width: u32, vector_type: &str) -> String {
    let name = alias_name(prefix, width);
    format!("{name} = NewType(\"{name}\", {vector_type})")
}
