use std::fmt::Write;

use indoc::indoc;

use crate::{Children, Error, Hierarchy, Node};

fn dump(children: &Children, depth: usize, out: &mut String) {
    for (name, entry) in children {
        let tag = entry
            .node()
            .and_then(|n| n.type_tag())
            .unwrap_or("<none>");
        writeln!(out, "{}{} ({})", "  ".repeat(depth), name, tag).unwrap();
        dump(entry.children(), depth + 1, out);
    }
}

fn tree_dump(h: &Hierarchy) -> String {
    let mut out = String::new();
    dump(h.roots(), 0, &mut out);
    out
}

#[test]
fn builds_tree_from_paths() {
    let h = Hierarchy::from_nodes([
        Node::scope("dut", "HierarchyObject"),
        Node::leaf("dut.clk", "LogicObject"),
        Node::scope("dut.core", "HierarchyObject"),
        Node::leaf("dut.core.reg", "LogicArrayObject").with_width(8),
        Node::leaf("dut.mem[0]", "LogicArrayObject").with_width(8),
    ]);

    insta::assert_snapshot!(tree_dump(&h), @r"
    dut (HierarchyObject)
      clk (LogicObject)
      core (HierarchyObject)
        reg (LogicArrayObject)
      mem[0] (LogicArrayObject)
    ");
    assert_eq!(h.nodes().len(), 5);
    assert_eq!(h.root().map(|(name, _)| name), Some("dut"));
}

#[test]
fn implied_parents_have_no_node() {
    let h = Hierarchy::from_nodes([Node::leaf("dut.core.reg", "LogicObject")]);

    insta::assert_snapshot!(tree_dump(&h), @r"
    dut (<none>)
      core (<none>)
        reg (LogicObject)
    ");
}

#[test]
fn late_parent_keeps_children() {
    let h = Hierarchy::from_nodes([
        Node::leaf("dut.core.reg", "LogicObject"),
        Node::scope("dut.core", "HierarchyObject"),
    ]);

    let (_, root) = h.root().unwrap();
    let core = &root.children()["core"];
    assert_eq!(core.node().unwrap().type_tag(), Some("HierarchyObject"));
    assert!(core.children().contains_key("reg"));
}

#[test]
fn reinserted_path_replaces_flat_node() {
    let h = Hierarchy::from_nodes([
        Node::scope("dut", "HierarchyObject"),
        Node::leaf("dut.bus", "LogicArrayObject").with_width(8),
        Node::leaf("dut.clk", "LogicObject"),
        Node::leaf("dut.bus", "LogicArrayObject").with_width(16),
    ]);

    let paths: Vec<&str> = h.nodes().map(|n| n.path.as_str()).collect();
    assert_eq!(paths, ["dut", "dut.bus", "dut.clk"]);
    assert_eq!(h.node("dut.bus").unwrap().width, Some(16));
}

#[test]
fn insertion_order_preserved() {
    let h = Hierarchy::from_nodes([
        Node::scope("dut", "HierarchyObject"),
        Node::leaf("dut.zeta", "LogicObject"),
        Node::leaf("dut.alpha", "LogicObject"),
    ]);

    let (_, root) = h.root().unwrap();
    let names: Vec<&str> = root.children().keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha"]);
}

#[test]
fn empty_paths_ignored() {
    let mut h = Hierarchy::new();
    h.insert(Node::leaf("", "LogicObject"));
    assert!(h.is_empty());
    assert_eq!(h.nodes().len(), 0);
    assert!(h.root().is_none());
}

#[test]
fn parses_bare_array() {
    let json = indoc! {r#"
        [
            {"path": "dut", "type_tag": "HierarchyObject", "is_scope": true},
            {"path": "dut.bus", "py_type": "LogicArrayObject", "width": 16}
        ]
    "#};
    let h = Hierarchy::from_json(json).unwrap();

    let bus = h.node("dut.bus").unwrap();
    assert_eq!(bus.name, "bus");
    assert_eq!(bus.type_tag(), Some("LogicArrayObject"));
    assert_eq!(bus.width, Some(16));
    assert!(!bus.is_scope);
}

#[test]
fn parses_wrapped_document() {
    let json = r#"{"nodes": [{"path": "top", "type_tag": "HierarchyObject", "is_scope": true}]}"#;
    let h = Hierarchy::from_json(json).unwrap();
    assert_eq!(h.root().map(|(name, _)| name), Some("top"));
}

#[test]
fn missing_tag_tolerated() {
    let h = Hierarchy::from_json(r#"[{"path": "dut.x"}]"#).unwrap();
    assert_eq!(h.node("dut.x").unwrap().type_tag(), None);
}

#[test]
fn rejects_malformed_json() {
    let err = Hierarchy::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn reads_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"path": "dut", "type_tag": "HierarchyObject", "is_scope": true}]"#)
        .unwrap();
    file.flush().unwrap();

    let h = Hierarchy::from_path(file.path()).unwrap();
    assert_eq!(h.nodes().len(), 1);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Hierarchy::from_path(&path).unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}
