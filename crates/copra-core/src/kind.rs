//! Classification of raw runtime type tags.

use crate::Node;

/// Static shape of a hierarchy node, derived once from its type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Any leaf that is not a sized vector; annotated with its raw tag.
    Scalar,
    /// A plain scope (module instance, generate block).
    Scope,
    /// An array of scopes. `parameterized` is set when the tag already
    /// names its element type (`HierarchyArrayObject[Foo]`).
    ScopeArray { parameterized: bool },
    /// A fixed-width vector leaf.
    Vector(u32),
}

/// Marker names that identify special handle kinds inside a type tag.
///
/// Markers are the last dotted segment of the configured base types, so
/// `cocotb.handle.HierarchyArrayObject` and `HierarchyArrayObject` both
/// match the `HierarchyArrayObject` marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMarkers {
    scope_array: String,
    vector: String,
}

impl TypeMarkers {
    /// Build markers from fully qualified base type names.
    pub fn new(scope_array_type: &str, vector_type: &str) -> Self {
        Self {
            scope_array: marker_of(scope_array_type).to_string(),
            vector: marker_of(vector_type).to_string(),
        }
    }

    pub fn scope_array(&self) -> &str {
        &self.scope_array
    }

    pub fn vector(&self) -> &str {
        &self.vector
    }

    fn is_scope_array(&self, base: &str) -> bool {
        !self.scope_array.is_empty() && marker_of(base) == self.scope_array
    }

    fn is_vector(&self, base: &str) -> bool {
        !self.vector.is_empty() && marker_of(base) == self.vector
    }
}

fn marker_of(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name).trim()
}

impl Node {
    /// Classify this node, or `None` when it carries no type tag.
    ///
    /// Only the tag's base (text before the first `[`) is inspected, so a
    /// marker appearing inside an unrelated type parameter never matches.
    pub fn classify(&self, markers: &TypeMarkers) -> Option<NodeKind> {
        let tag = self.type_tag().filter(|t| !t.trim().is_empty())?;
        let (base, parameterized) = match tag.find('[') {
            Some(i) => (&tag[..i], true),
            None => (tag, false),
        };

        let kind = if self.is_scope {
            if markers.is_scope_array(base) {
                NodeKind::ScopeArray { parameterized }
            } else {
                NodeKind::Scope
            }
        } else {
            match self.width {
                Some(width) if markers.is_vector(base) => NodeKind::Vector(width),
                _ => NodeKind::Scalar,
            }
        };
        Some(kind)
    }
}
