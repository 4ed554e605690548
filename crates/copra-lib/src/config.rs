//! Configuration types for stub emission.

use std::fs;
use std::path::Path;

use copra_core::TypeMarkers;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Semantic role of a generated class's base type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseRole {
    /// A plain scope.
    Hierarchy,
    /// An array of scopes.
    HierarchyArray,
}

impl BaseRole {
    /// Key used in the `base_classes` map.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hierarchy => "hierarchy",
            Self::HierarchyArray => "hierarchy_array",
        }
    }

    fn default_type(self) -> &'static str {
        match self {
            Self::Hierarchy => "cocotb.handle.HierarchyObject",
            Self::HierarchyArray => "cocotb.handle.HierarchyArrayObject",
        }
    }
}

/// Type-related settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    /// Import lines emitted verbatim at the top of the stub.
    pub(crate) import_statements: Vec<String>,
    /// Base type per role, keyed by [`BaseRole::key`].
    pub(crate) base_classes: IndexMap<String, String>,
    /// Handle type for fixed-width vectors; width aliases derive from it.
    pub(crate) vector_type: String,
    /// Prefix for width alias names (`LogicArray8`).
    pub(crate) vector_alias_prefix: String,
    /// Return type of the catch-all `__getitem__` overload.
    pub(crate) fallback_type: String,
}

impl Default for TypesConfig {
    fn default() -> Self {
        let base_classes = [BaseRole::Hierarchy, BaseRole::HierarchyArray]
            .into_iter()
            .map(|role| (role.key().to_string(), role.default_type().to_string()))
            .collect();

        Self {
            import_statements: vec![
                "import cocotb".to_string(),
                "import cocotb.handle".to_string(),
                "from typing import Literal, overload".to_string(),
            ],
            base_classes,
            vector_type: "cocotb.handle.LogicArrayObject".to_string(),
            vector_alias_prefix: "LogicArray".to_string(),
            fallback_type: "cocotb.handle.SimHandleBase".to_string(),
        }
    }
}

/// Output file settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Comment lines placed above the class declarations (without `# `).
    pub(crate) header_lines: Vec<String>,
    pub(crate) stub_filename: String,
    /// Class name used when the hierarchy is empty.
    pub(crate) root_class_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header_lines: vec![
                "Auto-generated by copra from the discovered design hierarchy.".to_string(),
                "Do not edit: regenerate after the design changes.".to_string(),
            ],
            stub_filename: "copra_stubs.pyi".to_string(),
            root_class_name: "DUT".to_string(),
        }
    }
}

/// Configuration for stub emission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubConfig {
    pub(crate) types: TypesConfig,
    pub(crate) output: OutputConfig,
}

impl StubConfig {
    /// Create a new StubConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Render as pretty JSON, suitable as a config file.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the import lines.
    pub fn import_statements<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.import_statements = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the header comment lines.
    pub fn header_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output.header_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the base type for a role.
    pub fn base_class(mut self, role: BaseRole, type_name: impl Into<String>) -> Self {
        self.types
            .base_classes
            .insert(role.key().to_string(), type_name.into());
        self
    }

    /// Set the vector handle type.
    pub fn vector_type(mut self, type_name: impl Into<String>) -> Self {
        self.types.vector_type = type_name.into();
        self
    }

    /// Set the width alias prefix.
    pub fn vector_alias_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.types.vector_alias_prefix = prefix.into();
        self
    }

    /// Set the fallback accessor return type.
    pub fn fallback_type(mut self, type_name: impl Into<String>) -> Self {
        self.types.fallback_type = type_name.into();
        self
    }

    /// Set the output file name.
    pub fn stub_filename(mut self, name: impl Into<String>) -> Self {
        self.output.stub_filename = name.into();
        self
    }

    /// Set the class name used for an empty hierarchy.
    pub fn root_class_name(mut self, name: impl Into<String>) -> Self {
        self.output.root_class_name = name.into();
        self
    }

    /// Base type for a role, falling back to the default when unmapped.
    pub(crate) fn base_type(&self, role: BaseRole) -> &str {
        self.types
            .base_classes
            .get(role.key())
            .map(String::as_str)
            .unwrap_or_else(|| role.default_type())
    }

    pub(crate) fn markers(&self) -> TypeMarkers {
        TypeMarkers::new(
            self.base_type(BaseRole::HierarchyArray),
            &self.types.vector_type,
        )
    }

    pub(crate) fn filename(&self) -> &str {
        &self.output.stub_filename
    }
}
