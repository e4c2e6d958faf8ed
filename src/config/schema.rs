//! Declared value kinds of a model, indexed by name

use ahash::AHashMap;

use crate::config::{Declaration, ValueKind};

/// Lookup of parameter and attribute declarations
#[derive(Debug, Clone, Default)]
pub struct Schema {
    parameters: AHashMap<String, ValueKind>,
    attributes: AHashMap<String, ValueKind>,
}

impl Schema {
    pub fn new(parameters: Vec<Declaration>, attributes: Vec<Declaration>) -> Self {
        Self {
            parameters: parameters.into_iter().map(|d| (d.name, d.kind)).collect(),
            attributes: attributes.into_iter().map(|d| (d.name, d.kind)).collect(),
        }
    }

    #[inline]
    pub fn parameter(&self, name: &str) -> Option<&ValueKind> {
        self.parameters.get(name)
    }

    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&ValueKind> {
        self.attributes.get(name)
    }

    /// Same resolution order as evaluation: parameters, then attributes
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&ValueKind> {
        self.parameter(name).or_else(|| self.attribute(name))
    }
}
