//! Struct dependency graph.
//!
//! Edges run from a `structure`/`callback info` node to every other
//! `structure`/`callback info` node one of its members references, directly
//! or through a chain of `typedef` aliases. Tag exclusion does not remove
//! edges.

use idlhdr_schema::{SchemaIr, SchemaNode};
use indexmap::IndexMap;

/// An edge from a struct to a struct it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Referenced key.
    pub key: String,
    /// True if at least one member holds the dependency by value.
    pub by_value: bool,
}

/// Dependency lists for every struct-like node, in Generation Order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edges: IndexMap<String, Vec<Dependency>>,
}

impl DependencyGraph {
    /// Builds the graph from a loaded schema.
    #[must_use]
    pub fn build(ir: &SchemaIr) -> Self {
        let mut edges = IndexMap::new();

        for entry in ir.registry.entries() {
            if !entry.category.is_struct_like() {
                continue;
            }
            let Some(def) = ir.document.get(&entry.key).and_then(|n| n.as_struct()) else {
                continue;
            };

            let mut deps: Vec<Dependency> = Vec::new();
            for member in &def.members {
                let (target, direct) = resolve_alias(ir, &member.type_name);
                let is_struct = ir
                    .registry
                    .category(target)
                    .is_some_and(|c| c.is_struct_like());
                if !is_struct {
                    continue;
                }
                let by_value = member.is_by_value() && direct;
                match deps.iter_mut().find(|d| d.key == target) {
                    Some(existing) => existing.by_value |= by_value,
                    None => deps.push(Dependency {
                        key: target.to_string(),
                        by_value,
                    }),
                }
            }

            edges.insert(entry.key.clone(), deps);
        }

        Self { edges }
    }

    /// Returns the dependencies of `key` in member declaration order.
    #[must_use]
    pub fn dependencies(&self, key: &str) -> &[Dependency] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates struct-like keys in Generation Order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Returns the number of struct-like nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Follows `typedef` aliases from `type_name` to the key they finally name.
///
/// The flag is false once any alias in the chain adds a pointer annotation.
/// A chain that loops back on itself stops at the first repeated key.
fn resolve_alias<'a>(ir: &'a SchemaIr, type_name: &'a str) -> (&'a str, bool) {
    let mut current = type_name;
    let mut direct = true;
    let mut seen: Vec<&str> = Vec::new();

    while let Some(SchemaNode::Typedef(def)) = ir.document.get(current) {
        if seen.contains(&current) {
            break;
        }
        seen.push(current);
        direct &= def.annotation.is_none();
        current = &def.type_name;
    }

    (current, direct)
}
