//! Type hierarchy metadata
//!
//! The resolver never turns textual names into declarations itself; it
//! pulls parameter lists and supertype edges from an injected, read-only
//! [`TypeGraphProvider`]. A host reflection facility is the usual backing
//! store. [`InMemoryTypeGraph`] is included for embedders without one,
//! and for declaring fixtures in tests.

use crate::reference::TypeReference;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static category of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCategory {
    /// An interface
    Interface,
    /// An abstract class
    Abstract,
    /// An instantiable class
    Concrete,
}

/// A direct supertype of a declaration, as written at the declaration site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupertypeEdge {
    /// Name of the supertype
    pub target: String,
    /// The declared reference: `Concrete` when the target takes no
    /// parameters, otherwise `Parameterized` with one argument per target
    /// parameter, positionally
    pub reference: TypeReference,
}

impl SupertypeEdge {
    /// Build an edge to `target` with the given type arguments.
    ///
    /// Zero arguments produce a bare reference; anything else produces a
    /// parameterized one.
    pub fn new(target: impl Into<String>, args: Vec<TypeReference>) -> Self {
        let target = target.into();
        let reference = if args.is_empty() {
            TypeReference::concrete(target.clone())
        } else {
            TypeReference::parameterized(target.clone(), args)
        };
        SupertypeEdge { target, reference }
    }
}

/// A named generic type with its declared parameters and supertype edges.
///
/// Declarations are immutable facts of the static hierarchy; the resolver
/// requests them on demand and never stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Type name
    pub name: String,
    /// Declared type parameter names, in order, unique within the scope
    pub parameters: Vec<String>,
    /// Implemented interfaces (for an interface, its extended
    /// super-interfaces) in declared order
    pub interfaces: Vec<SupertypeEdge>,
    /// Superclass edge; `None` for interfaces and for classes whose
    /// superclass is the universal top type
    pub superclass: Option<SupertypeEdge>,
    /// Static category
    pub category: TypeCategory,
}

impl TypeDeclaration {
    fn with_category(name: impl Into<String>, parameters: &[&str], category: TypeCategory) -> Self {
        TypeDeclaration {
            name: name.into(),
            parameters: parameters.iter().map(|p| (*p).to_string()).collect(),
            interfaces: Vec::new(),
            superclass: None,
            category,
        }
    }

    /// Declare an interface
    pub fn interface(name: impl Into<String>, parameters: &[&str]) -> Self {
        Self::with_category(name, parameters, TypeCategory::Interface)
    }

    /// Declare an abstract class
    pub fn abstract_class(name: impl Into<String>, parameters: &[&str]) -> Self {
        Self::with_category(name, parameters, TypeCategory::Abstract)
    }

    /// Declare an instantiable class
    pub fn concrete_class(name: impl Into<String>, parameters: &[&str]) -> Self {
        Self::with_category(name, parameters, TypeCategory::Concrete)
    }

    /// Append an implemented-interface edge. For an interface declaration
    /// this records an extended super-interface. Declared order is scan
    /// order.
    pub fn implements(mut self, target: impl Into<String>, args: Vec<TypeReference>) -> Self {
        self.interfaces.push(SupertypeEdge::new(target, args));
        self
    }

    /// Set the superclass edge. Omit entirely when the superclass is the
    /// universal top type.
    pub fn extends(mut self, target: impl Into<String>, args: Vec<TypeReference>) -> Self {
        self.superclass = Some(SupertypeEdge::new(target, args));
        self
    }

    /// Direct supertype edges in scan order: interfaces in declared order,
    /// then the superclass edge if present
    pub fn supertype_edges(&self) -> Vec<SupertypeEdge> {
        let mut edges = self.interfaces.clone();
        edges.extend(self.superclass.clone());
        edges
    }
}

/// Read-only metadata source the resolver walks.
///
/// `None` from any lookup means the name is unknown to the source; the
/// walker surfaces that as a malformed hierarchy rather than a normal
/// miss. Implementations must tolerate concurrent reads.
pub trait TypeGraphProvider {
    /// Declared type parameter names of `type_name`, in order
    fn declared_parameters(&self, type_name: &str) -> Option<Vec<String>>;

    /// Direct supertype edges of `type_name`: implemented interfaces in
    /// declared order, then the superclass edge. The universal top type
    /// is omitted, never reported.
    fn direct_supertype_edges(&self, type_name: &str) -> Option<Vec<SupertypeEdge>>;

    /// Static category of `type_name`
    fn classify(&self, type_name: &str) -> Option<TypeCategory>;
}

/// In-memory `TypeGraphProvider` backed by explicit declarations.
///
/// Read-only after construction, so concurrent queries against a shared
/// graph are safe.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeGraph {
    types: HashMap<String, TypeDeclaration>,
}

impl InMemoryTypeGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration, replacing any previous one with the same
    /// name
    pub fn insert(&mut self, declaration: TypeDeclaration) {
        self.types.insert(declaration.name.clone(), declaration);
    }

    /// Chainable [`insert`](Self::insert), for fixture construction
    pub fn with(mut self, declaration: TypeDeclaration) -> Self {
        self.insert(declaration);
        self
    }

    /// Look up a registered declaration
    pub fn declaration(&self, type_name: &str) -> Option<&TypeDeclaration> {
        self.types.get(type_name)
    }
}

impl TypeGraphProvider for InMemoryTypeGraph {
    fn declared_parameters(&self, type_name: &str) -> Option<Vec<String>> {
        self.types.get(type_name).map(|decl| decl.parameters.clone())
    }

    fn direct_supertype_edges(&self, type_name: &str) -> Option<Vec<SupertypeEdge>> {
        self.types.get(type_name).map(|decl| decl.supertype_edges())
    }

    fn classify(&self, type_name: &str) -> Option<TypeCategory> {
        self.types.get(type_name).map(|decl| decl.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_reference_shape() {
        let raw = SupertypeEdge::new("Serializable", vec![]);
        assert_eq!(raw.reference, TypeReference::concrete("Serializable"));

        let applied = SupertypeEdge::new("Handler", vec![TypeReference::variable("M")]);
        assert_eq!(
            applied.reference,
            TypeReference::parameterized("Handler", vec![TypeReference::variable("M")])
        );
    }

    #[test]
    fn test_supertype_edges_order_interfaces_before_superclass() {
        let decl = TypeDeclaration::concrete_class("LoginHandler", &[])
            .implements("Auditable", vec![])
            .implements("Handler", vec![TypeReference::concrete("LoginRequest")])
            .extends("BaseHandler", vec![TypeReference::concrete("LoginRequest")]);

        let edges = decl.supertype_edges();
        let targets: Vec<&str> = edges.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["Auditable", "Handler", "BaseHandler"]);
    }

    #[test]
    fn test_interface_has_no_superclass_edge() {
        let decl = TypeDeclaration::interface("Codec", &["In", "Out"]);
        assert!(decl.superclass.is_none());
        assert!(decl.supertype_edges().is_empty());
    }

    #[test]
    fn test_in_memory_graph_lookups() {
        let graph = InMemoryTypeGraph::new()
            .with(TypeDeclaration::interface("Handler", &["M"]))
            .with(
                TypeDeclaration::abstract_class("BaseHandler", &["M"])
                    .implements("Handler", vec![TypeReference::variable("M")]),
            );

        assert_eq!(
            graph.declared_parameters("Handler"),
            Some(vec!["M".to_string()])
        );
        assert_eq!(graph.classify("Handler"), Some(TypeCategory::Interface));
        assert_eq!(graph.classify("BaseHandler"), Some(TypeCategory::Abstract));
        assert_eq!(graph.classify("Ghost"), None);

        let edges = graph.direct_supertype_edges("BaseHandler").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "Handler");
    }

    #[test]
    fn test_insert_replaces_previous_declaration() {
        let mut graph = InMemoryTypeGraph::new();
        graph.insert(TypeDeclaration::interface("Handler", &["M"]));
        graph.insert(TypeDeclaration::interface("Handler", &["In", "Out"]));

        assert_eq!(
            graph.declared_parameters("Handler"),
            Some(vec!["In".to_string(), "Out".to_string()])
        );
    }
}
