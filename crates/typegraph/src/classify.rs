//! Static category predicates
//!
//! Thin wrappers over [`TypeGraphProvider::classify`]; no traversal, no
//! substitution. The three predicates are mutually exclusive, and an
//! unknown name is `false` on all of them.

use crate::graph::{TypeCategory, TypeGraphProvider};

/// Whether `type_name` is declared as an interface
pub fn is_interface_type<P: TypeGraphProvider + ?Sized>(graph: &P, type_name: &str) -> bool {
    matches!(graph.classify(type_name), Some(TypeCategory::Interface))
}

/// Whether `type_name` is declared as an abstract class
pub fn is_abstract_type<P: TypeGraphProvider + ?Sized>(graph: &P, type_name: &str) -> bool {
    matches!(graph.classify(type_name), Some(TypeCategory::Abstract))
}

/// Whether `type_name` is declared as an instantiable class
pub fn is_concrete_type<P: TypeGraphProvider + ?Sized>(graph: &P, type_name: &str) -> bool {
    matches!(graph.classify(type_name), Some(TypeCategory::Concrete))
}
