//! Typegraph - generic supertype binding resolution
//!
//! This library recovers, for a type that inherits (directly or
//! transitively) from a generic ancestor, the concrete type bound to each
//! of the ancestor's parameter slots:
//! - An exhaustively matched reference model (concrete / variable /
//!   parameterized)
//! - Substitution composition across hierarchy hops, nested references
//!   included
//! - A traversal engine scanning interface edges before the superclass
//!   edge, first match winning
//! - Classifier predicates over a type's static category
//!
//! Hierarchy metadata comes from an injected, read-only
//! [`TypeGraphProvider`]; [`InMemoryTypeGraph`] is provided for embedders
//! without a host reflection facility, and for tests.

/// Typegraph version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod classify;
pub mod error;
pub mod graph;
pub mod reference;
pub mod substitution;
pub mod walker;

// Re-export commonly used types
pub use classify::{is_abstract_type, is_concrete_type, is_interface_type};
pub use error::{ResolveError, ResolveResult};
pub use graph::{
    InMemoryTypeGraph, SupertypeEdge, TypeCategory, TypeDeclaration, TypeGraphProvider,
};
pub use reference::TypeReference;
pub use substitution::Substitution;
pub use walker::HierarchyWalker;
