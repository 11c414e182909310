//! Shared hierarchy fixtures for integration tests
//!
//! One messaging-flavored graph covering every traversal shape the
//! resolver supports: plain chains, non-generic intermediate hops,
//! re-binding through a generic intermediate, multi-interface
//! declarations, a three-level diamond, and nested parameterization.

use typegraph::{InMemoryTypeGraph, TypeDeclaration, TypeReference};

pub fn concrete(name: &str) -> TypeReference {
    TypeReference::concrete(name)
}

pub fn variable(name: &str) -> TypeReference {
    TypeReference::variable(name)
}

pub fn messaging_graph() -> InMemoryTypeGraph {
    InMemoryTypeGraph::new()
        // Chain: concrete class -> generic abstract class -> interface
        .with(TypeDeclaration::interface("Auditable", &[]))
        .with(TypeDeclaration::interface("Handler", &["M"]))
        .with(
            TypeDeclaration::abstract_class("BaseHandler", &["M"])
                .implements("Handler", vec![variable("M")]),
        )
        .with(
            TypeDeclaration::concrete_class("LoginHandler", &[])
                .extends("BaseHandler", vec![concrete("LoginRequest")]),
        )
        // Non-generic intermediate hop
        .with(
            TypeDeclaration::concrete_class("AuditedLoginHandler", &[])
                .implements("Auditable", vec![])
                .extends("LoginHandler", vec![]),
        )
        // Re-binding through a generic intermediate
        .with(TypeDeclaration::interface("Codec", &["In", "Out"]))
        .with(
            TypeDeclaration::abstract_class("JsonCodec", &["T"])
                .implements("Codec", vec![concrete("String"), variable("T")]),
        )
        .with(
            TypeDeclaration::concrete_class("UserJsonCodec", &[])
                .extends("JsonCodec", vec![concrete("User")]),
        )
        // Three-parameter interface feeding two parameterized interfaces,
        // one of which fans out again (three-level diamond)
        .with(TypeDeclaration::interface("Consumes", &["C"]))
        .with(TypeDeclaration::interface("Produces", &["P"]))
        .with(TypeDeclaration::interface("Requests", &["R"]))
        .with(
            TypeDeclaration::interface("Exchange", &["V", "W"])
                .implements("Produces", vec![variable("W")])
                .implements("Requests", vec![variable("V")]),
        )
        .with(
            TypeDeclaration::interface("Endpoint", &["S", "T", "U"])
                .implements("Consumes", vec![variable("T")])
                .implements("Exchange", vec![variable("U"), variable("S")]),
        )
        .with(
            TypeDeclaration::concrete_class("OrderEndpoint", &[]).implements(
                "Endpoint",
                vec![concrete("String"), concrete("Integer"), concrete("Boolean")],
            ),
        )
        // Nested parameterization: the supertype argument is itself generic
        .with(TypeDeclaration::interface("Source", &["F"]))
        .with(TypeDeclaration::interface("Batch", &["E"]))
        .with(
            TypeDeclaration::interface("BatchSource", &["G"]).implements(
                "Source",
                vec![TypeReference::parameterized("Batch", vec![variable("G")])],
            ),
        )
        .with(
            TypeDeclaration::concrete_class("IntBatchSource", &[])
                .implements("BatchSource", vec![concrete("Integer")]),
        )
        // Same ancestor reachable through an interface edge and through
        // the superclass, with different instantiations
        .with(TypeDeclaration::interface("Renderer", &["X"]))
        .with(
            TypeDeclaration::abstract_class("Widget", &["X"])
                .implements("Renderer", vec![variable("X")]),
        )
        .with(
            TypeDeclaration::concrete_class("SplitView", &[])
                .implements("Renderer", vec![concrete("Html")])
                .extends("Widget", vec![concrete("Pdf")]),
        )
}
