//! Resolution error taxonomy

use thiserror::Error;

/// Result alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors surfaced by hierarchy resolution.
///
/// `AncestorNotFound` is the only expected negative outcome; every other
/// variant means the caller or the supplied metadata is wrong and the
/// result cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Requested ancestor is not a direct or transitive supertype of the
    /// start type
    #[error("`{ancestor}` is not a supertype of `{start}`")]
    AncestorNotFound { start: String, ancestor: String },

    /// Requested argument position exceeds the resolved reference's arity
    #[error("type argument position {position} is out of range for `{base}` with {arity} argument(s)")]
    PositionOutOfRange {
        base: String,
        position: usize,
        arity: usize,
    },

    /// Requested parameter name is not declared by the ancestor
    #[error("`{base}` declares no type parameter named `{parameter}`")]
    UnknownParameter { base: String, parameter: String },

    /// The supplied metadata is structurally inconsistent: an edge's
    /// argument count disagrees with the target's declared parameters, a
    /// free variable has no binding, or a name is unknown to the source
    #[error("malformed type hierarchy: {0}")]
    MalformedHierarchy(String),

    /// A supertype edge is a bare reference to a type that declares
    /// parameters
    #[error("raw reference to `{ancestor}`, which declares {arity} type parameter(s)")]
    UnsupportedRawSupertype { ancestor: String, arity: usize },
}

impl ResolveError {
    /// Unknown name reported by the metadata source mid-walk
    pub(crate) fn unknown_type(type_name: &str) -> Self {
        ResolveError::MalformedHierarchy(format!("unknown type `{type_name}`"))
    }
}
