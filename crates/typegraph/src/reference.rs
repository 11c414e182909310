//! Type reference model
//!
//! A `TypeReference` is how a type occurs in a signature position: a bare
//! concrete name, a free type variable, or a generic base applied to
//! arguments. Every consumer matches the three variants exhaustively, so
//! there is no runtime "is this parameterized?" probing anywhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type occurring in a signature position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeReference {
    /// A non-generic type, e.g. `Integer`
    Concrete { name: String },
    /// An unbound type parameter, e.g. the `T` in `Repository<T>`.
    /// Only meaningful inside the scope that declared it.
    Variable { name: String },
    /// A generic base applied to arguments, e.g. `Map<String, Integer>`
    Parameterized {
        base: String,
        args: Vec<TypeReference>,
    },
}

impl TypeReference {
    /// Create a concrete reference
    pub fn concrete(name: impl Into<String>) -> Self {
        TypeReference::Concrete { name: name.into() }
    }

    /// Create a free type variable
    pub fn variable(name: impl Into<String>) -> Self {
        TypeReference::Variable { name: name.into() }
    }

    /// Create a parameterized reference
    pub fn parameterized(base: impl Into<String>, args: Vec<TypeReference>) -> Self {
        TypeReference::Parameterized {
            base: base.into(),
            args,
        }
    }

    /// Base name with type arguments erased.
    ///
    /// A free variable names no type on its own, so it has no erasure.
    pub fn erased_name(&self) -> Option<&str> {
        match self {
            TypeReference::Concrete { name } => Some(name),
            TypeReference::Variable { .. } => None,
            TypeReference::Parameterized { base, .. } => Some(base),
        }
    }

    /// Whether any free type variable occurs in this reference, at any
    /// nesting depth
    pub fn mentions_variables(&self) -> bool {
        match self {
            TypeReference::Concrete { .. } => false,
            TypeReference::Variable { .. } => true,
            TypeReference::Parameterized { args, .. } => {
                args.iter().any(TypeReference::mentions_variables)
            }
        }
    }

    /// Get a human-readable name for this reference
    pub fn display_name(&self) -> String {
        match self {
            TypeReference::Concrete { name } | TypeReference::Variable { name } => name.clone(),
            TypeReference::Parameterized { base, args } => {
                let args_str = args
                    .iter()
                    .map(|arg| arg.display_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}<{}>", base, args_str)
            }
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
