//! Parameter substitution across hierarchy hops
//!
//! Crossing a supertype edge rebinds the target's parameters to the
//! arguments written on the edge, after those arguments have themselves
//! been rewritten under the current scope. Composing these per-hop
//! substitutions outer-to-inner is what lets a binding declared several
//! levels up resolve to a concrete type at the bottom of the hierarchy.

use crate::error::{ResolveError, ResolveResult};
use crate::reference::TypeReference;
use std::collections::HashMap;

/// Bindings from one scope's parameter names to references.
///
/// Built fresh per traversal hop and never mutated afterwards; crossing
/// another edge produces a new substitution instead of merging into this
/// one.
#[derive(Debug, Clone, Default)]
pub struct Substitution {
    bindings: HashMap<String, TypeReference>,
}

impl Substitution {
    /// Scope-entry substitution binding each parameter to itself.
    ///
    /// Used for the start type, so a depth-1 result over a generic start
    /// type keeps the start's own variables free.
    pub fn identity(parameters: &[String]) -> Self {
        let bindings = parameters
            .iter()
            .map(|param| (param.clone(), TypeReference::variable(param.clone())))
            .collect();
        Substitution { bindings }
    }

    /// Bind a target's declared parameters positionally against
    /// already-substituted edge arguments
    pub fn binding(parameters: &[String], args: &[TypeReference]) -> ResolveResult<Self> {
        if parameters.len() != args.len() {
            return Err(ResolveError::MalformedHierarchy(format!(
                "{} argument(s) supplied for {} declared parameter(s)",
                args.len(),
                parameters.len()
            )));
        }
        let bindings = parameters.iter().cloned().zip(args.iter().cloned()).collect();
        Ok(Substitution { bindings })
    }

    /// Look up the binding for a parameter name
    pub fn get(&self, name: &str) -> Option<&TypeReference> {
        self.bindings.get(name)
    }

    /// Substitute every free variable in `reference`.
    ///
    /// A concrete reference passes through unchanged, a variable must be
    /// bound in this scope, and a parameterized reference is rebuilt with
    /// each of its arguments substituted recursively, to arbitrary
    /// nesting depth.
    pub fn apply(&self, reference: &TypeReference) -> ResolveResult<TypeReference> {
        match reference {
            TypeReference::Concrete { .. } => Ok(reference.clone()),
            TypeReference::Variable { name } => {
                self.bindings.get(name).cloned().ok_or_else(|| {
                    ResolveError::MalformedHierarchy(format!(
                        "no binding for type variable `{name}`"
                    ))
                })
            }
            TypeReference::Parameterized { base, args } => Ok(TypeReference::Parameterized {
                base: base.clone(),
                args: self.apply_all(args)?,
            }),
        }
    }

    /// [`apply`](Self::apply) over an argument list, preserving order
    pub fn apply_all(&self, args: &[TypeReference]) -> ResolveResult<Vec<TypeReference>> {
        args.iter().map(|arg| self.apply(arg)).collect()
    }
}

/// Argument at `position` of a resolved reference.
///
/// By construction the argument is already fully substituted when it
/// reaches this lookup. A bare reference has arity 0.
pub fn positional_argument(
    reference: &TypeReference,
    position: usize,
) -> ResolveResult<TypeReference> {
    match reference {
        TypeReference::Parameterized { base, args } => {
            args.get(position)
                .cloned()
                .ok_or_else(|| ResolveError::PositionOutOfRange {
                    base: base.clone(),
                    position,
                    arity: args.len(),
                })
        }
        other => Err(ResolveError::PositionOutOfRange {
            base: other.display_name(),
            position,
            arity: 0,
        }),
    }
}

/// Argument bound to the declared parameter `name`, given the target's
/// declared parameter list
pub fn named_argument(
    reference: &TypeReference,
    parameters: &[String],
    name: &str,
) -> ResolveResult<TypeReference> {
    let position = parameters.iter().position(|param| param == name).ok_or_else(|| {
        ResolveError::UnknownParameter {
            base: reference.erased_name().unwrap_or("?").to_string(),
            parameter: name.to_string(),
        }
    })?;
    positional_argument(reference, position)
}
