//! Hierarchy traversal and ancestor-binding resolution
//!
//! The walker finds the edge, direct or transitive, connecting a start
//! type to a requested ancestor, rewriting the edge's arguments under the
//! substitution accumulated along the way. The hierarchy is a finite DAG
//! rooted at the universal top type, so recursion depth is bounded by
//! hierarchy depth and no cycle bookkeeping is needed.

use crate::error::{ResolveError, ResolveResult};
use crate::graph::{SupertypeEdge, TypeGraphProvider};
use crate::reference::TypeReference;
use crate::substitution::{self, Substitution};

/// Traversal engine over a [`TypeGraphProvider`].
///
/// Borrows the provider immutably; queries are independent and safe to
/// issue concurrently whenever the provider tolerates concurrent reads.
pub struct HierarchyWalker<'a, P: TypeGraphProvider + ?Sized> {
    graph: &'a P,
}

impl<'a, P: TypeGraphProvider + ?Sized> HierarchyWalker<'a, P> {
    /// Create a walker over `graph`
    pub fn new(graph: &'a P) -> Self {
        HierarchyWalker { graph }
    }

    /// Resolve the fully-substituted reference connecting `start` to
    /// `ancestor`.
    ///
    /// Direct edges are scanned interface-first, superclass last, and the
    /// first name match in that order is authoritative — including when a
    /// diamond reaches the same ancestor along paths with different
    /// instantiations. Only when no direct edge matches does the walk
    /// descend, in the same order, composing a fresh substitution per
    /// crossed edge.
    ///
    /// `Ok(None)` means the ancestor occurs nowhere in the transitive
    /// hierarchy, which is an expected outcome. The universal top type is
    /// never reported as an edge target, so querying it also comes back
    /// `Ok(None)`.
    pub fn resolve_ancestor_edge(
        &self,
        start: &str,
        ancestor: &str,
    ) -> ResolveResult<Option<TypeReference>> {
        let parameters = self
            .graph
            .declared_parameters(start)
            .ok_or_else(|| ResolveError::unknown_type(start))?;
        // The start type's own parameters stay free: a depth-1 result over
        // a generic start type still mentions them.
        let scope = Substitution::identity(&parameters);
        self.walk(start, ancestor, &scope)
    }

    fn walk(
        &self,
        current: &str,
        ancestor: &str,
        scope: &Substitution,
    ) -> ResolveResult<Option<TypeReference>> {
        let edges = self
            .graph
            .direct_supertype_edges(current)
            .ok_or_else(|| ResolveError::unknown_type(current))?;

        // Scan every direct edge before descending; a match at this level
        // wins immediately.
        let mut substituted = Vec::with_capacity(edges.len());
        for edge in &edges {
            let reference = self.substitute_edge(edge, scope)?;
            if edge.target == ancestor {
                return Ok(Some(reference));
            }
            substituted.push((edge.target.clone(), reference));
        }

        for (target, reference) in substituted {
            let next = self.enter_scope(&target, &reference)?;
            if let Some(found) = self.walk(&target, ancestor, &next)? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }

    /// Rewrite one edge's declared reference under the current scope,
    /// validating it against the target's declared parameters
    fn substitute_edge(
        &self,
        edge: &SupertypeEdge,
        scope: &Substitution,
    ) -> ResolveResult<TypeReference> {
        let parameters = self
            .graph
            .declared_parameters(&edge.target)
            .ok_or_else(|| ResolveError::unknown_type(&edge.target))?;

        match &edge.reference {
            TypeReference::Concrete { .. } if parameters.is_empty() => Ok(edge.reference.clone()),
            TypeReference::Concrete { .. } => Err(ResolveError::UnsupportedRawSupertype {
                ancestor: edge.target.clone(),
                arity: parameters.len(),
            }),
            TypeReference::Variable { name } => Err(ResolveError::MalformedHierarchy(format!(
                "supertype edge to `{}` is a bare type variable `{}`",
                edge.target, name
            ))),
            TypeReference::Parameterized { base, args } => {
                if args.len() != parameters.len() {
                    return Err(ResolveError::MalformedHierarchy(format!(
                        "`{}` declares {} type parameter(s) but the edge supplies {} argument(s)",
                        edge.target,
                        parameters.len(),
                        args.len()
                    )));
                }
                Ok(TypeReference::Parameterized {
                    base: base.clone(),
                    args: scope.apply_all(args)?,
                })
            }
        }
    }

    /// Substitution for descending into `target`: its declared parameters
    /// bound positionally to the substituted edge arguments
    fn enter_scope(
        &self,
        target: &str,
        reference: &TypeReference,
    ) -> ResolveResult<Substitution> {
        let parameters = self
            .graph
            .declared_parameters(target)
            .ok_or_else(|| ResolveError::unknown_type(target))?;
        match reference {
            TypeReference::Parameterized { args, .. } => Substitution::binding(&parameters, args),
            _ => Substitution::binding(&parameters, &[]),
        }
    }

    /// Resolve the type argument at `position` of the ancestor's
    /// parameter list, as bound by `start`'s hierarchy
    pub fn resolve_type_argument_at_position(
        &self,
        start: &str,
        ancestor: &str,
        position: usize,
    ) -> ResolveResult<TypeReference> {
        let reference = self.require_ancestor_edge(start, ancestor)?;
        substitution::positional_argument(&reference, position)
    }

    /// Resolve the type argument bound to the ancestor's declared
    /// parameter `parameter`
    pub fn resolve_type_argument_by_name(
        &self,
        start: &str,
        ancestor: &str,
        parameter: &str,
    ) -> ResolveResult<TypeReference> {
        let reference = self.require_ancestor_edge(start, ancestor)?;
        let parameters = self
            .graph
            .declared_parameters(ancestor)
            .ok_or_else(|| ResolveError::unknown_type(ancestor))?;
        substitution::named_argument(&reference, &parameters, parameter)
    }

    /// Erased base name of the argument at `position`, for callers that
    /// only need the raw type.
    ///
    /// An argument that is still a free variable has no erasure and is
    /// reported as malformed.
    pub fn resolve_erased_argument_at_position(
        &self,
        start: &str,
        ancestor: &str,
        position: usize,
    ) -> ResolveResult<String> {
        let argument = self.resolve_type_argument_at_position(start, ancestor, position)?;
        argument
            .erased_name()
            .map(str::to_owned)
            .ok_or_else(|| {
                ResolveError::MalformedHierarchy(format!(
                    "type argument `{argument}` is an unbound variable and has no erasure"
                ))
            })
    }

    fn require_ancestor_edge(&self, start: &str, ancestor: &str) -> ResolveResult<TypeReference> {
        self.resolve_ancestor_edge(start, ancestor)?
            .ok_or_else(|| ResolveError::AncestorNotFound {
                start: start.to_string(),
                ancestor: ancestor.to_string(),
            })
    }
}
