// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/matching/unifier.rs
// Bidirectional matching with deferred structural-equality obligations

use tracing::{debug, trace};

use crate::atom::{Atom, Var};
use crate::matching::{apply_bindings, insert_binding, Bindings};
use crate::space::GroundingSpace;

/// Name of the result variable the interpreter synthesizes into its
/// `(= expr $X)` queries. The unifier binds it one-directionally so the
/// synthesized result slot is never over-constrained.
pub const RESULT_PLACEHOLDER: &str = "X";

/// Outcome of unifying one candidate against a query: bindings for both
/// sides plus the structural equalities that could not be checked
/// immediately and must hold for the unification to be valid.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnificationResult {
    pub candidate_bindings: Bindings,
    pub query_bindings: Bindings,
    pub unifications: Vec<(Atom, Atom)>,
}

impl UnificationResult {
    fn resolve(&mut self) {
        let query_bindings = std::mem::take(&mut self.query_bindings);
        self.query_bindings = query_bindings
            .into_iter()
            .map(|(var, value)| (var, apply_bindings(&value, &self.candidate_bindings)))
            .collect();
        let unifications = std::mem::take(&mut self.unifications);
        self.unifications = unifications
            .into_iter()
            .map(|(candidate, query)| {
                (
                    apply_bindings(&candidate, &self.candidate_bindings),
                    apply_bindings(&query, &self.query_bindings),
                )
            })
            .collect();
    }
}

/// Unifies `candidate` against `query`, recording deferred pairs instead of
/// failing where shapes disagree below the outermost level.
///
/// `depth` is 0 for the whole atoms; the arguments directly under the
/// query's operator are at depth 1, where an arity mismatch still fails.
/// From depth 2 on, an arity mismatch, or a candidate-side expression
/// against a query-side symbol or grounded atom, is recorded as a deferred
/// pair and unification continues.
pub fn unify_atoms(
    candidate: &Atom,
    query: &Atom,
    result: &mut UnificationResult,
    depth: usize,
) -> bool {
    if let Atom::Variable(query_var) = query {
        if let Atom::Variable(candidate_var) = candidate {
            // Two variables become aliases, except that the synthesized
            // result placeholder binds one-directionally.
            if query_var.name() != RESULT_PLACEHOLDER
                && !insert_binding(
                    &mut result.candidate_bindings,
                    candidate_var.clone(),
                    query.clone(),
                )
            {
                return false;
            }
        }
        return insert_binding(&mut result.query_bindings, query_var.clone(), candidate.clone());
    }
    match candidate {
        Atom::Symbol(_) | Atom::Grounded(_) => candidate == query,
        Atom::Variable(var) => {
            insert_binding(&mut result.candidate_bindings, var.clone(), query.clone())
        }
        Atom::Expression(children) => match query {
            Atom::Expression(query_children) => {
                if children.len() != query_children.len() {
                    if depth <= 1 {
                        return false;
                    }
                    result.unifications.push((candidate.clone(), query.clone()));
                    return true;
                }
                children
                    .iter()
                    .zip(query_children.iter())
                    .all(|(child, query_child)| unify_atoms(child, query_child, result, depth + 1))
            }
            _ => {
                if depth <= 1 {
                    return false;
                }
                result.unifications.push((candidate.clone(), query.clone()));
                true
            }
        },
    }
}

/// Unifies `query` against every atom in the space. Per matching candidate,
/// query-side bindings are substituted through candidate-side bindings and
/// each deferred pair through its own side's bindings; results come back in
/// content order.
pub fn unify_in_space(space: &GroundingSpace, query: &Atom) -> Vec<UnificationResult> {
    debug!(query = %query, "unify: searching space");
    let mut results = Vec::new();
    for candidate in space.content() {
        let mut result = UnificationResult::default();
        if !unify_atoms(candidate, query, &mut result, 0) {
            continue;
        }
        result.resolve();
        trace!(candidate = %candidate, deferred = result.unifications.len(),
            "unify: candidate unified");
        results.push(result);
    }
    results
}

/// The result variable atom, `$X`.
pub fn result_placeholder() -> Atom {
    Atom::Variable(Var::new(RESULT_PLACEHOLDER))
}
