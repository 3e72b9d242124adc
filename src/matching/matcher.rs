// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/matching/matcher.rs
// One-directional pattern matching of a pattern atom against space content

use tracing::{debug, trace};

use crate::atom::Atom;
use crate::matching::{apply_bindings, insert_binding, Bindings};
use crate::space::GroundingSpace;

/// Bindings accumulated while matching one candidate against one pattern.
/// Variables from the candidate and from the pattern live in separate maps:
/// a knowledge-base atom's own variables must not be confused with the
/// query's.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate_bindings: Bindings,
    pub pattern_bindings: Bindings,
}

impl MatchResult {
    /// Substitutes candidate-side bindings into pattern-side bindings, so a
    /// candidate's own variables can flow into atoms synthesized from the
    /// pattern.
    pub fn resolve(&mut self) {
        let pattern_bindings = std::mem::take(&mut self.pattern_bindings);
        self.pattern_bindings = pattern_bindings
            .into_iter()
            .map(|(var, value)| (var, apply_bindings(&value, &self.candidate_bindings)))
            .collect();
    }

    /// Both binding sets as one map.
    pub fn merged(&self) -> Bindings {
        let mut merged = self.candidate_bindings.clone();
        merged.extend(
            self.pattern_bindings
                .iter()
                .map(|(var, value)| (var.clone(), value.clone())),
        );
        merged
    }
}

/// Matches `candidate` against `pattern` recursively. Variables on either
/// side bind the subterm at the same position on the other side; a variable
/// already bound to a different value fails the match. Expressions match
/// pairwise with equal child counts; symbols and grounded atoms require
/// structural equality.
pub fn match_atoms(candidate: &Atom, pattern: &Atom, result: &mut MatchResult) -> bool {
    if let Atom::Variable(var) = pattern {
        return insert_binding(&mut result.pattern_bindings, var.clone(), candidate.clone());
    }
    match candidate {
        Atom::Symbol(_) | Atom::Grounded(_) => candidate == pattern,
        Atom::Variable(var) => {
            insert_binding(&mut result.candidate_bindings, var.clone(), pattern.clone())
        }
        Atom::Expression(children) => match pattern {
            Atom::Expression(pattern_children) if children.len() == pattern_children.len() => {
                children
                    .iter()
                    .zip(pattern_children.iter())
                    .all(|(child, pattern_child)| match_atoms(child, pattern_child, result))
            }
            _ => false,
        },
    }
}

/// Matches `pattern` against every atom in the space, returning the
/// resolved pattern-side bindings per matching candidate, in content order.
/// No deduplication is performed.
pub fn match_in_space(space: &GroundingSpace, pattern: &Atom) -> Vec<Bindings> {
    debug!(pattern = %pattern, "match: searching space");
    let mut results = Vec::new();
    for candidate in space.content() {
        let mut result = MatchResult::default();
        if !match_atoms(candidate, pattern, &mut result) {
            continue;
        }
        result.resolve();
        trace!(candidate = %candidate, "match: candidate matched");
        results.push(result.pattern_bindings);
    }
    results
}

/// Matches `pattern` against the space and applies every binding set to
/// every template atom, appending each instantiated atom to `result`.
pub fn match_into(
    space: &GroundingSpace,
    pattern: &Atom,
    templ: &[Atom],
    result: &mut GroundingSpace,
) {
    for bindings in match_in_space(space, pattern) {
        for atom in templ {
            let instantiated = apply_bindings(atom, &bindings);
            trace!(atom = %instantiated, "match: template instantiated");
            result.add(instantiated);
        }
    }
}
