// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/matching/mod.rs
// Bindings shared by the pattern matcher and the unifier

pub mod matcher;
pub mod unifier;

pub use matcher::{match_atoms, MatchResult};
pub use unifier::{unify_atoms, UnificationResult};

use std::collections::BTreeMap;

use crate::atom::{Atom, Var};

/// A mapping from variables to atoms, ordered by variable name.
pub type Bindings = BTreeMap<Var, Atom>;

/// Substitutes bound variables in `atom`, leaving unbound ones untouched.
/// Always allocates fresh expression nodes; shared subtrees are never
/// mutated in place.
pub fn apply_bindings(atom: &Atom, bindings: &Bindings) -> Atom {
    match atom {
        Atom::Symbol(_) | Atom::Grounded(_) => atom.clone(),
        Atom::Variable(var) => bindings.get(var).cloned().unwrap_or_else(|| atom.clone()),
        Atom::Expression(children) => Atom::expr(
            children
                .iter()
                .map(|child| apply_bindings(child, bindings))
                .collect(),
        ),
    }
}

/// Records a binding, failing when the variable is already bound to a
/// different value.
pub(crate) fn insert_binding(bindings: &mut Bindings, var: Var, value: Atom) -> bool {
    match bindings.get(&var) {
        Some(prev) => *prev == value,
        None => {
            bindings.insert(var, value);
            true
        }
    }
}
