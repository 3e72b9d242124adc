// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/space.rs
// Grounding space: an ordered collection of atoms serving as both
// pending work and knowledge base

use std::fmt;

use crate::atom::Atom;
use crate::interpreter;
use crate::matching::matcher;
use crate::matching::unifier::{self, UnificationResult};
use crate::matching::Bindings;

/// An ordered collection of atoms. Content is consumed from the back by the
/// interpreter and may have results appended to the back; the same space can
/// be queried non-destructively as a knowledge base.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundingSpace {
    content: Vec<Atom>,
}

impl GroundingSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one atom to content.
    pub fn add(&mut self, atom: Atom) {
        self.content.push(atom);
    }

    pub fn add_all(&mut self, atoms: impl IntoIterator<Item = Atom>) {
        self.content.extend(atoms);
    }

    /// Removes and returns the last atom of content, if any.
    pub fn pop(&mut self) -> Option<Atom> {
        self.content.pop()
    }

    pub fn content(&self) -> &[Atom] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Matches `pattern` against every atom in content, returning one
    /// binding set per matching atom, in content order.
    pub fn match_pattern(&self, pattern: &Atom) -> Vec<Bindings> {
        matcher::match_in_space(self, pattern)
    }

    /// Matches `pattern` against content and, for every match, applies the
    /// bindings to each template atom and appends the result to `result`.
    pub fn match_into(&self, pattern: &Atom, templ: &[Atom], result: &mut GroundingSpace) {
        matcher::match_into(self, pattern, templ, result)
    }

    /// Unifies `query` against every atom in content, returning one
    /// unification result per candidate, in content order.
    pub fn unify(&self, query: &Atom) -> Vec<UnificationResult> {
        unifier::unify_in_space(self, query)
    }

    /// Performs one reduction step on this space's content, consulting `kb`
    /// for equations. See [`interpreter::interpret_step`].
    pub fn interpret_step(&mut self, kb: &GroundingSpace) -> Option<Atom> {
        interpreter::interpret_step(self, kb)
    }
}

impl From<Vec<Atom>> for GroundingSpace {
    fn from(content: Vec<Atom>) -> Self {
        GroundingSpace { content }
    }
}

impl fmt::Display for GroundingSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, atom) in self.content.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}
