// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/interpreter/control.rs
// Reified control flow: typed continuations and the match guard

use std::any::Any;
use std::fmt;

use crate::atom::{Atom, ExecError, GroundedAtom};
use crate::matching::matcher::{match_atoms, MatchResult};
use crate::matching::apply_bindings;

// ============================================================================
// Continuations
// ============================================================================

/// What to do once a subexpression has been reduced to a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Continuation {
    /// The value is the result of the whole step.
    Done,
    /// Substitute the value for child `slot` of `full` and schedule the
    /// resulting expression for its own next reduction step.
    Resume { full: Atom, slot: usize },
}

/// A pending reduction, carried in space content between steps. Holding the
/// continuation as a typed value keeps control flow out of the object
/// language: no reserved symbol can collide with a user-level name.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduct {
    pub sub: Atom,
    pub cont: Continuation,
}

impl Reduct {
    /// Reduce `sub` to completion and treat the value as the step's result.
    pub fn done(sub: Atom) -> Atom {
        Atom::gnd(Reduct {
            sub,
            cont: Continuation::Done,
        })
    }

    /// Reduce `sub`, then substitute the value into `full` at `slot`.
    pub fn resume(sub: Atom, full: Atom, slot: usize) -> Atom {
        Atom::gnd(Reduct {
            sub,
            cont: Continuation::Resume { full, slot },
        })
    }
}

impl GroundedAtom for Reduct {
    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Reduct {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.cont {
            Continuation::Done => write!(f, "reduce {}", self.sub),
            Continuation::Resume { full, slot } => {
                write!(f, "reduce {} into {} at {}", self.sub, full, slot)
            }
        }
    }
}

// ============================================================================
// Match guard
// ============================================================================

/// Runtime guard checking a structural equality that unification deferred.
///
/// `(ifmatch a b then)` re-runs the matcher on `a` and `b`; on success it
/// substitutes the combined bindings into `then` and yields that as its one
/// result, on failure it yields nothing and the branch silently vanishes.
/// Its arguments are matched as-is: reducing them first would lose the
/// structure the guard exists to inspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfMatch;

impl GroundedAtom for IfMatch {
    fn execute(&self, args: &[Atom]) -> Result<Vec<Atom>, ExecError> {
        match args {
            [_, a, b, then] => {
                let mut result = MatchResult::default();
                if !match_atoms(a, b, &mut result) {
                    return Ok(vec![]);
                }
                result.resolve();
                Ok(vec![apply_bindings(then, &result.merged())])
            }
            _ => Err(ExecError::Failure(format!(
                "ifmatch expects three arguments, got {}",
                args.len().saturating_sub(1)
            ))),
        }
    }

    fn reduce_arguments(&self) -> bool {
        false
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().downcast_ref::<Self>().is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for IfMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ifmatch")
    }
}
