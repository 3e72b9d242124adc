// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ground/logic.rs
// Grounded booleans, structural equality and the strict conditional

use std::any::Any;
use std::fmt;

use crate::atom::{Atom, ExecError, GroundedAtom};

/// A grounded boolean, printed `True`/`False` like the surface tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn new(value: bool) -> Atom {
        Atom::gnd(Bool(value))
    }
}

impl GroundedAtom for Bool {
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

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

/// Structural equality over any two atoms, `(== a b)`, producing a [`Bool`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqOp;

impl GroundedAtom for EqOp {
    fn execute(&self, args: &[Atom]) -> Result<Vec<Atom>, ExecError> {
        match args {
            [_, a, b] => Ok(vec![Bool::new(a == b)]),
            _ => Err(ExecError::Failure(format!(
                "== expects two arguments, got {}",
                args.len().saturating_sub(1)
            ))),
        }
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().downcast_ref::<Self>().is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for EqOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "==")
    }
}

/// Strict conditional, `(if cond then)` or `(if cond then else)`. The
/// condition must already be a [`Bool`]; both branches are evaluated before
/// dispatch, so recursive programs need the lazy rule-based conditional
/// instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfOp;

impl GroundedAtom for IfOp {
    fn execute(&self, args: &[Atom]) -> Result<Vec<Atom>, ExecError> {
        let (condition, if_true, if_false) = match args {
            [_, condition, if_true] => (condition, if_true, None),
            [_, condition, if_true, if_false] => (condition, if_true, Some(if_false)),
            _ => {
                return Err(ExecError::Failure(format!(
                    "if expects two or three arguments, got {}",
                    args.len().saturating_sub(1)
                )))
            }
        };
        let condition = condition
            .as_gnd::<Bool>()
            .ok_or_else(|| ExecError::Failure(format!("condition is not a boolean: {}", condition)))?;
        Ok(match (condition.0, if_false) {
            (true, _) => vec![if_true.clone()],
            (false, Some(if_false)) => vec![(*if_false).clone()],
            (false, None) => vec![],
        })
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().downcast_ref::<Self>().is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for IfOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if")
    }
}
