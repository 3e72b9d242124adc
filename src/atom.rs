// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/atom.rs
// Atom data model: symbols, variables, expressions and grounded values

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

// ============================================================================
// Variables
// ============================================================================

/// Variable names. Two variables are equal iff their names are equal;
/// there is no implicit alpha-renaming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(pub String);

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

// ============================================================================
// Grounded atom contract
// ============================================================================

/// Error raised at the grounded-execution boundary.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The grounded value is not executable at all.
    #[error("operation is not supported: {0}")]
    NotSupported(String),
    /// The operation is executable but failed on these arguments.
    #[error("{0}")]
    Failure(String),
}

/// The capability an externally supplied primitive value must implement.
///
/// `execute` receives the full call expression (the grounded atom itself at
/// index 0, arguments after it) and produces zero or more result atoms.
/// Equality and printable form are delegated to the implementation.
pub trait GroundedAtom: fmt::Debug + fmt::Display {
    fn execute(&self, _args: &[Atom]) -> Result<Vec<Atom>, ExecError> {
        Err(ExecError::NotSupported(self.to_string()))
    }

    /// Whether expression arguments should be reduced before `execute` is
    /// invoked. Operations that match against unreduced structure (guards)
    /// return false.
    fn reduce_arguments(&self) -> bool {
        true
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool;

    fn as_any(&self) -> &dyn Any;
}

// ============================================================================
// Atoms
// ============================================================================

/// Any value in the symbolic model. Equality is structural and total across
/// variants; different variants are never equal.
#[derive(Debug, Clone)]
pub enum Atom {
    Symbol(String),
    Variable(Var),
    Expression(Vec<Atom>),
    Grounded(Rc<dyn GroundedAtom>),
}

impl Atom {
    pub fn sym(name: impl Into<String>) -> Self {
        Atom::Symbol(name.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Atom::Variable(Var::new(name))
    }

    pub fn expr(children: Vec<Atom>) -> Self {
        Atom::Expression(children)
    }

    pub fn gnd(value: impl GroundedAtom + 'static) -> Self {
        Atom::Grounded(Rc::new(value))
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Atom::Expression(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Atom::Variable(_))
    }

    pub fn as_expression(&self) -> Option<&[Atom]> {
        match self {
            Atom::Expression(children) => Some(children),
            _ => None,
        }
    }

    /// Downcast a grounded atom to its concrete implementation type.
    pub fn as_gnd<T: 'static>(&self) -> Option<&T> {
        match self {
            Atom::Grounded(value) => value.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Symbol(a), Atom::Symbol(b)) => a == b,
            (Atom::Variable(a), Atom::Variable(b)) => a == b,
            (Atom::Expression(a), Atom::Expression(b)) => a == b,
            (Atom::Grounded(a), Atom::Grounded(b)) => a.eq_gnd(b.as_ref()),
            _ => false,
        }
    }
}

impl Eq for Atom {}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom::Symbol(name) => write!(f, "{}", name),
            Atom::Variable(var) => write!(f, "{}", var),
            Atom::Expression(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            Atom::Grounded(value) => write!(f, "{}", value),
        }
    }
}
