// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ground/arith.rs
// Grounded numbers, strings and their binary operations

use std::any::Any;
use std::fmt;

use crate::atom::{Atom, ExecError, GroundedAtom};

// ============================================================================
// Numbers
// ============================================================================

/// A grounded numeric literal. Integers and floats are distinct values;
/// `Num::Int(1) != Num::Float(1.0)`. Mixed-type arithmetic promotes to
/// float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn int(value: i64) -> Atom {
        Atom::gnd(Num::Int(value))
    }

    pub fn float(value: f64) -> Atom {
        Atom::gnd(Num::Float(value))
    }

    fn as_float(self) -> f64 {
        match self {
            Num::Int(value) => value as f64,
            Num::Float(value) => value,
        }
    }
}

impl GroundedAtom for Num {
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

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Num::Int(value) => write!(f, "{}", value),
            // A whole float keeps its dot so it reparses as a float.
            Num::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{:.1}", value)
            }
            Num::Float(value) => write!(f, "{}", value),
        }
    }
}

// ============================================================================
// Binary numeric operations
// ============================================================================

/// One of the four arithmetic operations, selected by its printable name.
/// Integer arithmetic is checked; overflow and division by zero fail the
/// execution.
#[derive(Debug, Clone, Copy)]
pub struct NumOp {
    name: &'static str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
}

impl NumOp {
    pub const ADD: NumOp = NumOp {
        name: "+",
        int_op: i64::checked_add,
        float_op: |a, b| a + b,
    };

    pub const SUB: NumOp = NumOp {
        name: "-",
        int_op: i64::checked_sub,
        float_op: |a, b| a - b,
    };

    pub const MUL: NumOp = NumOp {
        name: "*",
        int_op: i64::checked_mul,
        float_op: |a, b| a * b,
    };

    pub const DIV: NumOp = NumOp {
        name: "/",
        int_op: i64::checked_div,
        float_op: |a, b| a / b,
    };

    fn apply(&self, a: Num, b: Num) -> Result<Num, ExecError> {
        match (a, b) {
            (Num::Int(a), Num::Int(b)) => (self.int_op)(a, b).map(Num::Int).ok_or_else(|| {
                ExecError::Failure(format!("{} {} {} has no integer result", a, self.name, b))
            }),
            _ => Ok(Num::Float((self.float_op)(a.as_float(), b.as_float()))),
        }
    }
}

fn binary_args<'a, T: 'static>(name: &str, args: &'a [Atom]) -> Result<(&'a T, &'a T), ExecError> {
    match args {
        [_, a, b] => match (a.as_gnd::<T>(), b.as_gnd::<T>()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(ExecError::Failure(format!(
                "{} is not applicable to {} and {}",
                name, a, b
            ))),
        },
        _ => Err(ExecError::Failure(format!(
            "{} expects two arguments, got {}",
            name,
            args.len().saturating_sub(1)
        ))),
    }
}

impl GroundedAtom for NumOp {
    fn execute(&self, args: &[Atom]) -> Result<Vec<Atom>, ExecError> {
        let (a, b) = binary_args::<Num>(self.name, args)?;
        Ok(vec![Atom::gnd(self.apply(*a, *b)?)])
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| self.name == other.name)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for NumOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Strings
// ============================================================================

/// A grounded string literal, printed in double quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Str(pub String);

impl Str {
    pub fn new(value: impl Into<String>) -> Atom {
        Atom::gnd(Str(value.into()))
    }
}

impl GroundedAtom for Str {
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

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

/// String concatenation, `(++ a b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcatOp;

impl GroundedAtom for ConcatOp {
    fn execute(&self, args: &[Atom]) -> Result<Vec<Atom>, ExecError> {
        let (a, b) = binary_args::<Str>("++", args)?;
        Ok(vec![Str::new(format!("{}{}", a.0, b.0))])
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().downcast_ref::<Self>().is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for ConcatOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "++")
    }
}
