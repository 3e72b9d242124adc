// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ground/mod.rs
// Standard grounded primitives and their surface tokens

pub mod arith;
pub mod logic;

pub use arith::{ConcatOp, Num, NumOp, Str};
pub use logic::{Bool, EqOp, IfOp};

use regex::Regex;

use crate::atom::Atom;
use crate::syntax::{ParseError, Tokenizer};

/// Registers the standard primitives as surface tokens. Longer operators
/// come before their single-character prefixes; numeric literals try the
/// float shape before the integer one.
pub fn register_std_tokens(tokenizer: &mut Tokenizer) -> Result<(), ParseError> {
    tokenizer.register_token(Regex::new("==")?, |_| Atom::gnd(EqOp));
    tokenizer.register_token(Regex::new(r"\+\+")?, |_| Atom::gnd(ConcatOp));
    tokenizer.register_token(Regex::new(r"\+")?, |_| Atom::gnd(NumOp::ADD));
    tokenizer.register_token(Regex::new("-")?, |_| Atom::gnd(NumOp::SUB));
    tokenizer.register_token(Regex::new(r"\*")?, |_| Atom::gnd(NumOp::MUL));
    tokenizer.register_token(Regex::new("/")?, |_| Atom::gnd(NumOp::DIV));
    tokenizer.register_token(Regex::new(r"\d+\.\d+")?, |token| {
        Num::float(token.parse().unwrap_or(f64::NAN))
    });
    tokenizer.register_token(Regex::new(r"\d+")?, |token| match token.parse::<i64>() {
        Ok(value) => Num::int(value),
        // Out of integer range; keep the digits with float precision.
        Err(_) => Num::float(token.parse().unwrap_or(f64::NAN)),
    });
    tokenizer.register_token(Regex::new(r"True\b")?, |_| Bool::new(true));
    tokenizer.register_token(Regex::new(r"False\b")?, |_| Bool::new(false));
    Ok(())
}

/// A tokenizer with the standard primitives pre-registered.
pub fn std_tokenizer() -> Result<Tokenizer, ParseError> {
    let mut tokenizer = Tokenizer::new();
    register_std_tokens(&mut tokenizer)?;
    Ok(tokenizer)
}
