// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/lib.rs
// Groundspace library

pub mod atom;
pub mod space;
pub mod matching;
pub mod interpreter;
pub mod ground;
pub mod syntax;

// Re-export commonly used items
pub use atom::{Atom, ExecError, GroundedAtom, Var};
pub use space::GroundingSpace;
pub use matching::{apply_bindings, Bindings, MatchResult, UnificationResult};
pub use interpreter::{
    eos, interpret_step, interpret_until_result, Continuation, IfMatch, Reduct, EOS, EQUATION,
};
pub use ground::{
    register_std_tokens, std_tokenizer, Bool, ConcatOp, EqOp, IfOp, Num, NumOp, Str,
};
pub use syntax::{ParseError, Tokenizer};
