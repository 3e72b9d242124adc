// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/mod.rs
// Textual surface syntax

pub mod parser;

pub use parser::{ParseError, Tokenizer};
