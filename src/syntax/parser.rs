// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Surface syntax parser with a regex-keyed grounded-token registry

use nom::{
    bytes::complete::take_till1,
    character::complete::{char, multispace0},
    combinator::map,
    error::{context, convert_error, VerboseError},
    sequence::preceded,
    IResult,
};
use regex::Regex;
use thiserror::Error;
use tracing::trace;

use crate::atom::Atom;
use crate::space::GroundingSpace;

type TokenResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error:\n{0}")]
    Syntax(String),
    #[error("unexpected end of input")]
    Incomplete,
    #[error(transparent)]
    Token(#[from] regex::Error),
}

// ============================================================================
// Lexer
// ============================================================================

/// One whitespace/parenthesis-delimited token. Parentheses never occur
/// inside a token; there is no escaping.
fn token_text(input: &str) -> TokenResult<&str> {
    take_till1(|c: char| c.is_whitespace() || c == '(' || c == ')')(input)
}

fn variable(input: &str) -> TokenResult<Atom> {
    context("variable", map(preceded(char('$'), token_text), Atom::var))(input)
}

// ============================================================================
// Tokenizer
// ============================================================================

type TokenConstr = Box<dyn Fn(&str) -> Atom>;

/// Parser for the textual surface syntax. `(` … `)` delimits an Expression
/// and `$name` a Variable; any other token becomes a Symbol unless a
/// registered regular expression claims it first, in which case the paired
/// constructor turns the matched text into a grounded atom.
#[derive(Default)]
pub struct Tokenizer {
    tokens: Vec<(Regex, TokenConstr)>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a grounded-token constructor. Registration order is lookup
    /// order; a regex whose match can prefix another's must come first.
    pub fn register_token(&mut self, regex: Regex, constr: impl Fn(&str) -> Atom + 'static) {
        self.tokens.push((regex, Box::new(constr)));
    }

    fn find_token(&self, input: &str) -> Option<(usize, Atom)> {
        for (regex, constr) in &self.tokens {
            match regex.find(input) {
                Some(found) if found.start() == 0 => {
                    return Some((found.end(), constr(found.as_str())));
                }
                _ => continue,
            }
        }
        None
    }

    fn atom<'a>(&self, input: &'a str) -> TokenResult<'a, Atom> {
        let (input, _) = multispace0(input)?;
        if input.starts_with('(') {
            return self.expression(input);
        }
        if input.starts_with('$') {
            return variable(input);
        }
        if let Some((consumed, atom)) = self.find_token(input) {
            return Ok((&input[consumed..], atom));
        }
        context("symbol", map(token_text, Atom::sym))(input)
    }

    fn expression<'a>(&self, input: &'a str) -> TokenResult<'a, Atom> {
        let (mut rest, _) = context("expression", char('('))(input)?;
        let mut children = Vec::new();
        loop {
            let (after_space, _) = multispace0(rest)?;
            if let Ok((after_paren, _)) = char::<_, VerboseError<&str>>(')')(after_space) {
                return Ok((after_paren, Atom::expr(children)));
            }
            let (after_child, child) = self.atom(after_space)?;
            children.push(child);
            rest = after_child;
        }
    }

    /// Parses every atom in `text`, in order.
    pub fn parse(&self, text: &str) -> Result<Vec<Atom>, ParseError> {
        let mut atoms = Vec::new();
        let mut input = text.trim_start();
        while !input.is_empty() {
            let (rest, atom) = self.atom(input).map_err(|err| match err {
                nom::Err::Error(err) | nom::Err::Failure(err) => {
                    ParseError::Syntax(convert_error(text, err))
                }
                nom::Err::Incomplete(_) => ParseError::Incomplete,
            })?;
            trace!(atom = %atom, "parse: atom read");
            atoms.push(atom);
            input = rest.trim_start();
        }
        Ok(atoms)
    }

    /// Parses `text` and appends every atom to `space`.
    pub fn parse_into(&self, text: &str, space: &mut GroundingSpace) -> Result<(), ParseError> {
        space.add_all(self.parse(text)?);
        Ok(())
    }
}
