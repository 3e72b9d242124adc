// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/parser_test.rs
// tests surface syntax parsing and the grounded-token registry

use groundspace::*;

fn s(name: &str) -> Atom {
    Atom::sym(name)
}

fn v(name: &str) -> Atom {
    Atom::var(name)
}

fn e(children: Vec<Atom>) -> Atom {
    Atom::expr(children)
}

#[test]
fn test_parse_symbols_and_variables() {
    let tokenizer = Tokenizer::new();
    let atoms = tokenizer.parse("(= (isa $x lamp) on)").unwrap();

    assert_eq!(
        atoms,
        vec![e(vec![
            s("="),
            e(vec![s("isa"), v("x"), s("lamp")]),
            s("on"),
        ])]
    );
}

#[test]
fn test_parse_multiple_top_level_atoms() {
    let tokenizer = Tokenizer::new();
    let atoms = tokenizer.parse("a (b c)\n $d").unwrap();

    assert_eq!(atoms, vec![s("a"), e(vec![s("b"), s("c")]), v("d")]);
}

#[test]
fn test_parse_empty_input() {
    let tokenizer = Tokenizer::new();
    assert!(tokenizer.parse("").unwrap().is_empty());
    assert!(tokenizer.parse("  \n\t ").unwrap().is_empty());
}

#[test]
fn test_parse_empty_expression() {
    let tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.parse("()").unwrap(), vec![e(vec![])]);
}

#[test]
fn test_parse_unclosed_expression_fails() {
    let tokenizer = Tokenizer::new();
    assert!(matches!(
        tokenizer.parse("(a (b c)"),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_registered_token_takes_precedence_over_symbol() {
    let tokenizer = std_tokenizer().unwrap();
    let atoms = tokenizer.parse("(+ 1 2)").unwrap();

    assert_eq!(
        atoms,
        vec![e(vec![Atom::gnd(NumOp::ADD), Num::int(1), Num::int(2)])]
    );
}

#[test]
fn test_number_literals() {
    let tokenizer = std_tokenizer().unwrap();
    let atoms = tokenizer.parse("7 2.5").unwrap();

    assert_eq!(atoms, vec![Num::int(7), Num::float(2.5)]);
}

#[test]
fn test_longer_operators_win() {
    // ++ must not lex as two +, == must not lex as a symbol
    let tokenizer = std_tokenizer().unwrap();
    let atoms = tokenizer.parse("(++ a b) (== a b)").unwrap();

    match atoms[0].as_expression() {
        Some([op, ..]) => assert_eq!(op, &Atom::gnd(ConcatOp)),
        _ => panic!("expected expression"),
    }
    match atoms[1].as_expression() {
        Some([op, ..]) => assert_eq!(op, &Atom::gnd(EqOp)),
        _ => panic!("expected expression"),
    }
}

#[test]
fn test_boolean_tokens() {
    let tokenizer = std_tokenizer().unwrap();
    let atoms = tokenizer.parse("True False Truest").unwrap();

    assert_eq!(atoms[0], Bool::new(true));
    assert_eq!(atoms[1], Bool::new(false));
    // Word boundary keeps longer symbols intact
    assert_eq!(atoms[2], s("Truest"));
}

#[test]
fn test_equation_head_stays_a_symbol() {
    let tokenizer = std_tokenizer().unwrap();
    let atoms = tokenizer.parse("(= (f $n) (+ $n 1))").unwrap();

    match atoms[0].as_expression() {
        Some([head, ..]) => assert_eq!(head, &s("=")),
        _ => panic!("expected expression"),
    }
}

#[test]
fn test_parse_into_appends_to_space() {
    let tokenizer = Tokenizer::new();
    let mut space = GroundingSpace::from(vec![s("existing")]);
    tokenizer.parse_into("(a b)", &mut space).unwrap();

    assert_eq!(
        space,
        GroundingSpace::from(vec![s("existing"), e(vec![s("a"), s("b")])])
    );
}

#[test]
fn test_print_parse_roundtrip() {
    let tokenizer = Tokenizer::new();
    let original = e(vec![
        s("="),
        e(vec![s("isa"), v("x"), s("lamp")]),
        e(vec![s("on"), v("x")]),
    ]);

    let reparsed = tokenizer.parse(&original.to_string()).unwrap();

    assert_eq!(reparsed, vec![original]);
}
