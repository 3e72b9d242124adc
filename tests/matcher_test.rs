// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/matcher_test.rs
// tests pattern matching of queries against space content

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
fn test_match_data_preserves_content_order() {
    let mut kb = GroundingSpace::new();
    kb.add(e(vec![s("isa"), s("kitchen-lamp"), s("lamp")]));
    kb.add(e(vec![s("isa"), s("bedroom-lamp"), s("lamp")]));

    let results = kb.match_pattern(&e(vec![s("isa"), v("x"), s("lamp")]));

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].get(&Var::new("x")), Some(&s("kitchen-lamp")));
    assert_eq!(results[1].get(&Var::new("x")), Some(&s("bedroom-lamp")));
}

#[test]
fn test_match_function_definition() {
    // The candidate's own variable flows into the returned binding
    let mut kb = GroundingSpace::new();
    kb.add(e(vec![s(":-"), e(vec![s("fact"), s("0")]), s("1")]));
    kb.add(e(vec![
        s(":-"),
        e(vec![s("fact"), v("n")]),
        e(vec![s("*"), v("n"), e(vec![s("-"), v("n"), s("1")])]),
    ]));

    let pattern = e(vec![s(":-"), e(vec![s("fact"), s("5")]), v("x")]);
    let mut result = GroundingSpace::new();
    kb.match_into(&pattern, &[v("x")], &mut result);

    let expected = GroundingSpace::from(vec![e(vec![
        s("*"),
        s("5"),
        e(vec![s("-"), s("5"), s("1")]),
    ])]);
    assert_eq!(result, expected);
}

#[test]
fn test_match_arity_mismatch_fails() {
    let kb = GroundingSpace::from(vec![e(vec![s("f"), s("a"), s("b")])]);
    assert!(kb.match_pattern(&e(vec![s("f"), v("x")])).is_empty());
}

#[test]
fn test_match_symbol_inequality_fails() {
    let kb = GroundingSpace::from(vec![e(vec![s("isa"), s("Fred"), s("frog")])]);
    assert!(kb
        .match_pattern(&e(vec![s("isa"), s("Sam"), v("x")]))
        .is_empty());
}

#[test]
fn test_match_rejects_conflicting_rebinding() {
    // $x cannot be both a and b
    let kb = GroundingSpace::from(vec![e(vec![s("pair"), s("a"), s("b")])]);
    assert!(kb
        .match_pattern(&e(vec![s("pair"), v("x"), v("x")]))
        .is_empty());
}

#[test]
fn test_match_accepts_consistent_rebinding() {
    let kb = GroundingSpace::from(vec![e(vec![s("pair"), s("a"), s("a")])]);
    let results = kb.match_pattern(&e(vec![s("pair"), v("x"), v("x")]));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get(&Var::new("x")), Some(&s("a")));
}

#[test]
fn test_match_grounded_by_value() {
    let kb = GroundingSpace::from(vec![e(vec![s("age"), s("Fred"), Num::int(4)])]);
    let results = kb.match_pattern(&e(vec![s("age"), s("Fred"), v("x")]));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get(&Var::new("x")), Some(&Num::int(4)));
}

#[test]
fn test_match_into_instantiates_every_template() {
    let mut kb = GroundingSpace::new();
    kb.add(e(vec![s("isa"), s("kitchen-lamp"), s("lamp")]));
    kb.add(e(vec![s("isa"), s("bedroom-lamp"), s("lamp")]));

    let mut result = GroundingSpace::new();
    kb.match_into(
        &e(vec![s("isa"), v("x"), s("lamp")]),
        &[v("x"), e(vec![s("on"), v("x")])],
        &mut result,
    );

    let expected = GroundingSpace::from(vec![
        s("kitchen-lamp"),
        e(vec![s("on"), s("kitchen-lamp")]),
        s("bedroom-lamp"),
        e(vec![s("on"), s("bedroom-lamp")]),
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_apply_bindings_leaves_unbound_untouched() {
    let mut bindings = Bindings::new();
    bindings.insert(Var::new("x"), s("a"));

    let templ = e(vec![s("f"), v("x"), v("y")]);
    assert_eq!(
        apply_bindings(&templ, &bindings),
        e(vec![s("f"), s("a"), v("y")])
    );
}
