// Licensed under MIT. See LICENSE for details.

use rchecklogic::{render, Error, Expression, Role};

// Some test helpers.
fn _p(s: &str) -> Expression {
    Expression::prop(s).unwrap()
}
fn _not(a: Expression) -> Expression {
    Expression::not(a)
}
fn _and(a: Expression, b: Expression) -> Expression {
    Expression::and(a, b)
}
fn _or(a: Expression, b: Expression) -> Expression {
    Expression::or(a, b)
}
fn _rimp(a: Expression, b: Expression) -> Expression {
    Expression::implies(a, b)
}
fn _limp(a: Expression, b: Expression) -> Expression {
    Expression::implied_by(a, b)
}
fn _iff(a: Expression, b: Expression) -> Expression {
    Expression::iff(a, b)
}

#[test]
fn test_render_scenarios() {
    let (p, q, r) = (_p("p"), _p("q"), _p("r"));

    assert_eq!(render(&_not(_and(p.clone(), q.clone()))), "¬(p ∧ q)");
    assert_eq!(render(&_and(p.clone(), _not(r.clone()))), "p ∧ ¬r");
    assert_eq!(render(&_or(_and(p.clone(), q.clone()), r.clone())), "p ∧ q ∨ r");

    let all = Expression::forall("x", Expression::pred("P", vec!["x"]).unwrap()).unwrap();
    assert_eq!(render(&all), "∀x:P(x)");

    // Implication binds tighter than bi-implication.
    let taut = _iff(_rimp(p.clone(), q.clone()), _or(_not(p), q));
    assert_eq!(render(&taut), "p → q ↔ ¬p ∨ q");
}

#[test]
fn test_render_chains() {
    let (p, q, r) = (_p("p"), _p("q"), _p("r"));

    assert_eq!(render(&_and(_and(p.clone(), q.clone()), r.clone())), "p ∧ q ∧ r");
    assert_eq!(render(&_rimp(p.clone(), _rimp(q.clone(), r.clone()))), "p → q → r");
    assert_eq!(render(&_limp(_limp(p.clone(), q.clone()), r.clone())), "p ← q ← r");
    assert_eq!(render(&_rimp(_limp(p, q), r)), "(p ← q) → r");
}

#[test]
fn test_render_first_order() {
    let loves = Expression::pred("Loves", vec!["x", "y"]).unwrap();
    let someone = Expression::exists("y", loves).unwrap();
    let everyone = Expression::forall("x", someone).unwrap();
    assert_eq!(render(&everyone), "∀x:∃y:Loves(x,y)");

    let guarded = _rimp(_p("q"), everyone);
    assert_eq!(render(&guarded), "q → (∀x:∃y:Loves(x,y))");
}

#[test]
fn test_display_matches_render() {
    let expr = _not(_or(_p("p"), _p("q")));
    assert_eq!(format!("{}", expr), "¬(p ∨ q)");
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Expression::prop("p q").unwrap_err(),
        Error::InvalidIdent {
            role: Role::Proposition,
            ident: "p q".to_string(),
        }
    );
    assert_eq!(
        Expression::pred("", vec!["x"]).unwrap_err(),
        Error::EmptyIdent { role: Role::PredicateName }
    );
}

#[test]
fn test_render_from_other_threads() {
    let exprs = vec![
        (_and(_p("p"), _or(_p("q"), _p("r"))), "p ∧ (q ∨ r)"),
        (_limp(_p("p"), _limp(_p("q"), _p("r"))), "p ← (q ← r)"),
    ];

    let handles: Vec<_> = exprs
        .into_iter()
        .map(|(expr, res)| std::thread::spawn(move || assert_eq!(render(&expr), res)))
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
