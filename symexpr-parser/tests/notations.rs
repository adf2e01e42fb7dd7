use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
use pretty_assertions::assert_eq;
use symexpr_compute::{simplify, simplify_with_steps, Var};
use symexpr_parser::{parse, parser::error::kind, Notation};

const BINDINGS: [f64; 6] = [0.5, -1.25, 2.0, 3.0, -4.0, 0.75];

#[test]
fn every_notation_prints_and_parses_back() {
    let sources = [
        "(softmax (- x 2.5) (negate -3) y)",
        "(atan2 (* u v) (/ w (sumexp x y z)))",
        "(atan (+ 0.0000001 z))",
    ];

    for source in sources {
        let expr = parse(source, Notation::Prefix).unwrap();
        assert_eq!(parse(&expr.prefix(), Notation::Prefix).unwrap(), expr);
        assert_eq!(parse(&expr.postfix(), Notation::Postfix).unwrap(), expr);
        assert_eq!(expr.prefix(), source);
    }
}

#[test]
fn derivative_pipeline() {
    // d/dx (* x (+ y 1)) simplifies to (+ y 1)
    let expr = parse("((y 1 +) x *)", Notation::Postfix).unwrap();
    let dx = simplify(&expr.derivative(Var::X));
    assert_eq!(dx.prefix(), "(+ y 1)");

    let (simplified, steps) = simplify_with_steps(&expr.derivative(Var::X));
    assert_eq!(simplified, dx);
    assert!(!steps.is_empty());
}

#[test]
fn simplified_derivatives_evaluate_the_same() {
    let expr = parse("(/ (atan2 x y) (sumexp z (* x u)))", Notation::Prefix).unwrap();
    for var in Var::ALL {
        let derivative = expr.derivative(var);
        assert_float_absolute_eq!(
            simplify(&derivative).eval(&BINDINGS),
            derivative.eval(&BINDINGS),
            1e-12
        );
    }
}

#[test]
fn quotient_scenario() {
    let expr = parse("(/ x (* y z))", Notation::Prefix).unwrap();
    let dy = simplify(&expr.derivative(Var::Y));
    assert_float_absolute_eq!(dy.eval(&[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]), -1.0 / 12.0, 1e-12);
}

#[test]
fn errors_point_at_the_problem() {
    let err = parse("(+ x (* y 2) (/ 1 0))", Notation::Prefix).unwrap_err();
    assert!(err.is::<kind::ArityMismatch>());
    assert_eq!(err.index(), 1);

    let err = parse("(x y 12abc +)", Notation::Postfix).unwrap_err();
    assert!(err.is::<kind::MalformedNumber>());
    assert_eq!(err.caret(), "(x y 12abc +)\n     ^");

    let err = parse("()", Notation::Prefix).unwrap_err();
    assert!(err.is::<kind::MissingOperator>());
    assert!(err.to_string().starts_with("missing operator at index 0"));
}

#[test]
fn rendered_report_names_the_error() {
    let err = parse("(negate x", Notation::Prefix).unwrap_err();
    let report = err.render();
    assert!(report.contains("unclosed parenthesis"), "{}", report);
}
