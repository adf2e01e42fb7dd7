//! Numeric evaluation of expressions.

use crate::expr::Expr;

/// Evaluates the expression, substituting `bindings[var.index()]` for every variable.
///
/// Operands are evaluated left to right before the operator is applied. Evaluation never fails:
/// division by zero and other domain problems produce infinities or `NaN`, as in plain `f64`
/// arithmetic.
pub fn eval(expr: &Expr, bindings: &[f64; 6]) -> f64 {
    match expr {
        Expr::Const(value) => *value,
        Expr::Var(var) => bindings[var.index()],
        Expr::Op(op) => {
            let values = op.operands()
                .iter()
                .map(|operand| eval(operand, bindings))
                .collect::<Vec<_>>();
            (op.kind().info().eval)(&values)
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use crate::expr::{Expr, Var};
    use super::*;

    const XYZ: [f64; 6] = [3.0, 2.0, 5.0, 0.0, 0.0, 0.0];

    #[test]
    fn leaves() {
        assert_eq!(eval(&Expr::Const(-1.5), &XYZ), -1.5);
        assert_eq!(eval(&Expr::Var(Var::Z), &XYZ), 5.0);
        assert_eq!(eval(&Expr::Var(Var::W), &[0.0, 0.0, 0.0, 0.0, 0.0, 9.0]), 9.0);
    }

    #[test]
    fn arithmetic() {
        // (- (* x y) (/ z 2))
        let expr = Expr::subtract(
            Expr::multiply(Expr::Var(Var::X), Expr::Var(Var::Y)),
            Expr::divide(Expr::Var(Var::Z), Expr::Const(2.0)),
        );
        assert_eq!(eval(&expr, &XYZ), 3.5);
        assert_eq!(eval(&Expr::negate(expr), &XYZ), -3.5);
    }

    #[test]
    fn division_by_zero() {
        let expr = Expr::divide(Expr::Var(Var::X), Expr::Var(Var::U));
        assert_eq!(eval(&expr, &XYZ), f64::INFINITY);
        let expr = Expr::divide(Expr::Var(Var::U), Expr::Var(Var::U));
        assert!(eval(&expr, &XYZ).is_nan());
    }

    #[test]
    fn arc_tangents() {
        let expr = Expr::arc_tan(Expr::Const(1.0));
        assert_float_absolute_eq!(eval(&expr, &XYZ), std::f64::consts::FRAC_PI_4);
        let expr = Expr::arc_tan2(Expr::Const(1.0), Expr::Const(-1.0));
        assert_float_absolute_eq!(eval(&expr, &XYZ), 3.0 * std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn sumexp_and_softmax() {
        let operands = vec![Expr::Var(Var::X), Expr::Var(Var::Y), Expr::Const(0.0)];
        let sumexp = Expr::sumexp(operands.clone()).unwrap();
        let total = 3f64.exp() + 2f64.exp() + 1.0;
        assert_float_absolute_eq!(eval(&sumexp, &XYZ), total);

        let softmax = Expr::softmax(operands).unwrap();
        assert_float_absolute_eq!(eval(&softmax, &XYZ), 3f64.exp() / total);
    }

    #[test]
    fn deterministic() {
        let expr = Expr::softmax(vec![
            Expr::arc_tan2(Expr::Var(Var::X), Expr::Var(Var::Y)),
            Expr::Var(Var::Z),
        ]).unwrap();
        assert_eq!(eval(&expr, &XYZ).to_bits(), eval(&expr, &XYZ).to_bits());
    }
}
