/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An operation whose operands are all constants was replaced by its value.
    ///
    /// `(+ 1 2) = 3`
    ConstantFold,

    /// `(+ a 0) = a`
    /// `(+ 0 a) = a`
    AddZero,

    /// `(- a 0) = a`
    SubtractZero,

    /// `(- 0 a) = (negate a)`
    SubtractFromZero,

    /// `(* a 0) = 0`
    /// `(* 0 a) = 0`
    MultiplyZero,

    /// `(* 1 a) = a`
    /// `(* a 1) = a`
    MultiplyOne,

    /// `(/ 0 a) = 0`
    DivideZero,

    /// `(/ a 1) = a`
    DivideOne,

    /// `(atan2 0 a) = 0`
    Atan2Zero,

    /// `(atan2 a 1) = (atan a)`
    Atan2One,
}
