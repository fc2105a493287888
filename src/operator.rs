use core::cell::Cell;

use crate::actor::{Composite, Lvalue};
use crate::value::Operand;

/// Identifies an operation for diagnostics.
pub trait Operator {
    const NAME: &'static str;
    const SYMBOL: &'static str;
}

/// The node protocol for binary operators.
///
/// `Output` is the result type deduced from the evaluated operand types
/// `L` and `R`; `apply` combines the operands. An operator family plugs
/// into [`Composite`] by implementing this for its adaptor.
pub trait BinaryOperator<L, R> {
    type Output;

    fn apply(&self, lhs: L, rhs: R) -> Self::Output;
}

/// An in-place operation on a value, returning the updated value.
pub trait AssignFn<T, Rhs>: Operator {
    fn apply<'a>(&self, lhs: &'a mut T, rhs: Rhs) -> &'a mut T;
}

/// Lifts an [`AssignFn`] into the node protocol.
///
/// The left operand must evaluate to a slot. The result is that same
/// slot, holding the updated value:
/// `resultType(&Cell<T>, R) = &Cell<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Binary<F>(pub F);

impl<F> Operator for Binary<F>
where
    F: Operator,
{
    const NAME: &'static str = F::NAME;
    const SYMBOL: &'static str = F::SYMBOL;
}

impl<'a, F, T, R> BinaryOperator<&'a Cell<T>, R> for Binary<F>
where
    T: Copy,
    R: Operand,
    F: AssignFn<T, R::Value>,
{
    type Output = &'a Cell<T>;

    fn apply(&self, lhs: &'a Cell<T>, rhs: R) -> &'a Cell<T> {
        // The right operand is read before the left slot so that an
        // assignment nested on the right is visible on the left.
        let rhs = rhs.value();
        let mut value = lhs.get();
        self.0.apply(&mut value, rhs);
        lhs.set(value);
        lhs
    }
}

impl<F, Lhs, Rhs> Lvalue for Composite<Binary<F>, Lhs, Rhs> where Lhs: Lvalue {}
