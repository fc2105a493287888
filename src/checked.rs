//! Compound assignments that report arithmetic faults.
//!
//! The same functors as [`assign`](crate::assign), lifted through the
//! [`Checked`] adaptor instead of [`Binary`](crate::operator::Binary).
//! Integer overflow, division by zero and out-of-range shifts return an
//! [`ArithmeticError`] and leave the left operand untouched. A checked
//! assignment accepts the result of another checked assignment on either
//! side and passes its error through.
//!
//! # Examples
//! ```
//! # use deferred::prelude::*;
//! # use deferred::checked;
//! let average = checked::div_assign(checked::add_assign(_0, _1), _2);
//!
//! let mut args = (6_u8, 4_u8, 2_u8);
//! assert_eq!(average.call(&mut args).map(|slot| slot.get()), Ok(5));
//!
//! let mut args = (200_u8, 100_u8, 2_u8);
//! assert_eq!(average.call(&mut args), Err(ArithmeticError::Overflow));
//! assert_eq!(args.0, 200);
//! ```

use core::cell::Cell;
use core::ops;

use crate::actor::{compose, Actor, Composite, IntoActor, Lvalue};
use crate::assign::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, RemAssign,
    ShlAssign, ShrAssign, SubAssign,
};
use crate::error::ArithmeticError;
use crate::operator::{BinaryOperator, Operator};
use crate::value::Value;

/// An in-place operation that may fail. On error `lhs` is unchanged.
pub trait CheckedAssignFn<T, Rhs>: Operator {
    fn try_apply<'a>(&self, lhs: &'a mut T, rhs: Rhs) -> Result<&'a mut T, ArithmeticError>;
}

/// The evaluated right operand of a checked assignment.
pub trait TryOperand {
    type Value;

    fn try_value(self) -> Result<Self::Value, ArithmeticError>;
}

impl<T> TryOperand for &Cell<T>
where
    T: Copy,
{
    type Value = T;

    fn try_value(self) -> Result<T, ArithmeticError> { Ok(self.get()) }
}

impl<T> TryOperand for Value<T> {
    type Value = T;

    fn try_value(self) -> Result<T, ArithmeticError> { Ok(self.0) }
}

impl<T> TryOperand for Result<&Cell<T>, ArithmeticError>
where
    T: Copy,
{
    type Value = T;

    fn try_value(self) -> Result<T, ArithmeticError> { self.map(Cell::get) }
}

/// Lifts a [`CheckedAssignFn`] into the node protocol:
/// `resultType(&Cell<T>, R) = Result<&Cell<T>, ArithmeticError>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Checked<F>(pub F);

impl<F> Operator for Checked<F>
where
    F: Operator,
{
    const NAME: &'static str = F::NAME;
    const SYMBOL: &'static str = F::SYMBOL;
}

fn try_assign<'a, F, T, R>(
    functor: &F,
    lhs: &'a Cell<T>,
    rhs: R,
) -> Result<&'a Cell<T>, ArithmeticError>
where
    T: Copy,
    R: TryOperand,
    F: CheckedAssignFn<T, R::Value>,
{
    let rhs = rhs.try_value()?;
    let mut value = lhs.get();
    if let Err(error) = functor.try_apply(&mut value, rhs) {
        tracing::debug!(op = F::NAME, %error, "checked assignment failed");
        return Err(error);
    }
    lhs.set(value);
    Ok(lhs)
}

impl<'a, F, T, R> BinaryOperator<&'a Cell<T>, R> for Checked<F>
where
    T: Copy,
    R: TryOperand,
    F: CheckedAssignFn<T, R::Value>,
{
    type Output = Result<&'a Cell<T>, ArithmeticError>;

    fn apply(&self, lhs: &'a Cell<T>, rhs: R) -> Self::Output { try_assign(&self.0, lhs, rhs) }
}

impl<'a, F, T, R> BinaryOperator<Result<&'a Cell<T>, ArithmeticError>, R> for Checked<F>
where
    T: Copy,
    R: TryOperand,
    F: CheckedAssignFn<T, R::Value>,
{
    type Output = Result<&'a Cell<T>, ArithmeticError>;

    fn apply(&self, lhs: Result<&'a Cell<T>, ArithmeticError>, rhs: R) -> Self::Output {
        try_assign(&self.0, lhs?, rhs)
    }
}

impl<F, Lhs, Rhs> Lvalue for Composite<Checked<F>, Lhs, Rhs> where Lhs: Lvalue {}

macro_rules! checked_int {
    (@overflow $ty:ty, $functor:ident, $method:ident) => {
        impl CheckedAssignFn<$ty, $ty> for $functor {
            fn try_apply<'a>(
                &self,
                lhs: &'a mut $ty,
                rhs: $ty,
            ) -> Result<&'a mut $ty, ArithmeticError> {
                *lhs = lhs.$method(rhs).ok_or(ArithmeticError::Overflow)?;
                Ok(lhs)
            }
        }
    };
    (@division $ty:ty, $functor:ident, $method:ident) => {
        impl CheckedAssignFn<$ty, $ty> for $functor {
            fn try_apply<'a>(
                &self,
                lhs: &'a mut $ty,
                rhs: $ty,
            ) -> Result<&'a mut $ty, ArithmeticError> {
                *lhs = lhs
                    .$method(rhs)
                    .ok_or_else(|| ArithmeticError::division(rhs == 0))?;
                Ok(lhs)
            }
        }
    };
    (@shift $ty:ty, $functor:ident, $method:ident) => {
        impl CheckedAssignFn<$ty, u32> for $functor {
            fn try_apply<'a>(
                &self,
                lhs: &'a mut $ty,
                rhs: u32,
            ) -> Result<&'a mut $ty, ArithmeticError> {
                *lhs = lhs.$method(rhs).ok_or(ArithmeticError::ShiftOverflow {
                    amount: rhs,
                    bits: <$ty>::BITS,
                })?;
                Ok(lhs)
            }
        }
    };
    ($($ty:ty),* $(,)?) => {$(
        checked_int!(@overflow $ty, AddAssign, checked_add);
        checked_int!(@overflow $ty, SubAssign, checked_sub);
        checked_int!(@overflow $ty, MulAssign, checked_mul);
        checked_int!(@division $ty, DivAssign, checked_div);
        checked_int!(@division $ty, RemAssign, checked_rem);
        checked_int!(@shift $ty, ShlAssign, checked_shl);
        checked_int!(@shift $ty, ShrAssign, checked_shr);
    )*};
}

checked_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! infallible {
    ($($functor:ident: $trait:ident :: $method:ident),* $(,)?) => {$(
        impl<T, Rhs> CheckedAssignFn<T, Rhs> for $functor
        where
            T: ops::$trait<Rhs>,
        {
            fn try_apply<'a>(&self, lhs: &'a mut T, rhs: Rhs) -> Result<&'a mut T, ArithmeticError> {
                ops::$trait::$method(&mut *lhs, rhs);
                Ok(lhs)
            }
        }
    )*};
}

infallible! {
    BitAndAssign: BitAndAssign::bitand_assign,
    BitOrAssign: BitOrAssign::bitor_assign,
    BitXorAssign: BitXorAssign::bitxor_assign,
}

/// The actor built by a checked compound assignment.
pub type Assign<F, L, R> = Actor<Composite<Checked<F>, Actor<L>, Actor<R>>>;

macro_rules! checked_assign {
    ($($(#[$meta:meta])* $functor:ident, $name:ident, $method:ident;)*) => {$(
        $(#[$meta])*
        pub fn $name<L, R>(lhs: L, rhs: R) -> Assign<$functor, L::Node, R::Node>
        where
            L: IntoActor,
            L::Node: Lvalue,
            R: IntoActor,
        {
            compose(Checked($functor), lhs.into_actor(), rhs.into_actor())
        }

        impl<Node> Actor<Node>
        where
            Node: Lvalue,
        {
            #[doc = concat!("See [`checked::", stringify!($name), "`](crate::checked::", stringify!($name), ").")]
            pub fn $method<R>(self, rhs: R) -> Assign<$functor, Node, R::Node>
            where
                R: IntoActor,
            {
                $name(self, rhs)
            }
        }
    )*};
}

checked_assign! {
    /// `lhs += rhs`, failing with [`ArithmeticError::Overflow`].
    AddAssign, add_assign, checked_add_assign;
    /// `lhs -= rhs`, failing with [`ArithmeticError::Overflow`].
    SubAssign, sub_assign, checked_sub_assign;
    /// `lhs *= rhs`, failing with [`ArithmeticError::Overflow`].
    MulAssign, mul_assign, checked_mul_assign;
    /// `lhs /= rhs`.
    ///
    /// Fails with [`ArithmeticError::DivideByZero`] on a zero divisor and
    /// [`ArithmeticError::Overflow`] on `MIN / -1`.
    /// # Examples
    /// ```
    /// # use deferred::prelude::*;
    /// # use deferred::checked;
    /// let mut args = (1_i32, 0_i32);
    /// let result = checked::div_assign(_0, _1).call(&mut args);
    /// assert_eq!(result, Err(ArithmeticError::DivideByZero));
    /// ```
    DivAssign, div_assign, checked_div_assign;
    /// `lhs %= rhs`, failing like [`div_assign`].
    RemAssign, rem_assign, checked_rem_assign;
    /// `lhs &= rhs`. Never fails.
    BitAndAssign, bitand_assign, checked_bitand_assign;
    /// `lhs |= rhs`. Never fails.
    BitOrAssign, bitor_assign, checked_bitor_assign;
    /// `lhs ^= rhs`. Never fails.
    BitXorAssign, bitxor_assign, checked_bitxor_assign;
    /// `lhs <<= rhs` with a `u32` shift amount.
    ///
    /// Fails with [`ArithmeticError::ShiftOverflow`] when the amount is not
    /// less than the bit width of `lhs`.
    /// # Examples
    /// ```
    /// # use deferred::prelude::*;
    /// # use deferred::checked;
    /// let shift = _0.checked_shl_assign(_1);
    /// assert_eq!(shift.call(&mut (1_u8, 7_u32)).map(|slot| slot.get()), Ok(128));
    /// assert_eq!(
    ///     shift.call(&mut (1_u8, 8_u32)),
    ///     Err(ArithmeticError::ShiftOverflow { amount: 8, bits: 8 })
    /// );
    /// ```
    ShlAssign, shl_assign, checked_shl_assign;
    /// `lhs >>= rhs`, failing like [`shl_assign`].
    ShrAssign, shr_assign, checked_shr_assign;
}
