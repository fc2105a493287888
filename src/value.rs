use core::cell::Cell;
use core::fmt;

use crate::actor::{Actor, Evaluate, IntoActor, Lvalue};

/// A constant captured by value.
///
/// Evaluates to a copy of itself: it can be read as a right operand but
/// never assigned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Value<T>(pub T);

/// Capture `value` by value.
/// # Examples
/// ```
/// # use deferred::prelude::*;
/// # use deferred::value::val;
/// let scale = mul_assign(_0, val(3_u64));
/// let mut args = (5_u64,);
/// assert_eq!(scale.call(&mut args).get(), 15);
/// assert_eq!(args.0, 15);
/// ```
pub const fn val<T>(value: T) -> Value<T> { Value(value) }

/// A constant captured by reference: storage outside the expression
/// which every evaluation reads and assigns to.
pub struct Reference<'r, T> {
    cell: &'r Cell<T>,
}

impl<'r, T> Reference<'r, T> {
    pub const fn new(cell: &'r Cell<T>) -> Self { Self { cell } }

    /// Borrow `place` for as long as the reference lives. The place can be
    /// read again once every actor holding the reference is gone.
    pub const fn from_mut(place: &'r mut T) -> Self { Self::new(Cell::from_mut(place)) }
}

impl<T> Clone for Reference<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Reference<'_, T> {}

impl<T> fmt::Debug for Reference<'_, T>
where
    T: Copy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reference").field(&self.cell.get()).finish()
    }
}

/// Capture external storage by reference.
/// # Examples
/// ```
/// # use core::cell::Cell;
/// # use deferred::prelude::*;
/// # use deferred::value::by_ref;
/// let total = Cell::new(2_i32);
/// let accumulate = add_assign(by_ref(&total), _0);
/// for x in [7, 1, 10] {
///     accumulate.call(&mut (x,));
/// }
/// assert_eq!(total.get(), 20);
/// ```
pub const fn by_ref<T>(cell: &Cell<T>) -> Reference<'_, T> { Reference::new(cell) }

impl<Env, T> Evaluate<Env> for Value<T>
where
    T: Clone,
{
    type Output = Self;

    fn evaluate(&self, _: Env) -> Self { self.clone() }
}

impl<'r, Env, T> Evaluate<Env> for Reference<'r, T> {
    type Output = &'r Cell<T>;

    fn evaluate(&self, _: Env) -> &'r Cell<T> { self.cell }
}

impl<T> Lvalue for Reference<'_, T> {}

impl<T> IntoActor for Value<T>
where
    T: Clone,
{
    type Node = Self;

    fn into_actor(self) -> Actor<Self> { Actor::new(self) }
}

impl<T> IntoActor for Reference<'_, T> {
    type Node = Self;

    fn into_actor(self) -> Actor<Self> { Actor::new(self) }
}

impl<'r, T> IntoActor for &'r Cell<T> {
    type Node = Reference<'r, T>;

    fn into_actor(self) -> Actor<Reference<'r, T>> { Actor::new(Reference::new(self)) }
}

impl<'r, T> IntoActor for &'r mut T {
    type Node = Reference<'r, T>;

    fn into_actor(self) -> Actor<Reference<'r, T>> { Actor::new(Reference::from_mut(self)) }
}

macro_rules! constant {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoActor for $ty {
            type Node = Value<$ty>;

            fn into_actor(self) -> Actor<Value<$ty>> { Actor::new(Value(self)) }
        }
    )*};
}

constant!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

/// The evaluated right operand of an assignment.
pub trait Operand {
    type Value;

    fn value(self) -> Self::Value;
}

impl<T> Operand for &Cell<T>
where
    T: Copy,
{
    type Value = T;

    fn value(self) -> T { self.get() }
}

impl<T> Operand for Value<T> {
    type Value = T;

    fn value(self) -> T { self.0 }
}
