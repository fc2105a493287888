use core::cell::Cell;

use crate::actor::{Actor, Evaluate, IntoActor, Lvalue};

/// Placeholder for the `N`th argument of a call.
///
/// A placeholder holds nothing. Evaluation substitutes the storage slot
/// bound to argument `N`, so it may be assigned to. An index past the end
/// of the arguments does not type-check:
/// ```compile_fail
/// # use deferred::prelude::*;
/// add_assign(_0, _2).call(&mut (1_i32, 2_i32));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Argument<const N: usize>;

impl<Env, const N: usize> Evaluate<Env> for Argument<N>
where
    Env: Select<N>,
{
    type Output = Env::Output;

    fn evaluate(&self, env: Env) -> Self::Output { env.select() }
}

impl<const N: usize> Lvalue for Argument<N> {}

impl<const N: usize> IntoActor for Argument<N> {
    type Node = Self;

    fn into_actor(self) -> Actor<Self> { Actor::new(self) }
}

pub const _0: Actor<Argument<0>> = Actor::new(Argument);
pub const _1: Actor<Argument<1>> = Actor::new(Argument);
pub const _2: Actor<Argument<2>> = Actor::new(Argument);
pub const _3: Actor<Argument<3>> = Actor::new(Argument);
pub const _4: Actor<Argument<4>> = Actor::new(Argument);
pub const _5: Actor<Argument<5>> = Actor::new(Argument);
pub const _6: Actor<Argument<6>> = Actor::new(Argument);
pub const _7: Actor<Argument<7>> = Actor::new(Argument);
pub const _8: Actor<Argument<8>> = Actor::new(Argument);
pub const _9: Actor<Argument<9>> = Actor::new(Argument);

/// Arguments of a call, bound to a tuple of storage slots.
///
/// Implemented for `&mut (T0, T1, ..)` and `(&mut T0, &mut T1, ..)` up to
/// ten elements, and for `()`. Each slot is a `&Cell`, so several
/// placeholders may name the same argument.
pub trait Arguments<'a> {
    type Slots: Copy;

    fn bind(self) -> Self::Slots;
}

impl Arguments<'_> for () {
    type Slots = ();

    fn bind(self) {}
}

macro_rules! arguments {
    ($($ty:ident $var:ident),+) => {
        impl<'a, $($ty),+> Arguments<'a> for &'a mut ($($ty,)+) {
            type Slots = ($(&'a Cell<$ty>,)+);

            fn bind(self) -> Self::Slots {
                let ($($var,)+) = self;
                ($(Cell::from_mut($var),)+)
            }
        }

        impl<'a, $($ty),+> Arguments<'a> for ($(&'a mut $ty,)+) {
            type Slots = ($(&'a Cell<$ty>,)+);

            fn bind(self) -> Self::Slots {
                let ($($var,)+) = self;
                ($(Cell::from_mut($var),)+)
            }
        }
    };
}

arguments!(T0 a0);
arguments!(T0 a0, T1 a1);
arguments!(T0 a0, T1 a1, T2 a2);
arguments!(T0 a0, T1 a1, T2 a2, T3 a3);
arguments!(T0 a0, T1 a1, T2 a2, T3 a3, T4 a4);
arguments!(T0 a0, T1 a1, T2 a2, T3 a3, T4 a4, T5 a5);
arguments!(T0 a0, T1 a1, T2 a2, T3 a3, T4 a4, T5 a5, T6 a6);
arguments!(T0 a0, T1 a1, T2 a2, T3 a3, T4 a4, T5 a5, T6 a6, T7 a7);
arguments!(T0 a0, T1 a1, T2 a2, T3 a3, T4 a4, T5 a5, T6 a6, T7 a7, T8 a8);
arguments!(T0 a0, T1 a1, T2 a2, T3 a3, T4 a4, T5 a5, T6 a6, T7 a7, T8 a8, T9 a9);

/// Positional access into a tuple of slots.
pub trait Select<const N: usize> {
    type Output;

    fn select(self) -> Self::Output;
}

macro_rules! select {
    (@impl [$($ty:ident),+] $idx:tt $out:ident) => {
        impl<$($ty),+> Select<$idx> for ($($ty,)+) {
            type Output = $out;

            fn select(self) -> $out { self.$idx }
        }
    };
    ($all:tt; $($idx:tt => $out:ident),+) => {
        $(select!(@impl $all $idx $out);)+
    };
}

select!([T0]; 0 => T0);
select!([T0, T1]; 0 => T0, 1 => T1);
select!([T0, T1, T2]; 0 => T0, 1 => T1, 2 => T2);
select!([T0, T1, T2, T3]; 0 => T0, 1 => T1, 2 => T2, 3 => T3);
select!([T0, T1, T2, T3, T4]; 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4);
select!([T0, T1, T2, T3, T4, T5]; 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5);
select!([T0, T1, T2, T3, T4, T5, T6];
    0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6);
select!([T0, T1, T2, T3, T4, T5, T6, T7];
    0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6, 7 => T7);
select!([T0, T1, T2, T3, T4, T5, T6, T7, T8];
    0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6, 7 => T7, 8 => T8);
select!([T0, T1, T2, T3, T4, T5, T6, T7, T8, T9];
    0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6, 7 => T7, 8 => T8, 9 => T9);
