//! The compound-assignment operators.
//!
//! Each operator is a functor implementing [`AssignFn`] with the matching
//! `core::ops` trait, a function composing it into an expression, and the
//! same function as a method on lvalue actors.
//!
//! Evaluation inherits the native semantics of the operation: integer
//! division or remainder by zero panics, float division by zero yields an
//! infinity or NaN, and overflowing arithmetic or shifts panic when
//! `overflow-checks` is enabled and wrap otherwise. See
//! [`checked`](crate::checked) for the variants that report these as
//! errors.

use core::ops;

use crate::actor::{compose, Actor, Composite, IntoActor, Lvalue};
use crate::operator::{AssignFn, Binary, Operator};

/// The actor built by an unchecked compound assignment.
pub type Assign<F, L, R> = Actor<Composite<Binary<F>, Actor<L>, Actor<R>>>;

macro_rules! compound_assign {
    (
        $(#[$meta:meta])*
        $functor:ident, $trait:ident :: $name:ident, $symbol:literal
    ) => {
        #[doc = concat!("The `", $symbol, "` functor.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $functor;

        impl Operator for $functor {
            const NAME: &'static str = stringify!($name);
            const SYMBOL: &'static str = $symbol;
        }

        impl<T, Rhs> AssignFn<T, Rhs> for $functor
        where
            T: ops::$trait<Rhs>,
        {
            fn apply<'a>(&self, lhs: &'a mut T, rhs: Rhs) -> &'a mut T {
                ops::$trait::$name(&mut *lhs, rhs);
                lhs
            }
        }

        $(#[$meta])*
        pub fn $name<L, R>(lhs: L, rhs: R) -> Assign<$functor, L::Node, R::Node>
        where
            L: IntoActor,
            L::Node: Lvalue,
            R: IntoActor,
        {
            compose(Binary($functor), lhs.into_actor(), rhs.into_actor())
        }

        impl<Node> Actor<Node>
        where
            Node: Lvalue,
        {
            #[doc = concat!("`self ", $symbol, " rhs`, see [`", stringify!($name), "`](crate::assign::", stringify!($name), ").")]
            pub fn $name<R>(self, rhs: R) -> Assign<$functor, Node, R::Node>
            where
                R: IntoActor,
            {
                $name(self, rhs)
            }
        }
    };
}

compound_assign! {
    /// `lhs += rhs`.
    /// # Examples
    /// ```
    /// # use core::cell::Cell;
    /// # use deferred::prelude::*;
    /// let mut args = (5_i32, 3_i32);
    /// assert_eq!(add_assign(_0, _1).call(&mut args).get(), 8);
    /// assert_eq!(args.0, 8);
    ///
    /// // Storage outside the expression is assigned through a reference.
    /// let external = Cell::new(2_i32);
    /// let result = add_assign(&external, _0).call(&mut (7_i32,));
    /// assert_eq!(result.get(), 9);
    /// assert_eq!(external.get(), 9);
    /// ```
    AddAssign, AddAssign::add_assign, "+="
}

compound_assign! {
    /// `lhs -= rhs`.
    /// # Examples
    /// ```
    /// # use deferred::prelude::*;
    /// let mut args = (10_i64, 4_i64);
    /// sub_assign(_0, _1).call(&mut args);
    /// assert_eq!(args, (6, 4));
    /// ```
    SubAssign, SubAssign::sub_assign, "-="
}

compound_assign! {
    /// `lhs *= rhs`.
    MulAssign, MulAssign::mul_assign, "*="
}

compound_assign! {
    /// `lhs /= rhs`.
    ///
    /// An integer divisor of zero panics, as native division does:
    /// ```should_panic
    /// # use deferred::prelude::*;
    /// div_assign(_0, _1).call(&mut (1_i32, 0_i32));
    /// ```
    /// Floats follow IEEE semantics:
    /// ```
    /// # use deferred::prelude::*;
    /// let mut args = (1.0_f64,);
    /// let result = div_assign(_0, 0.0_f64).call(&mut args);
    /// assert!(result.get().is_infinite() && result.get().is_sign_positive());
    /// ```
    DivAssign, DivAssign::div_assign, "/="
}

compound_assign! {
    /// `lhs %= rhs`.
    RemAssign, RemAssign::rem_assign, "%="
}

compound_assign! {
    /// `lhs &= rhs`.
    ///
    /// Operand types without a native `&=` are rejected when the actor is
    /// called:
    /// ```compile_fail
    /// # use deferred::prelude::*;
    /// bitand_assign(_0, _1).call(&mut (1.5_f64, 2.0_f64));
    /// ```
    BitAndAssign, BitAndAssign::bitand_assign, "&="
}

compound_assign! {
    /// `lhs |= rhs`.
    BitOrAssign, BitOrAssign::bitor_assign, "|="
}

compound_assign! {
    /// `lhs ^= rhs`.
    /// # Examples
    /// ```
    /// # use deferred::prelude::*;
    /// let toggle = bitxor_assign(_0, 0b1010_u8);
    /// let mut args = (0b1100_u8,);
    /// toggle.call(&mut args);
    /// assert_eq!(args.0, 0b0110);
    /// toggle.call(&mut args);
    /// assert_eq!(args.0, 0b1100);
    /// ```
    BitXorAssign, BitXorAssign::bitxor_assign, "^="
}

compound_assign! {
    /// `lhs <<= rhs`.
    ShlAssign, ShlAssign::shl_assign, "<<="
}

compound_assign! {
    /// `lhs >>= rhs`.
    ShrAssign, ShrAssign::shr_assign, ">>="
}
