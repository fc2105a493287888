#![doc = include_str!("readme.md")]
#![no_std]

pub mod actor;
pub mod argument;
pub mod assign;
pub mod checked;
pub mod error;
pub mod operator;
pub mod value;

pub mod prelude {
    pub use crate::actor::{compose, Actor, Composite, Evaluate, IntoActor, Lvalue};
    pub use crate::argument::{Argument, Arguments, _0, _1, _2, _3, _4, _5, _6, _7, _8, _9};
    pub use crate::assign::{
        add_assign, bitand_assign, bitor_assign, bitxor_assign, div_assign, mul_assign, rem_assign,
        shl_assign, shr_assign, sub_assign,
    };
    pub use crate::error::ArithmeticError;
    pub use crate::operator::{AssignFn, Binary, BinaryOperator, Operator};
    pub use crate::value::{Reference, Value};
}
