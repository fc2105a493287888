use core::cell::Cell;

use deferred::checked;
use deferred::prelude::*;

fn get<T: Copy>(result: Result<&Cell<T>, ArithmeticError>) -> Result<T, ArithmeticError> {
    result.map(Cell::get)
}

#[test]
fn in_range_matches_unchecked() {
    let mut args = (7_i32, 3_i32);
    assert_eq!(get(checked::add_assign(_0, _1).call(&mut args)), Ok(10));
    assert_eq!(get(checked::sub_assign(_0, _1).call(&mut args)), Ok(7));
    assert_eq!(get(checked::mul_assign(_0, _1).call(&mut args)), Ok(21));
    assert_eq!(get(checked::div_assign(_0, _1).call(&mut args)), Ok(7));
    assert_eq!(get(checked::rem_assign(_0, _1).call(&mut args)), Ok(1));
    assert_eq!(get(checked::bitor_assign(_0, _1).call(&mut args)), Ok(3));
    assert_eq!(get(checked::bitxor_assign(_0, 1_i32).call(&mut args)), Ok(2));
    assert_eq!(get(checked::bitand_assign(_0, _1).call(&mut args)), Ok(2));
    assert_eq!(args, (2, 3));

    let mut args = (3_u16, 4_u32);
    assert_eq!(get(checked::shl_assign(_0, _1).call(&mut args)), Ok(48));
    assert_eq!(get(checked::shr_assign(_0, _1).call(&mut args)), Ok(3));
}

#[test]
fn overflow() {
    let mut args = (i32::MAX, 1_i32);
    assert_eq!(get(checked::add_assign(_0, _1).call(&mut args)), Err(ArithmeticError::Overflow));
    assert_eq!(args.0, i32::MAX);

    let mut args = (0_u8, 1_u8);
    assert_eq!(get(checked::sub_assign(_0, _1).call(&mut args)), Err(ArithmeticError::Overflow));
    assert_eq!(args.0, 0);

    let mut args = (i64::MIN, -1_i64);
    assert_eq!(get(_0.checked_div_assign(_1).call(&mut args)), Err(ArithmeticError::Overflow));
    assert_eq!(get(_0.checked_rem_assign(_1).call(&mut args)), Err(ArithmeticError::Overflow));
    assert_eq!(get(_0.checked_mul_assign(_1).call(&mut args)), Err(ArithmeticError::Overflow));
    assert_eq!(args.0, i64::MIN);
}

#[test]
fn division_by_zero() {
    let mut args = (9_u32, 0_u32);
    assert_eq!(get(checked::div_assign(_0, _1).call(&mut args)), Err(ArithmeticError::DivideByZero));
    assert_eq!(get(checked::rem_assign(_0, _1).call(&mut args)), Err(ArithmeticError::DivideByZero));
    assert_eq!(args, (9, 0));
}

#[test]
fn shift_overflow() {
    let shl = checked::shl_assign(_0, _1);
    let shr = checked::shr_assign(_0, _1);
    for amount in [32_u32, 33, u32::MAX] {
        let mut args = (1_i32, amount);
        let error = ArithmeticError::ShiftOverflow { amount, bits: 32 };
        assert_eq!(get(shl.call(&mut args)), Err(error));
        assert_eq!(get(shr.call(&mut args)), Err(error));
        assert_eq!(args.0, 1);
    }
}

#[test]
fn errors_propagate_through_nested_assignments() {
    // (x += y) /= z
    let expr = checked::div_assign(checked::add_assign(_0, _1), _2);
    let mut args = (250_u8, 10_u8, 2_u8);
    assert_eq!(get(expr.call(&mut args)), Err(ArithmeticError::Overflow));
    assert_eq!(args, (250, 10, 2));

    // x += (y /= z)
    let expr = _0.checked_add_assign(_1.checked_div_assign(_2));
    let mut args = (1_u8, 10_u8, 0_u8);
    assert_eq!(get(expr.call(&mut args)), Err(ArithmeticError::DivideByZero));
    assert_eq!(args, (1, 10, 0));

    let mut args = (1_u8, 10_u8, 5_u8);
    assert_eq!(get(expr.call(&mut args)), Ok(3));
    assert_eq!(args, (3, 2, 5));
}

#[test]
fn checked_left_of_unchecked_child() {
    // (x += 1) is unchecked, the outer shift is checked.
    let expr = checked::shl_assign(add_assign(_0, 1_u64), _1);
    let mut args = (1_u64, 4_u32);
    assert_eq!(get(expr.call(&mut args)), Ok(32));

    let mut args = (1_u64, 64_u32);
    let error = ArithmeticError::ShiftOverflow { amount: 64, bits: 64 };
    assert_eq!(get(expr.call(&mut args)), Err(error));
    assert_eq!(args.0, 2);
}

#[test]
fn reference_operand() {
    let budget = Cell::new(10_i32);
    let spend = checked::sub_assign(&budget, _0);
    assert_eq!(get(spend.call(&mut (4_i32,))), Ok(6));
    assert_eq!(get(spend.call(&mut (i32::MAX,))), Ok(6 - i32::MAX));
    assert_eq!(get(spend.call(&mut (i32::MAX,))), Err(ArithmeticError::Overflow));
    assert_eq!(budget.get(), 6 - i32::MAX);
}

#[test]
fn display() {
    assert_eq!(ArithmeticError::Overflow.to_string(), "numerical overflow");
    assert_eq!(ArithmeticError::DivideByZero.to_string(), "division by zero");
    assert_eq!(
        ArithmeticError::ShiftOverflow { amount: 9, bits: 8 }.to_string(),
        "shift amount 9 is not less than the 8-bit width"
    );
}
