use thiserror::Error;

/// An arithmetic fault reported by a [checked](crate::checked)
/// assignment instead of a panic or a wrapped result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ArithmeticError {
    #[error("numerical overflow")]
    Overflow,
    #[error("division by zero")]
    DivideByZero,
    #[error("shift amount {amount} is not less than the {bits}-bit width")]
    ShiftOverflow { amount: u32, bits: u32 },
}

impl ArithmeticError {
    /// `checked_div` and `checked_rem` fail on a zero divisor and on
    /// `MIN / -1`; only the divisor tells them apart.
    pub(crate) const fn division(divisor_is_zero: bool) -> Self {
        match divisor_is_zero {
            true => Self::DivideByZero,
            false => Self::Overflow,
        }
    }
}
