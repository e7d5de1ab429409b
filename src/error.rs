use core::fmt;

/// Everything that can go wrong, which is not much.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Text is empty or not a number in the expected grammar.
    Parse,
    /// The divisor is zero.
    DivisionByZero,
    /// A carry left the top digit, or a value does not fit its destination.
    Overflow,
    /// A borrow left the top digit.
    Underflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse => write!(f, "invalid decimal text"),
            Error::DivisionByZero => write!(f, "attempt to divide by zero"),
            Error::Overflow => write!(f, "arithmetic overflow"),
            Error::Underflow => write!(f, "arithmetic underflow"),
        }
    }
}

impl core::error::Error for Error {}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
