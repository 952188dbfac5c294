//! Customers

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error;

/// Errors raised while constructing a [`CustomerId`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerIdError {
    /// The value was zero or negative.
    #[error("customer id must be a positive integer, got {0}")]
    NotPositive(i32),

    /// The value could not be parsed as an integer.
    #[error("customer id is not an integer: {0}")]
    NotAnInteger(#[from] ParseIntError),
}

/// Customer ID
///
/// One cart exists per customer, so this doubles as the cart ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Creates a customer ID from a positive integer.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerIdError::NotPositive`] if `value` is less than 1.
    pub fn new(value: i32) -> Result<Self, CustomerIdError> {
        if value < 1 {
            return Err(CustomerIdError::NotPositive(value));
        }

        Ok(Self(value))
    }

    /// Returns the wrapped integer.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for CustomerId {
    type Error = CustomerIdError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for CustomerId {
    type Err = CustomerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().parse()?)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
