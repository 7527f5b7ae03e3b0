//! Sign-in credentials - phone number and one-time code
//!
//! Both are typed into digit-only fields: anything that is not an ASCII digit
//! is dropped and the input is truncated to the field length before it is
//! validated.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PHONE_DIGITS: usize = 10;
pub const OTP_DIGITS: usize = 6;

/// Errors raised by the sign-in flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("phone number must have exactly {PHONE_DIGITS} digits (got {digits})")]
    InvalidPhone { digits: usize },

    #[error("verification code must have exactly {OTP_DIGITS} digits (got {digits})")]
    InvalidCode { digits: usize },

    #[error("verification code does not match")]
    CodeMismatch,

    #[error("profile name must not be empty")]
    EmptyName,

    #[error("cannot {action} while at the {step} step")]
    WrongStep {
        action: &'static str,
        step: &'static str,
    },

    #[error("auth service unavailable: {0}")]
    Service(String),
}

/// Keep the leading `limit` ASCII digits of `input`.
pub fn digits_only(input: &str, limit: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(limit)
        .collect()
}

/// A ten-digit mobile number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, AuthError> {
        let digits = digits_only(input, PHONE_DIGITS);
        if digits.len() != PHONE_DIGITS {
            return Err(AuthError::InvalidPhone {
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number with all but the last four digits hidden
    pub fn masked(&self) -> String {
        let visible = &self.0[PHONE_DIGITS - 4..];
        format!("{}{}", "*".repeat(PHONE_DIGITS - 4), visible)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+91 {}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = AuthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

/// A six-digit one-time verification code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn parse(input: &str) -> Result<Self, AuthError> {
        let digits = digits_only(input, OTP_DIGITS);
        if digits.len() != OTP_DIGITS {
            return Err(AuthError::InvalidCode {
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
