//! AuthService port - phone/OTP verification
//!
//! Only a mock implementation exists; a real SMS gateway would implement the
//! same trait without touching the sign-in flow.

use crate::domain::value_objects::{OtpCode, PhoneNumber};

pub use crate::domain::value_objects::AuthError;

/// Handle for a code that has been sent and awaits verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCode {
    pub phone: PhoneNumber,
    /// Opaque id issued by the service
    pub request_id: String,
}

pub trait AuthService {
    /// Send a one-time code to `phone`
    fn send_code(&self, phone: &PhoneNumber) -> Result<PendingCode, AuthError>;

    /// Check `code` against a previously sent one
    fn verify_code(&self, pending: &PendingCode, code: &OtpCode) -> Result<(), AuthError>;
}
