//! In-process auth service
//!
//! Stands in for an SMS gateway. Codes are never delivered anywhere; any
//! well-formed code verifies unless an expected code is configured. Sending
//! again supersedes the previous request, so only the latest id verifies.

use std::cell::Cell;
use std::thread;
use std::time::Duration;

use crate::domain::ports::{AuthError, AuthService, PendingCode};
use crate::domain::value_objects::{OtpCode, PhoneNumber};

const REQUEST_PREFIX: &str = "mock-";

#[derive(Debug, Default)]
pub struct MockAuthService {
    latency: Duration,
    expected_code: Option<OtpCode>,
    issued: Cell<u64>,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for `latency` on every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Only accept `code`
    pub fn with_expected_code(mut self, code: OtpCode) -> Self {
        self.expected_code = Some(code);
        self
    }

    /// Number of codes sent so far
    pub fn codes_sent(&self) -> u64 {
        self.issued.get()
    }

    fn simulate_network(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }

    fn is_latest(&self, request_id: &str) -> bool {
        let latest = self.issued.get();
        latest > 0
            && request_id
                .strip_prefix(REQUEST_PREFIX)
                .and_then(|n| n.parse::<u64>().ok())
                .is_some_and(|n| n == latest)
    }
}

impl AuthService for MockAuthService {
    fn send_code(&self, phone: &PhoneNumber) -> Result<PendingCode, AuthError> {
        self.simulate_network();
        let n = self.issued.get() + 1;
        self.issued.set(n);
        tracing::debug!(phone = %phone.masked(), request = n, "sent verification code");
        Ok(PendingCode {
            phone: phone.clone(),
            request_id: format!("{REQUEST_PREFIX}{n}"),
        })
    }

    fn verify_code(&self, pending: &PendingCode, code: &OtpCode) -> Result<(), AuthError> {
        self.simulate_network();
        if !self.is_latest(&pending.request_id) {
            return Err(AuthError::Service(format!(
                "unknown or superseded request '{}'",
                pending.request_id
            )));
        }
        match &self.expected_code {
            Some(expected) if expected != code => Err(AuthError::CodeMismatch),
            _ => Ok(()),
        }
    }
}
