//! Sign-in flow
//!
//! Phone number → one-time code → profile. The flow owns only its current
//! step; sending and checking codes is delegated to an `AuthService`. A
//! rejected input leaves the step unchanged so the shopper can retry.

use crate::domain::entities::User;
use crate::domain::ports::{AuthError, AuthService, PendingCode};
use crate::domain::value_objects::{OtpCode, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStep {
    Phone,
    Otp { pending: PendingCode },
    Profile { phone: PhoneNumber },
    Complete(User),
}

impl AuthStep {
    pub fn name(&self) -> &'static str {
        match self {
            AuthStep::Phone => "phone",
            AuthStep::Otp { .. } => "otp",
            AuthStep::Profile { .. } => "profile",
            AuthStep::Complete(_) => "complete",
        }
    }
}

pub struct AuthFlow<'a> {
    service: &'a dyn AuthService,
    step: AuthStep,
}

impl<'a> AuthFlow<'a> {
    pub fn new(service: &'a dyn AuthService) -> Self {
        Self {
            service,
            step: AuthStep::Phone,
        }
    }

    pub fn step(&self) -> &AuthStep {
        &self.step
    }

    /// Send a code to the typed phone number and move to the code step.
    pub fn submit_phone(&mut self, input: &str) -> Result<PendingCode, AuthError> {
        self.expect_step("send a code", |s| matches!(s, AuthStep::Phone))?;
        let phone = PhoneNumber::parse(input)?;
        let pending = self.service.send_code(&phone)?;
        tracing::info!(phone = %phone.masked(), "verification code sent");
        self.step = AuthStep::Otp {
            pending: pending.clone(),
        };
        Ok(pending)
    }

    /// Ask the service for a fresh code for the same number.
    pub fn resend_code(&mut self) -> Result<PendingCode, AuthError> {
        let AuthStep::Otp { pending } = &self.step else {
            return Err(self.wrong_step("resend a code"));
        };
        let pending = self.service.send_code(&pending.phone)?;
        tracing::info!(phone = %pending.phone.masked(), "verification code re-sent");
        self.step = AuthStep::Otp {
            pending: pending.clone(),
        };
        Ok(pending)
    }

    /// Go back to change the phone number.
    pub fn back_to_phone(&mut self) {
        if matches!(self.step, AuthStep::Otp { .. }) {
            self.step = AuthStep::Phone;
        }
    }

    /// Verify the typed code and move to the profile step.
    pub fn submit_code(&mut self, input: &str) -> Result<(), AuthError> {
        let AuthStep::Otp { pending } = &self.step else {
            return Err(self.wrong_step("verify a code"));
        };
        let code = OtpCode::parse(input)?;
        self.service.verify_code(pending, &code)?;
        tracing::debug!("verification code accepted");
        let phone = pending.phone.clone();
        self.step = AuthStep::Profile { phone };
        Ok(())
    }

    /// Finish sign-in with a display name and optional email.
    pub fn complete_profile(&mut self, name: &str, email: Option<&str>) -> Result<User, AuthError> {
        let AuthStep::Profile { phone } = &self.step else {
            return Err(self.wrong_step("complete the profile"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::EmptyName);
        }
        let user = User {
            phone: phone.clone(),
            name: name.to_string(),
            email: email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
        };
        self.step = AuthStep::Complete(user.clone());
        Ok(user)
    }

    /// Closing the modal discards everything
    pub fn reset(&mut self) {
        self.step = AuthStep::Phone;
    }

    pub fn user(&self) -> Option<&User> {
        match &self.step {
            AuthStep::Complete(user) => Some(user),
            _ => None,
        }
    }

    fn expect_step(
        &self,
        action: &'static str,
        allowed: impl Fn(&AuthStep) -> bool,
    ) -> Result<(), AuthError> {
        if allowed(&self.step) {
            Ok(())
        } else {
            Err(self.wrong_step(action))
        }
    }

    fn wrong_step(&self, action: &'static str) -> AuthError {
        AuthError::WrongStep {
            action,
            step: self.step.name(),
        }
    }
}
