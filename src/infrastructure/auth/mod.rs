//! Auth service adapters

mod mock;

pub use mock::MockAuthService;
