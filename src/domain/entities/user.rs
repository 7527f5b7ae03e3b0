//! Signed-in shopper

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PhoneNumber;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub phone: PhoneNumber,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(phone: PhoneNumber, name: impl Into<String>) -> Self {
        Self {
            phone,
            name: name.into(),
            email: None,
        }
    }
}
