use async_graphql::InputObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::core::validation::{ValidationErrors, email_shaped, min_chars, not_empty};

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Arguments of the sign-up operation, shared by the GraphQL mutation and
/// the HTTP endpoint.
#[derive(Debug, Clone, Deserialize, InputObject, ToSchema)]
pub struct SignUpArgs {
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada")]
    pub name: String,
    /// Plain-text credential; hashed before it reaches storage.
    #[schema(example = "correct horse battery")]
    pub password: String,
}

/// Command produced by a successfully validated [`SignUpArgs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl SignUpArgs {
    pub fn validate(self) -> Result<SignUp, ValidationErrors> {
        ValidationErrors::from_checks([
            not_empty("email", &self.email),
            email_shaped("email", &self.email),
            not_empty("name", &self.name),
            min_chars("password", &self.password, MIN_PASSWORD_CHARS),
        ])?;
        Ok(SignUp {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            password: self.password,
        })
    }
}

/// Sign-up result handed back to the transport layer. Timestamps are epoch
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub created_at: i64,
}
