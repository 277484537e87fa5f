use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::core::validation::{ValidationErrors, not_empty};

/// Inbound greeting request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SayHelloRequest {
    /// Name of the person to greet.
    #[schema(example = "Ada")]
    pub name: String,
}

/// Command produced by a successfully validated [`SayHelloRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayHello {
    pub name: String,
}

impl SayHelloRequest {
    pub fn validate(self) -> Result<SayHello, ValidationErrors> {
        ValidationErrors::from_checks([not_empty("name", &self.name)])?;
        Ok(SayHello {
            name: self.name.trim().to_string(),
        })
    }
}

/// Greeting payload returned to the caller. Trusted internal origin, no
/// validation on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HelloResponse {
    #[schema(example = "Hello, Ada!")]
    pub msg: String,
}
