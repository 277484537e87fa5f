// Shared test fixture for the SignUp command.

use crate::modules::auth::use_cases::sign_up::dto::SignUp;

pub struct SignUpBuilder {
    inner: SignUp,
}

impl Default for SignUpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SignUpBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUp {
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
                password: "correct horse battery".to_string(),
            },
        }
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn build(self) -> SignUp {
        self.inner
    }
}

#[cfg(test)]
mod sign_up_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_the_canonical_command() {
        let command = SignUpBuilder::new().build();
        assert_eq!(command.email, "ada@example.com");
        assert_eq!(command.name, "Ada");
        assert_eq!(command.password, "correct horse battery");
    }

    #[rstest]
    fn it_should_override_fields_through_the_setters() {
        let command = SignUpBuilder::new()
            .email("grace@example.com")
            .name("Grace")
            .password("another passphrase")
            .build();
        assert_eq!(command.email, "grace@example.com");
        assert_eq!(command.name, "Grace");
        assert_eq!(command.password, "another passphrase");
    }
}
