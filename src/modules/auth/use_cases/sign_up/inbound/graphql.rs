use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::auth::use_cases::sign_up::dto::{SignUpArgs, User};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlUser {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub created_at: i64,
}

impl From<User> for GqlUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Hands the validated input to the register-user use case and returns
    /// its result untouched; use-case errors reach the caller unmodified.
    async fn sign_up(&self, context: &Context<'_>, input: SignUpArgs) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();

        let command = input
            .validate()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let user = state
            .sign_up_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(user.into())
    }
}
