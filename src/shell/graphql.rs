use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::auth::use_cases::sign_up::inbound::graphql::MutationRoot;
pub use crate::modules::hello::use_cases::say_hello::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
