use async_graphql::{Object, Result as GqlResult};

use crate::modules::hello::use_cases::say_hello::dto::{HelloResponse, SayHelloRequest};
use crate::modules::hello::use_cases::say_hello::handler::greet;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlHello {
    pub msg: String,
}

impl From<HelloResponse> for GqlHello {
    fn from(response: HelloResponse) -> Self {
        Self { msg: response.msg }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn say_hello(&self, name: String) -> GqlResult<GqlHello> {
        let command = SayHelloRequest { name }
            .validate()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(greet(command).into())
    }
}
