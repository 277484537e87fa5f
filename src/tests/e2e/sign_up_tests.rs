use std::sync::Arc;

use crate::modules::auth::adapters::outbound::users_in_memory::InMemoryUserRepository;
use crate::modules::auth::use_cases::sign_up::handler::RegisterUserHandler;
use crate::shared::infrastructure::config::Settings;
use crate::shared::infrastructure::database::Database;
use crate::shell::graphql::build_schema;
use crate::shell::state::AppState;

fn make_state() -> AppState {
    let settings = Settings::from_lookup(|_| None);
    let database = Arc::new(Database::connect_lazy(&settings.database).expect("lazy pool"));
    let repository = Arc::new(InMemoryUserRepository::new());
    let sign_up_handler = Arc::new(RegisterUserHandler::new(repository));
    AppState {
        config: settings.app,
        database,
        sign_up_handler,
    }
}

const SIGN_UP: &str = r#"
    mutation {
        signUp(input: { email: "ada@example.com", name: "Ada", password: "correct horse battery" }) {
            userId
            email
            name
        }
    }
"#;

#[tokio::test]
async fn signs_up_a_user_through_the_schema() {
    let schema = build_schema(make_state());

    let response = schema.execute(SIGN_UP).await;

    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    assert_eq!(data["signUp"]["email"], "ada@example.com");
    assert_eq!(data["signUp"]["name"], "Ada");
    assert!(data["signUp"]["userId"].as_str().is_some());
}

#[tokio::test]
async fn surfaces_the_use_case_error_unchanged() {
    let schema = build_schema(make_state());

    let first = schema.execute(SIGN_UP).await;
    assert!(first.errors.is_empty());

    let second = schema.execute(SIGN_UP).await;
    assert_eq!(second.errors.len(), 1);
    assert_eq!(
        second.errors[0].message,
        "domain rejected: email ada@example.com is already registered"
    );
}

#[tokio::test]
async fn rejects_an_invalid_input_listing_every_violation() {
    let schema = build_schema(make_state());

    let response = schema
        .execute(r#"mutation { signUp(input: { email: "", name: "", password: "x" }) { userId } }"#)
        .await;

    assert_eq!(response.errors.len(), 1);
    let message = &response.errors[0].message;
    assert!(message.contains("email must not be empty"), "got: {message}");
    assert!(message.contains("name must not be empty"), "got: {message}");
    assert!(
        message.contains("password must be at least 8 characters"),
        "got: {message}"
    );
}

#[tokio::test]
async fn greets_through_the_schema() {
    let schema = build_schema(make_state());

    let response = schema.execute(r#"{ sayHello(name: "Ada") { msg } }"#).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["sayHello"]["msg"], "Hello, Ada!");
}
