use crate::modules::hello::use_cases::say_hello::dto::{HelloResponse, SayHello};

/// Greeting construction rule applied to a validated request.
pub fn greet(command: SayHello) -> HelloResponse {
    HelloResponse {
        msg: format!("Hello, {}!", command.name),
    }
}
