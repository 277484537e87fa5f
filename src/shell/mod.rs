// Composition root.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod graphql;
pub mod http;
pub mod state;
