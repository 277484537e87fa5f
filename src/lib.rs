pub mod shared {
    pub mod core {
        pub mod domain_event;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod database;
    }
}

pub mod modules {
    pub mod hello {
        pub mod use_cases {
            pub mod say_hello {
                pub mod dto;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod auth {
        pub mod adapters {
            pub mod outbound {
                pub mod users_in_memory;
                pub mod users_sqlx;
            }
        }
        pub mod use_cases {
            pub mod sign_up {
                pub mod dto;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod users_port;
            }
        }
    }
}

pub mod shell;
