pub mod commands {
    pub mod sign_up;
}
