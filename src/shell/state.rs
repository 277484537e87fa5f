use std::sync::Arc;

use crate::modules::auth::use_cases::sign_up::handler::RegisterUserHandler;
use crate::shared::infrastructure::config::AppConfig;
use crate::shared::infrastructure::database::Database;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub database: Arc<Database>,
    pub sign_up_handler: Arc<RegisterUserHandler>,
}
