use std::sync::Arc;

use crate::config::ActionConfig;
use crate::services::ProjectBoardService;

#[derive(Clone)]
pub struct AppContext {
    pub config: ActionConfig,
    pub project_board: Arc<dyn ProjectBoardService>,
}

impl AppContext {
    pub fn new(config: ActionConfig, project_board: Arc<dyn ProjectBoardService>) -> Self {
        Self {
            config,
            project_board,
        }
    }
}
