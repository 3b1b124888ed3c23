pub mod project_board;

pub use project_board::ProjectBoardService;
