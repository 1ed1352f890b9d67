pub mod create_game;
pub mod join_game;
pub mod make_move;
pub mod leave_game;

pub use create_game::*;
pub use join_game::*;
pub use make_move::*;
pub use leave_game::*;
