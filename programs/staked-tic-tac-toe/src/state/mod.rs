pub mod board;
pub mod game;
pub mod payout;

pub use board::*;
pub use game::*;
pub use payout::*;
