pub const GAME_SEED: &[u8] = b"tictactoe";

pub const BOARD_SIZE: usize = 3;

/// Row and column value that turns a move into a forfeit.
pub const FORFEIT_SENTINEL: u8 = 255;
