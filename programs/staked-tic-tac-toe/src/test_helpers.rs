use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;
use crate::{
    errors::GameError,
    state::{empty_board, Game, GameState},
};

pub const STAKE: u64 = 1_000_000;

pub fn assert_game_error<T: std::fmt::Debug>(result: Result<T>, expected: GameError) {
    let err = result.expect_err("instruction should have been rejected");
    assert_eq!(
        ProgramError::from(err),
        ProgramError::from(anchor_lang::error::Error::from(expected))
    );
}

pub fn blank_game() -> Game {
    Game {
        player_one: Pubkey::default(),
        player_two: Pubkey::default(),
        turn: Pubkey::default(),
        board: empty_board(),
        state: GameState::WaitingForPlayerTwo,
        pot_amount: 0,
        winner: None,
    }
}

pub fn new_game(creator: Pubkey) -> Game {
    let mut game = blank_game();
    game.init(creator, STAKE).unwrap();
    game
}

/// A game between two fresh keys that has just been joined.
pub fn started_game() -> (Game, Pubkey, Pubkey) {
    let one = Pubkey::new_unique();
    let two = Pubkey::new_unique();
    let mut game = new_game(one);
    game.join(two, STAKE).unwrap();
    (game, one, two)
}
