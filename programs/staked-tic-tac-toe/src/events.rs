use anchor_lang::prelude::*;

#[event]
pub struct GameCreated {
    pub game: Pubkey,
    pub player_one: Pubkey,
    pub unique_id: u64,
    pub stake: u64,
}

#[event]
pub struct PlayerJoined {
    pub game: Pubkey,
    pub player_two: Pubkey,
    pub pot_amount: u64,
}

#[event]
pub struct MoveMade {
    pub game: Pubkey,
    pub player: Pubkey,
    pub row: u8,
    pub col: u8,
}

/// Emitted right before the game account is closed.
#[event]
pub struct GameSettled {
    pub game: Pubkey,
    pub winner: Option<Pubkey>,
    pub to_player_one: u64,
    pub to_player_two: u64,
}
