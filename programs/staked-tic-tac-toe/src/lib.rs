use anchor_lang::prelude::*;

pub mod instructions;
use instructions::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_helpers;


// this key needs to be changed to whatever public key is returned by "anchor keys list"
declare_id!("KKeJ93UqZWdrvsHAKWf4CnW5pZ6ThDaU9AkYWZHkCKC");

#[program]
pub mod staked_tic_tac_toe {
    use super::*;

    pub fn create_game(ctx: Context<CreateGame>, unique_id: u64, stake_amount: u64) -> Result<()> {
        instructions::create_game_handler(ctx, unique_id, stake_amount)
    }

    pub fn join_game(ctx: Context<JoinGame>, stake_amount: u64) -> Result<()> {
        instructions::join_game_handler(ctx, stake_amount)
    }

    /// `(255, 255)` forfeits the game to the opponent.
    pub fn make_move(ctx: Context<MakeMove>, row: u8, col: u8) -> Result<()> {
        instructions::make_move_handler(ctx, row, col)
    }

    pub fn leave_game(ctx: Context<LeaveGame>) -> Result<()> {
        instructions::leave_game_handler(ctx)
    }
}
