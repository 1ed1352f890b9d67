use anchor_lang::prelude::*;
use crate::{
    errors::GameError,
    events::GameSettled,
    state::Game,
};

pub fn leave_game_handler(ctx: Context<LeaveGame>) -> Result<()> {
    let player_one = ctx.accounts.player_one.key();
    let game = &mut ctx.accounts.game;
    let refund = game.leave(player_one)?;

    msg!("Player {} left, {} lamports refunded", player_one, refund);
    emit!(GameSettled {
        game: game.key(),
        winner: None,
        to_player_one: refund,
        to_player_two: 0,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct LeaveGame<'info> {
    #[account(
        mut,
        close = player_one,
        constraint = player_one.key() == game.player_one @ GameError::NotAPlayer,
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(mut)]
    pub player_one: Signer<'info>,
    pub system_program: Program<'info, System>,
}
