use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{
    constants::GAME_SEED,
    errors::GameError,
    events::GameCreated,
    state::Game,
};

pub fn create_game_handler(ctx: Context<CreateGame>, unique_id: u64, stake_amount: u64) -> Result<()> {
    require!(stake_amount > 0, GameError::ZeroStakeNotAllowed);

    let player_one = ctx.accounts.player_one.key();

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player_one.to_account_info(),
                to: ctx.accounts.game.to_account_info(),
            },
        ),
        stake_amount,
    )?;

    ctx.accounts.game.init(player_one, stake_amount)?;

    msg!("Game {} created by {} with stake {}", unique_id, player_one, stake_amount);
    emit!(GameCreated {
        game: ctx.accounts.game.key(),
        player_one,
        unique_id,
        stake: stake_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(unique_id: u64)]
pub struct CreateGame<'info> {
    #[account(
        init,
        payer = player_one,
        space = 8 + Game::SIZE,
        seeds = [GAME_SEED, player_one.key().as_ref(), &unique_id.to_le_bytes()],
        bump,
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(mut)]
    pub player_one: Signer<'info>,
    pub system_program: Program<'info, System>,
}
