use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{events::PlayerJoined, state::Game};

pub fn join_game_handler(ctx: Context<JoinGame>, stake_amount: u64) -> Result<()> {
    let player_two = ctx.accounts.player_two.key();
    ctx.accounts.game.validate_join(player_two, stake_amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player_two.to_account_info(),
                to: ctx.accounts.game.to_account_info(),
            },
        ),
        stake_amount,
    )?;

    let game = &mut ctx.accounts.game;
    game.join(player_two, stake_amount)?;

    msg!("Player {} joined, pot is now {}", player_two, game.pot_amount);
    emit!(PlayerJoined {
        game: game.key(),
        player_two,
        pot_amount: game.pot_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct JoinGame<'info> {
    #[account(mut)]
    pub game: Box<Account<'info, Game>>,

    #[account(mut)]
    pub player_two: Signer<'info>,
    pub system_program: Program<'info, System>,
}
