use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;
use crate::{
    errors::GameError,
    events::{GameSettled, MoveMade},
    state::{Game, Outcome, Payout},
    utils::{pay_out, transfer_owned_sol},
};

pub fn make_move_handler(ctx: Context<MakeMove>, row: u8, col: u8) -> Result<()> {
    let game_info = ctx.accounts.game.to_account_info();
    let player = ctx.accounts.player.to_account_info();
    let other = ctx.accounts.other.to_account_info();

    let (outcome, payout) = apply_move(&mut ctx.accounts.game, &game_info, &player, &other, row, col)?;

    if let Outcome::Forfeited { winner } = outcome {
        msg!("Player {} forfeited to {}", player.key(), winner);
    } else {
        msg!("Player {} marked ({}, {})", player.key(), row, col);
        emit!(MoveMade {
            game: game_info.key(),
            player: player.key(),
            row,
            col,
        });
    }

    if !outcome.is_terminal() {
        return Ok(());
    }

    match outcome.winner() {
        Some(winner) => msg!("Player {} won {} lamports", winner, payout.total()),
        None => msg!(
            "Draw, {} and {} lamports returned",
            payout.to_player_one,
            payout.to_player_two
        ),
    }
    emit!(GameSettled {
        game: game_info.key(),
        winner: outcome.winner(),
        to_player_one: payout.to_player_one,
        to_player_two: payout.to_player_two,
    });

    let player_one = if player.key() == ctx.accounts.game.player_one {
        player
    } else {
        other
    };
    ctx.accounts.game.close(player_one)
}

/// Validates and applies a move by `player`. When the move ends the game, the pot is
/// paid out of `game_info` and the remaining rent goes to player one, leaving the
/// account empty for closing.
pub fn apply_move<'info>(
    game: &mut Game,
    game_info: &AccountInfo<'info>,
    player: &AccountInfo<'info>,
    other: &AccountInfo<'info>,
    row: u8,
    col: u8,
) -> Result<(Outcome, Payout)> {
    let opponent = game.validate_turn(player.key())?;
    require_keys_eq!(other.key(), opponent, GameError::InvalidOpponent);

    let outcome = game.play(player.key(), row, col)?;
    if !outcome.is_terminal() {
        return Ok((outcome, Payout::default()));
    }

    let payout = Payout::for_outcome(&outcome, game.pot_amount, game.player_one);
    let (player_one, player_two) = if player.key() == game.player_one {
        (player, other)
    } else {
        (other, player)
    };

    pay_out(game_info, player_one, player_two, &payout)?;
    game.pot_amount = 0;
    transfer_owned_sol(game_info, player_one, game_info.lamports())?;

    Ok((outcome, payout))
}

#[derive(Accounts)]
pub struct MakeMove<'info> {
    #[account(mut)]
    pub game: Box<Account<'info, Game>>,

    #[account(mut)]
    pub player: Signer<'info>,

    /// CHECK: must be the mover's opponent, i.e. `player_two` when player one moves and
    /// `player_one` when player two moves. Anything else fails with `InvalidOpponent`
    /// before any lamports move.
    #[account(mut)]
    pub other: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}
