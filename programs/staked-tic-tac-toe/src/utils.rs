use anchor_lang::prelude::*;
use crate::{constants::GAME_SEED, errors::GameError, state::Payout};

/// Moves lamports out of an account owned by this program.
pub fn transfer_owned_sol(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let post_from = from
        .lamports()
        .checked_sub(amount)
        .ok_or(GameError::PayoutDebitNumericalOverflow)?;

    let post_to = to
        .lamports()
        .checked_add(amount)
        .ok_or(GameError::PayoutCreditNumericalOverflow)?;

    **from.try_borrow_mut_lamports()? = post_from;
    **to.try_borrow_mut_lamports()? = post_to;

    Ok(())
}

/// Pays both players their share of the pot from the game account.
pub fn pay_out(
    game: &AccountInfo,
    player_one: &AccountInfo,
    player_two: &AccountInfo,
    payout: &Payout,
) -> Result<()> {
    transfer_owned_sol(game, player_one, payout.to_player_one)?;
    transfer_owned_sol(game, player_two, payout.to_player_two)
}

/// Address and bump of the game created by `creator` under `unique_id`.
pub fn game_address(program_id: &Pubkey, creator: &Pubkey, unique_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[GAME_SEED, creator.as_ref(), &unique_id.to_le_bytes()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_address_is_deterministic() {
        let creator = Pubkey::new_unique();
        let first = game_address(&crate::ID, &creator, 1_700_000_000_000);
        let second = game_address(&crate::ID, &creator, 1_700_000_000_000);
        assert_eq!(first, second);
    }

    #[test]
    fn game_address_differs_per_id_and_creator() {
        let creator = Pubkey::new_unique();
        let (a, _) = game_address(&crate::ID, &creator, 1);
        let (b, _) = game_address(&crate::ID, &creator, 2);
        let (c, _) = game_address(&crate::ID, &Pubkey::new_unique(), 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn game_address_matches_seed_layout() {
        let creator = Pubkey::new_unique();
        let (address, bump) = game_address(&crate::ID, &creator, 7);
        let derived = Pubkey::create_program_address(
            &[b"tictactoe", creator.as_ref(), &7u64.to_le_bytes(), &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(address, derived);
    }

    #[test]
    fn transfer_moves_lamports() {
        let (from_key, to_key, owner) = (Pubkey::new_unique(), Pubkey::new_unique(), crate::ID);
        let (mut from_lamports, mut to_lamports) = (100u64, 5u64);
        let (mut from_data, mut to_data) = (Vec::<u8>::new(), Vec::<u8>::new());
        let from = AccountInfo::new(
            &from_key,
            false,
            true,
            &mut from_lamports,
            &mut from_data,
            &owner,
            false,
            0,
        );
        let to = AccountInfo::new(
            &to_key,
            false,
            true,
            &mut to_lamports,
            &mut to_data,
            &owner,
            false,
            0,
        );

        transfer_owned_sol(&from, &to, 40).unwrap();
        assert_eq!(from.lamports(), 60);
        assert_eq!(to.lamports(), 45);

        assert!(transfer_owned_sol(&from, &to, 61).is_err());
        assert_eq!(from.lamports(), 60);
        assert_eq!(to.lamports(), 45);
    }
}
