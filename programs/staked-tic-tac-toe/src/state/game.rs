use anchor_lang::prelude::*;
use crate::{
    errors::GameError,
    state::{board::*, payout::Outcome},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    WaitingForPlayerTwo,
    Playing,
}

#[account]
pub struct Game {
    pub player_one: Pubkey, //32;
    pub player_two: Pubkey, //32;
    pub turn: Pubkey, //32;
    pub board: [[Option<PlayerMark>; 3]; 3], //9*(1+1);
    pub state: GameState, //1;
    pub pot_amount: u64, //8;
    pub winner: Option<Pubkey>, //1+32;
}

impl Game {
    pub const SIZE: usize = 32 + 32 + 32 + (9 * (1 + 1)) + 1 + 8 + (1 + 32);

    pub fn init(&mut self, creator: Pubkey, stake: u64) -> Result<()> {
        require!(stake > 0, GameError::ZeroStakeNotAllowed);

        self.player_one = creator;
        self.player_two = Pubkey::default();
        self.turn = creator;
        self.board = empty_board();
        self.state = GameState::WaitingForPlayerTwo;
        self.pot_amount = stake;
        self.winner = None;

        Ok(())
    }

    /// Checks that `player` may join with `stake`. Nothing is mutated.
    pub fn validate_join(&self, player: Pubkey, stake: u64) -> Result<()> {
        require!(
            self.state == GameState::WaitingForPlayerTwo,
            GameError::GameAlreadyStartedOrFull
        );
        require!(player != self.player_one, GameError::CannotJoinOwnGame);
        require!(stake > 0, GameError::ZeroStakeNotAllowed);
        require!(stake == self.pot_amount, GameError::StakeMismatch);

        Ok(())
    }

    pub fn join(&mut self, player: Pubkey, stake: u64) -> Result<()> {
        self.validate_join(player, stake)?;

        let pot_amount = self
            .pot_amount
            .checked_add(stake)
            .ok_or(GameError::StakeOverflow)?;

        self.player_two = player;
        self.pot_amount = pot_amount;
        self.state = GameState::Playing;

        Ok(())
    }

    /// Cancels a game nobody has joined yet. Returns the stake owed back to the creator.
    pub fn leave(&mut self, player: Pubkey) -> Result<u64> {
        require_keys_eq!(player, self.player_one, GameError::NotAPlayer);
        require!(self.is_waiting(), GameError::GameAlreadyStartedOrFull);

        let refund = self.pot_amount;
        self.pot_amount = 0;

        Ok(refund)
    }

    /// Checks that `player` may act right now and returns their opponent.
    pub fn validate_turn(&self, player: Pubkey) -> Result<Pubkey> {
        require!(self.state == GameState::Playing, GameError::GameNotActive);

        let opponent = self.opponent_of(player).ok_or(GameError::NotAPlayer)?;
        require_keys_eq!(self.turn, player, GameError::NotYourTurn);

        Ok(opponent)
    }

    /// Applies a move for `player`. `(255, 255)` forfeits; anything else must be an
    /// empty in-bounds cell. Either every check passes and the game is updated, or
    /// the game is left untouched.
    pub fn play(&mut self, player: Pubkey, row: u8, col: u8) -> Result<Outcome> {
        let opponent = self.validate_turn(player)?;

        if is_forfeit(row, col) {
            self.winner = Some(opponent);
            return Ok(Outcome::Forfeited { winner: opponent });
        }

        require!(in_bounds(row, col), GameError::InvalidMoveCoordinates);
        let (r, c) = (row as usize, col as usize);
        require!(self.board[r][c].is_none(), GameError::CellAlreadyOccupied);

        let mark = self.mark_of(player);
        self.board[r][c] = Some(mark);

        if winning_mark(&self.board) == Some(mark) {
            self.winner = Some(player);
            Ok(Outcome::Won { winner: player })
        } else if is_full(&self.board) {
            Ok(Outcome::Draw)
        } else {
            self.turn = opponent;
            Ok(Outcome::Continue)
        }
    }

    pub fn opponent_of(&self, player: Pubkey) -> Option<Pubkey> {
        if player == self.player_one {
            Some(self.player_two)
        } else if player == self.player_two && self.player_two != Pubkey::default() {
            Some(self.player_one)
        } else {
            None
        }
    }

    pub fn mark_of(&self, player: Pubkey) -> PlayerMark {
        if player == self.player_one {
            PlayerMark::X
        } else {
            PlayerMark::O
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.state == GameState::WaitingForPlayerTwo
    }
}
