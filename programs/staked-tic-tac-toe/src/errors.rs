use anchor_lang::error_code;

#[error_code]
pub enum GameError {
    // Join
    #[msg("The game is not in the 'WaitingForPlayerTwo' state.")]
    GameAlreadyStartedOrFull,
    #[msg("You cannot join your own game.")]
    CannotJoinOwnGame,
    #[msg("The stake amount does not match the initial stake.")]
    StakeMismatch,

    // Move
    #[msg("It's not your turn.")]
    NotYourTurn,
    #[msg("Invalid move coordinates. Row and column must be between 0 and 2.")]
    InvalidMoveCoordinates,
    #[msg("The selected cell is already occupied.")]
    CellAlreadyOccupied,

    #[msg("Stake amount cannot be zero.")]
    ZeroStakeNotAllowed,
    #[msg("You are not a player in this game.")]
    NotAPlayer,
    #[msg("The game is not being played.")]
    GameNotActive,
    #[msg("Provided opponent account is not the other player.")]
    InvalidOpponent,

    // Lamport bookkeeping
    #[msg("Pot amount overflowed.")]
    StakeOverflow,
    #[msg("Payout would underflow the paying account.")]
    PayoutDebitNumericalOverflow,
    #[msg("Payout would overflow the receiving account.")]
    PayoutCreditNumericalOverflow,
}

impl GameError {
    pub const ALL: [GameError; 13] = [
        GameError::GameAlreadyStartedOrFull,
        GameError::CannotJoinOwnGame,
        GameError::StakeMismatch,
        GameError::NotYourTurn,
        GameError::InvalidMoveCoordinates,
        GameError::CellAlreadyOccupied,
        GameError::ZeroStakeNotAllowed,
        GameError::NotAPlayer,
        GameError::GameNotActive,
        GameError::InvalidOpponent,
        GameError::StakeOverflow,
        GameError::PayoutDebitNumericalOverflow,
        GameError::PayoutCreditNumericalOverflow,
    ];

    /// Maps the custom error code of a failed transaction back to its variant.
    pub fn from_code(code: u32) -> Option<GameError> {
        GameError::ALL
            .iter()
            .copied()
            .find(|error| u32::from(*error) == code)
    }
}
