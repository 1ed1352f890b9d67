use anchor_lang::prelude::*;

/// Result of applying one move to a game in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won { winner: Pubkey },
    Draw,
    Forfeited { winner: Pubkey },
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    pub fn winner(&self) -> Option<Pubkey> {
        match self {
            Outcome::Won { winner } | Outcome::Forfeited { winner } => Some(*winner),
            Outcome::Continue | Outcome::Draw => None,
        }
    }
}

/// Lamports owed to each player out of the pot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Payout {
    pub to_player_one: u64,
    pub to_player_two: u64,
}

impl Payout {
    /// Splits `pot` according to `outcome`. A draw gives each player half, with the
    /// odd lamport going to player one.
    pub fn for_outcome(outcome: &Outcome, pot: u64, player_one: Pubkey) -> Payout {
        match outcome {
            Outcome::Continue => Payout::default(),
            Outcome::Won { winner } | Outcome::Forfeited { winner } => {
                if *winner == player_one {
                    Payout { to_player_one: pot, to_player_two: 0 }
                } else {
                    Payout { to_player_one: 0, to_player_two: pot }
                }
            }
            Outcome::Draw => {
                let half = pot / 2;
                Payout {
                    to_player_one: pot - half,
                    to_player_two: half,
                }
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.to_player_one.saturating_add(self.to_player_two)
    }
}
