use std::ops::Neg;

/// `Player1` picks rows and maximizes the payoff, `Player2` picks columns and minimizes it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl Neg for Player {
    type Output = Player;
    fn neg(self) -> Self::Output {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}
