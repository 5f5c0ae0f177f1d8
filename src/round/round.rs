use crate::gesture::Gesture;
use crate::seats::Seats;
use crate::seats::Slot;

/// Live match status, recomputed from scratch every frame.
///
/// Resolution order:
/// 1. `WaitingForBothPlayers`: either seat is empty
/// 2. `WaitingForValidMoves`: either gesture is `Unknown`
/// 3. `Draw`: same throw
/// 4. `Player1Wins` or `Player2Wins`: by the beats relation
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Round {
    WaitingForBothPlayers,
    WaitingForValidMoves,
    Draw,
    Player1Wins,
    Player2Wins,
}

impl Round {
    pub fn resolve(p1: Option<Gesture>, p2: Option<Gesture>) -> Self {
        match (p1, p2) {
            (None, _) | (_, None) => Self::WaitingForBothPlayers,
            (Some(a), Some(b)) if !a.is_known() || !b.is_known() => Self::WaitingForValidMoves,
            (Some(a), Some(b)) if a == b => Self::Draw,
            (Some(a), Some(b)) if a.beats(&b) => Self::Player1Wins,
            (Some(_), Some(_)) => Self::Player2Wins,
        }
    }
    pub fn winner(&self) -> Option<Slot> {
        match self {
            Self::Player1Wins => Some(Slot::P1),
            Self::Player2Wins => Some(Slot::P2),
            _ => None,
        }
    }
    /// True once both players show a known throw.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Draw | Self::Player1Wins | Self::Player2Wins)
    }
}

impl From<Seats> for Round {
    fn from(seats: Seats) -> Self {
        Self::resolve(seats.p1(), seats.p2())
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::WaitingForBothPlayers => write!(f, "Waiting for both players..."),
            Self::WaitingForValidMoves => write!(f, "Waiting for valid moves..."),
            Self::Draw => write!(f, "Draw"),
            Self::Player1Wins => write!(f, "Player 1 Wins"),
            Self::Player2Wins => write!(f, "Player 2 Wins"),
        }
    }
}
