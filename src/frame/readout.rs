use super::frame::Frame;
use crate::gesture::Gesture;
use crate::round::Round;
use crate::seats::Seats;
use crate::seats::Slot;

/// What the display layer shows for a frame: each seat's gesture
/// (`None` while waiting) and the round it produces.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct Readout {
    p1: Option<Gesture>,
    p2: Option<Gesture>,
    round: Round,
    winner: Option<Slot>,
}

impl Readout {
    pub fn p1(&self) -> Option<Gesture> {
        self.p1
    }
    pub fn p2(&self) -> Option<Gesture> {
        self.p2
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn winner(&self) -> Option<Slot> {
        self.winner
    }
    pub fn seats(&self) -> Seats {
        Seats::from((self.p1, self.p2))
    }
}

impl From<Seats> for Readout {
    fn from(seats: Seats) -> Self {
        let round = Round::from(seats);
        Self {
            p1: seats.p1(),
            p2: seats.p2(),
            winner: round.winner(),
            round,
        }
    }
}

/// full per-frame pipeline
impl From<&Frame> for Readout {
    fn from(frame: &Frame) -> Self {
        let readout = Self::from(Seats::assign(frame.hands(), frame.width()));
        log::debug!("{} -> {}", frame, readout);
        readout
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}  Result: {}", self.seats(), self.round)
    }
}
