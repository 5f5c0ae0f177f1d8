use super::slot::Slot;
use crate::Pixel;
use crate::gesture::Gesture;
use crate::hands::Fingers;
use crate::hands::Landmarks;

/// Each player's gesture this frame, if a hand was seen on their side.
///
/// `None` means no hand, which the round treats differently from
/// `Some(Gesture::Unknown)`.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, serde::Serialize)]
pub struct Seats {
    p1: Option<Gesture>,
    p2: Option<Gesture>,
}

impl Seats {
    /// Seat every detected hand by wrist position, in detection order.
    ///
    /// Two hands on one side is not an error: the later one replaces
    /// the earlier one. Empty landmark sets have no wrist and are skipped.
    pub fn assign(hands: &[Landmarks], width: Pixel) -> Self {
        let mut seats = Self::default();
        for hand in hands {
            let Some(wrist) = hand.wrist() else {
                log::debug!("skipping empty landmark set");
                continue;
            };
            let slot = Slot::from_wrist(wrist.x(), width);
            let gesture = Gesture::from(Fingers::extract(hand));
            if let Some(prior) = seats.get(slot) {
                log::debug!("{} already holds {}, replaced by {}", slot, prior, gesture);
            }
            seats.set(slot, gesture);
        }
        seats
    }

    pub fn get(&self, slot: Slot) -> Option<Gesture> {
        match slot {
            Slot::P1 => self.p1,
            Slot::P2 => self.p2,
        }
    }
    pub fn set(&mut self, slot: Slot, gesture: Gesture) {
        match slot {
            Slot::P1 => self.p1 = Some(gesture),
            Slot::P2 => self.p2 = Some(gesture),
        }
    }
    pub fn p1(&self) -> Option<Gesture> {
        self.p1
    }
    pub fn p2(&self) -> Option<Gesture> {
        self.p2
    }
}

impl From<(Option<Gesture>, Option<Gesture>)> for Seats {
    fn from((p1, p2): (Option<Gesture>, Option<Gesture>)) -> Self {
        Self { p1, p2 }
    }
}

impl std::fmt::Display for Seats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for slot in Slot::all() {
            if slot == Slot::P2 {
                write!(f, "  ")?;
            }
            match self.get(slot) {
                Some(gesture) => write!(f, "{}: {}", slot, gesture)?,
                None => write!(f, "{}: Waiting...", slot)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: Pixel = 640;

    fn fist(wrist: Pixel) -> Landmarks {
        Landmarks::from((Fingers::from([false; 5]), wrist))
    }

    fn palm(wrist: Pixel) -> Landmarks {
        Landmarks::from((Fingers::from([true; 5]), wrist))
    }

    #[test]
    fn fixtures_classify() {
        assert_eq!(Gesture::from(Fingers::extract(&fist(100))), Gesture::Rock);
        assert_eq!(Gesture::from(Fingers::extract(&palm(100))), Gesture::Paper);
    }

    #[test]
    fn no_hands_no_gestures() {
        let seats = Seats::assign(&[], WIDTH);
        assert_eq!(seats, Seats::default());
    }

    #[test]
    fn hands_split_by_midline() {
        let seats = Seats::assign(&[palm(500), fist(100)], WIDTH);
        assert_eq!(seats.p1(), Some(Gesture::Rock));
        assert_eq!(seats.p2(), Some(Gesture::Paper));
    }

    #[test]
    fn midline_wrist_seats_p2() {
        let seats = Seats::assign(&[fist(WIDTH / 2)], WIDTH);
        assert_eq!(seats.p1(), None);
        assert_eq!(seats.p2(), Some(Gesture::Rock));
        let seats = Seats::assign(&[fist(WIDTH / 2 - 1)], WIDTH);
        assert_eq!(seats.p1(), Some(Gesture::Rock));
        assert_eq!(seats.p2(), None);
    }

    #[test]
    fn last_write_wins() {
        let seats = Seats::assign(&[fist(50), palm(200)], WIDTH);
        assert_eq!(seats.p1(), Some(Gesture::Paper));
        assert_eq!(seats.p2(), None);
        let seats = Seats::assign(&[palm(200), fist(50)], WIDTH);
        assert_eq!(seats.p1(), Some(Gesture::Rock));
    }

    #[test]
    fn extra_hands_collapse_per_side() {
        let seats = Seats::assign(&[fist(50), palm(600), palm(100), fist(400)], WIDTH);
        assert_eq!(seats.p1(), Some(Gesture::Paper));
        assert_eq!(seats.p2(), Some(Gesture::Rock));
    }

    #[test]
    fn empty_sets_are_skipped() {
        let seats = Seats::assign(&[fist(50), Landmarks::empty()], WIDTH);
        assert_eq!(seats.p1(), Some(Gesture::Rock));
        assert_eq!(seats.p2(), None);
    }

    #[test]
    fn display_waiting() {
        let seats = Seats::from((Some(Gesture::Scissors), None));
        assert_eq!(seats.to_string(), "P1: Scissors  P2: Waiting...");
    }
}
