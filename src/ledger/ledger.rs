//! Append-only record sequence.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::MoveRecord;

/// Ordered history of accepted placements, oldest first.
///
/// Grows by one per placement and shrinks only through takeback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vector<MoveRecord>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    /// Remove and return the newest record.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }
}

impl FromIterator<MoveRecord> for Ledger {
    fn from_iter<I: IntoIterator<Item = MoveRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardPair;
    use crate::core::{Color, Coord, PairingPhase};

    fn record(x: u8, color: Color) -> MoveRecord {
        MoveRecord {
            color,
            position: Coord::new(x, 1),
            deltas: BoardPair::default(),
            phase_before: PairingPhase::AwaitingBlack,
            round_before: Color::Black,
            pending_before: None,
        }
    }

    #[test]
    fn test_push_pop_order() {
        let mut ledger = Ledger::new();
        ledger.push(record(1, Color::Black));
        ledger.push(record(2, Color::White));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.last().map(|r| r.position), Some(Coord::new(2, 1)));

        assert_eq!(ledger.pop().map(|r| r.color), Some(Color::White));
        assert_eq!(ledger.pop().map(|r| r.color), Some(Color::Black));
        assert!(ledger.pop().is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut ledger: Ledger = [record(1, Color::Black)].into_iter().collect();
        let snapshot = ledger.clone();
        ledger.push(record(2, Color::White));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.len(), 2);
    }
}
