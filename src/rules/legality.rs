//! Placement legality on a single board.
//!
//! A placement is simulated on an O(1) scratch copy: place, resolve
//! captures, remove them, then require the placed stone's group to survive
//! with at least one liberty. The engine runs this gate on both boards.

use crate::board::{group_at, liberties, Board, Stone};
use crate::core::{Color, Coord, EngineError};

use super::capture::resolve_captures;

/// Check whether `color` may play at `pos` on `board`.
pub fn check_placement(board: &Board, pos: Coord, color: Color) -> Result<(), EngineError> {
    if !board.size().contains(pos) {
        return Err(EngineError::OutOfBounds(pos));
    }
    if board.is_occupied(pos) {
        return Err(EngineError::OccupiedCell(pos));
    }

    let mut scratch = board.clone();
    scratch.put(Stone::unresolved(pos, color));
    for captured in resolve_captures(&scratch, color) {
        scratch.remove(captured);
    }

    match group_at(&scratch, pos) {
        Some(group) if liberties(&scratch, &group) > 0 => Ok(()),
        _ => Err(EngineError::SuicideMove(pos)),
    }
}

/// Boolean form of [`check_placement`].
#[must_use]
pub fn can_place(board: &Board, pos: Coord, color: Color) -> bool {
    check_placement(board, pos, color).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardSize;

    fn board_with(stones: &[(u8, u8, Color)]) -> Board {
        Board::from_stones(
            BoardSize::Nine,
            stones
                .iter()
                .map(|&(x, y, c)| Stone::unresolved(Coord::new(x, y), c)),
        )
    }

    #[test]
    fn test_empty_board_accepts() {
        let board = Board::new(BoardSize::Nine);
        assert!(can_place(&board, Coord::new(5, 5), Color::Black));
        assert!(can_place(&board, Coord::new(1, 1), Color::White));
    }

    #[test]
    fn test_occupied_rejected() {
        let board = board_with(&[(3, 3, Color::Black)]);
        assert_eq!(
            check_placement(&board, Coord::new(3, 3), Color::White),
            Err(EngineError::OccupiedCell(Coord::new(3, 3)))
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = Board::new(BoardSize::Nine);
        assert_eq!(
            check_placement(&board, Coord::new(10, 1), Color::Black),
            Err(EngineError::OutOfBounds(Coord::new(10, 1)))
        );
        assert_eq!(
            check_placement(&board, Coord::new(0, 0), Color::Black),
            Err(EngineError::OutOfBounds(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_suicide_rejected() {
        let board = board_with(&[(1, 2, Color::White), (2, 1, Color::White)]);
        assert_eq!(
            check_placement(&board, Coord::new(1, 1), Color::Black),
            Err(EngineError::SuicideMove(Coord::new(1, 1)))
        );
        // Same point is fine for the surrounding color.
        assert!(can_place(&board, Coord::new(1, 1), Color::White));
    }

    #[test]
    fn test_group_suicide_rejected() {
        // Filling the last liberty of its own group is suicide.
        let board = board_with(&[
            (1, 1, Color::Black),
            (2, 1, Color::White),
            (1, 3, Color::White),
            (2, 2, Color::White),
        ]);
        assert_eq!(
            check_placement(&board, Coord::new(1, 2), Color::Black),
            Err(EngineError::SuicideMove(Coord::new(1, 2)))
        );
    }

    #[test]
    fn test_capture_makes_move_legal() {
        // (1,1) has no empty neighbor, but it captures white at (1,2).
        let board = board_with(&[
            (1, 2, Color::White),
            (2, 1, Color::White),
            (2, 2, Color::Black),
            (1, 3, Color::Black),
            (3, 1, Color::Black),
        ]);
        assert!(can_place(&board, Coord::new(1, 1), Color::Black));
    }

    #[test]
    fn test_gate_does_not_mutate() {
        let board = board_with(&[(1, 2, Color::White), (2, 1, Color::White)]);
        let before = board.clone();
        let _ = check_placement(&board, Coord::new(1, 1), Color::Black);
        assert_eq!(board, before);
    }
}
