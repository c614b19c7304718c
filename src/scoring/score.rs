//! Board and match scores.

use serde::{Deserialize, Serialize};

use super::territory::territory;
use crate::board::{Board, BoardId, BoardPair};
use crate::core::{BoardSize, Color, ColorMap, GameState, WinnerRule};

/// Threshold test: black wins iff `black > N²/2 + komi`.
///
/// Evaluated as `2·black > N² + 2·komi` to stay exact for odd N.
#[must_use]
pub fn black_wins(black: u32, size: BoardSize, komi: u32) -> bool {
    2 * u64::from(black) > u64::from(size.area()) + 2 * u64::from(komi)
}

/// One board's score breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardScore {
    pub stones: ColorMap<u32>,
    pub territory: ColorMap<u32>,
    pub prisoners: ColorMap<u32>,
    /// `stones + territory + prisoners` per color.
    pub total: ColorMap<u32>,
    pub winner: Color,
}

/// Score one board.
#[must_use]
pub fn score_board(board: &Board, prisoners: &ColorMap<u32>, size: BoardSize, komi: u32) -> BoardScore {
    let stones = ColorMap::from_fn(|color| board.count(color));
    let territory = territory(board);
    let total = ColorMap::from_fn(|color| stones[color] + territory[color] + prisoners[color]);
    let winner = if black_wins(total[Color::Black], size, komi) {
        Color::Black
    } else {
        Color::White
    };

    BoardScore {
        stones,
        territory,
        prisoners: *prisoners,
        total,
        winner,
    }
}

/// Scores of both boards and the combined match result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub boards: BoardPair<BoardScore>,
    /// `floor((A + B) / 2)` per color.
    pub average: ColorMap<u32>,
    /// Match winner under the configured rule; `None` is a draw.
    pub winner: Option<Color>,
}

impl ScoreReport {
    #[must_use]
    pub fn board(&self, id: BoardId) -> &BoardScore {
        &self.boards[id]
    }

    /// Check whether both boards name the same winner.
    #[must_use]
    pub fn boards_agree(&self) -> bool {
        self.boards.a.winner == self.boards.b.winner
    }
}

/// Score a game state. Pure: the state is only read.
#[must_use]
pub fn score_state(state: &GameState) -> ScoreReport {
    let config = state.config();
    let boards = state
        .boards()
        .map(|id, board| score_board(board, &state.prisoners()[id], config.size, config.komi));

    let average = boards.a.total.zip_with(&boards.b.total, |a, b| (a + b) / 2);

    let winner = match config.winner_rule {
        WinnerRule::Averaged => Some(if black_wins(average[Color::Black], config.size, config.komi) {
            Color::Black
        } else {
            Color::White
        }),
        WinnerRule::Unanimous => (boards.a.winner == boards.b.winner).then_some(boards.a.winner),
    };

    ScoreReport { boards, average, winner }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::core::{Coord, GameConfig};

    #[test]
    fn test_threshold() {
        // 9x9: 81/2 + 7 = 47.5
        assert!(!black_wins(47, BoardSize::Nine, 7));
        assert!(black_wins(48, BoardSize::Nine, 7));
        // 19x19: 361/2 + 7 = 187.5
        assert!(!black_wins(187, BoardSize::Nineteen, 7));
        assert!(black_wins(188, BoardSize::Nineteen, 7));
        assert!(black_wins(41, BoardSize::Nine, 0));
    }

    #[test]
    fn test_score_board_components() {
        let board = Board::from_stones(
            BoardSize::Nine,
            [
                Stone::unresolved(Coord::new(1, 2), Color::Black),
                Stone::unresolved(Coord::new(2, 1), Color::Black),
                Stone::unresolved(Coord::new(9, 9), Color::White),
            ],
        );
        let score = score_board(&board, &ColorMap::new(1, 0), BoardSize::Nine, 7);
        assert_eq!(score.stones, ColorMap::new(2, 1));
        assert_eq!(score.territory, ColorMap::new(1, 0));
        assert_eq!(score.total, ColorMap::new(4, 1));
        assert_eq!(score.winner, Color::White);
    }

    #[test]
    fn test_empty_game_white_wins() {
        let state = GameState::new(GameConfig::new(BoardSize::Nine));
        let report = score_state(&state);
        assert_eq!(report.average, ColorMap::new(0, 0));
        assert_eq!(report.winner, Some(Color::White));
        assert!(report.boards_agree());
    }

    #[test]
    fn test_lone_black_stone_wins_both_boards() {
        let state = GameState::from_setup(GameConfig::new(BoardSize::Nine), &[(Coord::new(5, 5), Color::Black)]);
        let report = score_state(&state);
        assert_eq!(report.board(BoardId::A).total[Color::Black], 81);
        assert_eq!(report.winner, Some(Color::Black));

        let unanimous = GameState::from_setup(
            GameConfig::new(BoardSize::Nine).with_winner_rule(WinnerRule::Unanimous),
            &[(Coord::new(5, 5), Color::Black)],
        );
        assert_eq!(score_state(&unanimous).winner, Some(Color::Black));
    }
}
