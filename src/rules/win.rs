//! Five-in-a-row detection
//!
//! A new line of five can only appear through the stone just placed, so the
//! check is local: for each of the four axes, walk outward from the placed
//! stone in both directions and count same-colored neighbours. Overlines
//! (six or more) also win.

use tracing::instrument;

use crate::board::{Board, Player, Pos};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Line orientation through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

/// An axis is an unordered pair of opposite unit steps `(d_row, d_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub kind: AxisKind,
    pub steps: [(i32, i32); 2],
}

/// The four axes, checked in this order
pub const AXES: [Axis; 4] = [
    Axis {
        kind: AxisKind::Horizontal,
        steps: [(0, 1), (0, -1)],
    },
    Axis {
        kind: AxisKind::Vertical,
        steps: [(1, 0), (-1, 0)],
    },
    Axis {
        kind: AxisKind::Diagonal,
        steps: [(1, 1), (-1, -1)],
    },
    Axis {
        kind: AxisKind::AntiDiagonal,
        steps: [(1, -1), (-1, 1)],
    },
];

/// The contiguous run that ended the game, ordered end to end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub axis: AxisKind,
    pub stones: Vec<Pos>,
}

impl WinningLine {
    /// First and last stone of the run
    pub fn ends(&self) -> Option<(Pos, Pos)> {
        Some((*self.stones.first()?, *self.stones.last()?))
    }
}

/// Same-colored stones walking from `pos` (exclusive) in one direction.
/// Stops at the first edge, empty cell or opposing stone.
fn walk(
    board: &Board,
    pos: Pos,
    (dr, dc): (i32, i32),
    player: Player,
) -> impl Iterator<Item = Pos> + '_ {
    let stone = player.stone();
    let size = board.size();
    std::iter::successors(pos.offset(dr, dc, size), move |p| p.offset(dr, dc, size))
        .take_while(move |&p| board.get(p) == stone)
}

/// Length of the run through `pos` along one axis, counting `pos` itself
pub fn axis_count(board: &Board, pos: Pos, axis: &Axis, player: Player) -> usize {
    1 + axis
        .steps
        .iter()
        .map(|&step| walk(board, pos, step, player).count())
        .sum::<usize>()
}

/// First axis (in [`AXES`] order) whose run through `pos` reaches [`WIN_LENGTH`]
///
/// Returns `None` if `pos` does not hold one of `player`'s stones.
#[instrument(level = "trace", skip(board))]
pub fn winning_axis(board: &Board, pos: Pos, player: Player) -> Option<AxisKind> {
    if board.get(pos) != player.stone() {
        return None;
    }
    AXES.iter()
        .find(|axis| axis_count(board, pos, axis, player) >= WIN_LENGTH)
        .map(|axis| axis.kind)
}

/// Fast five-in-a-row check at a specific position.
///
/// Only walks the 4 axes through `pos`, never scans the board.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    winning_axis(board, pos, player).is_some()
}

/// Full run through `pos` on the first winning axis, for highlighting
pub fn find_winning_line(board: &Board, pos: Pos, player: Player) -> Option<WinningLine> {
    let kind = winning_axis(board, pos, player)?;
    let axis = AXES.iter().find(|a| a.kind == kind)?;
    let [forward, backward] = axis.steps;

    let mut stones: Vec<Pos> = walk(board, pos, backward, player).collect();
    stones.reverse();
    stones.push(pos);
    stones.extend(walk(board, pos, forward, player));

    Some(WinningLine { axis: kind, stones })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn place_all(board: &mut Board, stones: &[(u8, u8)], stone: Stone) {
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_axes_are_opposite_unit_pairs() {
        for axis in AXES {
            let [(r1, c1), (r2, c2)] = axis.steps;
            assert_eq!((r1, c1), (-r2, -c2));
            assert!(r1.abs() <= 1 && c1.abs() <= 1 && (r1, c1) != (0, 0));
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::default();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7), (7, 8), (7, 9)], Stone::Black);
        assert_eq!(winning_axis(&board, Pos::new(7, 7), Player::Black), Some(AxisKind::Horizontal));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::default();
        place_all(&mut board, &[(3, 2), (4, 2), (5, 2), (6, 2), (7, 2)], Stone::White);
        assert_eq!(winning_axis(&board, Pos::new(3, 2), Player::White), Some(AxisKind::Vertical));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::default();
        place_all(&mut board, &[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)], Stone::Black);
        assert_eq!(winning_axis(&board, Pos::new(5, 5), Player::Black), Some(AxisKind::Diagonal));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        // From (4, 8) to (8, 4)
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert_eq!(
            winning_axis(&board, Pos::new(6, 6), Player::White),
            Some(AxisKind::AntiDiagonal)
        );
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::default();
        for c in 0..6 {
            board.place_stone(Pos::new(0, c), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(0, 2), Player::Black));
        let line = find_winning_line(&board, Pos::new(0, 2), Player::Black).unwrap();
        assert_eq!(line.stones.len(), 6);
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::default();
        for c in 0..4 {
            board.place_stone(Pos::new(9, c), Stone::Black);
        }
        assert!(!has_five_at_pos(&board, Pos::new(9, 3), Player::Black));
        assert_eq!(axis_count(&board, Pos::new(9, 3), &AXES[0], Player::Black), 4);
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::default();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 6), (7, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 5), Stone::White);
        assert!(!has_five_at_pos(&board, Pos::new(7, 4), Player::Black));
        assert!(!has_five_at_pos(&board, Pos::new(7, 6), Player::Black));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::default();
        place_all(&mut board, &[(2, 0), (2, 1), (2, 3), (2, 4), (2, 5)], Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(2, 3), Player::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(14, 10 + i), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Player::Black));
    }

    #[test]
    fn test_five_at_corner() {
        // Diagonal from (10, 10) to (14, 14)
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(10 + i, 10 + i), Stone::White);
        }
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Player::White));
    }

    #[test]
    fn test_four_against_edge_not_win() {
        let mut board = Board::default();
        for c in 0..4 {
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        assert!(!has_five_at_pos(&board, Pos::new(0, 0), Player::White));
    }

    #[test]
    fn test_wrong_color_at_pos() {
        let mut board = Board::default();
        for c in 0..5 {
            board.place_stone(Pos::new(4, c), Stone::Black);
        }
        assert!(!has_five_at_pos(&board, Pos::new(4, 2), Player::White));
        assert!(!has_five_at_pos(&board, Pos::new(5, 2), Player::Black));
    }

    #[test]
    fn test_winning_line_is_ordered() {
        let mut board = Board::default();
        place_all(&mut board, &[(3, 7), (4, 6), (5, 5), (6, 4), (7, 3)], Stone::Black);
        let line = find_winning_line(&board, Pos::new(5, 5), Player::Black).unwrap();
        assert_eq!(line.axis, AxisKind::AntiDiagonal);
        assert_eq!(
            line.stones,
            vec![Pos::new(3, 7), Pos::new(4, 6), Pos::new(5, 5), Pos::new(6, 4), Pos::new(7, 3)]
        );
        assert_eq!(line.ends(), Some((Pos::new(3, 7), Pos::new(7, 3))));
    }

    #[test]
    fn test_first_axis_wins_ties() {
        // Horizontal and vertical five through the same cell
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(7, 5 + i), Stone::Black);
            board.place_stone(Pos::new(5 + i, 7), Stone::Black);
        }
        assert_eq!(winning_axis(&board, Pos::new(7, 7), Player::Black), Some(AxisKind::Horizontal));
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::default();
        assert!(find_winning_line(&board, Pos::new(7, 7), Player::Black).is_none());
    }
}
