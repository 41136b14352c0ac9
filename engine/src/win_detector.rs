use crate::board::Board;
use crate::types::{BOARD_SIZE, LineKind, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for mark in [Mark::X, Mark::O] {
        if let Some(kind) = line_for(board, mark) {
            return Some(WinningLine::new(mark, kind));
        }
    }
    None
}

// Checks columns left to right, then rows top to bottom, then the main and
// anti-diagonal. The order only decides which line is reported when drawing
// a strike-through; at most one player can hold a completed line in a state
// reached by alternating play.
pub fn line_for(board: &Board, mark: Mark) -> Option<LineKind> {
    if mark == Mark::Empty {
        return None;
    }
    let cells = board.cells();

    for col in 0..BOARD_SIZE {
        if (0..BOARD_SIZE).all(|row| cells[row][col] == mark) {
            return Some(LineKind::Column(col));
        }
    }

    for row in 0..BOARD_SIZE {
        if cells[row].iter().all(|&cell| cell == mark) {
            return Some(LineKind::Row(row));
        }
    }

    if (0..BOARD_SIZE).all(|i| cells[i][i] == mark) {
        return Some(LineKind::MainDiagonal);
    }
    if (0..BOARD_SIZE).all(|i| cells[BOARD_SIZE - 1 - i][i] == mark) {
        return Some(LineKind::AntiDiagonal);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    const ALL_LINES: [(LineKind, [(usize, usize); 3]); 8] = [
        (LineKind::Column(0), [(0, 0), (1, 0), (2, 0)]),
        (LineKind::Column(1), [(0, 1), (1, 1), (2, 1)]),
        (LineKind::Column(2), [(0, 2), (1, 2), (2, 2)]),
        (LineKind::Row(0), [(0, 0), (0, 1), (0, 2)]),
        (LineKind::Row(1), [(1, 0), (1, 1), (1, 2)]),
        (LineKind::Row(2), [(2, 0), (2, 1), (2, 2)]),
        (LineKind::MainDiagonal, [(0, 0), (1, 1), (2, 2)]),
        (LineKind::AntiDiagonal, [(2, 0), (1, 1), (0, 2)]),
    ];

    fn board_with_line(cells: [(usize, usize); 3], mark: Mark) -> Board {
        let mut board = Board::new();
        for (row, col) in cells {
            board.place(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!board.has_winner(Mark::X));
        assert!(!board.has_winner(Mark::O));
        assert!(!board.is_full());
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_all_winning_triples_detected_for_both_marks() {
        for (kind, cells) in ALL_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with_line(cells, mark);
                assert_eq!(line_for(&board, mark), Some(kind));
                assert!(board.has_winner(mark));
                assert!(!board.has_winner(mark.opponent().unwrap()));
            }
        }
    }

    #[test]
    fn test_winning_triple_detected_with_extra_opponent_mark() {
        // X completes the top row while O holds two unrelated cells.
        let mut board = board_with_line([(0, 0), (0, 1), (0, 2)], Mark::X);
        board.place(1, 0, Mark::O).unwrap();
        board.place(2, 2, Mark::O).unwrap();

        assert_eq!(line_for(&board, Mark::X), Some(LineKind::Row(0)));
        assert!(!board.has_winner(Mark::O));
    }

    #[test]
    fn test_check_win_with_line_reports_endpoints() {
        let board = board_with_line([(2, 0), (1, 1), (0, 2)], Mark::O);
        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.kind, LineKind::AntiDiagonal);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        use crate::types::Mark::{O, X};
        let board = Board::from_rows([[X, X, O], [O, O, X], [X, O, X]]);
        assert_eq!(check_win(&board), None);
        assert_eq!(check_win_with_line(&board), None);
    }
}
