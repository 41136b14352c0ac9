use serde::{Deserialize, Serialize};
use tictactoe_engine::board::Board;
use tictactoe_engine::bot_controller::choose_move;
use tictactoe_engine::types::{Mark, Position};

use crate::session_rng::SessionRng;

// Scripted adversaries for probing the engine; neither is a game feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    Random,
    Mirror,
}

pub fn pick_move(
    kind: OpponentKind,
    board: &Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match kind {
        OpponentKind::Random => pick_random_move(board, rng),
        OpponentKind::Mirror => choose_move(board, mark).ok(),
    }
}

fn pick_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..moves.len());
    Some(moves[idx])
}
