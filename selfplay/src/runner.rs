use tictactoe_engine::board::Board;
use tictactoe_engine::bot_controller::choose_move;
use tictactoe_engine::log;
use tictactoe_engine::types::{GameStatus, Mark};

use crate::opponent::{self, OpponentKind};
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub engine_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

pub fn run_matches(
    games: u32,
    engine_mark: Mark,
    opponent_kind: OpponentKind,
    rng: &mut SessionRng,
) -> Tally {
    let mut tally = Tally::default();

    for game in 0..games {
        let status = play_game(engine_mark, opponent_kind, rng);
        match status {
            GameStatus::Won(mark) if mark == engine_mark => tally.engine_wins += 1,
            GameStatus::Won(mark) => {
                tally.opponent_wins += 1;
                log!("Engine lost game {} as {}: opponent {} won", game, engine_mark, mark);
            }
            GameStatus::Draw => tally.draws += 1,
            GameStatus::InProgress => {
                log!("Game {} stopped before reaching a terminal state", game);
            }
        }
    }

    tally
}

fn play_game(engine_mark: Mark, opponent_kind: OpponentKind, rng: &mut SessionRng) -> GameStatus {
    let mut board = Board::new();
    let mut mark = Mark::X;

    while board.status() == GameStatus::InProgress {
        let pos = if mark == engine_mark {
            match choose_move(&board, mark) {
                Ok(pos) => pos,
                Err(_) => break,
            }
        } else {
            match opponent::pick_move(opponent_kind, &board, mark, rng) {
                Some(pos) => pos,
                None => break,
            }
        };

        if let Err(e) = board.place(pos.row, pos.col, mark) {
            log!("Failed to place {} at ({}, {}): {}", mark, pos.row, pos.col, e);
            break;
        }

        mark = if mark == Mark::X { Mark::O } else { Mark::X };
    }

    board.status()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_as_x_never_loses_to_random() {
        let mut rng = SessionRng::new(2024);
        let tally = run_matches(5, Mark::X, OpponentKind::Random, &mut rng);
        assert_eq!(tally.opponent_wins, 0);
        assert_eq!(tally.engine_wins + tally.draws, 5);
    }

    #[test]
    fn test_engine_as_o_never_loses_to_random() {
        let mut rng = SessionRng::new(4048);
        let tally = run_matches(5, Mark::O, OpponentKind::Random, &mut rng);
        assert_eq!(tally.opponent_wins, 0);
        assert_eq!(tally.engine_wins + tally.draws, 5);
    }

    #[test]
    fn test_mirror_matches_all_draw() {
        let mut rng = SessionRng::new(1);
        let tally = run_matches(2, Mark::X, OpponentKind::Mirror, &mut rng);
        assert_eq!(
            tally,
            Tally {
                engine_wins: 0,
                opponent_wins: 0,
                draws: 2,
            }
        );
    }
}
