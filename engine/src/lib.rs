pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod types;
pub mod win_detector;

pub use board::{Board, PlaceError};
pub use bot_controller::{NoMovesAvailable, choose_move, evaluate};
pub use game_state::{GameMode, GameSnapshot, GameState, MoveError};
pub use types::{BOARD_SIZE, GameStatus, LineKind, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, line_for};
