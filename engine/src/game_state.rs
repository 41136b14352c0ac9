use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, PlaceError};
use crate::bot_controller;
use crate::types::{BOARD_SIZE, GameStatus, Mark, Position, WinningLine};

// The bot always plays O; X opens every game.
const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsBot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotBotTurn,
    OutOfBounds { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "game is already over"),
            MoveError::NotBotTurn => write!(f, "it is not the bot's turn"),
            MoveError::OutOfBounds { row, col } => {
                write!(f, "position ({}, {}) is outside the board", row, col)
            }
            MoveError::CellOccupied { row, col } => {
                write!(f, "cell ({}, {}) is already marked", row, col)
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfBounds { row, col } => MoveError::OutOfBounds { row, col },
            PlaceError::CellOccupied { row, col } => MoveError::CellOccupied { row, col },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    pub status: GameStatus,
    pub current_mark: Mark,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    mode: GameMode,
    current_mark: Mark,
    last_move: Option<Position>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: Mark::X,
            last_move: None,
        }
    }

    // Applies a move for whichever side is to move. The bot's moves go
    // through the same path via play_bot_turn.
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<Position, MoveError> {
        if self.board.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.place(row, col, self.current_mark)?;
        let pos = Position::new(row, col);
        self.last_move = Some(pos);

        if self.board.status() == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(pos)
    }

    pub fn play_bot_turn(&mut self) -> Result<Position, MoveError> {
        if self.board.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.is_bot_turn() {
            return Err(MoveError::NotBotTurn);
        }

        // An in-progress board always has an empty cell, so the search
        // cannot come back empty-handed.
        let pos = bot_controller::choose_move(&self.board, self.current_mark)
            .map_err(|_| MoveError::GameOver)?;
        self.place_mark(pos.row, pos.col)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::HumanVsBot && self.current_mark == BOT_MARK
    }

    pub fn bot_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::HumanVsBot => Some(BOT_MARK),
            GameMode::HumanVsHuman => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.last_move = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.board.cells(),
            status: self.status(),
            current_mark: self.current_mark,
            last_move: self.last_move,
            winning_line: self.winning_line(),
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}
